//! URL validation and normalization utilities.

use url::Url;

use crate::error_handling::ScrapeError;

/// Validates and normalizes the index page URL.
///
/// Adds an `https://` prefix when the input carries no scheme, then checks that
/// the result parses and uses the http or https scheme.
///
/// # Errors
///
/// Returns `ScrapeError::InvalidUrl` if the URL does not parse and
/// `ScrapeError::UnsupportedScheme` for any scheme other than http/https.
pub fn validate_and_normalize_url(url: &str) -> Result<Url, ScrapeError> {
    let trimmed = url.trim();
    let normalized = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };

    let parsed = Url::parse(&normalized).map_err(|source| ScrapeError::InvalidUrl {
        url: url.to_string(),
        source,
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        _ => Err(ScrapeError::UnsupportedScheme {
            url: url.to_string(),
        }),
    }
}
