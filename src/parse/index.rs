//! District references from the index page.

use scraper::Html;
use url::Url;

use crate::config::ScrapeRules;
use crate::error_handling::ScrapeError;
use crate::parse::links::extract_links;
use crate::parse::text::extract_text;

/// One district listed on the index page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistrictRef {
    pub code: String,
    pub name: String,
    /// Absolute URL of the district's detail page
    pub url: String,
}

/// Extracts district codes, names and detail links from the index page.
///
/// # Errors
///
/// - `ScrapeError::EmptyExtraction` if codes, names or links come back empty
/// - `ScrapeError::LengthMismatch` if the three lists differ in length
pub fn extract_districts(
    document: &Html,
    index_url: &Url,
    rules: &ScrapeRules,
) -> Result<Vec<DistrictRef>, ScrapeError> {
    let codes = extract_text(document, &rules.district_code);
    let names = extract_text(document, &rules.district_name);
    let links = extract_links(document, index_url, &rules.district_code)?;
    log::debug!(
        "Index page: {} codes, {} names, {} links",
        codes.len(),
        names.len(),
        links.len()
    );

    for (what, len) in [("codes", codes.len()), ("names", names.len()), ("links", links.len())] {
        if len == 0 {
            return Err(ScrapeError::EmptyExtraction { what });
        }
    }
    for (what, len) in [("district names", names.len()), ("district links", links.len())] {
        if len != codes.len() {
            return Err(ScrapeError::LengthMismatch {
                what: what.to_string(),
                expected: codes.len(),
                found: len,
            });
        }
    }

    Ok(codes
        .into_iter()
        .zip(names)
        .zip(links)
        .map(|((code, name), url)| DistrictRef { code, name, url })
        .collect())
}
