//! Link extraction from matching nodes.

use std::sync::LazyLock;

use scraper::{Html, Selector};
use url::Url;

use crate::config::SelectionRule;
use crate::error_handling::ScrapeError;
use crate::utils::parse_selector_with_fallback;

const ANCHOR_SELECTOR_STR: &str = "a";

static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_with_fallback(ANCHOR_SELECTOR_STR, "anchor lookup"));

/// Returns the directory of `page`: the URL with its last path segment,
/// query and fragment removed.
///
/// # Errors
///
/// Returns `ScrapeError::InvalidUrl` if the directory cannot be formed.
pub fn base_directory(page: &Url) -> Result<Url, ScrapeError> {
    page.join("./").map_err(|source| ScrapeError::InvalidUrl {
        url: page.to_string(),
        source,
    })
}

/// Extracts absolute links from the first anchor nested in each node matching `rule`.
///
/// Relative `href` values are resolved against the directory of `page_url`.
/// Nodes without an anchor, or whose anchor has no `href`, are skipped. An
/// `href` that cannot be resolved is logged and skipped as well.
pub fn extract_links(
    document: &Html,
    page_url: &Url,
    rule: &SelectionRule,
) -> Result<Vec<String>, ScrapeError> {
    let base = base_directory(page_url)?;
    let mut links = Vec::new();

    for element in rule.select(document) {
        let Some(anchor) = element.select(&ANCHOR_SELECTOR).next() else {
            log::debug!("No anchor inside matched <{}> node", rule.tag());
            continue;
        };
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        match base.join(href.trim()) {
            Ok(link) => links.push(link.to_string()),
            Err(e) => log::warn!("Skipping unresolvable link '{}': {}", href, e),
        }
    }

    Ok(links)
}
