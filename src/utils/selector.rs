//! CSS selector parsing utilities.

use scraper::Selector;

/// Selector that never matches; used when a tag name does not parse.
const MATCH_NOTHING: &str = "*:not(*)";

/// Parses a CSS selector with a safe fallback.
///
/// If parsing fails, logs an error and returns a selector that matches nothing
/// (`*:not(*)`). A malformed tag in a selection rule then yields an empty
/// extraction instead of a panic.
///
/// # Arguments
///
/// * `selector_str` - The CSS selector string to parse
/// * `context` - Context description for error logging (e.g., "selection rule")
pub fn parse_selector_with_fallback(selector_str: &str, context: &str) -> Selector {
    Selector::parse(selector_str).unwrap_or_else(|e| {
        log::error!(
            "Failed to parse CSS selector '{}' in {}: {}. Using fallback selector.",
            selector_str,
            context,
            e
        );
        match Selector::parse(MATCH_NOTHING) {
            Ok(selector) => selector,
            Err(e) => unreachable!("fallback selector '{MATCH_NOTHING}' failed to parse: {e}"),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn test_valid_selector_matches() {
        let html = Html::parse_document("<table><tr><td>1</td></tr></table>");
        let selector = parse_selector_with_fallback("td", "test");
        assert_eq!(html.select(&selector).count(), 1);
    }

    #[test]
    fn test_invalid_selector_matches_nothing() {
        let html = Html::parse_document("<table><tr><td>1</td></tr></table>");
        let selector = parse_selector_with_fallback("td[", "test");
        assert_eq!(html.select(&selector).count(), 0);
    }
}
