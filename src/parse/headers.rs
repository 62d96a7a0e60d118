//! CSV header construction.

use scraper::Html;

use crate::config::SelectionRule;
use crate::parse::text::extract_text;

/// Extends `base_headers` with the party names found by `party_rule`.
///
/// Names are appended in document order and each appears once; names already
/// present (including base columns) are not repeated.
pub fn build_headers(base_headers: &[String], document: &Html, party_rule: &SelectionRule) -> Vec<String> {
    let mut headers = base_headers.to_vec();
    for name in extract_text(document, party_rule) {
        if !headers.contains(&name) {
            headers.push(name);
        }
    }
    headers
}
