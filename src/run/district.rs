//! Per-district page processing.

use scraper::Html;

use crate::config::ScrapeRules;
use crate::error_handling::ScrapeError;
use crate::fetch::PageFetcher;
use crate::parse::{build_headers, extract_text};

/// Everything extracted from one district detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistrictPage {
    /// Vote counts of the first party table followed by the second
    pub vote_counts: Vec<String>,
    pub registered_voters: Vec<String>,
    pub issued_envelopes: Vec<String>,
    pub valid_votes: Vec<String>,
    /// Base headers extended with the party names on this page
    pub headers: Vec<String>,
}

impl DistrictPage {
    /// Extracts all district fields from a parsed detail page.
    pub fn from_document(document: &Html, rules: &ScrapeRules) -> Self {
        let mut vote_counts = extract_text(document, &rules.votes_table1);
        vote_counts.extend(extract_text(document, &rules.votes_table2));

        Self {
            vote_counts,
            registered_voters: extract_text(document, &rules.registered_voters),
            issued_envelopes: extract_text(document, &rules.issued_envelopes),
            valid_votes: extract_text(document, &rules.valid_votes),
            headers: build_headers(&rules.base_headers, document, &rules.party_name),
        }
    }

    /// Party names found on this page, in header order.
    pub fn party_names(&self, base_len: usize) -> &[String] {
        self.headers.get(base_len..).unwrap_or(&[])
    }
}

/// Fetches one district page and extracts its fields.
///
/// An empty vote table is logged as a warning and does not fail the district.
///
/// # Errors
///
/// Returns the transport error if the page cannot be fetched.
pub async fn process_district(
    fetcher: &PageFetcher,
    url: &str,
    rules: &ScrapeRules,
) -> Result<DistrictPage, ScrapeError> {
    let document = fetcher.fetch_document(url).await?;
    let page = DistrictPage::from_document(&document, rules);

    if page.vote_counts.is_empty() {
        log::warn!("No party votes found for {}", url);
    }
    log::debug!(
        "{}: {} vote counts, {} party names",
        url,
        page.vote_counts.len(),
        page.party_names(rules.base_headers.len()).len()
    );

    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DETAIL: &str = r#"<html><body>
        <table id="ps311_t1">
          <tr>
            <td class="cislo" headers="sa2">205</td>
            <td class="cislo" headers="sa3">145</td>
            <td class="cislo" headers="sa4">145</td>
            <td class="cislo" headers="sa5">145</td>
            <td class="cislo" headers="sa6">144</td>
          </tr>
        </table>
        <table>
          <tr><td class="cislo" headers="t1sa1 t1sb1">1</td><td class="overflow_name">Občanská demokratická strana</td><td class="cislo" headers="t1sa2 t1sb3">29</td><td class="cislo" headers="t1sa2 t1sb4">20,13</td></tr>
          <tr><td class="cislo" headers="t1sa1 t1sb1">2</td><td class="overflow_name">Řád národa</td><td class="cislo" headers="t1sa2 t1sb3">0</td><td class="cislo" headers="t1sa2 t1sb4">0,00</td></tr>
        </table>
        <table>
          <tr><td class="cislo" headers="t2sa1 t2sb1">3</td><td class="overflow_name">ANO 2011</td><td class="cislo" headers="t2sa2 t2sb3">1&nbsp;051</td><td class="cislo" headers="t2sa2 t2sb4">35,11</td></tr>
        </table>
    </body></html>"#;

    #[test]
    fn test_from_document_concatenates_vote_tables_in_order() {
        let page = DistrictPage::from_document(&Html::parse_document(DETAIL), &ScrapeRules::default());
        assert_eq!(page.vote_counts, vec!["29", "0", "1 051"]);
    }

    #[test]
    fn test_from_document_extracts_summary_fields() {
        let page = DistrictPage::from_document(&Html::parse_document(DETAIL), &ScrapeRules::default());
        assert_eq!(page.registered_voters, vec!["205"]);
        assert_eq!(page.issued_envelopes, vec!["145"]);
        assert_eq!(page.valid_votes, vec!["144"]);
    }

    #[test]
    fn test_from_document_builds_party_headers() {
        let rules = ScrapeRules::default();
        let page = DistrictPage::from_document(&Html::parse_document(DETAIL), &rules);
        assert_eq!(
            page.party_names(rules.base_headers.len()),
            ["Občanská demokratická strana", "Řád národa", "ANO 2011"]
        );
        assert_eq!(page.headers.len(), 8);
    }

    #[test]
    fn test_from_document_without_party_table() {
        let html = Html::parse_document(
            r#"<table><tr><td class="cislo" headers="sa2">10</td><td class="cislo" headers="sa3">5</td><td class="cislo" headers="sa6">5</td></tr></table>"#,
        );
        let rules = ScrapeRules::default();
        let page = DistrictPage::from_document(&html, &rules);
        assert!(page.vote_counts.is_empty());
        assert!(page.party_names(rules.base_headers.len()).is_empty());
        assert_eq!(page.valid_votes, vec!["5"]);
    }
}
