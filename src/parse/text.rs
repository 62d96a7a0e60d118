//! Text extraction from matching nodes.

use scraper::{ElementRef, Html};

use crate::config::SelectionRule;

const NO_BREAK_SPACE: char = '\u{a0}';

/// Extracts the text of every node matching `rule`, in document order.
///
/// Each node's text fragments are trimmed and concatenated, then non-breaking
/// spaces are replaced with ordinary spaces. Returns an empty vector when
/// nothing matches.
///
/// # Example
///
/// ```
/// use election_scraper::config::SelectionRule;
/// use election_scraper::parse::extract_text;
/// use scraper::Html;
///
/// let html = Html::parse_document(r#"<table><tr><td class="cislo">&nbsp;1&nbsp;234&nbsp;</td></tr></table>"#);
/// let rule = SelectionRule::new("td").with_attr("class", "cislo");
/// assert_eq!(extract_text(&html, &rule), vec!["1 234"]);
/// ```
pub fn extract_text(document: &Html, rule: &SelectionRule) -> Vec<String> {
    rule.select(document).iter().map(normalize_text).collect()
}

/// Returns the normalized text content of a single element.
pub fn normalize_text(element: &ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .collect::<String>()
        .replace(NO_BREAK_SPACE, " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cislo() -> SelectionRule {
        SelectionRule::new("td").with_attr("class", "cislo")
    }

    #[test]
    fn test_extract_text_no_matches_is_empty() {
        let html = Html::parse_document("<table><tr><td class=\"other\">1</td></tr></table>");
        assert!(extract_text(&html, &cislo()).is_empty());
    }

    #[test]
    fn test_extract_text_replaces_nbsp_and_strips() {
        let html = Html::parse_document(
            "<table><tr><td class=\"cislo\">\u{a0}1\u{a0}234\u{a0}</td></tr></table>",
        );
        assert_eq!(extract_text(&html, &cislo()), vec!["1 234"]);
    }

    #[test]
    fn test_extract_text_entity_nbsp() {
        let html = Html::parse_document(
            "<table><tr><td class=\"cislo\">  12&nbsp;005 \n</td></tr></table>",
        );
        assert_eq!(extract_text(&html, &cislo()), vec!["12 005"]);
    }

    #[test]
    fn test_extract_text_joins_nested_fragments() {
        let html = Html::parse_document(
            "<table><tr><td class=\"cislo\"> <a href=\"x\"> 506761 </a> </td></tr></table>",
        );
        assert_eq!(extract_text(&html, &cislo()), vec!["506761"]);
    }

    #[test]
    fn test_extract_text_preserves_document_order() {
        let html = Html::parse_document(
            r#"<table>
                <tr><td class="cislo">3</td><td class="cislo">1</td></tr>
                <tr><td class="cislo">2</td></tr>
            </table>"#,
        );
        assert_eq!(extract_text(&html, &cislo()), vec!["3", "1", "2"]);
    }

    #[test]
    fn test_extract_text_empty_cell() {
        let html = Html::parse_document("<table><tr><td class=\"cislo\"> </td></tr></table>");
        assert_eq!(extract_text(&html, &cislo()), vec![""]);
    }
}
