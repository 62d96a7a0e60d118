//! Selection rules for locating nodes in election result pages.
//!
//! A [`SelectionRule`] is a tag name plus attribute filters. [`ScrapeRules`]
//! bundles every rule the pipeline needs, so sites with a different layout
//! can be targeted by constructing a different set instead of touching code.

use scraper::{ElementRef, Html};

use crate::config::constants::BASE_HEADERS;
use crate::utils::parse_selector_with_fallback;

/// Tag name plus attribute filters used to locate HTML nodes.
///
/// An element matches when its tag name equals the rule's tag and every
/// attribute filter is satisfied. A filter is satisfied when the attribute is
/// present and its value either equals the expected value (ignoring runs of
/// whitespace) or contains it as one whitespace-separated token. The token form
/// mirrors how multi-valued attributes such as `class` and `headers` behave.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionRule {
    tag: String,
    attributes: Vec<(String, String)>,
}

impl SelectionRule {
    /// Creates a rule matching every element with the given tag name.
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attributes: Vec::new(),
        }
    }

    /// Adds an attribute filter.
    #[must_use]
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attributes
            .push((name.to_ascii_lowercase(), value.to_string()));
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Returns `true` if `element` satisfies this rule.
    pub fn matches(&self, element: &ElementRef<'_>) -> bool {
        let el = element.value();
        el.name() == self.tag
            && self.attributes.iter().all(|(name, expected)| {
                el.attr(name)
                    .is_some_and(|actual| attribute_matches(actual, expected))
            })
    }

    /// Returns all matching elements in document order.
    pub fn select<'a>(&self, document: &'a Html) -> Vec<ElementRef<'a>> {
        let selector = parse_selector_with_fallback(&self.tag, "selection rule");
        document
            .select(&selector)
            .filter(|element| self.matches(element))
            .collect()
    }
}

fn attribute_matches(actual: &str, expected: &str) -> bool {
    let tokens: Vec<&str> = actual.split_ascii_whitespace().collect();
    if tokens.is_empty() {
        return actual == expected;
    }
    tokens.contains(&expected) || tokens.join(" ") == expected
}

/// Every selection rule used by the pipeline, plus the fixed leading columns.
#[derive(Debug, Clone)]
pub struct ScrapeRules {
    /// District code cells on the index page (their anchors carry the detail links)
    pub district_code: SelectionRule,
    /// District name cells on the index page
    pub district_name: SelectionRule,
    /// Registered voters cell on a district page
    pub registered_voters: SelectionRule,
    /// Issued envelopes cell on a district page
    pub issued_envelopes: SelectionRule,
    /// Valid votes cell on a district page
    pub valid_votes: SelectionRule,
    /// Vote count cells of the first party table
    pub votes_table1: SelectionRule,
    /// Vote count cells of the second party table
    pub votes_table2: SelectionRule,
    /// Party name cells on a district page
    pub party_name: SelectionRule,
    /// Fixed columns preceding the party columns
    pub base_headers: Vec<String>,
}

impl Default for ScrapeRules {
    /// Rules for the volby.cz municipality result pages.
    fn default() -> Self {
        Self {
            district_code: SelectionRule::new("td").with_attr("class", "cislo"),
            district_name: SelectionRule::new("td").with_attr("class", "overflow_name"),
            registered_voters: SelectionRule::new("td")
                .with_attr("class", "cislo")
                .with_attr("headers", "sa2"),
            issued_envelopes: SelectionRule::new("td")
                .with_attr("class", "cislo")
                .with_attr("headers", "sa3"),
            valid_votes: SelectionRule::new("td")
                .with_attr("class", "cislo")
                .with_attr("headers", "sa6"),
            votes_table1: SelectionRule::new("td")
                .with_attr("class", "cislo")
                .with_attr("headers", "t1sa2 t1sb3"),
            votes_table2: SelectionRule::new("td")
                .with_attr("class", "cislo")
                .with_attr("headers", "t2sa2 t2sb3"),
            party_name: SelectionRule::new("td").with_attr("class", "overflow_name"),
            base_headers: BASE_HEADERS.iter().map(|h| h.to_string()).collect(),
        }
    }
}
