//! Merging per-district data into one result table.
//!
//! Every pairing here is length-checked: index references against district
//! pages, and party columns against vote counts. A mismatch is an error rather
//! than a silently truncated row.

use crate::config::BASE_HEADERS;
use crate::error_handling::ScrapeError;
use crate::parse::DistrictRef;
use crate::run::DistrictPage;

/// Number of fixed columns preceding the party columns.
const FIXED_COLUMNS: usize = BASE_HEADERS.len();

/// One output row: column name to value, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DistrictRecord {
    fields: Vec<(String, String)>,
}

impl DistrictRecord {
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    /// Columns and values in the order they were set.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Values in `headers` order; absent columns become empty strings.
    pub fn values_for<'a>(&'a self, headers: &'a [String]) -> impl Iterator<Item = &'a str> + 'a {
        headers.iter().map(|h| self.get(h).unwrap_or(""))
    }

    /// Inserts unless the column is already set; earlier values win.
    fn insert_missing(&mut self, column: &str, value: &str) {
        if self.get(column).is_none() {
            self.fields.push((column.to_string(), value.to_string()));
        }
    }
}

/// Final header list plus one record per district, in index-page order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultTable {
    pub headers: Vec<String>,
    pub rows: Vec<DistrictRecord>,
}

/// Builds the result table.
///
/// `headers` is the frozen header list: the fixed columns named in
/// `base_headers` followed by the party columns.
///
/// # Errors
///
/// - `ScrapeError::NoFieldnames` if `headers` has no party columns
/// - `ScrapeError::LengthMismatch` if `districts` and `pages` differ in length,
///   if `base_headers` does not name one column per fixed field, or if a non-empty
///   vote sequence does not match the party columns
/// - `ScrapeError::FieldCount` if a page lacks exactly one summary value
/// - `ScrapeError::NoResults` if there are no districts
pub fn merge(
    districts: &[DistrictRef],
    pages: &[DistrictPage],
    headers: &[String],
    base_headers: &[String],
) -> Result<ResultTable, ScrapeError> {
    if base_headers.len() != FIXED_COLUMNS {
        return Err(ScrapeError::LengthMismatch {
            what: "fixed columns".to_string(),
            expected: FIXED_COLUMNS,
            found: base_headers.len(),
        });
    }
    if headers.len() <= base_headers.len() {
        return Err(ScrapeError::NoFieldnames);
    }
    if districts.len() != pages.len() {
        return Err(ScrapeError::LengthMismatch {
            what: "district pages".to_string(),
            expected: districts.len(),
            found: pages.len(),
        });
    }

    let parties = &headers[base_headers.len()..];
    let mut rows = Vec::with_capacity(districts.len());

    for (district, page) in districts.iter().zip(pages) {
        let fixed: [&str; FIXED_COLUMNS] = [
            district.code.as_str(),
            district.name.as_str(),
            single(&page.registered_voters, &district.url, "registered voters")?,
            single(&page.issued_envelopes, &district.url, "issued envelopes")?,
            single(&page.valid_votes, &district.url, "valid votes")?,
        ];

        let mut record = DistrictRecord::default();
        for (column, value) in base_headers.iter().zip(fixed) {
            record.insert_missing(column, value);
        }

        if !page.vote_counts.is_empty() {
            if page.vote_counts.len() != parties.len() {
                return Err(ScrapeError::LengthMismatch {
                    what: format!("vote counts on {}", district.url),
                    expected: parties.len(),
                    found: page.vote_counts.len(),
                });
            }
            for (party, votes) in parties.iter().zip(&page.vote_counts) {
                record.insert_missing(party, votes);
            }
        }

        rows.push(record);
    }

    if rows.is_empty() {
        return Err(ScrapeError::NoResults);
    }

    Ok(ResultTable {
        headers: headers.to_vec(),
        rows,
    })
}

fn single<'a>(values: &'a [String], url: &str, field: &'static str) -> Result<&'a str, ScrapeError> {
    match values {
        [value] => Ok(value.as_str()),
        _ => Err(ScrapeError::FieldCount {
            url: url.to_string(),
            field,
            found: values.len(),
        }),
    }
}
