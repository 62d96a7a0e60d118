//! Configuration constants.
//!
//! This module defines the constants used as defaults throughout the application:
//! request timeout, User-Agent, output extension and the fixed CSV columns.

/// Per-request timeout in seconds.
/// Applies to the index page and to every district page.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default User-Agent string for HTTP requests.
///
/// Identifies this tool by name and version. Users can override this via the
/// `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str = concat!(
    "Mozilla/5.0 (compatible; election_scraper/",
    env!("CARGO_PKG_VERSION"),
    ")"
);

/// Extension forced onto the output file name.
pub const OUTPUT_EXTENSION: &str = "csv";

// Fixed CSV column names
pub const HEADER_CODE: &str = "Kód";
pub const HEADER_NAME: &str = "Obec";
pub const HEADER_REGISTERED_VOTERS: &str = "Voliči v seznamu";
pub const HEADER_ISSUED_ENVELOPES: &str = "Vydané obálky";
pub const HEADER_VALID_VOTES: &str = "Platné hlasy";

/// Fixed columns that precede the party columns, in output order.
pub const BASE_HEADERS: &[&str] = &[
    HEADER_CODE,
    HEADER_NAME,
    HEADER_REGISTERED_VOTERS,
    HEADER_ISSUED_ENVELOPES,
    HEADER_VALID_VOTES,
];
