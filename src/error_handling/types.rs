//! Error type definitions.
//!
//! This module defines all error types used throughout the application.

use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use reqwest::StatusCode;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Fatal failures of a scrape run.
///
/// Every variant aborts the whole run; nothing is exported once one is raised.
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// Network failure, timeout, or body read failure.
    #[error("Request failed for {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: ReqwestError,
    },

    /// The server answered with a non-success status.
    #[error("Request failed for {url}: HTTP status {status}")]
    HttpStatus { url: String, status: StatusCode },

    /// The URL could not be parsed.
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The URL parsed but is not http or https.
    #[error("Unsupported URL scheme (expected http or https): {url}")]
    UnsupportedScheme { url: String },

    /// The index page yielded nothing for one of the district lists.
    #[error("Failed to extract district {what} from the index page")]
    EmptyExtraction { what: &'static str },

    /// Two sequences that must pair up one-to-one differ in length.
    #[error("Length mismatch for {what}: expected {expected}, found {found}")]
    LengthMismatch {
        what: String,
        expected: usize,
        found: usize,
    },

    /// A district page did not carry exactly one value for a summary field.
    #[error("Expected exactly one '{field}' value on {url}, found {found}")]
    FieldCount {
        url: String,
        field: &'static str,
        found: usize,
    },

    /// No district page yielded any party names.
    #[error("No CSV fieldnames extracted")]
    NoFieldnames,

    /// The merged table has no rows.
    #[error("No results to save")]
    NoResults,

    /// The output file could not be created or written.
    #[error("Error writing CSV file {}: {source}", .path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl ScrapeError {
    /// Wraps a reqwest send or body read failure for `url`.
    pub fn transport(url: &str, source: ReqwestError) -> Self {
        ScrapeError::Transport {
            url: url.to_string(),
            source,
        }
    }

    /// Returns `true` for failures raised while talking to the server.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ScrapeError::Transport { .. } | ScrapeError::HttpStatus { .. }
        )
    }
}
