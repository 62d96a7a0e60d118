//! Error handling.
//!
//! Error types are split into:
//! - **Initialization errors**: logger or HTTP client setup failures
//! - **Scrape errors**: fatal failures of a run (transport, extraction, merge, export)

mod types;

// Re-export public API
pub use types::{InitializationError, ScrapeError};
