//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, User-Agent, fixed columns)
//! - Selection rules for locating page content
//! - CLI option types and parsing

mod constants;
mod rules;
mod types;

// Re-export public API
pub use constants::*;
pub use rules::{ScrapeRules, SelectionRule};
pub use types::{Config, LogFormat, LogLevel, Opt};
