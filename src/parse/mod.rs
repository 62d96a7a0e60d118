//! HTML extraction.
//!
//! This module extracts data from parsed election result pages:
//! - Text values at nodes matching a selection rule
//! - Absolute links found inside matching nodes
//! - CSV headers extended with party names
//! - District references from the index page

mod headers;
mod index;
mod links;
mod text;

// Re-export public API
pub use headers::build_headers;
pub use index::{extract_districts, DistrictRef};
pub use links::{base_directory, extract_links};
pub use text::{extract_text, normalize_text};
