//! Main application helpers.

pub mod url;

// Re-export public API
pub use self::url::validate_and_normalize_url;
