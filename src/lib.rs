//! election_scraper library: district election results to CSV
//!
//! This library fetches an index page listing districts, follows each district's
//! link to its detail page, extracts the fixed summary fields and the per-party
//! vote counts, and merges everything into one table exported as CSV. The
//! column set is the five fixed columns plus every party name found.
//!
//! # Example
//!
//! ```no_run
//! use election_scraper::{run_scrape, Config};
//! use std::path::PathBuf;
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let config = Config {
//!     url: "https://www.volby.cz/pls/ps2017nss/ps32?xjazyk=CZ&xkraj=12&xnumnuts=7103".into(),
//!     output: PathBuf::from("prostejov"),
//!     ..Default::default()
//! };
//!
//! let report = run_scrape(config).await?;
//! println!("{} districts written to {}", report.districts, report.output_path.display());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Pages are fetched sequentially.

mod app;
pub mod config;
pub mod error_handling;
pub mod export;
pub mod fetch;
pub mod initialization;
pub mod merge;
pub mod parse;
mod run;
mod utils;

// Re-export public API
pub use app::validate_and_normalize_url;
pub use config::{Config, LogFormat, LogLevel, Opt, ScrapeRules, SelectionRule};
pub use error_handling::{InitializationError, ScrapeError};
pub use fetch::PageFetcher;
pub use merge::{DistrictRecord, ResultTable};
pub use parse::DistrictRef;
pub use run::{process_district, run_scrape, scrape, DistrictPage, ScrapeReport};
