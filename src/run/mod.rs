//! Scrape orchestration.
//!
//! The pipeline runs strictly in sequence: fetch the index page, extract the
//! district references, process each district page in index order, merge, and
//! export. The first fatal error aborts the run before anything is written.

mod district;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use log::info;

use crate::app::validate_and_normalize_url;
use crate::config::{Config, ScrapeRules};
use crate::error_handling::ScrapeError;
use crate::export::{export_csv, output_path};
use crate::fetch::PageFetcher;
use crate::initialization::init_client;
use crate::merge::{merge, ResultTable};
use crate::parse::extract_districts;

pub use district::{process_district, DistrictPage};

/// Results of a scrape run.
#[derive(Debug, Clone)]
pub struct ScrapeReport {
    /// Number of districts written
    pub districts: usize,
    /// Number of CSV columns (fixed plus party columns)
    pub columns: usize,
    /// Path of the written CSV file
    pub output_path: PathBuf,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}

/// Runs the whole pipeline and writes the CSV file.
///
/// This is the main entry point for the library.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built, if any stage of
/// [`scrape`] fails, or if the CSV file cannot be written.
///
/// # Example
///
/// ```no_run
/// use election_scraper::{run_scrape, Config};
/// use std::path::PathBuf;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config {
///     url: "https://www.volby.cz/pls/ps2017nss/ps32?xjazyk=CZ&xkraj=12&xnumnuts=7103".into(),
///     output: PathBuf::from("prostejov"),
///     ..Default::default()
/// };
/// let report = run_scrape(config).await?;
/// println!("Wrote {} districts", report.districts);
/// # Ok(())
/// # }
/// ```
pub async fn run_scrape(config: Config) -> Result<ScrapeReport> {
    let start_time = Instant::now();
    let client = init_client(&config).context("Failed to initialize HTTP client")?;
    let fetcher = PageFetcher::new(client);

    let table = scrape(&fetcher, &config.url, &config.rules).await?;

    let path = output_path(&config.output);
    export_csv(&table, &path)?;
    info!("File {} exported.", path.display());

    Ok(ScrapeReport {
        districts: table.rows.len(),
        columns: table.headers.len(),
        output_path: path,
        elapsed_seconds: start_time.elapsed().as_secs_f64(),
    })
}

/// Fetches the index page and every district page, and merges the results.
///
/// The header list is taken from the first district page that yields at least
/// one party name and is used for every district.
///
/// # Errors
///
/// Returns the first `ScrapeError` raised by URL validation, fetching,
/// index extraction, or merging.
pub async fn scrape(
    fetcher: &PageFetcher,
    index_url: &str,
    rules: &ScrapeRules,
) -> Result<ResultTable, ScrapeError> {
    let url = validate_and_normalize_url(index_url)?;

    info!("Connecting to {}", url);
    let districts = {
        let index = fetcher.fetch_document(url.as_str()).await?;
        extract_districts(&index, &url, rules)?
    };
    info!("Found {} districts", districts.len());

    info!("Processing data...");
    let base_len = rules.base_headers.len();
    let mut pages = Vec::with_capacity(districts.len());
    let mut headers: Option<Vec<String>> = None;

    for (i, district) in districts.iter().enumerate() {
        log::debug!(
            "[{}/{}] {} {}",
            i + 1,
            districts.len(),
            district.code,
            district.name
        );
        let page = process_district(fetcher, &district.url, rules).await?;
        if headers.is_none() && !page.party_names(base_len).is_empty() {
            headers = Some(page.headers.clone());
        }
        pages.push(page);
    }

    let headers = headers.ok_or(ScrapeError::NoFieldnames)?;
    merge(&districts, &pages, &headers, &rules.base_headers)
}
