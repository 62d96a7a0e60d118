//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `election_scraper` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use election_scraper::initialization::init_logger_with;
use election_scraper::{run_scrape, Config, Opt};

#[tokio::main]
async fn main() -> Result<()> {
    // Wrong argument count exits here with clap's usage message and a non-zero status
    let config = Config::from(Opt::parse());

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_scrape(config).await {
        Ok(report) => {
            println!(
                "Exported {} district{} ({} columns) to {} in {:.1}s",
                report.districts,
                if report.districts == 1 { "" } else { "s" },
                report.columns,
                report.output_path.display(),
                report.elapsed_seconds
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("election_scraper error: {:#}", e);
            process::exit(1);
        }
    }
}
