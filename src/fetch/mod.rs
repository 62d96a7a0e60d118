//! Page fetching.
//!
//! Pages are fetched one at a time with a shared `reqwest::Client`. There is no
//! retry: any failure is returned to the caller and aborts the run.

use scraper::Html;

use crate::error_handling::ScrapeError;

/// Fetches HTML pages over HTTP.
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: reqwest::Client,
}

impl PageFetcher {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Retrieves the body of `url` as text.
    ///
    /// # Errors
    ///
    /// Returns `ScrapeError::HttpStatus` for a non-success status and
    /// `ScrapeError::Transport` for connection, timeout, or body read failures.
    pub async fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
        log::debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ScrapeError::transport(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::HttpStatus {
                url: url.to_string(),
                status,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ScrapeError::transport(url, e))?;
        log::debug!("Fetched {} bytes from {}", body.len(), url);
        Ok(body)
    }

    /// Retrieves `url` and parses it as an HTML document.
    pub async fn fetch_document(&self, url: &str) -> Result<Html, ScrapeError> {
        let body = self.fetch(url).await?;
        Ok(Html::parse_document(&body))
    }
}
