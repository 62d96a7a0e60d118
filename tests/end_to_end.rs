//! End-to-end tests for run_scrape against a mock election site.

mod helpers;

use std::fs;

use election_scraper::{run_scrape, scrape, PageFetcher, ScrapeRules};
use helpers::*;
use tempfile::TempDir;
use wiremock::MockServer;

#[tokio::test]
async fn test_run_scrape_matches_golden_csv() {
    let server = MockServer::start().await;
    mount_fixture_site(&server).await;
    let dir = TempDir::new().expect("Failed to create temp directory");

    let config = create_test_config(index_url(&server), dir.path().join("prostejov.txt"));
    let report = run_scrape(config).await.expect("scrape should succeed");

    assert_eq!(report.districts, 2);
    assert_eq!(report.columns, 8);
    assert_eq!(report.output_path, dir.path().join("prostejov.csv"));

    let written = fs::read(&report.output_path).expect("Failed to read output");
    assert_eq!(
        written,
        EXPECTED_CSV,
        "output differs from golden file:\n{}",
        String::from_utf8_lossy(&written)
    );
}

#[tokio::test]
async fn test_run_scrape_is_idempotent() {
    let server = MockServer::start().await;
    mount_fixture_site(&server).await;
    let dir = TempDir::new().expect("Failed to create temp directory");

    let first = run_scrape(create_test_config(index_url(&server), dir.path().join("first")))
        .await
        .expect("first run");
    let second = run_scrape(create_test_config(index_url(&server), dir.path().join("second")))
        .await
        .expect("second run");

    let first_bytes = fs::read(first.output_path).expect("read first");
    let second_bytes = fs::read(second.output_path).expect("read second");
    assert_eq!(first_bytes, second_bytes);
}

#[tokio::test]
async fn test_scrape_rows_follow_index_order() {
    let server = MockServer::start().await;
    mount_fixture_site(&server).await;
    let fetcher = PageFetcher::new(reqwest::Client::new());

    let table = scrape(&fetcher, &index_url(&server), &ScrapeRules::default())
        .await
        .expect("scrape should succeed");

    assert_eq!(
        &table.headers[5..],
        [
            "Občanská demokratická strana",
            "Řád národa - Vlastenecká unie",
            "ANO 2011"
        ]
    );
    let codes: Vec<_> = table.rows.iter().map(|r| r.get("Kód")).collect();
    assert_eq!(codes, vec![Some("506761"), Some("589268")]);
    assert_eq!(table.rows[1].get("Obec"), Some("Bedihošť"));
    assert_eq!(table.rows[1].get("ANO 2011"), Some("1 051"));
}

#[tokio::test]
async fn test_scrape_requests_each_district_once() {
    let server = MockServer::start().await;
    mount_fixture_site(&server).await;
    let fetcher = PageFetcher::new(reqwest::Client::new());

    scrape(&fetcher, &index_url(&server), &ScrapeRules::default())
        .await
        .expect("scrape should succeed");

    let requests = server.received_requests().await.expect("recording enabled");
    let paths: Vec<_> = requests
        .iter()
        .map(|r| {
            let obec = r
                .url
                .query_pairs()
                .find(|(k, _)| k == "xobec")
                .map(|(_, v)| v.into_owned());
            (r.url.path().to_string(), obec)
        })
        .collect();
    assert_eq!(
        paths,
        vec![
            (INDEX_PATH.to_string(), None),
            (DISTRICT_PATH.to_string(), Some("506761".to_string())),
            (DISTRICT_PATH.to_string(), Some("589268".to_string())),
        ]
    );
}
