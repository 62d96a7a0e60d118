// Shared test helpers for mock election sites.
//
// Mounts the fixture pages on a wiremock server laid out like the real site:
// the index at /pls/ps32 and district pages at /pls/ps311?xobec=<code>.

#![allow(dead_code)] // Each test file uses a different subset

use std::path::PathBuf;

use election_scraper::{Config, LogFormat, LogLevel};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const INDEX_PATH: &str = "/pls/ps32";
pub const DISTRICT_PATH: &str = "/pls/ps311";

pub const INDEX: &str = include_str!("fixtures/index.html");
pub const INDEX_EMPTY: &str = include_str!("fixtures/index_empty.html");
pub const DISTRICT_ALOJZOV: &str = include_str!("fixtures/district_506761.html");
pub const DISTRICT_BEDIHOST: &str = include_str!("fixtures/district_589268.html");
pub const DISTRICT_NO_PARTIES: &str = include_str!("fixtures/district_no_parties.html");
pub const EXPECTED_CSV: &[u8] = include_bytes!("fixtures/expected.csv");

pub fn html(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body.as_bytes().to_vec(), "text/html; charset=utf-8")
}

/// Index page URL on the mock server.
pub fn index_url(server: &MockServer) -> String {
    format!("{}{}?xjazyk=CZ&xkraj=12&xnumnuts=7103", server.uri(), INDEX_PATH)
}

pub async fn mount_index(server: &MockServer, body: &str) {
    Mock::given(method("GET"))
        .and(path(INDEX_PATH))
        .respond_with(html(body))
        .mount(server)
        .await;
}

pub async fn mount_district(server: &MockServer, code: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(DISTRICT_PATH))
        .and(query_param("xobec", code))
        .respond_with(response)
        .mount(server)
        .await;
}

/// Mounts the two-district fixture site.
pub async fn mount_fixture_site(server: &MockServer) {
    mount_index(server, INDEX).await;
    mount_district(server, "506761", html(DISTRICT_ALOJZOV)).await;
    mount_district(server, "589268", html(DISTRICT_BEDIHOST)).await;
}

/// Creates a basic Config for testing.
pub fn create_test_config(url: String, output: PathBuf) -> Config {
    Config {
        url,
        output,
        log_level: LogLevel::Error,
        log_format: LogFormat::Plain,
        timeout_seconds: 5,
        user_agent: "election_scraper_test/1.0".to_string(),
        ..Default::default()
    }
}
