#![allow(dead_code)]
//! # Common Test Utilities
//!
//! Shared fixtures for the integration tests: tracing setup, upstream record
//! builders, and providers that always fail.

use async_trait::async_trait;
use jobboard::{ApiConfig, FetchError, JobBoard, JobsProvider, UpstreamResponse};
use serde_json::{json, Value};
use std::sync::Once;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use wiremock::MockServer;

static INIT: Once = Once::new();

/// Initializes the tracing subscriber once per test binary.
pub fn setup_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub const TEST_API_KEY: &str = "test-key";

/// A config pointing at the mock server with a short timeout.
pub fn mock_config(server: &MockServer, timeout: Duration) -> ApiConfig {
    ApiConfig::builder()
        .base_url(server.uri())
        .api_key(TEST_API_KEY)
        .timeout(timeout)
        .build()
        .unwrap()
}

pub fn board_for(server: &MockServer) -> JobBoard {
    JobBoard::from_config(mock_config(server, Duration::from_secs(2))).unwrap()
}

/// An upstream record with every optional field absent.
pub fn upstream_record(id: &str, title: &str, company: &str, description: &str) -> Value {
    json!({
        "active_ats_id": id,
        "source_url": format!("https://jobs.example.com/{id}"),
        "title": title,
        "company": company,
        "location": "Denver, CO, United States",
        "text_description": description,
        "posted_at": "2024-04-02T08:15:00",
        "first_seen_at": "2024-04-02T09:00:00"
    })
}

/// Wraps records in the upstream page envelope.
pub fn page_body(records: Vec<Value>) -> Value {
    let count = records.len();
    json!({
        "results": records,
        "count": count,
        "next": null,
        "previous": null
    })
}

/// A provider whose every request fails with a 503.
#[derive(Clone, Debug, Default)]
pub struct UnavailableProvider;

#[async_trait]
impl JobsProvider for UnavailableProvider {
    async fn fetch_page(
        &self,
        _path: &str,
        _params: &[(&str, String)],
    ) -> Result<UpstreamResponse, FetchError> {
        Err(FetchError::Status {
            status: 503,
            body: "Service Unavailable".to_string(),
        })
    }
}

pub fn unavailable_board() -> JobBoard {
    JobBoard::new(Box::new(UnavailableProvider))
}
