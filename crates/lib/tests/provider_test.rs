//! # RapidAPI Provider Tests
//!
//! Exercises the HTTP provider on its own against a mock upstream, checking the
//! request it builds and how each failure mode is reported.

mod common;

use anyhow::Result;
use common::{mock_config, page_body, setup_tracing, upstream_record, TEST_API_KEY};
use jobboard::board::page_params;
use jobboard::{FetchError, JobQuery, JobsProvider, RapidApiProvider, RecencyWindow};
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_provider_sends_auth_headers_and_params() -> Result<()> {
    setup_tracing();
    // --- Arrange ---
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/active-ats-24h"))
        .and(header("x-rapidapi-key", TEST_API_KEY))
        .and(header("x-rapidapi-host", "127.0.0.1"))
        .and(query_param("limit", "5"))
        .and(query_param("offset", "10"))
        .and(query_param("description_type", "text"))
        .and(query_param("title_filter", "\"Rust Developer\""))
        .and(query_param("location_filter", "\"Berlin\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(vec![
            upstream_record("a1", "Rust Developer", "Ferrous Systems", "Build things"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let provider = RapidApiProvider::new(mock_config(&server, Duration::from_secs(2)))?;
    let query = JobQuery::new(RecencyWindow::Last24Hours)
        .title("Rust Developer")
        .location("Berlin")
        .limit(5)
        .offset(10);

    // --- Act ---
    let page = provider
        .fetch_page(&query.window.path(), &page_params(&query))
        .await?;

    // --- Assert ---
    assert_eq!(page.results.len(), 1);
    assert_eq!(page.results[0].active_ats_id, "a1");
    assert_eq!(page.count, Some(1));
    assert!(page.next.is_none());
    Ok(())
}

#[tokio::test]
async fn test_provider_reports_non_success_status() -> Result<()> {
    setup_tracing();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/active-ats-7d"))
        .respond_with(ResponseTemplate::new(429).set_body_string("Too many requests"))
        .mount(&server)
        .await;

    let provider = RapidApiProvider::new(mock_config(&server, Duration::from_secs(2)))?;
    let result = provider.fetch_page("/active-ats-7d", &[]).await;

    match result {
        Err(FetchError::Status { status, body }) => {
            assert_eq!(status, 429);
            assert_eq!(body, "Too many requests");
        }
        other => panic!("expected a status error, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn test_provider_reports_malformed_payload() -> Result<()> {
    setup_tracing();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/active-ats-7d"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "jobs": [] })),
        )
        .mount(&server)
        .await;

    let provider = RapidApiProvider::new(mock_config(&server, Duration::from_secs(2)))?;
    let result = provider.fetch_page("/active-ats-7d", &[]).await;

    assert!(matches!(result, Err(FetchError::Deserialization(_))));
    Ok(())
}

#[tokio::test]
async fn test_provider_times_out() -> Result<()> {
    setup_tracing();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/active-ats-1h"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page_body(vec![]))
                .set_delay(Duration::from_millis(800)),
        )
        .mount(&server)
        .await;

    let provider = RapidApiProvider::new(mock_config(&server, Duration::from_millis(100)))?;
    let result = provider.fetch_page("/active-ats-1h", &[]).await;

    let err = result.expect_err("request should time out");
    assert!(err.is_timeout(), "unexpected error: {err}");
    Ok(())
}

#[tokio::test]
async fn test_provider_omits_key_header_when_unset() -> Result<()> {
    setup_tracing();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/active-ats-expired"))
        .and(header("x-rapidapi-host", "jobs.internal"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(vec![])))
        .expect(1)
        .mount(&server)
        .await;

    let config = jobboard::ApiConfig::builder()
        .base_url(server.uri())
        .api_host("jobs.internal")
        .build()?;
    let provider = RapidApiProvider::new(config)?;
    provider.fetch_page("/active-ats-expired", &[]).await?;

    let requests = server.received_requests().await.unwrap_or_default();
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].headers.contains_key("x-rapidapi-key"));
    Ok(())
}
