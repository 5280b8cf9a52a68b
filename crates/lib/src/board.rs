//! # Job Fetch Orchestrator
//!
//! `JobBoard` is the public entry point of the library. Each call makes exactly
//! one upstream request; when that request fails for any reason (transport,
//! timeout, non-success status, malformed body) the failure is logged and the
//! bundled sample dataset is returned in its place, shaped identically. Callers
//! therefore never see an error from these methods.

use crate::{
    config::ApiConfig,
    constants::EXPIRED_JOBS_PATH,
    errors::FetchError,
    fallback::{expired_fallback_jobs, fallback_jobs},
    providers::{JobsProvider, RapidApiProvider},
    transform::transform_record,
    types::{CanonicalJob, JobListing, JobQuery, JobSource},
};
use chrono::Utc;
use tracing::{error, info, warn};

/// Builds the upstream query parameters for `query`.
///
/// Title and location filters are sent only when non-empty, wrapped in literal
/// double quotes so the upstream API treats them as exact phrases.
pub fn page_params(query: &JobQuery) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("limit", query.limit.to_string()),
        ("offset", query.offset.to_string()),
        ("description_type", "text".to_string()),
    ];
    if !query.title_filter.is_empty() {
        params.push(("title_filter", format!("\"{}\"", query.title_filter)));
    }
    if !query.location_filter.is_empty() {
        params.push(("location_filter", format!("\"{}\"", query.location_filter)));
    }
    params
}

/// Fetches job listings with transparent fallback to bundled data.
///
/// Holds no mutable state, so a single instance can be cloned and shared
/// across concurrent callers.
#[derive(Clone, Debug)]
pub struct JobBoard {
    provider: Box<dyn JobsProvider>,
}

impl JobBoard {
    /// Creates a `JobBoard` over any `JobsProvider`.
    pub fn new(provider: Box<dyn JobsProvider>) -> Self {
        Self { provider }
    }

    /// Creates a `JobBoard` backed by the RapidAPI feed described by `config`.
    pub fn from_config(config: ApiConfig) -> Result<Self, FetchError> {
        let provider = RapidApiProvider::new(config)?;
        Ok(Self::new(Box::new(provider)))
    }

    /// Fetches up to `query.limit` jobs starting at `query.offset`.
    pub async fn fetch_jobs(&self, query: &JobQuery) -> Vec<CanonicalJob> {
        self.fetch_jobs_with_source(query).await.jobs
    }

    /// Same as [`JobBoard::fetch_jobs`], tagging the result with where it came
    /// from.
    pub async fn fetch_jobs_with_source(&self, query: &JobQuery) -> JobListing {
        let path = query.window.path();
        let params = page_params(query);

        match self.provider.fetch_page(&path, &params).await {
            Ok(page) => {
                let jobs: Vec<CanonicalJob> = page
                    .results
                    .iter()
                    .take(query.limit)
                    .map(transform_record)
                    .collect();
                info!(
                    window = %query.window,
                    received = page.results.len(),
                    returned = jobs.len(),
                    "Fetched live jobs"
                );
                JobListing {
                    jobs,
                    source: JobSource::Live,
                }
            }
            Err(e) => {
                error!(error = %e, path = %path, timeout = e.is_timeout(), "Error fetching jobs");
                warn!("Using bundled sample data as fallback");
                JobListing {
                    jobs: fallback_jobs(
                        query.limit,
                        query.offset,
                        &query.title_filter,
                        &query.location_filter,
                    ),
                    source: JobSource::Fallback,
                }
            }
        }
    }

    /// Fetches the fixed batch of recently expired postings.
    pub async fn fetch_expired_jobs(&self) -> Vec<CanonicalJob> {
        self.fetch_expired_jobs_with_source().await.jobs
    }

    /// Same as [`JobBoard::fetch_expired_jobs`], tagging the result with where
    /// it came from. Substituted records are dated sixty days ago.
    pub async fn fetch_expired_jobs_with_source(&self) -> JobListing {
        match self.provider.fetch_page(EXPIRED_JOBS_PATH, &[]).await {
            Ok(page) => JobListing {
                jobs: page.results.iter().map(transform_record).collect(),
                source: JobSource::Live,
            },
            Err(e) => {
                error!(error = %e, path = EXPIRED_JOBS_PATH, "Error fetching expired jobs");
                JobListing {
                    jobs: expired_fallback_jobs(Utc::now()),
                    source: JobSource::Fallback,
                }
            }
        }
    }
}
