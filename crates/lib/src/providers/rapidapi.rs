use crate::{
    config::ApiConfig,
    constants::{API_HOST_HEADER, API_KEY_HEADER},
    errors::FetchError,
    providers::JobsProvider,
    types::UpstreamResponse,
};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use tracing::{debug, info};

/// A provider for the RapidAPI-hosted active jobs feed.
#[derive(Clone, Debug)]
pub struct RapidApiProvider {
    client: ReqwestClient,
    config: ApiConfig,
}

impl RapidApiProvider {
    /// Creates a new `RapidApiProvider`. The configured timeout applies to the
    /// whole request, body included.
    pub fn new(config: ApiConfig) -> Result<Self, FetchError> {
        let client = ReqwestClient::builder()
            .timeout(config.timeout())
            .build()
            .map_err(FetchError::ClientBuild)?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

#[async_trait]
impl JobsProvider for RapidApiProvider {
    async fn fetch_page(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<UpstreamResponse, FetchError> {
        let url = self.config.endpoint(path);
        info!("Fetching jobs page from: {}", url);
        debug!(?params, "Jobs page query parameters");

        let mut request = self
            .client
            .get(&url)
            .query(params)
            .header(API_HOST_HEADER, self.config.api_host());
        if let Some(key) = self.config.api_key() {
            request = request.header(API_KEY_HEADER, key);
        }

        let response = request.send().await.map_err(FetchError::Request)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status { status, body });
        }

        let body = response.text().await.map_err(FetchError::Request)?;
        let page: UpstreamResponse = serde_json::from_str(&body)?;

        debug!(
            results = page.results.len(),
            count = ?page.count,
            "<-- Jobs page received"
        );
        Ok(page)
    }
}
