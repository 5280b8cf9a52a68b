//! # API Configuration
//!
//! `ApiConfig` is the single, immutable description of how to reach the
//! upstream jobs API. It is built explicitly (or from the environment) and handed
//! to the provider; nothing reads process-wide state after construction.
//!
//! Environment variables read by [`ApiConfig::from_env`]:
//! - `JOBS_API_BASE_URL` (default `https://active-jobs-db.p.rapidapi.com`)
//! - `JOBS_API_KEY` (optional)
//! - `JOBS_API_HOST` (default: the host part of the base URL)
//! - `JOBS_API_TIMEOUT_SECS` (default `10`)

use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::errors::ConfigError;
use std::env;
use std::fmt;
use std::time::Duration;
use tracing::{info, warn};
use url::Url;

#[derive(Clone)]
pub struct ApiConfig {
    base_url: String,
    api_key: Option<String>,
    api_host: String,
    timeout: Duration,
}

// The API key stays out of logs.
impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("api_host", &self.api_host)
            .field("has_api_key", &self.api_key.is_some())
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ApiConfig {
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    /// Loads `.env` if present, then reads the `JOBS_API_*` variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        if dotenvy::dotenv().is_ok() {
            info!("Loaded environment overrides from .env");
        }
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Builds a config from any variable lookup; blank values count as unset.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let mut builder = ApiConfig::builder();
        if let Some(base_url) = var("JOBS_API_BASE_URL") {
            builder = builder.base_url(base_url);
        }
        if let Some(key) = var("JOBS_API_KEY") {
            builder = builder.api_key(key);
        } else {
            warn!("JOBS_API_KEY is not set; live requests will likely be rejected");
        }
        if let Some(host) = var("JOBS_API_HOST") {
            builder = builder.api_host(host);
        }
        if let Some(raw) = var("JOBS_API_TIMEOUT_SECS") {
            let secs = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidValue {
                    name: "JOBS_API_TIMEOUT_SECS",
                    value: raw.clone(),
                })?;
            builder = builder.timeout(Duration::from_secs(secs));
        }
        builder.build()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn api_host(&self) -> &str {
        &self.api_host
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Joins a feed path such as `/active-ats-7d` onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// A builder for `ApiConfig`. Unset fields fall back to the public feed defaults.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
    api_host: Option<String>,
    timeout: Option<Duration>,
}

impl ApiConfigBuilder {
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn api_host(mut self, api_host: impl Into<String>) -> Self {
        self.api_host = Some(api_host.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Validates the base URL and derives the host header when none was given.
    pub fn build(self) -> Result<ApiConfig, ConfigError> {
        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let parsed = Url::parse(&base_url).map_err(|source| ConfigError::InvalidBaseUrl {
            url: base_url.clone(),
            source,
        })?;

        let api_host = match self.api_host {
            Some(host) => host,
            None => parsed
                .host_str()
                .map(str::to_string)
                .ok_or_else(|| ConfigError::MissingHost(base_url.clone()))?,
        };

        Ok(ApiConfig {
            base_url,
            api_key: self.api_key.filter(|k| !k.is_empty()),
            api_host,
            timeout: self
                .timeout
                .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        })
    }
}
