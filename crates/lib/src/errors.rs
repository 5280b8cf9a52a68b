use thiserror::Error;

/// Errors raised while talking to the upstream jobs API.
///
/// `JobBoard` never surfaces these to its callers: every variant collapses into
/// the same "unavailable" condition and triggers the fallback dataset. They are
/// still public so that a `JobsProvider` can be used and tested on its own.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to build Reqwest client: {0}")]
    ClientBuild(reqwest::Error),
    #[error("Failed to send request to the jobs API: {0}")]
    Request(reqwest::Error),
    #[error("Jobs API returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Failed to deserialize jobs API response: {0}")]
    Deserialization(#[from] serde_json::Error),
}

impl FetchError {
    /// Whether the failure happened because the transport gave up waiting.
    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchError::Request(e) if e.is_timeout())
    }
}

/// Errors raised while assembling an `ApiConfig`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Base URL '{0}' has no host")]
    MissingHost(String),
    #[error("Invalid value for {name}: '{value}'")]
    InvalidValue { name: &'static str, value: String },
}

/// Raised when a textual token does not name a known variant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {kind}: '{value}'")]
pub struct ParseError {
    pub kind: &'static str,
    pub value: String,
}
