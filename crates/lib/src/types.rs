//! # Job Board Types
//!
//! The upstream wire shapes, the canonical job record consumed by the
//! presentation layer, and the small enums that parameterize a fetch.

use crate::constants::DEFAULT_LIMIT;
use crate::errors::ParseError;
use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

// --- Enumerations ---

/// Coarse employment type attached to every canonical job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmploymentType {
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Contract,
    Remote,
    Freelance,
}

impl EmploymentType {
    /// Every variant, in the order the filters present them.
    pub const ALL: [EmploymentType; 5] = [
        EmploymentType::FullTime,
        EmploymentType::PartTime,
        EmploymentType::Contract,
        EmploymentType::Remote,
        EmploymentType::Freelance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EmploymentType::FullTime => "Full-time",
            EmploymentType::PartTime => "Part-time",
            EmploymentType::Contract => "Contract",
            EmploymentType::Remote => "Remote",
            EmploymentType::Freelance => "Freelance",
        }
    }
}

impl fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmploymentType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ParseError {
                kind: "employment type",
                value: s.to_string(),
            })
    }
}

/// The recency window that selects which upstream feed is queried.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecencyWindow {
    #[serde(rename = "1h")]
    LastHour,
    #[serde(rename = "24h")]
    Last24Hours,
    #[default]
    #[serde(rename = "7d")]
    Last7Days,
}

impl RecencyWindow {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecencyWindow::LastHour => "1h",
            RecencyWindow::Last24Hours => "24h",
            RecencyWindow::Last7Days => "7d",
        }
    }

    /// The feed path for this window, e.g. `/active-ats-7d`.
    pub fn path(&self) -> String {
        format!("/active-ats-{}", self.as_str())
    }
}

impl fmt::Display for RecencyWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecencyWindow {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1h" => Ok(RecencyWindow::LastHour),
            "24h" => Ok(RecencyWindow::Last24Hours),
            "7d" => Ok(RecencyWindow::Last7Days),
            _ => Err(ParseError {
                kind: "recency window",
                value: s.to_string(),
            }),
        }
    }
}

// --- Query ---

/// Parameters of a single `JobBoard::fetch_jobs` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobQuery {
    pub window: RecencyWindow,
    /// Free-text title filter. Empty means "no filter".
    pub title_filter: String,
    /// Free-text location filter. Empty means "no filter".
    pub location_filter: String,
    pub limit: usize,
    pub offset: usize,
}

impl Default for JobQuery {
    fn default() -> Self {
        Self {
            window: RecencyWindow::default(),
            title_filter: String::new(),
            location_filter: String::new(),
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl JobQuery {
    pub fn new(window: RecencyWindow) -> Self {
        Self {
            window,
            ..Default::default()
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title_filter = title.into();
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location_filter = location.into();
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }
}

// --- Upstream wire types ---

/// One job record as returned by the upstream API. Never mutated.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct UpstreamJobRecord {
    #[serde(deserialize_with = "string_or_number")]
    pub active_ats_id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub text_description: String,
    #[serde(default)]
    pub salary: Option<String>,
    pub posted_at: String,
    #[serde(default)]
    pub first_seen_at: Option<String>,
    #[serde(default)]
    pub last_seen_at: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub company_id: Option<String>,
    #[serde(default)]
    pub company_url: Option<String>,
    #[serde(default)]
    pub company_logo: Option<String>,
    pub source_url: String,
}

/// The envelope wrapping every upstream page.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamResponse {
    pub results: Vec<UpstreamJobRecord>,
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
}

// Upstream identifiers arrive as strings from some ATS sources and as integers
// from others.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(de::Error::custom(format!(
            "expected a string or number identifier, got {other}"
        ))),
    }
}

fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(de::Error::custom(format!(
            "expected a string or number identifier, got {other}"
        ))),
    }
}

// --- Canonical types ---

/// The uniform job record every consumer works with, whatever its origin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalJob {
    pub id: String,
    pub title: String,
    pub company: String,
    pub company_id: String,
    pub location: String,
    pub description: String,
    pub salary: String,
    pub posted_date: String,
    #[serde(rename = "type")]
    pub job_type: EmploymentType,
    pub logo: String,
    pub requirements: Vec<String>,
    #[serde(rename = "source_url")]
    pub source_url: String,
}

/// A company profile from the bundled directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: String,
    pub name: String,
    pub description: String,
    pub industry: String,
    pub location: String,
    pub website: String,
    pub logo: String,
    pub employees: String,
    pub founded: String,
    pub about: String,
}

/// Where a result set came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobSource {
    /// Transformed from a successful upstream response.
    Live,
    /// Substituted from the bundled sample dataset.
    Fallback,
}

impl fmt::Display for JobSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobSource::Live => f.write_str("live"),
            JobSource::Fallback => f.write_str("fallback"),
        }
    }
}

/// A result set tagged with its provenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobListing {
    pub jobs: Vec<CanonicalJob>,
    pub source: JobSource,
}

impl JobListing {
    pub fn is_fallback(&self) -> bool {
        self.source == JobSource::Fallback
    }
}
