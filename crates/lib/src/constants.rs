//! # Shared Constants
//!
//! Literal values shared by the transformer, the fallback adapter and the
//! provider, so the live and fallback paths agree on them.

/// Default host of the active jobs feed.
pub const DEFAULT_BASE_URL: &str = "https://active-jobs-db.p.rapidapi.com";

/// Default request timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default page size used by the presentation layer.
pub const DEFAULT_LIMIT: usize = 20;

/// Path of the feed that lists recently expired postings.
pub const EXPIRED_JOBS_PATH: &str = "/active-ats-expired";

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-rapidapi-key";

/// Header carrying the API host.
pub const API_HOST_HEADER: &str = "x-rapidapi-host";

/// Salary shown when the upstream record has none.
pub const DEFAULT_SALARY: &str = "Competitive salary";

/// Logo shown when the upstream record has none.
pub const PLACEHOLDER_LOGO: &str = "/placeholder.svg";

/// Source URL given to locally bundled records.
pub const PLACEHOLDER_SOURCE_URL: &str = "#";

/// Requirements used when a description yields fewer than two candidates.
pub const GENERIC_REQUIREMENTS: [&str; 4] = [
    "Relevant experience in the field",
    "Strong communication skills",
    "Problem-solving abilities",
    "Team collaboration",
];

/// Maximum number of requirements extracted from a description.
pub const MAX_REQUIREMENTS: usize = 8;

/// Number of bundled records substituted when the expired feed is unavailable.
pub const EXPIRED_FALLBACK_COUNT: usize = 5;

/// How far into the past substituted expired records are dated.
pub const EXPIRED_FALLBACK_AGE_DAYS: i64 = 60;
