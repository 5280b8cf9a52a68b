//! # jobboard
//!
//! Job listing data for a job-board front end. The crate fetches postings from
//! the active jobs feed, normalizes every upstream record into a
//! [`CanonicalJob`], and falls back to a bundled sample dataset whenever the
//! feed is unavailable, so callers always receive a renderable result set.
//!
//! ```no_run
//! use jobboard::{ApiConfig, JobBoard, JobQuery, RecencyWindow};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let board = JobBoard::from_config(ApiConfig::from_env()?)?;
//! let query = JobQuery::new(RecencyWindow::Last24Hours).title("Rust").limit(10);
//! for job in board.fetch_jobs(&query).await {
//!     println!("{} at {} ({})", job.title, job.company, job.job_type);
//! }
//! # Ok(())
//! # }
//! ```

pub mod board;
pub mod classify;
pub mod companies;
pub mod config;
pub mod constants;
pub mod errors;
pub mod fallback;
pub mod listing;
pub mod providers;
pub mod requirements;
pub mod sample_data;
pub mod transform;
pub mod types;

pub use board::JobBoard;
pub use config::ApiConfig;
pub use errors::{ConfigError, FetchError};
pub use providers::{JobsProvider, RapidApiProvider};
pub use types::{
    CanonicalJob, Company, EmploymentType, JobListing, JobQuery, JobSource, RecencyWindow,
    UpstreamJobRecord, UpstreamResponse,
};
