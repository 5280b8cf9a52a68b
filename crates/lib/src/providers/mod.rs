pub mod rapidapi;

use crate::errors::FetchError;
use crate::types::UpstreamResponse;
use async_trait::async_trait;
use dyn_clone::DynClone;
use std::fmt::Debug;

pub use rapidapi::RapidApiProvider;

/// A source of upstream job pages.
///
/// `JobBoard` talks to the network only through this trait, which keeps the
/// orchestration logic testable against mock servers or in-memory providers.
#[async_trait]
pub trait JobsProvider: Send + Sync + Debug + DynClone {
    /// Fetches one page from `path` (e.g. `/active-ats-7d`) with the given
    /// query parameters.
    ///
    /// Implementations must fail on transport errors, non-success statuses and
    /// bodies that do not match `UpstreamResponse`.
    async fn fetch_page(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<UpstreamResponse, FetchError>;
}

dyn_clone::clone_trait_object!(JobsProvider);
