//! # Fallback Data Adapter
//!
//! Serves the bundled sample dataset in the canonical shape whenever the live
//! feed cannot be reached. Filtering here is a case-insensitive substring match,
//! unlike the exact-match quoting the upstream API applies.

use crate::constants::{EXPIRED_FALLBACK_AGE_DAYS, EXPIRED_FALLBACK_COUNT};
use crate::sample_data::{SampleJob, SAMPLE_JOBS};
use crate::types::CanonicalJob;
use chrono::{DateTime, Duration, SecondsFormat, Utc};

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn matches_filters(job: &SampleJob, title_filter: &str, location_filter: &str) -> bool {
    contains_ignore_case(job.title, title_filter)
        && contains_ignore_case(job.location, location_filter)
}

/// Returns the bundled jobs matching both filters, sliced to
/// `[offset, offset + limit)` in declared order.
///
/// An offset past the end or a zero limit yields an empty vector.
pub fn fallback_jobs(
    limit: usize,
    offset: usize,
    title_filter: &str,
    location_filter: &str,
) -> Vec<CanonicalJob> {
    SAMPLE_JOBS
        .iter()
        .filter(|job| matches_filters(job, title_filter, location_filter))
        .skip(offset)
        .take(limit)
        .map(SampleJob::to_canonical)
        .collect()
}

/// Formats a timestamp the way browsers print ISO dates,
/// e.g. `2024-05-01T12:00:00.000Z`.
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Substitute for the expired-postings feed: the first few bundled jobs, each
/// dated sixty days before `now` so they always read older than active ones.
pub fn expired_fallback_jobs(now: DateTime<Utc>) -> Vec<CanonicalJob> {
    let posted_date = iso_timestamp(now - Duration::days(EXPIRED_FALLBACK_AGE_DAYS));
    fallback_jobs(EXPIRED_FALLBACK_COUNT, 0, "", "")
        .into_iter()
        .map(|job| CanonicalJob {
            posted_date: posted_date.clone(),
            ..job
        })
        .collect()
}
