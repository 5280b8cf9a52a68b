//! Helpers applied to a fetched result set before display.

use crate::types::{CanonicalJob, EmploymentType};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Type selector value that disables type filtering.
pub const ALL_TYPES: &str = "All Types";

/// Keeps the jobs whose type matches `selector`.
///
/// An empty selector, [`ALL_TYPES`], or a label outside the closed set keeps
/// everything.
pub fn filter_by_job_type(jobs: Vec<CanonicalJob>, selector: &str) -> Vec<CanonicalJob> {
    if selector.is_empty() || selector == ALL_TYPES {
        return jobs;
    }
    match selector.parse::<EmploymentType>() {
        Ok(wanted) => jobs.into_iter().filter(|j| j.job_type == wanted).collect(),
        Err(_) => jobs,
    }
}

/// Parses the date formats seen in `posted_date`: RFC 3339, naive ISO
/// timestamps (taken as UTC) and plain `YYYY-MM-DD` dates.
pub fn parse_posted_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Human-readable age of a posting relative to `now`, e.g. `"3 weeks ago"`.
/// Dates in the future read as `"Today"`.
pub fn posted_age_label(posted_date: &str, now: DateTime<Utc>) -> Option<String> {
    let posted = parse_posted_date(posted_date)?;
    let days = (now - posted).num_days().max(0);

    let label = match days {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        2..=6 => format!("{days} days ago"),
        7..=29 => format!("{} weeks ago", days / 7),
        _ => format!("{} months ago", days / 30),
    };
    Some(label)
}
