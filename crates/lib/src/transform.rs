//! # Record Transformer
//!
//! Maps one upstream record onto the canonical job shape. The mapping is pure
//! and total: every optional upstream field has a documented default.

use crate::classify::infer_employment_type;
use crate::constants::{DEFAULT_SALARY, PLACEHOLDER_LOGO};
use crate::requirements::extract_requirements;
use crate::types::{CanonicalJob, UpstreamJobRecord};
use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Synthesizes a company identifier: runs of whitespace become a single hyphen
/// and the result is lower-cased. `"Acme  Corp"` becomes `"acme-corp"`.
pub fn company_slug(name: &str) -> String {
    WHITESPACE_RUN.replace_all(name, "-").to_lowercase()
}

// Upstream sends both `null` and `""` for missing values; treat them alike.
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Converts an upstream record into a `CanonicalJob`.
pub fn transform_record(record: &UpstreamJobRecord) -> CanonicalJob {
    let company_id = non_empty(record.company_id.as_deref())
        .map(str::to_string)
        .unwrap_or_else(|| company_slug(&record.company));

    CanonicalJob {
        id: record.active_ats_id.clone(),
        title: record.title.clone(),
        company: record.company.clone(),
        company_id,
        location: record.location.clone(),
        description: record.text_description.clone(),
        salary: non_empty(record.salary.as_deref())
            .unwrap_or(DEFAULT_SALARY)
            .to_string(),
        posted_date: record.posted_at.clone(),
        job_type: infer_employment_type(&record.title, &record.text_description),
        logo: non_empty(record.company_logo.as_deref())
            .unwrap_or(PLACEHOLDER_LOGO)
            .to_string(),
        requirements: extract_requirements(&record.text_description),
        source_url: record.source_url.clone(),
    }
}

/// Transforms a page of records, preserving the order they were received in.
pub fn transform_records(records: &[UpstreamJobRecord]) -> Vec<CanonicalJob> {
    records.iter().map(transform_record).collect()
}
