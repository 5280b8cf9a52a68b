//! # Output Rendering
//!
//! Plain-text and JSON views of listings and company profiles.

use chrono::{DateTime, Utc};
use jobboard::listing::posted_age_label;
use jobboard::{CanonicalJob, Company, JobSource};
use serde::Serialize;
use std::fmt::Write;

/// A company together with its bundled postings, as printed by `company`.
#[derive(Debug, Serialize)]
pub struct CompanyProfile {
    #[serde(flatten)]
    pub company: Company,
    pub jobs: Vec<CanonicalJob>,
}

#[derive(Serialize)]
struct JobsJson<'a> {
    source: JobSource,
    count: usize,
    jobs: &'a [CanonicalJob],
}

pub fn jobs_json(jobs: &[CanonicalJob], source: JobSource) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JobsJson {
        source,
        count: jobs.len(),
        jobs,
    })
}

/// One line per job: age, type, title, company, location, salary.
pub fn jobs_text(jobs: &[CanonicalJob], source: JobSource, now: DateTime<Utc>) -> String {
    let mut out = String::new();
    let plural = if jobs.len() == 1 { "" } else { "s" };
    let _ = writeln!(out, "{} job{plural} found ({source} data)", jobs.len());

    for job in jobs {
        let age = posted_age_label(&job.posted_date, now).unwrap_or_else(|| job.posted_date.clone());
        let _ = writeln!(
            out,
            "[{age:>13}] {:<10} {} @ {} ({}) | {}",
            job.job_type.as_str(),
            job.title,
            job.company,
            job.location,
            job.salary
        );
    }
    out
}

pub fn companies_text(companies: &[Company]) -> String {
    let mut out = String::new();
    let suffix = if companies.len() == 1 { "y" } else { "ies" };
    let _ = writeln!(out, "{} Compan{suffix} Found", companies.len());
    for company in companies {
        let _ = writeln!(
            out,
            "{:<10} {} | {} | {} | {} employees",
            company.id, company.name, company.industry, company.location, company.employees
        );
    }
    out
}

pub fn profile_text(profile: &CompanyProfile, now: DateTime<Utc>) -> String {
    let company = &profile.company;
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", company.name, company.industry);
    let _ = writeln!(out, "{}", company.description);
    let _ = writeln!(
        out,
        "Location: {} | Founded: {} | Employees: {} | {}",
        company.location, company.founded, company.employees, company.website
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", company.about);
    let _ = writeln!(out);
    out.push_str(&jobs_text(&profile.jobs, JobSource::Fallback, now));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use jobboard::companies::{find_company, jobs_for_company};

    #[test]
    fn test_jobs_text_includes_age_and_type() {
        let now = Utc.with_ymd_and_hms(2023, 6, 21, 9, 0, 0).unwrap();
        let jobs = jobs_for_company("company4");
        let text = jobs_text(&jobs, JobSource::Fallback, now);

        assert!(text.starts_with("2 jobs found (fallback data)"));
        assert!(text.contains("Yesterday"));
        assert!(text.contains("Part-time"));
        assert!(text.contains("Technical Writer @ InnovateHub (Chicago, IL)"));
    }

    #[test]
    fn test_jobs_json_shape() {
        let jobs = jobs_for_company("company5");
        let rendered = jobs_json(&jobs, JobSource::Live).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["source"], "live");
        assert_eq!(value["count"], 1);
        assert_eq!(value["jobs"][0]["type"], "Contract");
    }

    #[test]
    fn test_profile_json_flattens_company() {
        let profile = CompanyProfile {
            company: find_company("company1").unwrap(),
            jobs: jobs_for_company("company1"),
        };
        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(value["name"], "TechVision");
        assert_eq!(value["jobs"].as_array().unwrap().len(), 2);
    }
}
