//! # Company Directory
//!
//! Lookups over the bundled company profiles and their job postings. The live
//! feed carries no company profiles, so these always read the bundled data.

use crate::sample_data::{SampleCompany, SampleJob, SAMPLE_COMPANIES, SAMPLE_JOBS};
use crate::types::{CanonicalJob, Company};

/// Location selector value that disables location filtering.
pub const ALL_LOCATIONS: &str = "All Locations";

/// Searches the directory.
///
/// `query` matches the company name or industry, ignoring case. `location`
/// passes everything when empty or [`ALL_LOCATIONS`]; otherwise the company
/// location must contain it as written.
pub fn search_companies(query: &str, location: &str) -> Vec<Company> {
    let query = query.to_lowercase();
    SAMPLE_COMPANIES
        .iter()
        .filter(|company| {
            query.is_empty()
                || company.name.to_lowercase().contains(&query)
                || company.industry.to_lowercase().contains(&query)
        })
        .filter(|company| {
            location.is_empty() || location == ALL_LOCATIONS || company.location.contains(location)
        })
        .map(SampleCompany::to_company)
        .collect()
}

pub fn find_company(id: &str) -> Option<Company> {
    SAMPLE_COMPANIES
        .iter()
        .find(|company| company.id == id)
        .map(SampleCompany::to_company)
}

/// Bundled postings belonging to `company_id`, in declared order.
pub fn jobs_for_company(company_id: &str) -> Vec<CanonicalJob> {
    SAMPLE_JOBS
        .iter()
        .filter(|job| job.company_id == company_id)
        .map(SampleJob::to_canonical)
        .collect()
}

pub fn find_sample_job(id: &str) -> Option<CanonicalJob> {
    SAMPLE_JOBS
        .iter()
        .find(|job| job.id == id)
        .map(SampleJob::to_canonical)
}
