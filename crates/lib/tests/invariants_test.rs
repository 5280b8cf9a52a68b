//! # Canonical Record Invariants
//!
//! Every canonical job, live or bundled, must carry a closed-set type, between
//! one and eight requirements, a company id, and non-empty salary and logo.

mod common;

use common::{setup_tracing, upstream_record, UnavailableProvider};
use jobboard::companies::{jobs_for_company, search_companies};
use jobboard::constants::GENERIC_REQUIREMENTS;
use jobboard::requirements::extract_requirements;
use jobboard::sample_data::sample_jobs;
use jobboard::transform::transform_record;
use jobboard::{CanonicalJob, EmploymentType, JobBoard, JobQuery, UpstreamJobRecord};

fn assert_canonical(job: &CanonicalJob) {
    assert!(EmploymentType::ALL.contains(&job.job_type), "{job:?}");
    assert!(
        (1..=8).contains(&job.requirements.len()),
        "{} requirements on {}",
        job.requirements.len(),
        job.id
    );
    assert!(!job.company_id.is_empty(), "{job:?}");
    assert!(!job.salary.is_empty(), "{job:?}");
    assert!(!job.logo.is_empty(), "{job:?}");
}

fn descriptions() -> Vec<String> {
    vec![
        String::new(),
        "\n\n\n".to_string(),
        "One line with experience".to_string(),
        "Skills: Rust\nExperience: 3y".to_string(),
        (0..40)
            .map(|i| format!("Knowledge item {i}"))
            .collect::<Vec<_>>()
            .join("\n"),
        "Remote work possible.\r\nRequired: SQL\r\nFamiliar with dbt".to_string(),
        "work FROM home, contract, part-time, freelance".to_string(),
    ]
}

#[test]
fn test_transformed_records_hold_invariants() {
    setup_tracing();
    let titles = [
        "Remote Contract Developer",
        "Part-Time Tutor",
        "Freelance Photographer",
        "Staff Engineer",
        "",
    ];
    let companies = ["Acme Corp", "  Padded   Name ", "X"];

    for title in titles {
        for company in companies {
            for description in descriptions() {
                let value = upstream_record("id", title, company, &description);
                let record: UpstreamJobRecord = serde_json::from_value(value).unwrap();
                assert_canonical(&transform_record(&record));
            }
        }
    }
}

#[test]
fn test_requirement_bounds_for_all_descriptions() {
    for description in descriptions() {
        let requirements = extract_requirements(&description);
        assert!((1..=8).contains(&requirements.len()));

        let matching = description
            .split('\n')
            .filter(|l| !l.trim().is_empty())
            .filter(|l| {
                let lower = l.to_lowercase();
                ["require", "qualification", "skill", "experience", "proficien", "familiar", "knowledge"]
                    .iter()
                    .any(|kw| lower.contains(kw))
            })
            .count();
        if matching < 2 {
            assert_eq!(requirements, GENERIC_REQUIREMENTS.to_vec());
        }
    }
}

#[test]
fn test_acme_defaults() {
    let value = upstream_record("acme-1", "Sales Lead", "Acme Corp", "Sell things");
    let record: UpstreamJobRecord = serde_json::from_value(value).unwrap();
    let job = transform_record(&record);

    assert_eq!(job.salary, "Competitive salary");
    assert_eq!(job.company_id, "acme-corp");
    assert_eq!(job.logo, "/placeholder.svg");
}

#[test]
fn test_bundled_records_hold_invariants() {
    for job in sample_jobs() {
        assert_canonical(&job);
    }
    for company in search_companies("", "") {
        for job in jobs_for_company(&company.id) {
            assert_eq!(job.company, company.name);
        }
    }
}

#[tokio::test]
async fn test_fallback_results_hold_invariants() {
    setup_tracing();
    let board = JobBoard::new(Box::new(UnavailableProvider));
    let jobs = board.fetch_jobs(&JobQuery::default()).await;
    assert!(!jobs.is_empty());
    jobs.iter().for_each(assert_canonical);

    for job in board.fetch_expired_jobs().await {
        assert_canonical(&job);
    }
}
