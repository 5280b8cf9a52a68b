//! # Employment Type Inference
//!
//! The upstream feed does not say whether a posting is full-time, remote and so
//! on. This module guesses it from the title and description with an ordered
//! list of keyword rules. The first rule that matches wins, so a posting that
//! mentions both "remote" and "contract" is classified as `Remote`.

use crate::types::EmploymentType;

/// One keyword rule: a tag plus the needles searched in the title and in the
/// description. All needles are lower-case.
struct TypeRule {
    tag: EmploymentType,
    title_terms: &'static [&'static str],
    description_terms: &'static [&'static str],
}

impl TypeRule {
    fn matches(&self, title: &str, description: &str) -> bool {
        self.title_terms.iter().any(|term| title.contains(term))
            || self
                .description_terms
                .iter()
                .any(|term| description.contains(term))
    }
}

/// Rules in precedence order.
const TYPE_RULES: &[TypeRule] = &[
    TypeRule {
        tag: EmploymentType::Remote,
        title_terms: &["remote"],
        description_terms: &["remote work", "work from home"],
    },
    TypeRule {
        tag: EmploymentType::Contract,
        title_terms: &["contract"],
        description_terms: &["contract"],
    },
    TypeRule {
        tag: EmploymentType::PartTime,
        title_terms: &["part-time"],
        description_terms: &["part time", "part-time"],
    },
    TypeRule {
        tag: EmploymentType::Freelance,
        title_terms: &["freelance"],
        description_terms: &["freelance"],
    },
];

/// Infers the employment type of a posting, defaulting to `FullTime`.
pub fn infer_employment_type(title: &str, description: &str) -> EmploymentType {
    let title = title.to_lowercase();
    let description = description.to_lowercase();

    TYPE_RULES
        .iter()
        .find(|rule| rule.matches(&title, &description))
        .map(|rule| rule.tag)
        .unwrap_or(EmploymentType::FullTime)
}
