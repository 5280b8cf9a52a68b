//! # Requirement Extraction
//!
//! Pulls requirement-like lines out of a free-text job description.

use crate::constants::{GENERIC_REQUIREMENTS, MAX_REQUIREMENTS};

/// Lower-case stems that mark a line as a requirement. `proficien` matches both
/// "proficiency" and "proficient".
const REQUIREMENT_KEYWORDS: [&str; 7] = [
    "require",
    "qualification",
    "skill",
    "experience",
    "proficien",
    "familiar",
    "knowledge",
];

fn is_requirement_line(line: &str) -> bool {
    let lower = line.to_lowercase();
    REQUIREMENT_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

/// The fixed list used when a description has too few requirement lines.
pub fn generic_requirements() -> Vec<String> {
    GENERIC_REQUIREMENTS.iter().map(|s| s.to_string()).collect()
}

/// Extracts between one and eight requirement lines from `description`.
///
/// Lines are kept as written, in their original order. When fewer than two
/// lines qualify, the generic four-item list is returned instead.
pub fn extract_requirements(description: &str) -> Vec<String> {
    let matches: Vec<&str> = description
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .filter(|line| is_requirement_line(line))
        .collect();

    if matches.len() < 2 {
        return generic_requirements();
    }

    matches
        .into_iter()
        .take(MAX_REQUIREMENTS)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_match_falls_back_to_generic_list() {
        let description = "About us\nYou need 5 years experience.\nWe offer snacks.";
        assert_eq!(extract_requirements(description), generic_requirements());
        assert_eq!(extract_requirements(""), generic_requirements());
    }

    #[test]
    fn test_keeps_matching_lines_in_order() {
        let description = "Intro line\n\
            Proficiency in Rust\n\
            \n\
            Perks: free lunch\n\
            Familiarity with Tokio\n\
            Required: a sense of humour";
        assert_eq!(
            extract_requirements(description),
            vec![
                "Proficiency in Rust",
                "Familiarity with Tokio",
                "Required: a sense of humour",
            ]
        );
    }

    #[test]
    fn test_caps_at_eight_lines() {
        let description = (1..=12)
            .map(|i| format!("Skill number {i}"))
            .collect::<Vec<_>>()
            .join("\n");
        let requirements = extract_requirements(&description);
        assert_eq!(requirements.len(), 8);
        assert_eq!(requirements[0], "Skill number 1");
        assert_eq!(requirements[7], "Skill number 8");
    }

    #[test]
    fn test_whitespace_only_lines_are_ignored() {
        let description = "   \n\t\nKnowledge of SQL\nQualifications: BSc";
        assert_eq!(
            extract_requirements(description),
            vec!["Knowledge of SQL", "Qualifications: BSc"]
        );
    }
}
