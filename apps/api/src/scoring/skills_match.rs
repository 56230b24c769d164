//! Skill overlap between a resume and a job, with synonym folding.

use std::collections::BTreeSet;

use crate::scoring::taxonomy::{CRITICAL_SKILLS, MATCH_SKILL_CATEGORIES, SKILL_SYNONYMS};

const EXACT_CRITICAL_CREDIT: f64 = 1.2;
const EXACT_CREDIT: f64 = 1.0;
const PARTIAL_CREDIT: f64 = 0.7;
const MIN_PARTIAL_LEN: usize = 3;

/// Lowercases, trims and folds a skill through the synonym table (one step only).
pub fn normalize_skill(skill: &str) -> String {
    let lowered = skill.trim().to_lowercase();
    SKILL_SYNONYMS
        .iter()
        .find(|(alias, _)| *alias == lowered)
        .map(|(_, canonical)| canonical.to_string())
        .unwrap_or(lowered)
}

fn normalize_all(skills: &[String]) -> BTreeSet<String> {
    skills.iter().map(|s| normalize_skill(s)).collect()
}

/// Score in [0, 1] for how well `resume_skills` cover `job_skills`.
pub fn job_skills_match(resume_skills: &[String], job_skills: &[String]) -> f64 {
    let job = normalize_all(job_skills);
    if job.is_empty() {
        return 0.0;
    }
    let resume = normalize_all(resume_skills);

    let weighted: f64 = job
        .iter()
        .map(|skill| {
            if resume.contains(skill) {
                if CRITICAL_SKILLS.contains(&skill.as_str()) {
                    EXACT_CRITICAL_CREDIT
                } else {
                    EXACT_CREDIT
                }
            } else if resume.iter().any(|r| is_partial_match(r, skill)) {
                PARTIAL_CREDIT
            } else {
                0.0
            }
        })
        .sum();

    let base = (weighted / job.len() as f64).min(1.0);
    let diversity_bonus = (count_skill_categories(&resume) as f64 / 5.0).min(0.1);
    (base + diversity_bonus).min(1.0)
}

/// One skill contains the other, and the contained one is long enough to mean something.
fn is_partial_match(a: &str, b: &str) -> bool {
    let (shorter, longer) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    shorter.chars().count() >= MIN_PARTIAL_LEN && longer.contains(shorter)
}

/// Number of distinct taxonomy categories the skills touch. Membership is substring
/// containment in either direction; each skill counts toward its first category only.
pub fn count_skill_categories(skills: &BTreeSet<String>) -> usize {
    let categories: BTreeSet<&str> = skills
        .iter()
        .filter_map(|skill| {
            MATCH_SKILL_CATEGORIES
                .iter()
                .find(|(_, members)| {
                    members
                        .iter()
                        .any(|m| skill.contains(m) || m.contains(skill.as_str()))
                })
                .map(|(category, _)| *category)
        })
        .collect();
    categories.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_normalize_applies_synonyms() {
        assert_eq!(normalize_skill("  ReactJS "), "react");
        assert_eq!(normalize_skill("K8s"), "kubernetes");
        assert_eq!(normalize_skill("Rust"), "rust");
    }

    #[test]
    fn test_synonym_folding_is_single_step() {
        // ts -> typescript, which is not folded again
        assert_eq!(normalize_skill("ts"), "typescript");
    }

    #[test]
    fn test_empty_job_skills_score_zero() {
        assert_eq!(job_skills_match(&skills(&["python"]), &[]), 0.0);
    }

    #[test]
    fn test_reactjs_matches_react_exactly() {
        let score = job_skills_match(&skills(&["ReactJS"]), &skills(&["react"]));
        // exact and critical, capped at 1.0 before the diversity bonus
        assert_eq!(score, 1.0);
    }

    #[test]
    fn test_python_java_against_python_aws_kubernetes() {
        let score = job_skills_match(
            &skills(&["python", "java"]),
            &skills(&["python", "aws", "kubernetes"]),
        );
        // python is exact and critical; aws folds to "amazon web services", no overlap
        let categories = count_skill_categories(&normalize_all(&skills(&["python", "java"])));
        let expected = 1.2 / 3.0 + (categories as f64 / 5.0).min(0.1);
        assert!((score - expected).abs() < 1e-9, "{score} vs {expected}");
        assert!((score - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_partial_match_earns_partial_credit() {
        // "postgresql" contains "sql"
        let score = job_skills_match(&skills(&["sql"]), &skills(&["postgresql"]));
        let expected = 0.7 + 0.1;
        assert!((score - expected).abs() < 1e-9, "{score}");
    }

    #[test]
    fn test_short_fragments_do_not_partially_match() {
        // "go" is too short to count as contained in "golang"
        let score = job_skills_match(&skills(&["go"]), &skills(&["golang"]));
        assert!((score - 0.1).abs() < 1e-9, "{score}");
    }

    #[test]
    fn test_category_membership_is_bidirectional() {
        let set: BTreeSet<String> = ["react native developer", "terraform", "tensorflow"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(count_skill_categories(&set), 3);
    }

    #[test]
    fn test_result_is_bounded() {
        let many = skills(&["python", "java", "sql", "docker", "git", "linux", "react"]);
        let score = job_skills_match(&many, &many);
        assert!((0.0..=1.0).contains(&score));
    }
}
