//! Resume ↔ job similarity: embedding cosine blended with three text boosts.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use tracing::warn;

use crate::patterns::{self, PatternSet};
use crate::scoring::taxonomy::{
    CRITICAL_TITLE_KEYWORDS, IMPORTANT_KEYWORDS, JOB_TITLE_ROLE_WORDS, RESUME_TITLE_PATTERNS,
    SIMILARITY_DOMAINS,
};
use crate::scoring::ScoringError;

const BASE_WEIGHT: f64 = 0.6;
const KEYWORD_WEIGHT: f64 = 0.2;
const TITLE_WEIGHT: f64 = 0.1;
const DOMAIN_WEIGHT: f64 = 0.1;

const TITLE_SCAN_LINES: usize = 5;
const MAX_TITLE_LINE_CHARS: usize = 100;

static TITLE_PATTERNS: PatternSet = Lazy::new(|| patterns::compile_all(RESUME_TITLE_PATTERNS));

/// Cosine of the angle between two vectors.
///
/// Returns 0.0 when either vector is empty, the lengths differ, either magnitude is zero,
/// or any component is non-finite.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    if a.is_empty() || b.is_empty() || a.len() != b.len() {
        return 0.0;
    }
    if a.iter().chain(b).any(|x| !x.is_finite()) {
        return 0.0;
    }

    let (mut dot, mut mag_a, mut mag_b) = (0.0f64, 0.0f64, 0.0f64);
    for (x, y) in a.iter().zip(b) {
        let (x, y) = (f64::from(*x), f64::from(*y));
        dot += x * y;
        mag_a += x * x;
        mag_b += y * y;
    }

    if mag_a == 0.0 || mag_b == 0.0 {
        return 0.0;
    }
    let cosine = dot / (mag_a.sqrt() * mag_b.sqrt());
    if cosine.is_finite() {
        cosine
    } else {
        0.0
    }
}

/// Embedding similarity adjusted by keyword, title and domain overlap. Capped at 1.0.
pub fn enhanced_semantic_similarity(
    resume_embedding: &[f32],
    job_embedding: &[f32],
    resume_text: &str,
    job_text: &str,
) -> f64 {
    let base = cosine_similarity(resume_embedding, job_embedding);
    let keyword = keyword_boost(resume_text, job_text);
    let title = match title_boost(resume_text, job_text) {
        Ok(score) => score,
        Err(e) => {
            warn!("Error calculating title similarity boost: {e}");
            0.0
        }
    };
    let domain = domain_boost(resume_text, job_text);

    let enhanced =
        BASE_WEIGHT * base + KEYWORD_WEIGHT * keyword + TITLE_WEIGHT * title + DOMAIN_WEIGHT * domain;
    enhanced.min(1.0)
}

/// Jaccard overlap of important keywords, plus a bonus for shared seniority terms.
pub fn keyword_boost(resume_text: &str, job_text: &str) -> f64 {
    let resume_keywords = important_keywords(resume_text);
    let job_keywords = important_keywords(job_text);
    if job_keywords.is_empty() {
        return 0.0;
    }

    let shared: BTreeSet<&str> = resume_keywords
        .intersection(&job_keywords)
        .copied()
        .collect();
    let union = resume_keywords.union(&job_keywords).count();
    let jaccard = shared.len() as f64 / union as f64;

    let critical = shared
        .iter()
        .filter(|k| CRITICAL_TITLE_KEYWORDS.contains(k))
        .count();
    let bonus = (critical as f64 * 0.1).min(0.2);

    (jaccard + bonus).min(1.0)
}

/// Best character-set Jaccard between any title found in the resume and the job's title.
pub fn title_boost(resume_text: &str, job_text: &str) -> Result<f64, ScoringError> {
    let job_title = match job_title_from_text(job_text) {
        Some(title) => title.to_lowercase(),
        None => return Ok(0.0),
    };
    let titles = resume_titles(resume_text)?;

    Ok(titles
        .iter()
        .map(|t| char_set_similarity(t, &job_title))
        .fold(0.0, f64::max))
}

/// Share of the job's domains that also appear in the resume.
pub fn domain_boost(resume_text: &str, job_text: &str) -> f64 {
    let resume_domains = domains_in(resume_text);
    let job_domains = domains_in(job_text);
    if job_domains.is_empty() {
        return 0.0;
    }
    let overlap = resume_domains.intersection(&job_domains).count();
    overlap as f64 / job_domains.len() as f64
}

fn important_keywords(text: &str) -> BTreeSet<&'static str> {
    let lowered = text.to_lowercase();
    IMPORTANT_KEYWORDS
        .iter()
        .copied()
        .filter(|k| lowered.contains(k))
        .collect()
}

fn domains_in(text: &str) -> BTreeSet<&'static str> {
    let lowered = text.to_lowercase();
    SIMILARITY_DOMAINS
        .iter()
        .filter(|(_, words)| words.iter().any(|w| lowered.contains(w)))
        .map(|(domain, _)| *domain)
        .collect()
}

/// Distinct lowercased title phrases matched anywhere in the resume.
fn resume_titles(text: &str) -> Result<BTreeSet<String>, ScoringError> {
    let patterns = patterns::get_all(&TITLE_PATTERNS)?;
    Ok(patterns
        .iter()
        .flat_map(|re| re.find_iter(text))
        .map(|m| m.as_str().to_lowercase())
        .collect())
}

/// First of the leading lines that is short and names a role.
fn job_title_from_text(job_text: &str) -> Option<&str> {
    job_text
        .split('\n')
        .take(TITLE_SCAN_LINES)
        .map(str::trim)
        .find(|line| {
            let lowered = line.to_lowercase();
            line.chars().count() < MAX_TITLE_LINE_CHARS
                && JOB_TITLE_ROLE_WORDS.iter().any(|w| lowered.contains(w))
        })
}

/// Jaccard over the sets of characters in each string.
fn char_set_similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let a: BTreeSet<char> = a.chars().collect();
    let b: BTreeSet<char> = b.chars().collect();
    let union = a.union(&b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(&b).count() as f64 / union as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cosine_of_self_is_one() {
        let v = [0.3f32, 0.4, 0.5];
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_cosine_degenerate_inputs_are_zero() {
        assert_eq!(cosine_similarity(&[], &[1.0]), 0.0);
        assert_eq!(cosine_similarity(&[1.0, 2.0], &[1.0]), 0.0);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 2.0]), 0.0);
        assert_eq!(cosine_similarity(&[f32::NAN, 1.0], &[1.0, 2.0]), 0.0);
        assert_eq!(cosine_similarity(&[f32::INFINITY, 1.0], &[1.0, 2.0]), 0.0);
    }

    #[test]
    fn test_cosine_orthogonal_and_opposite() {
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
        assert!((cosine_similarity(&[1.0, 0.0], &[-1.0, 0.0]) + 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_keyword_boost_jaccard_with_critical_bonus() {
        // resume {python, senior}, job {python, senior, aws}: 2/3 + 0.1
        let boost = keyword_boost("Senior Python person", "senior python aws");
        assert!((boost - (2.0 / 3.0 + 0.1)).abs() < 1e-9, "{boost}");
    }

    #[test]
    fn test_keyword_boost_zero_without_job_keywords() {
        assert_eq!(keyword_boost("python aws", "plumbing and carpentry"), 0.0);
    }

    #[test]
    fn test_job_title_from_leading_lines() {
        let text = "Acme Corp\nSenior Backend Engineer\nWe build things";
        assert_eq!(job_title_from_text(text), Some("Senior Backend Engineer"));
        let buried = "a\nb\nc\nd\ne\nSoftware Engineer";
        assert_eq!(job_title_from_text(buried), None);
    }

    #[test]
    fn test_title_boost_identical_titles() {
        let boost = title_boost(
            "Worked as a Senior Software Engineer at Acme",
            "Senior Software Engineer\nJoin us",
        )
        .unwrap();
        assert!((boost - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_title_boost_zero_without_resume_titles() {
        assert_eq!(title_boost("Gardener", "Software Engineer").unwrap(), 0.0);
    }

    #[test]
    fn test_char_set_similarity() {
        // {a,b} vs {b,c}
        assert!((char_set_similarity("ab", "bc") - 1.0 / 3.0).abs() < 1e-9);
        assert_eq!(char_set_similarity("", "abc"), 0.0);
    }

    #[test]
    fn test_domain_boost_share_of_job_domains() {
        // job: web (frontend), cloud (aws); resume: web only
        let boost = domain_boost("frontend work", "frontend on aws");
        assert!((boost - 0.5).abs() < 1e-9);
        assert_eq!(domain_boost("anything", "nothing relevant here"), 0.0);
    }

    #[test]
    fn test_enhanced_similarity_is_capped() {
        let v = [1.0f32, 2.0, 3.0];
        let text = "Senior Software Engineer\nsenior lead python aws cloud web";
        let score = enhanced_semantic_similarity(&v, &v, text, text);
        assert!(score <= 1.0);
        assert!(score >= 0.6);
    }
}
