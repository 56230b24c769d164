//! Experience fit: years, seniority, domain and leadership, read heuristically from text.

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::patterns::{self, PatternSet};
use crate::scoring::taxonomy::{
    seniority_rank, DEFAULT_SENIORITY_RANK, EXPERIENCE_DOMAINS, JOB_LEADERSHIP_INDICATORS,
    JOB_SENIORITY_LEVELS, RESUME_LEADERSHIP_KEYWORDS, RESUME_SENIORITY_LEVELS,
};
use crate::scoring::ScoringError;

const YEARS_WEIGHT: f64 = 0.4;
const SENIORITY_WEIGHT: f64 = 0.3;
const DOMAIN_WEIGHT: f64 = 0.2;
const LEADERSHIP_WEIGHT: f64 = 0.1;

static JOB_YEAR_PATTERNS: PatternSet = Lazy::new(|| {
    patterns::compile_all(&[
        r"(\d+)\+?\s*(?:years?|yrs?)\s*(?:of\s*)?(?:experience|exp)?",
        r"(\d+)\s*-\s*(\d+)\s*(?:years?|yrs?)\s*(?:of\s*)?(?:experience|exp)?",
        r"minimum\s*(?:of\s*)?(\d+)\s*(?:years?|yrs?)",
        r"at\s*least\s*(\d+)\s*(?:years?|yrs?)",
    ])
});

static RESUME_YEAR_PATTERNS: PatternSet = Lazy::new(|| {
    patterns::compile_all(&[
        r"(\d+)\+?\s*(?:years?|yrs?)\s*(?:of\s*)?(?:experience|exp)?",
        r"(\d+)\s*-\s*(\d+)\s*(?:years?|yrs?)\s*(?:of\s*)?(?:experience|exp)?",
        r"experience\s*(?:of\s*)?(\d+)\s*(?:years?|yrs?)",
    ])
});

/// What a posting asks for.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExperienceRequirements {
    pub required_years: u32,
    pub seniority_level: Option<&'static str>,
    pub required_domains: Vec<&'static str>,
    pub leadership_required: bool,
}

impl ExperienceRequirements {
    /// Reads requirements from a job's title and body. Both are lowercased here.
    pub fn from_job(job_title: &str, job_text: &str) -> Result<Self, ScoringError> {
        let title = job_title.to_lowercase();
        let text = job_text.to_lowercase();

        Ok(Self {
            required_years: patterns::max_captured_number(
                patterns::get_all(&JOB_YEAR_PATTERNS)?,
                &text,
            ),
            seniority_level: JOB_SENIORITY_LEVELS
                .iter()
                .copied()
                .find(|level| title.contains(level) || text.contains(level)),
            required_domains: domains_in(&text),
            leadership_required: JOB_LEADERSHIP_INDICATORS
                .iter()
                .any(|indicator| text.contains(indicator)),
        })
    }
}

/// What a resume shows.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CandidateExperience {
    pub total_years: u32,
    pub seniority_level: Option<&'static str>,
    pub domains: Vec<&'static str>,
    pub leadership_indicators: Vec<&'static str>,
}

impl CandidateExperience {
    pub fn from_resume(resume_text: &str) -> Result<Self, ScoringError> {
        let text = resume_text.to_lowercase();

        Ok(Self {
            total_years: patterns::max_captured_number(
                patterns::get_all(&RESUME_YEAR_PATTERNS)?,
                &text,
            ),
            seniority_level: RESUME_SENIORITY_LEVELS
                .iter()
                .copied()
                .find(|level| text.contains(level)),
            domains: domains_in(&text),
            leadership_indicators: RESUME_LEADERSHIP_KEYWORDS
                .iter()
                .copied()
                .filter(|keyword| text.contains(keyword))
                .collect(),
        })
    }
}

fn domains_in(lowered: &str) -> Vec<&'static str> {
    EXPERIENCE_DOMAINS
        .iter()
        .copied()
        .filter(|domain| lowered.contains(domain))
        .collect()
}

/// Combined experience fit in [0, 1].
pub fn job_experience_match(
    resume_text: &str,
    job_title: &str,
    job_text: &str,
) -> Result<f64, ScoringError> {
    let required = ExperienceRequirements::from_job(job_title, job_text)?;
    let candidate = CandidateExperience::from_resume(resume_text)?;

    let years = years_match(candidate.total_years, required.required_years);
    let seniority = seniority_match(candidate.seniority_level, required.seniority_level);
    let domain = domain_match(&candidate.domains, &required.required_domains);
    let leadership =
        leadership_match(&candidate.leadership_indicators, required.leadership_required);

    let score = YEARS_WEIGHT * years
        + SENIORITY_WEIGHT * seniority
        + DOMAIN_WEIGHT * domain
        + LEADERSHIP_WEIGHT * leadership;
    Ok(score.min(1.0))
}

/// Meeting the requirement scores at least 0.8; overshooting it by 2x or more decays to 0.8.
pub fn years_match(candidate: u32, required: u32) -> f64 {
    if required == 0 {
        return 1.0;
    }
    let (candidate, required) = (f64::from(candidate), f64::from(required));
    if candidate >= required {
        let excess = (candidate - required) / required;
        (0.8 + 0.2 * (1.0 - excess.min(2.0) / 2.0)).min(1.0)
    } else {
        (candidate / required).max(0.0)
    }
}

/// Unknown or absent candidate levels rank as mid-level.
pub fn seniority_match(candidate: Option<&str>, required: Option<&str>) -> f64 {
    let Some(required) = required else {
        return 1.0;
    };
    let candidate_rank = candidate.map_or(DEFAULT_SENIORITY_RANK, seniority_rank);
    let required_rank = seniority_rank(required);

    if candidate_rank >= required_rank {
        1.0
    } else {
        f64::from(candidate_rank) / f64::from(required_rank)
    }
}

pub fn domain_match(candidate: &[&str], required: &[&str]) -> f64 {
    if required.is_empty() {
        return 1.0;
    }
    if candidate.is_empty() {
        return 0.3;
    }
    let overlap = required.iter().filter(|d| candidate.contains(d)).count();
    (overlap as f64 / required.len() as f64 + 0.2).min(1.0)
}

pub fn leadership_match(indicators: &[&str], required: bool) -> f64 {
    if !required {
        return 1.0;
    }
    if indicators.is_empty() {
        return 0.2;
    }
    let strength = (indicators.len() as f64 / 3.0).min(1.0);
    0.6 + 0.4 * strength
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_years_match_curve() {
        assert_eq!(years_match(3, 0), 1.0);
        assert_eq!(years_match(5, 5), 1.0);
        // 50% over: 0.8 + 0.2 * 0.75
        assert!((years_match(6, 4) - 0.95).abs() < 1e-9);
        assert!((years_match(30, 5) - 0.8).abs() < 1e-9);
        assert!((years_match(2, 4) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_seniority_match() {
        assert_eq!(seniority_match(Some("senior"), None), 1.0);
        assert_eq!(seniority_match(Some("director"), Some("senior")), 1.0);
        // junior 2 vs lead 6
        assert!((seniority_match(Some("junior"), Some("lead")) - 2.0 / 6.0).abs() < 1e-9);
        // absent candidate level ranks as mid (4) vs senior (5)
        assert!((seniority_match(None, Some("senior")) - 0.8).abs() < 1e-9);
        assert_eq!(seniority_match(Some("mid"), Some("intern")), 1.0);
    }

    #[test]
    fn test_domain_match() {
        assert_eq!(domain_match(&[], &[]), 1.0);
        assert_eq!(domain_match(&[], &["web"]), 0.3);
        assert!((domain_match(&["web"], &["web", "cloud"]) - 0.7).abs() < 1e-9);
        assert_eq!(domain_match(&["web", "cloud"], &["web", "cloud"]), 1.0);
    }

    #[test]
    fn test_leadership_match() {
        assert_eq!(leadership_match(&[], false), 1.0);
        assert_eq!(leadership_match(&[], true), 0.2);
        assert!((leadership_match(&["led"], true) - (0.6 + 0.4 / 3.0)).abs() < 1e-9);
        assert_eq!(leadership_match(&["led", "managed", "senior", "architect"], true), 1.0);
    }

    #[test]
    fn test_requirements_extraction() {
        let req = ExperienceRequirements::from_job(
            "Senior Cloud Engineer",
            "At least 5 years of experience. You will mentor engineers on AWS cloud.",
        )
        .unwrap();
        assert_eq!(req.required_years, 5);
        assert_eq!(req.seniority_level, Some("senior"));
        assert_eq!(req.required_domains, vec!["cloud"]);
        assert!(req.leadership_required);
    }

    #[test]
    fn test_range_takes_upper_bound() {
        let req = ExperienceRequirements::from_job("", "3-6 years").unwrap();
        assert_eq!(req.required_years, 6);
    }

    #[test]
    fn test_years_in_other_scripts() {
        let req = ExperienceRequirements::from_job("", "at least \u{0663} years").unwrap();
        assert_eq!(req.required_years, 3);
        let candidate = CandidateExperience::from_resume("\u{FF17} years of experience").unwrap();
        assert_eq!(candidate.total_years, 7);
    }

    #[test]
    fn test_candidate_extraction() {
        let candidate = CandidateExperience::from_resume(
            "Senior engineer. Led a team building web software for 8 years.",
        )
        .unwrap();
        assert_eq!(candidate.total_years, 8);
        assert_eq!(candidate.seniority_level, Some("senior"));
        assert_eq!(candidate.domains, vec!["software", "web"]);
        assert_eq!(candidate.leadership_indicators, vec!["led", "senior"]);
    }

    #[test]
    fn test_combined_match_for_a_strong_candidate() {
        let score = job_experience_match(
            "Lead engineer with 10 years of experience in web software. Mentored and managed teams.",
            "Senior Software Engineer",
            "5+ years of software experience, mentor juniors",
        )
        .unwrap();
        assert!(score > 0.9, "{score}");
        assert!(score <= 1.0);
    }
}
