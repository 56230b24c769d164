//! ATS scoring: five independent resume-quality factors combined into one grade.
//!
//! Each factor is computed in isolation. A factor that fails falls back to its documented
//! value and the rest of the breakdown is unaffected.

use std::collections::HashSet;
use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::models::ResumeProfile;
use crate::patterns::{self, PatternSet};
use crate::scoring::taxonomy::{
    ATS_SKILL_CATEGORIES, BULLET_CHARS, EDUCATION_LEVELS, HIGH_DEMAND_SKILLS,
    PROFESSIONAL_VERBS, SECTION_KEYWORDS, SOFT_SKILL_KEYWORDS, TECHNICAL_SKILL_KEYWORDS,
};
use crate::scoring::ScoringError;

const FORMAT_WEIGHT: f64 = 0.15;
const SKILLS_WEIGHT: f64 = 0.45;
const EXPERIENCE_WEIGHT: f64 = 0.20;
const EDUCATION_WEIGHT: f64 = 0.10;
const KEYWORD_WEIGHT: f64 = 0.10;

const FORMAT_FALLBACK: f64 = 0.3;
const SKILLS_FALLBACK: f64 = 0.0;
const EXPERIENCE_FALLBACK: f64 = 0.0;
const EDUCATION_FALLBACK: f64 = 0.0;
const KEYWORD_FALLBACK: f64 = 0.3;

static CONTACT_PATTERNS: PatternSet = Lazy::new(|| {
    patterns::compile_all(&[
        r"(?i)\b\d{3}[-.]?\d{3}[-.]?\d{4}\b",
        r"(?i)\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b",
        r"(?i)\blinkedin\.com|github\.com|portfolio|website\b",
    ])
});

static YEAR_PATTERNS: PatternSet = Lazy::new(|| {
    patterns::compile_all(&[
        r"(\d+)\+?\s*(?:years?|yrs?)",
        r"(\d+)\s*-\s*(\d+)\s*(?:years?|yrs?)",
        r"(?:experience|exp)\s*(?:of\s*)?(\d+)\s*(?:years?|yrs?)",
    ])
});

/// Letter grade derived from the overall score. Boundaries are inclusive-lower.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AtsGrade {
    #[serde(rename = "A+")]
    APlus,
    A,
    #[serde(rename = "B+")]
    BPlus,
    B,
    #[serde(rename = "C+")]
    CPlus,
    C,
    D,
    F,
}

impl AtsGrade {
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 0.9 => AtsGrade::APlus,
            s if s >= 0.8 => AtsGrade::A,
            s if s >= 0.7 => AtsGrade::BPlus,
            s if s >= 0.6 => AtsGrade::B,
            s if s >= 0.5 => AtsGrade::CPlus,
            s if s >= 0.4 => AtsGrade::C,
            s if s >= 0.3 => AtsGrade::D,
            _ => AtsGrade::F,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AtsGrade::APlus => "A+",
            AtsGrade::A => "A",
            AtsGrade::BPlus => "B+",
            AtsGrade::B => "B",
            AtsGrade::CPlus => "C+",
            AtsGrade::C => "C",
            AtsGrade::D => "D",
            AtsGrade::F => "F",
        }
    }
}

impl fmt::Display for AtsGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub format_score: f64,
    pub skills_score: f64,
    pub experience_score: f64,
    pub education_score: f64,
    pub keyword_score: f64,
    pub overall_score: f64,
    pub ats_grade: AtsGrade,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ScoreBreakdown {
    /// Well-formed result for a scoring pass that could not complete.
    pub fn degraded(message: impl Into<String>) -> Self {
        Self {
            format_score: 0.0,
            skills_score: 0.0,
            experience_score: 0.0,
            education_score: 0.0,
            keyword_score: 0.0,
            overall_score: 0.0,
            ats_grade: AtsGrade::F,
            error: Some(message.into()),
        }
    }
}

/// Resume quality scorer. Pure and stateless; share freely across workers.
#[derive(Debug, Clone, Copy, Default)]
pub struct AtsScorer;

impl AtsScorer {
    pub fn new() -> Self {
        Self
    }

    pub fn calculate_ats_score(&self, resume: &ResumeProfile) -> ScoreBreakdown {
        let format_score = guarded("format", FORMAT_FALLBACK, || format_score(&resume.full_text));
        let skills_score = guarded("skills", SKILLS_FALLBACK, || skills_score(&resume.skills));
        let experience_score = guarded("experience", EXPERIENCE_FALLBACK, || {
            experience_score(&resume.full_text)
        });
        let education_score = guarded("education", EDUCATION_FALLBACK, || {
            education_score(&resume.full_text)
        });
        let keyword_score = guarded("keyword", KEYWORD_FALLBACK, || keyword_score(resume));

        let overall_score = FORMAT_WEIGHT * format_score
            + SKILLS_WEIGHT * skills_score
            + EXPERIENCE_WEIGHT * experience_score
            + EDUCATION_WEIGHT * education_score
            + KEYWORD_WEIGHT * keyword_score;

        if !overall_score.is_finite() {
            error!("Error calculating ATS score: overall score is {overall_score}");
            return ScoreBreakdown::degraded(ScoringError::NonFinite("overall").to_string());
        }
        let overall_score = overall_score.clamp(0.0, 1.0);

        ScoreBreakdown {
            format_score,
            skills_score,
            experience_score,
            education_score,
            keyword_score,
            overall_score,
            ats_grade: AtsGrade::from_score(overall_score),
            error: None,
        }
    }
}

/// Runs one factor, replacing failure or a non-finite value with `fallback`.
fn guarded<F>(factor: &'static str, fallback: f64, compute: F) -> f64
where
    F: FnOnce() -> Result<f64, ScoringError>,
{
    match compute() {
        Ok(score) if score.is_finite() => score.clamp(0.0, 1.0),
        Ok(_) => {
            warn!("Non-finite {factor} score, using fallback {fallback}");
            fallback
        }
        Err(e) => {
            warn!("Error calculating {factor} score: {e}");
            fallback
        }
    }
}

fn format_score(text: &str) -> Result<f64, ScoringError> {
    let lowered = text.to_lowercase();
    let mut score = 0.0;

    // Four sections earn the full share.
    let sections = SECTION_KEYWORDS
        .iter()
        .filter(|s| lowered.contains(*s))
        .count();
    score += (sections as f64 / 4.0 * 0.3).min(0.3);

    let word_count = text.split_whitespace().count();
    score += match word_count {
        200..=2500 => 0.2,
        100..=199 | 2501..=3500 => 0.15,
        n if n >= 50 => 0.1,
        _ => 0.0,
    };

    // Two of the three contact kinds earn the full share.
    let contact_found = patterns::get_all(&CONTACT_PATTERNS)?
        .iter()
        .filter(|re| re.is_match(text))
        .count();
    score += (contact_found as f64 / 2.0 * 0.2).min(0.2);

    let bullets: usize = BULLET_CHARS.iter().map(|c| text.matches(*c).count()).sum();
    score += match bullets {
        n if n >= 5 => 0.2,
        n if n >= 2 => 0.1,
        _ => 0.0,
    };

    let verbs = PROFESSIONAL_VERBS
        .iter()
        .filter(|v| lowered.contains(*v))
        .count();
    score += match verbs {
        n if n >= 3 => 0.1,
        n if n >= 1 => 0.05,
        _ => 0.0,
    };

    Ok(score.min(1.0))
}

fn skills_score(skills: &[String]) -> Result<f64, ScoringError> {
    if skills.is_empty() {
        return Ok(0.0);
    }

    let technical: Vec<String> = skills
        .iter()
        .map(|s| s.to_lowercase())
        .filter(|s| is_technical_skill(s))
        .collect();
    let soft_count = skills
        .iter()
        .filter(|s| is_soft_skill(&s.to_lowercase()))
        .count();

    let mut score = match technical.len() {
        n if n >= 8 => 0.6,
        n if n >= 5 => 0.4,
        n if n >= 3 => 0.2,
        _ => 0.0,
    };

    let high_demand = technical
        .iter()
        .filter(|s| HIGH_DEMAND_SKILLS.contains(&s.as_str()))
        .count();
    score += (high_demand as f64 * 0.05).min(0.2);

    score += match soft_count {
        n if n >= 5 => 0.2,
        n if n >= 3 => 0.1,
        _ => 0.0,
    };

    let categories: HashSet<&str> = technical.iter().map(|s| ats_skill_category(s)).collect();
    score += match categories.len() {
        n if n >= 4 => 0.2,
        n if n >= 2 => 0.1,
        _ => 0.0,
    };

    Ok(score.min(1.0))
}

fn experience_score(text: &str) -> Result<f64, ScoringError> {
    let lowered = text.to_lowercase();
    let years = patterns::max_captured_number(patterns::get_all(&YEAR_PATTERNS)?, &lowered);

    Ok(match years {
        y if y >= 10 => 1.0,
        y if y >= 7 => 0.8,
        y if y >= 5 => 0.6,
        y if y >= 3 => 0.4,
        y if y >= 1 => 0.2,
        _ => 0.1,
    })
}

fn education_score(text: &str) -> Result<f64, ScoringError> {
    let lowered = text.to_lowercase();
    Ok(EDUCATION_LEVELS
        .iter()
        .filter(|(keyword, _)| lowered.contains(keyword))
        .map(|(_, score)| *score)
        .fold(0.0, f64::max))
}

fn keyword_score(resume: &ResumeProfile) -> Result<f64, ScoringError> {
    let text = &resume.full_text;
    let word_count = text.split_whitespace().count();

    if resume.keywords.is_empty() || text.is_empty() {
        // Some credit for having content at all.
        return Ok(if word_count > 100 { 0.3 } else { 0.1 });
    }

    let lowered = text.to_lowercase();
    let present = resume
        .keywords
        .iter()
        .filter(|k| lowered.contains(&k.to_lowercase()))
        .count();
    let density = if word_count > 0 {
        present as f64 / word_count as f64
    } else {
        0.0
    };

    Ok(if (0.01..=0.08).contains(&density) {
        1.0
    } else if (0.005..0.01).contains(&density) || (density > 0.08 && density <= 0.12) {
        0.8
    } else if density < 0.005 || density > 0.12 {
        0.6
    } else {
        // Unreachable for finite densities; kept so an off-by-epsilon boundary still
        // lands on a sensible value.
        0.7
    })
}

fn is_technical_skill(skill_lower: &str) -> bool {
    TECHNICAL_SKILL_KEYWORDS
        .iter()
        .any(|k| skill_lower.contains(k))
}

fn is_soft_skill(skill_lower: &str) -> bool {
    SOFT_SKILL_KEYWORDS.iter().any(|k| skill_lower.contains(k))
}

fn ats_skill_category(skill_lower: &str) -> &'static str {
    ATS_SKILL_CATEGORIES
        .iter()
        .find(|(_, members)| members.iter().any(|m| skill_lower.contains(m)))
        .map(|(category, _)| *category)
        .unwrap_or("other")
}
