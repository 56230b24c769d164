//! Job matching: ranks candidate jobs against a resume.
//!
//! Each job gets three scores (semantic similarity, skills match, experience match)
//! combined with fixed weights. Jobs below the quality floor are dropped and the rest
//! are returned best first.

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::models::{JobProfile, ResumeProfile};
use crate::scoring::ats::{AtsScorer, ScoreBreakdown};
use crate::scoring::experience_match::job_experience_match;
use crate::scoring::similarity::enhanced_semantic_similarity;
use crate::scoring::skills_match::job_skills_match;

const SIMILARITY_WEIGHT: f64 = 0.3;
const SKILLS_WEIGHT: f64 = 0.5;
const EXPERIENCE_WEIGHT: f64 = 0.2;

/// Résumés scoring below this ATS overall are not matched at all.
pub const MIN_ATS_FOR_MATCHING: f64 = 0.2;
/// Matches below this score are dropped from the output.
pub const MIN_MATCH_SCORE: f64 = 0.4;

const EXPERIENCE_FALLBACK: f64 = 0.5;

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchLevel {
    #[serde(rename = "Excellent Match")]
    Excellent,
    #[serde(rename = "Good Match")]
    Good,
    #[serde(rename = "Moderate Match")]
    Moderate,
    #[serde(rename = "Poor Match")]
    Poor,
}

impl MatchLevel {
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 0.8 => MatchLevel::Excellent,
            s if s >= 0.6 => MatchLevel::Good,
            s if s >= 0.4 => MatchLevel::Moderate,
            _ => MatchLevel::Poor,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchLevel::Excellent => "Excellent Match",
            MatchLevel::Good => "Good Match",
            MatchLevel::Moderate => "Moderate Match",
            MatchLevel::Poor => "Poor Match",
        }
    }
}

impl fmt::Display for MatchLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One job scored against one resume.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub job: JobProfile,
    pub match_score: f64,
    pub similarity_score: f64,
    pub skills_match_score: f64,
    pub experience_match_score: f64,
    pub match_percentage: f64,
    pub match_level: MatchLevel,
}

impl MatchResult {
    fn new(job: JobProfile, similarity: f64, skills: f64, experience: f64) -> Self {
        let match_score =
            SIMILARITY_WEIGHT * similarity + SKILLS_WEIGHT * skills + EXPERIENCE_WEIGHT * experience;
        Self {
            job,
            match_score,
            similarity_score: similarity,
            skills_match_score: skills,
            experience_match_score: experience,
            match_percentage: percentage(match_score),
            match_level: MatchLevel::from_score(match_score),
        }
    }
}

/// `score * 100` rounded to one decimal.
pub fn percentage(score: f64) -> f64 {
    (score * 1000.0).round() / 10.0
}

// ────────────────────────────────────────────────────────────────────────────
// JobMatcher
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct JobMatcher {
    scorer: AtsScorer,
}

impl JobMatcher {
    pub fn new(scorer: AtsScorer) -> Self {
        Self { scorer }
    }

    pub fn scorer(&self) -> &AtsScorer {
        &self.scorer
    }

    /// Scores and ranks `jobs` for `resume`. `limit` of `None` keeps every qualifying match.
    pub fn find_matching_jobs(
        &self,
        resume: &ResumeProfile,
        jobs: &[JobProfile],
        limit: Option<usize>,
    ) -> Vec<MatchResult> {
        if resume.embedding.is_empty() {
            warn!("No embedding found for resume");
            return Vec::new();
        }
        let ats = self.scorer.calculate_ats_score(resume);
        self.rank_qualified(resume, &ats, jobs, limit)
    }

    /// Same as [`find_matching_jobs`](Self::find_matching_jobs) for a resume whose ATS
    /// breakdown is already known.
    pub fn rank_qualified(
        &self,
        resume: &ResumeProfile,
        ats: &ScoreBreakdown,
        jobs: &[JobProfile],
        limit: Option<usize>,
    ) -> Vec<MatchResult> {
        if resume.embedding.is_empty() {
            warn!("No embedding found for resume");
            return Vec::new();
        }
        if ats.overall_score < MIN_ATS_FOR_MATCHING {
            warn!(
                "Candidate not qualified for job matching - ATS Score: {:.3}, Grade: {}",
                ats.overall_score, ats.ats_grade
            );
            return Vec::new();
        }

        debug!(
            jobs = jobs.len(),
            embedding_len = resume.embedding.len(),
            "Scoring candidate jobs"
        );

        let mut matches: Vec<MatchResult> = jobs
            .iter()
            .filter(|job| {
                if job.embedding.is_empty() {
                    debug!(job_title = %job.job_title, "Job has no embedding, skipping");
                    false
                } else {
                    true
                }
            })
            .map(|job| self.score_job(resume, job))
            .collect();

        matches.sort_by(|a, b| {
            b.match_score
                .partial_cmp(&a.match_score)
                .unwrap_or(Ordering::Equal)
        });
        matches.retain(|m| m.match_score >= MIN_MATCH_SCORE);
        if let Some(limit) = limit {
            matches.truncate(limit);
        }

        if matches.is_empty() {
            info!("No job matches met the minimum quality threshold (40%)");
            return matches;
        }

        info!("Found {} matching jobs for resume", matches.len());
        for (i, m) in matches.iter().enumerate() {
            info!(
                "  Match {}: {} - {}% ({}) skills {:.2}, similarity {:.2}, experience {:.2}",
                i + 1,
                m.job.job_title,
                m.match_percentage,
                m.match_level,
                m.skills_match_score,
                m.similarity_score,
                m.experience_match_score
            );
        }
        matches
    }

    fn score_job(&self, resume: &ResumeProfile, job: &JobProfile) -> MatchResult {
        let similarity = enhanced_semantic_similarity(
            &resume.embedding,
            &job.embedding,
            &resume.full_text,
            &job.job_text,
        );
        let skills = job_skills_match(&resume.skills, &job.required_skills);
        let experience = match job_experience_match(&resume.full_text, &job.job_title, &job.job_text)
        {
            Ok(score) => score,
            Err(e) => {
                warn!("Error calculating job experience match: {e}");
                EXPERIENCE_FALLBACK
            }
        };

        debug!(
            job_title = %job.job_title,
            similarity,
            skills,
            experience,
            "Scored job"
        );
        MatchResult::new(job.clone(), similarity, skills, experience)
    }
}
