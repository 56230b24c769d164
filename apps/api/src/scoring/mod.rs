// Scoring engine: ATS quality, resume/job similarity and job ranking.
// Everything here is synchronous and free of shared mutable state.

pub mod ats;
pub mod experience_match;
pub mod matcher;
pub mod report;
pub mod similarity;
pub mod skills_match;
pub mod taxonomy;

pub use ats::{AtsGrade, AtsScorer, ScoreBreakdown};
pub use matcher::{JobMatcher, MatchLevel, MatchResult};
pub use report::{process_resume_with_ats, AtsAnalysis, AtsSummary};

/// Internal failure inside one scoring factor. Never escapes the scorers; it is logged
/// and replaced by that factor's fallback.
#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    #[error("heuristic pattern failed to compile: {0}")]
    Pattern(#[from] regex::Error),

    #[error("non-finite {0} score")]
    NonFinite(&'static str),
}
