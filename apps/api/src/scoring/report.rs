//! Full analysis of one resume: ATS breakdown, ranked matches, and advice.

use serde::Serialize;

use crate::models::{JobProfile, ResumeProfile};
use crate::scoring::ats::{AtsGrade, ScoreBreakdown};
use crate::scoring::matcher::{JobMatcher, MatchResult};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AtsSummary {
    pub ats_score: f64,
    pub ats_grade: AtsGrade,
    pub total_matching_jobs: usize,
    /// Percentage of the best match, 0 when nothing matched.
    pub top_match_score: f64,
    pub top_job_title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AtsAnalysis {
    pub ats_scores: ScoreBreakdown,
    pub matching_jobs: Vec<MatchResult>,
    pub recommendations: Vec<String>,
    pub summary: AtsSummary,
}

/// Scores `resume`, matches it against every qualifying job (no limit) and builds advice.
pub fn process_resume_with_ats(
    matcher: &JobMatcher,
    resume: &ResumeProfile,
    jobs: &[JobProfile],
) -> AtsAnalysis {
    let ats_scores = matcher.scorer().calculate_ats_score(resume);
    let matching_jobs = matcher.rank_qualified(resume, &ats_scores, jobs, None);
    let recommendations = recommendations(&ats_scores, &matching_jobs);

    let top = matching_jobs.first();
    let summary = AtsSummary {
        ats_score: ats_scores.overall_score,
        ats_grade: ats_scores.ats_grade,
        total_matching_jobs: matching_jobs.len(),
        top_match_score: top.map_or(0.0, |m| m.match_percentage),
        top_job_title: top.map(|m| m.job.job_title.clone()),
    };

    AtsAnalysis {
        ats_scores,
        matching_jobs,
        recommendations,
        summary,
    }
}

pub fn recommendations(scores: &ScoreBreakdown, matches: &[MatchResult]) -> Vec<String> {
    let mut advice = Vec::new();

    if scores.format_score < 0.7 {
        advice.push(
            "Improve resume format: Add clear sections (Summary, Experience, Education, Skills)",
        );
    }
    if scores.skills_score < 0.6 {
        advice.push("Add more technical skills relevant to your target roles");
    }
    if scores.experience_score < 0.4 {
        advice.push("Quantify your experience with specific achievements and metrics");
    }
    if scores.education_score < 0.5 {
        advice.push("Highlight your education and any relevant certifications");
    }
    if scores.keyword_score < 0.6 {
        advice.push("Optimize keyword density with industry-specific terms");
    }

    match matches.first() {
        None => advice.push("Consider expanding your skill set to match more job opportunities"),
        Some(top) if top.match_score < 0.6 => {
            advice.push("Focus on skills mentioned in top matching job descriptions")
        }
        Some(_) => {}
    }

    advice.into_iter().map(String::from).collect()
}
