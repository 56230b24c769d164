use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::ResumeProfile;
use crate::resume::extract_pdf_text;
use crate::routes::read_upload;
use crate::scoring::{process_resume_with_ats, AtsAnalysis, MatchResult, ScoreBreakdown};
use crate::state::AppState;

const DEFAULT_MATCH_LIMIT: usize = 10;

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    pub resume_text: Option<String>,
}

#[derive(Deserialize)]
pub struct ResumeDataRequest {
    pub resume_data: Option<ResumeProfile>,
    pub limit: Option<usize>,
}

#[derive(Serialize)]
pub struct UploadResponse {
    pub message: &'static str,
    pub filename: String,
    pub ats_analysis: AtsAnalysis,
}

#[derive(Serialize)]
pub struct AnalyzeResponse {
    pub message: &'static str,
    pub ats_analysis: AtsAnalysis,
}

#[derive(Serialize)]
pub struct ScoreResponse {
    pub message: &'static str,
    pub ats_scores: ScoreBreakdown,
}

#[derive(Serialize)]
pub struct MatchResponse {
    pub message: &'static str,
    pub matching_jobs: Vec<MatchResult>,
    pub count: usize,
}

/// Builds a profile from raw text and runs the full analysis against stored jobs.
async fn analyze_text(state: &AppState, text: &str) -> AtsAnalysis {
    let profile = ResumeProfile::from_text(text, &state.extractor, state.embedder.as_ref());
    let jobs = state
        .job_source
        .candidate_jobs(state.config.job_fetch_limit)
        .await;
    let analysis = process_resume_with_ats(&state.matcher, &profile, &jobs);

    info!(
        skills = profile.skills.len(),
        ats_score = analysis.summary.ats_score,
        matches = analysis.summary.total_matching_jobs,
        "Analysed resume"
    );
    analysis
}

/// POST /upload-pdf
pub async fn handle_upload_pdf(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let (filename, data) = read_upload(multipart).await?;
    let text = extract_pdf_text(&filename, data).await?;
    let ats_analysis = analyze_text(&state, &text).await;

    Ok(Json(UploadResponse {
        message: "Resume processed successfully with ATS analysis",
        filename,
        ats_analysis,
    }))
}

/// POST /ats/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let text = req
        .resume_text
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| AppError::Validation("Resume text required".to_string()))?;

    Ok(Json(AnalyzeResponse {
        message: "ATS analysis completed",
        ats_analysis: analyze_text(&state, &text).await,
    }))
}

/// POST /ats/score
pub async fn handle_score(
    State(state): State<AppState>,
    Json(req): Json<ResumeDataRequest>,
) -> Result<Json<ScoreResponse>, AppError> {
    let resume = req
        .resume_data
        .ok_or_else(|| AppError::Validation("Resume data required".to_string()))?;

    Ok(Json(ScoreResponse {
        message: "ATS score calculated",
        ats_scores: state.matcher.scorer().calculate_ats_score(&resume),
    }))
}

/// POST /ats/match-jobs
pub async fn handle_match_jobs(
    State(state): State<AppState>,
    Json(req): Json<ResumeDataRequest>,
) -> Result<Json<MatchResponse>, AppError> {
    let resume = req
        .resume_data
        .ok_or_else(|| AppError::Validation("Resume data required".to_string()))?;
    let limit = req.limit.unwrap_or(DEFAULT_MATCH_LIMIT);

    let jobs = state
        .job_source
        .candidate_jobs(state.config.job_fetch_limit)
        .await;
    let matching_jobs = state
        .matcher
        .find_matching_jobs(&resume, &jobs, Some(limit));

    Ok(Json(MatchResponse {
        message: "Job matching completed",
        count: matching_jobs.len(),
        matching_jobs,
    }))
}
