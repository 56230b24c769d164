use axum::{
    extract::{Multipart, Path, Query, State},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, IngestError};
use crate::jobs::{parse_job_feed, FeedReport, JobStats, SimilarJob, SkillSearchHit};
use crate::models::JobPosting;
use crate::routes::read_upload;
use crate::state::AppState;

const DEFAULT_LIST_LIMIT: usize = 100;
const DEFAULT_SKILL_SEARCH_LIMIT: usize = 50;
const DEFAULT_SIMILAR_LIMIT: usize = 10;

#[derive(Deserialize)]
pub struct ListQuery {
    pub limit: Option<usize>,
}

#[derive(Deserialize)]
pub struct SkillSearchRequest {
    pub skills: Option<Vec<String>>,
    pub limit: Option<usize>,
}

#[derive(Deserialize)]
pub struct SimilarRequest {
    pub embedding: Option<Vec<f32>>,
    pub limit: Option<usize>,
}

#[derive(Serialize)]
pub struct FeedResponse {
    pub message: &'static str,
    #[serde(flatten)]
    pub report: FeedReport,
}

#[derive(Serialize)]
pub struct JobListResponse {
    pub message: &'static str,
    pub jobs: Vec<JobPosting>,
    pub count: usize,
}

#[derive(Serialize)]
pub struct JobResponse {
    pub message: &'static str,
    pub job: JobPosting,
}

#[derive(Serialize)]
pub struct SkillSearchResponse {
    pub message: &'static str,
    pub searched_skills: Vec<String>,
    pub results: Vec<SkillSearchHit>,
    pub count: usize,
}

#[derive(Serialize)]
pub struct SimilarResponse {
    pub message: &'static str,
    pub results: Vec<SimilarJob>,
    pub count: usize,
}

#[derive(Serialize)]
pub struct StatsResponse {
    pub message: &'static str,
    pub statistics: JobStats,
}

fn is_csv_filename(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false)
}

/// POST /jobs/feed
pub async fn handle_feed(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<FeedResponse>, AppError> {
    let (filename, data) = read_upload(multipart).await?;
    if !is_csv_filename(&filename) {
        return Err(IngestError::UnsupportedFileType(filename).into());
    }

    // Extraction and embedding for every row is CPU-bound.
    let extractor = state.extractor;
    let embedder = state.embedder.clone();
    let feed = tokio::task::spawn_blocking(move || {
        parse_job_feed(&data, &filename, &extractor, embedder.as_ref(), Utc::now())
    })
    .await
    .map_err(IngestError::from)??;

    state.jobs.insert_many(feed.postings).await;

    Ok(Json(FeedResponse {
        message: "Job feeding completed",
        report: feed.report,
    }))
}

/// GET /jobs
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Json<JobListResponse> {
    let jobs = state
        .jobs
        .list(params.limit.unwrap_or(DEFAULT_LIST_LIMIT))
        .await;
    Json(JobListResponse {
        message: "Jobs retrieved successfully",
        count: jobs.len(),
        jobs,
    })
}

/// GET /jobs/:job_id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Result<Json<JobResponse>, AppError> {
    let job = state
        .jobs
        .get(&job_id)
        .await
        .ok_or_else(|| AppError::NotFound("Job not found".to_string()))?;

    Ok(Json(JobResponse {
        message: "Job retrieved successfully",
        job,
    }))
}

/// POST /jobs/search/skills
pub async fn handle_search_skills(
    State(state): State<AppState>,
    Json(req): Json<SkillSearchRequest>,
) -> Result<Json<SkillSearchResponse>, AppError> {
    let skills = req
        .skills
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::Validation("Skills list required".to_string()))?;

    let results = state
        .jobs
        .search_by_skills(&skills, req.limit.unwrap_or(DEFAULT_SKILL_SEARCH_LIMIT))
        .await;

    Ok(Json(SkillSearchResponse {
        message: "Job skill search completed",
        searched_skills: skills,
        count: results.len(),
        results,
    }))
}

/// POST /jobs/search/similar
pub async fn handle_search_similar(
    State(state): State<AppState>,
    Json(req): Json<SimilarRequest>,
) -> Result<Json<SimilarResponse>, AppError> {
    let embedding = req
        .embedding
        .ok_or_else(|| AppError::Validation("Embedding required".to_string()))?;

    let results = state
        .jobs
        .find_similar(&embedding, req.limit.unwrap_or(DEFAULT_SIMILAR_LIMIT))
        .await;

    Ok(Json(SimilarResponse {
        message: "Similar job search completed",
        count: results.len(),
        results,
    }))
}

/// GET /jobs/stats
pub async fn handle_job_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse {
        message: "Job statistics retrieved successfully",
        statistics: state.jobs.stats().await,
    })
}
