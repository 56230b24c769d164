pub mod ats;
pub mod health;
pub mod jobs;

use axum::{
    extract::{multipart::MultipartError, DefaultBodyLimit, Multipart},
    http::StatusCode,
    routing::{get, post},
    Router,
};
use bytes::Bytes;

use crate::errors::AppError;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes();

    Router::new()
        .route("/health", get(health::health_handler))
        // Resume analysis
        .route("/upload-pdf", post(ats::handle_upload_pdf))
        .route("/ats/analyze", post(ats::handle_analyze))
        .route("/ats/score", post(ats::handle_score))
        .route("/ats/match-jobs", post(ats::handle_match_jobs))
        // Job postings
        .route("/jobs", get(jobs::handle_list_jobs))
        .route("/jobs/feed", post(jobs::handle_feed))
        .route("/jobs/stats", get(jobs::handle_job_stats))
        .route("/jobs/search/skills", post(jobs::handle_search_skills))
        .route("/jobs/search/similar", post(jobs::handle_search_similar))
        .route("/jobs/:job_id", get(jobs::handle_get_job))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(e.body_text())
    } else {
        AppError::Validation(e.body_text())
    }
}

/// Reads the `file` field of a multipart upload. The returned name is stripped of any
/// client-side directory components.
pub(crate) async fn read_upload(mut multipart: Multipart) -> Result<(String, Bytes), AppError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field
            .file_name()
            .and_then(|name| name.rsplit(|c: char| c == '/' || c == '\\').next())
            .unwrap_or_default()
            .trim()
            .to_string();
        if filename.is_empty() {
            return Err(AppError::Validation("No file selected".to_string()));
        }

        let data = field.bytes().await.map_err(multipart_error)?;
        return Ok((filename, data));
    }

    Err(AppError::Validation("No file part in the request".to_string()))
}
