mod config;
mod errors;
mod jobs;
mod models;
mod nlp;
mod patterns;
mod resume;
mod routes;
mod scoring;
mod state;

use anyhow::{Context, Result};
use chrono::Utc;
use std::net::SocketAddr;
use std::path::Path;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::errors::IngestError;
use crate::jobs::parse_job_feed;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ATS API v{}", env!("CARGO_PKG_VERSION"));

    let state = AppState::new(config.clone());
    info!(
        "Job matcher initialized (fetch limit {}, upload limit {} MB)",
        config.job_fetch_limit, config.max_upload_mb
    );

    if let Some(path) = &config.jobs_csv {
        preload_jobs(&state, path)
            .await
            .with_context(|| format!("failed to load job feed {}", path.display()))?;
    }

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Reads a CSV feed from disk into the job store before the server accepts requests.
async fn preload_jobs(state: &AppState, path: &Path) -> Result<(), IngestError> {
    let data = tokio::fs::read(path).await?;
    let source_file = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let extractor = state.extractor;
    let embedder = state.embedder.clone();
    let feed = tokio::task::spawn_blocking(move || {
        parse_job_feed(&data, &source_file, &extractor, embedder.as_ref(), Utc::now())
    })
    .await??;

    info!(
        source = %feed.report.source_file,
        processed = feed.report.jobs_processed,
        failed = feed.report.jobs_failed,
        "Preloaded job feed"
    );
    state.jobs.insert_many(feed.postings).await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[tokio::test]
    async fn test_preload_jobs_from_disk() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "job_title;employer;city").unwrap();
        writeln!(file, "Backend Engineer;Acme;Berlin").unwrap();
        writeln!(file, ";Nobody;Nowhere").unwrap();

        let state = AppState::new(Config::default());
        preload_jobs(&state, file.path()).await.unwrap();

        assert_eq!(state.jobs.count().await, 1);
        let job = &state.jobs.list(1).await[0];
        assert_eq!(job.title, "Backend Engineer");
        assert_eq!(job.location.as_deref(), Some("Berlin"));
    }

    #[tokio::test]
    async fn test_preload_missing_file_is_io_error() {
        let state = AppState::new(Config::default());
        let err = preload_jobs(&state, Path::new("/nonexistent/jobs.csv"))
            .await
            .unwrap_err();
        assert!(matches!(err, IngestError::Io(_)));
    }
}
