use std::sync::Arc;

use crate::config::Config;
use crate::jobs::{InMemoryJobStore, JobSource};
use crate::nlp::{Embedder, PseudoEmbedder, TextFeatureExtractor};
use crate::scoring::{AtsScorer, JobMatcher};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub extractor: TextFeatureExtractor,
    /// Pluggable embedder. Default: PseudoEmbedder.
    pub embedder: Arc<dyn Embedder>,
    pub matcher: Arc<JobMatcher>,
    /// Job storage for listing and search.
    pub jobs: Arc<InMemoryJobStore>,
    /// The same store seen through the matcher's candidate-job seam.
    pub job_source: Arc<dyn JobSource>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let jobs = Arc::new(InMemoryJobStore::new());
        Self {
            config,
            extractor: TextFeatureExtractor::new(),
            embedder: Arc::new(PseudoEmbedder::new()),
            matcher: Arc::new(JobMatcher::new(AtsScorer::new())),
            job_source: jobs.clone(),
            jobs,
        }
    }
}
