// Job postings: CSV feed ingestion and the in-memory store the matcher reads from.

pub mod csv_feed;
pub mod store;

use async_trait::async_trait;

use crate::models::JobProfile;

pub use csv_feed::{parse_job_feed, FeedReport, ParsedFeed};
pub use store::{InMemoryJobStore, JobStats, SimilarJob, SkillSearchHit};

/// Where the matcher gets its candidate jobs from.
///
/// Carried in `AppState` as `Arc<dyn JobSource>` so handlers never depend on a concrete store.
#[async_trait]
pub trait JobSource: Send + Sync {
    /// Up to `limit` jobs that carry an embedding, newest first.
    async fn candidate_jobs(&self, limit: usize) -> Vec<JobProfile>;
}
