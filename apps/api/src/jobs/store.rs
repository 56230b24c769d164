use std::cmp::Ordering;
use std::collections::{BTreeSet, HashSet};

use async_trait::async_trait;
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::info;

use crate::jobs::JobSource;
use crate::models::{JobPosting, JobProfile};
use crate::scoring::similarity::cosine_similarity;

/// A posting that shares at least one skill with a search.
#[derive(Debug, Clone, Serialize)]
pub struct SkillSearchHit {
    #[serde(flatten)]
    pub job: JobPosting,
    pub matching_skills: Vec<String>,
    pub match_score: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SimilarJob {
    #[serde(flatten)]
    pub job: JobPosting,
    pub similarity_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobStats {
    pub total_jobs: usize,
    pub jobs_with_embeddings: usize,
    pub locations: Vec<String>,
    pub job_types: Vec<String>,
}

/// Process-local job storage. Postings are kept newest first; inserting an existing
/// `job_id` replaces the old posting.
#[derive(Debug, Default)]
pub struct InMemoryJobStore {
    jobs: RwLock<Vec<JobPosting>>,
}

impl InMemoryJobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, posting: JobPosting) {
        let mut jobs = self.jobs.write().await;
        jobs.retain(|j| j.job_id != posting.job_id);
        jobs.insert(0, posting);
    }

    pub async fn insert_many(&self, postings: Vec<JobPosting>) {
        let count = postings.len();
        for posting in postings {
            self.insert(posting).await;
        }
        info!("Stored {count} job postings");
    }

    pub async fn count(&self) -> usize {
        self.jobs.read().await.len()
    }

    pub async fn get(&self, job_id: &str) -> Option<JobPosting> {
        self.jobs
            .read()
            .await
            .iter()
            .find(|j| j.job_id == job_id)
            .cloned()
    }

    pub async fn list(&self, limit: usize) -> Vec<JobPosting> {
        self.jobs.read().await.iter().take(limit).cloned().collect()
    }

    /// Jobs whose extracted skills overlap `skills`, scored by the share of the query
    /// they cover. Matching is exact on the stored strings.
    pub async fn search_by_skills(&self, skills: &[String], limit: usize) -> Vec<SkillSearchHit> {
        let query: BTreeSet<&str> = skills.iter().map(String::as_str).collect();
        if query.is_empty() {
            return Vec::new();
        }

        let mut hits: Vec<SkillSearchHit> = self
            .jobs
            .read()
            .await
            .iter()
            .filter_map(|job| {
                let job_skills: BTreeSet<&str> = job.skills.iter().map(String::as_str).collect();
                let matching: Vec<String> = query
                    .intersection(&job_skills)
                    .map(|s| s.to_string())
                    .collect();
                if matching.is_empty() {
                    return None;
                }
                Some(SkillSearchHit {
                    match_score: matching.len() as f64 / query.len() as f64,
                    matching_skills: matching,
                    job: job.clone(),
                })
            })
            .collect();

        hits.sort_by(|a, b| {
            b.match_score
                .partial_cmp(&a.match_score)
                .unwrap_or(Ordering::Equal)
        });
        hits.truncate(limit);
        hits
    }

    /// Jobs ranked by cosine similarity to `embedding`.
    pub async fn find_similar(&self, embedding: &[f32], limit: usize) -> Vec<SimilarJob> {
        let mut similar: Vec<SimilarJob> = self
            .jobs
            .read()
            .await
            .iter()
            .filter(|job| !job.embedding.is_empty())
            .map(|job| SimilarJob {
                similarity_score: cosine_similarity(embedding, &job.embedding),
                job: job.clone(),
            })
            .collect();

        similar.sort_by(|a, b| {
            b.similarity_score
                .partial_cmp(&a.similarity_score)
                .unwrap_or(Ordering::Equal)
        });
        similar.truncate(limit);
        similar
    }

    pub async fn stats(&self) -> JobStats {
        let jobs = self.jobs.read().await;

        let mut seen_locations = HashSet::new();
        let mut seen_types = HashSet::new();
        let locations = jobs
            .iter()
            .filter_map(|j| j.location.clone())
            .filter(|l| !l.is_empty() && seen_locations.insert(l.clone()))
            .collect();
        let job_types = jobs
            .iter()
            .filter_map(|j| j.job_type.clone())
            .filter(|t| !t.is_empty() && seen_types.insert(t.clone()))
            .collect();

        JobStats {
            total_jobs: jobs.len(),
            jobs_with_embeddings: jobs.iter().filter(|j| !j.embedding.is_empty()).count(),
            locations,
            job_types,
        }
    }
}

#[async_trait]
impl JobSource for InMemoryJobStore {
    async fn candidate_jobs(&self, limit: usize) -> Vec<JobProfile> {
        self.jobs
            .read()
            .await
            .iter()
            .filter(|job| !job.embedding.is_empty())
            .take(limit)
            .map(JobProfile::from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posting(id: &str, skills: &[&str], embedding: Vec<f32>) -> JobPosting {
        JobPosting {
            job_id: id.to_string(),
            title: format!("Job {id}"),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            embedding,
            ..JobPosting::default()
        }
    }

    #[tokio::test]
    async fn test_insert_is_newest_first_and_replaces() {
        let store = InMemoryJobStore::new();
        store.insert(posting("a", &[], vec![])).await;
        store.insert(posting("b", &[], vec![])).await;
        let mut replacement = posting("a", &[], vec![]);
        replacement.title = "Replaced".to_string();
        store.insert(replacement).await;

        let ids: Vec<String> = store.list(10).await.into_iter().map(|j| j.job_id).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(store.get("a").await.unwrap().title, "Replaced");
        assert_eq!(store.count().await, 2);
    }

    #[tokio::test]
    async fn test_get_missing_is_none() {
        assert!(InMemoryJobStore::new().get("nope").await.is_none());
    }

    #[tokio::test]
    async fn test_candidate_jobs_skip_unembedded_and_respect_limit() {
        let store = InMemoryJobStore::new();
        store.insert(posting("a", &[], vec![0.1])).await;
        store.insert(posting("b", &[], vec![])).await;
        store.insert(posting("c", &[], vec![0.2])).await;
        store.insert(posting("d", &[], vec![0.3])).await;

        let jobs = store.candidate_jobs(2).await;
        let titles: Vec<&str> = jobs.iter().map(|j| j.job_title.as_str()).collect();
        assert_eq!(titles, vec!["Job d", "Job c"]);
    }

    #[tokio::test]
    async fn test_search_by_skills_scores_query_coverage() {
        let store = InMemoryJobStore::new();
        store.insert(posting("a", &["Python", "SQL"], vec![])).await;
        store.insert(posting("b", &["Python"], vec![])).await;
        store.insert(posting("c", &["Go"], vec![])).await;

        let query = vec!["Python".to_string(), "SQL".to_string()];
        let hits = store.search_by_skills(&query, 50).await;
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].job.job_id, "a");
        assert_eq!(hits[0].match_score, 1.0);
        assert_eq!(hits[1].match_score, 0.5);
        assert_eq!(hits[1].matching_skills, vec!["Python"]);
    }

    #[tokio::test]
    async fn test_find_similar_orders_by_cosine() {
        let store = InMemoryJobStore::new();
        store.insert(posting("near", &[], vec![1.0, 0.1])).await;
        store.insert(posting("far", &[], vec![0.0, 1.0])).await;
        store.insert(posting("none", &[], vec![])).await;

        let similar = store.find_similar(&[1.0, 0.0], 10).await;
        assert_eq!(similar.len(), 2);
        assert_eq!(similar[0].job.job_id, "near");
        assert!(similar[0].similarity_score > similar[1].similarity_score);
    }

    #[tokio::test]
    async fn test_stats() {
        let store = InMemoryJobStore::new();
        let mut a = posting("a", &[], vec![0.1]);
        a.location = Some("Berlin".into());
        a.job_type = Some("Full-time".into());
        let mut b = posting("b", &[], vec![]);
        b.location = Some("Berlin".into());
        b.job_type = Some(String::new());
        store.insert_many(vec![a, b]).await;

        let stats = store.stats().await;
        assert_eq!(stats.total_jobs, 2);
        assert_eq!(stats.jobs_with_embeddings, 1);
        assert_eq!(stats.locations, vec!["Berlin"]);
        assert_eq!(stats.job_types, vec!["Full-time"]);
    }

    #[test]
    fn test_skill_hit_serializes_flat() {
        let hit = SkillSearchHit {
            job: posting("a", &["Rust"], vec![0.5]),
            matching_skills: vec!["Rust".into()],
            match_score: 1.0,
        };
        let json = serde_json::to_value(&hit).unwrap();
        assert_eq!(json["job_id"], "a");
        assert_eq!(json["match_score"], 1.0);
        assert!(json.get("embedding").is_none());
    }
}
