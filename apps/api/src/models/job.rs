use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored job posting, as produced by CSV ingestion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobPosting {
    pub job_id: String,
    pub title: String,
    pub company: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub requirements: Option<String>,
    /// description + requirements, the text every heuristic runs over.
    pub full_text: String,
    pub skills: Vec<String>,
    pub keywords: Vec<String>,
    #[serde(skip_serializing, default)]
    pub embedding: Vec<f32>,
    pub embedding_dimension: usize,
    pub embedding_model: String,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    pub job_type: Option<String>,
    pub experience_level: Option<String>,
    pub posted_date: Option<String>,
    pub source_file: String,
    pub created_at: DateTime<Utc>,
}
