use std::collections::HashSet;

use serde::{Deserialize, Deserializer, Serialize};

use crate::models::job::JobPosting;
use crate::nlp::{Embedder, TextFeatureExtractor};

/// A resume as seen by the scoring engine for one pass.
///
/// Every field defaults to empty so partially-populated payloads still score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeProfile {
    pub full_text: String,
    #[serde(deserialize_with = "dedup_strings")]
    pub skills: Vec<String>,
    #[serde(deserialize_with = "dedup_strings")]
    pub keywords: Vec<String>,
    pub embedding: Vec<f32>,
}

impl ResumeProfile {
    pub fn new(
        full_text: impl Into<String>,
        skills: Vec<String>,
        keywords: Vec<String>,
        embedding: Vec<f32>,
    ) -> Self {
        Self {
            full_text: full_text.into(),
            skills: dedup_preserving_order(skills),
            keywords: dedup_preserving_order(keywords),
            embedding,
        }
    }

    /// Runs extraction and embedding over raw resume text.
    pub fn from_text(
        text: &str,
        extractor: &TextFeatureExtractor,
        embedder: &dyn Embedder,
    ) -> Self {
        let entities = extractor.extract(text);
        let embedding = embedder.embed(text).embedding;
        Self::new(text, entities.skills, entities.keywords, embedding)
    }
}

/// A job posting as seen by the scoring engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobProfile {
    pub job_title: String,
    pub job_text: String,
    pub required_skills: Vec<String>,
    #[serde(skip_serializing)]
    pub embedding: Vec<f32>,
}

impl From<&JobPosting> for JobProfile {
    fn from(posting: &JobPosting) -> Self {
        Self {
            job_title: posting.title.clone(),
            job_text: posting.full_text.clone(),
            required_skills: posting.skills.clone(),
            embedding: posting.embedding.clone(),
        }
    }
}

pub fn dedup_preserving_order(values: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|v| seen.insert(v.clone()))
        .collect()
}

fn dedup_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Vec::<String>::deserialize(deserializer)?;
    Ok(dedup_preserving_order(values))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let profile: ResumeProfile = serde_json::from_str("{}").unwrap();
        assert!(profile.full_text.is_empty());
        assert!(profile.skills.is_empty());
        assert!(profile.embedding.is_empty());
    }

    #[test]
    fn test_deserialized_skills_are_deduplicated() {
        let profile: ResumeProfile =
            serde_json::from_str(r#"{"skills": ["Python", "SQL", "Python"]}"#).unwrap();
        assert_eq!(profile.skills, vec!["Python", "SQL"]);
    }

    #[test]
    fn test_new_deduplicates_keywords() {
        let profile = ResumeProfile::new(
            "text",
            vec![],
            vec!["cloud".into(), "cloud".into(), "team".into()],
            vec![],
        );
        assert_eq!(profile.keywords, vec!["cloud", "team"]);
    }

    #[test]
    fn test_job_profile_from_posting() {
        let posting = JobPosting {
            title: "Backend Engineer".to_string(),
            full_text: "Build APIs in Rust".to_string(),
            skills: vec!["Rust".to_string()],
            embedding: vec![0.5, 0.5],
            ..JobPosting::default()
        };
        let job = JobProfile::from(&posting);
        assert_eq!(job.job_title, "Backend Engineer");
        assert_eq!(job.job_text, "Build APIs in Rust");
        assert_eq!(job.required_skills, vec!["Rust"]);
        assert_eq!(job.embedding.len(), 2);
    }
}
