//! Deterministic pseudo-embeddings.
//!
//! A fixed-length vector built from text statistics, a stable content hash and a PRNG
//! seeded from that hash. Identical text always yields a bit-identical vector, across
//! runs and processes.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use xxhash_rust::{xxh3::xxh3_128, xxh64::xxh64};

use crate::nlp::vocab::{EMBEDDING_CHARS, EMBEDDING_COMMON_WORDS, EMBEDDING_SKILL_INDICATORS};
use crate::nlp::Embedder;

pub const EMBEDDING_DIMENSION: usize = 384;
pub const MODEL_NAME: &str = "all-MiniLM-L6-v2";
const RANDOM_FEATURES: usize = 50;
const SEED_SALT: u64 = 0x5eed;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingResult {
    pub embedding: Vec<f32>,
    pub dimension: usize,
    pub model: String,
    pub note: String,
}

#[derive(Debug, Clone)]
pub struct PseudoEmbedder {
    dimension: usize,
}

impl Default for PseudoEmbedder {
    fn default() -> Self {
        Self {
            dimension: EMBEDDING_DIMENSION,
        }
    }
}

impl PseudoEmbedder {
    pub fn new() -> Self {
        Self::default()
    }

    fn features(&self, text: &str) -> Vec<f32> {
        let text = text.to_lowercase();
        let text = text.trim();
        let words: Vec<&str> = text.split_whitespace().collect();

        let mut features = Vec::with_capacity(self.dimension);

        features.push(text.chars().count() as f32 / 10_000.0);
        features.push(words.len() as f32 / 1_000.0);

        for c in EMBEDDING_CHARS {
            features.push(text.matches(*c).count() as f32 / 1_000.0);
        }

        for common in EMBEDDING_COMMON_WORDS {
            let count = words.iter().filter(|w| **w == *common).count();
            features.push(count as f32 / 100.0);
        }

        let digest = xxh3_128(text.as_bytes()).to_be_bytes();
        features.extend(digest.iter().map(|b| *b as f32 / 255.0));

        for skill in EMBEDDING_SKILL_INDICATORS {
            features.push(if text.contains(skill) { 1.0 } else { 0.0 });
        }

        let mut rng = ChaCha8Rng::seed_from_u64(xxh64(text.as_bytes(), SEED_SALT));
        features.extend((0..RANDOM_FEATURES).map(|_| rng.gen::<f32>()));

        features.resize(self.dimension, 0.0);

        let total: f32 = features.iter().map(|x| x.abs()).sum();
        if total > 0.0 {
            for x in features.iter_mut() {
                *x /= total;
            }
        }
        features
    }
}

impl Embedder for PseudoEmbedder {
    fn embed(&self, text: &str) -> EmbeddingResult {
        if text.trim().is_empty() {
            return EmbeddingResult {
                embedding: Vec::new(),
                dimension: 0,
                model: MODEL_NAME.to_string(),
                note: "Empty text provided".to_string(),
            };
        }

        let embedding = self.features(text);
        EmbeddingResult {
            dimension: embedding.len(),
            embedding,
            model: format!("{MODEL_NAME}_fallback"),
            note: "Using fallback hash-based embedding".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_text_has_no_embedding() {
        let result = PseudoEmbedder::new().embed("   \n ");
        assert!(result.embedding.is_empty());
        assert_eq!(result.dimension, 0);
    }

    #[test]
    fn test_embedding_has_fixed_dimension() {
        let result = PseudoEmbedder::new().embed("Rust engineer with Kubernetes experience");
        assert_eq!(result.embedding.len(), EMBEDDING_DIMENSION);
        assert_eq!(result.dimension, EMBEDDING_DIMENSION);
        assert_eq!(result.model, "all-MiniLM-L6-v2_fallback");
    }

    #[test]
    fn test_embedding_is_deterministic() {
        let embedder = PseudoEmbedder::new();
        let a = embedder.embed("Python developer, 5 years of experience");
        let b = embedder.embed("Python developer, 5 years of experience");
        assert_eq!(a, b);
    }

    #[test]
    fn test_case_and_outer_whitespace_are_normalized() {
        let embedder = PseudoEmbedder::new();
        let a = embedder.embed("  Data Engineer ");
        let b = embedder.embed("data engineer");
        assert_eq!(a.embedding, b.embedding);
    }

    #[test]
    fn test_different_text_differs() {
        let embedder = PseudoEmbedder::new();
        let a = embedder.embed("frontend react developer");
        let b = embedder.embed("backend java developer");
        assert_ne!(a.embedding, b.embedding);
    }

    #[test]
    fn test_embedding_is_l1_normalized() {
        let result = PseudoEmbedder::new().embed("cloud architect aws docker");
        let total: f32 = result.embedding.iter().map(|x| x.abs()).sum();
        assert!((total - 1.0).abs() < 1e-4, "L1 norm was {total}");
    }

    #[test]
    fn test_padding_is_zero() {
        let result = PseudoEmbedder::new().embed("sql");
        assert!(result.embedding[120..].iter().all(|x| *x == 0.0));
    }

    #[test]
    fn test_random_block_is_chacha_seeded_from_text_hash() {
        let text = "rust backend engineer";
        let embedding = PseudoEmbedder::new().embed(text).embedding;
        let offset = 2
            + EMBEDDING_CHARS.len()
            + EMBEDDING_COMMON_WORDS.len()
            + 16
            + EMBEDDING_SKILL_INDICATORS.len();

        let mut rng = ChaCha8Rng::seed_from_u64(xxh64(text.as_bytes(), SEED_SALT));
        let expected: Vec<f32> = (0..RANDOM_FEATURES).map(|_| rng.gen::<f32>()).collect();

        // normalization scales every feature by the same factor
        let scale = embedding[offset] / expected[0];
        for (i, value) in expected.iter().enumerate() {
            assert!((embedding[offset + i] - value * scale).abs() < 1e-6);
        }
    }
}
