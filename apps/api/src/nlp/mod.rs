// Text feature layer: regex entity extraction and deterministic pseudo-embeddings.
// Nothing here is learned; both collaborators are pure functions of their input text.

pub mod embedder;
pub mod extractor;
pub mod vocab;

pub use embedder::{EmbeddingResult, PseudoEmbedder};
pub use extractor::{ExtractedEntities, TextFeatureExtractor};

/// Produces a fixed-length vector for a piece of text.
///
/// Carried in `AppState` as `Arc<dyn Embedder>` so a real model can replace the
/// pseudo-embedder without touching handlers or scorers.
pub trait Embedder: Send + Sync {
    fn embed(&self, text: &str) -> EmbeddingResult;
}
