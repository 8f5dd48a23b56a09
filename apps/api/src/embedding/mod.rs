//! Embedding boundary — turns free text into fixed-length vectors.
//!
//! ARCHITECTURAL RULE: scoring never talks to an embedding backend directly.
//! It receives plain `Vec<f32>` vectors; the backend behind them is chosen
//! once at startup and carried in `AppState` as `Arc<dyn Embedder>`.
//!
//! Default: `HashEmbedder` (deterministic feature hashing, no model download).
//! Optional: `HttpEmbedder` (remote embedding service, set EMBEDDING_SERVICE_URL).

use async_trait::async_trait;
use thiserror::Error;

pub mod hash;
pub mod remote;

pub use hash::HashEmbedder;
pub use remote::HttpEmbedder;

#[derive(Debug, Error)]
pub enum EmbedError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Embedding API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Embedding service unavailable after {retries} retries")]
    Unavailable { retries: u32 },

    #[error("Embedding service returned an empty vector")]
    EmptyEmbedding,
}

/// The embedder trait. Implement this to swap backends without touching
/// the catalog, scorer, or handler code.
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Short backend label, surfaced in /health.
    fn name(&self) -> &'static str;

    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbedError>;
}

/// Cosine similarity in [-1, 1]. Dimension mismatches and zero vectors
/// score 0 rather than erroring; a mismatch also logs a warning since it
/// means two different embedder backends produced the vectors.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        tracing::warn!(
            a_len = a.len(),
            b_len = b.len(),
            "embedding dimension mismatch; returning zero similarity"
        );
        return 0.0;
    }

    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}
