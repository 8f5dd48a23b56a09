//! Matching — the request-scoped pipeline: raw résumé text → candidate
//! profile → per-job scores → ranked top matches.

pub mod extractor;
pub mod handlers;
pub mod ingest;
pub mod scoring;

use std::sync::Arc;

use tracing::info;

use crate::catalog::JobCatalog;
use crate::embedding::Embedder;
use crate::errors::AppError;
use crate::matching::extractor::ProfileExtractor;
use crate::matching::scoring::{rank_jobs, JobMatch, ScoringWeights};

/// Résumés shorter than this are rejected with an explanatory message
/// rather than scored against noise.
pub const MIN_RESUME_TEXT_LEN: usize = 30;

/// How many ranked matches a response carries.
pub const TOP_MATCHES: usize = 5;

/// The matching pipeline: extractor, catalog, embedder, and weights bound
/// together at startup. Immutable afterwards, so concurrent requests share
/// one instance with no locking.
pub struct Matcher {
    extractor: ProfileExtractor,
    catalog: JobCatalog,
    embedder: Arc<dyn Embedder>,
    weights: ScoringWeights,
}

impl Matcher {
    pub fn new(catalog: JobCatalog, embedder: Arc<dyn Embedder>) -> Self {
        Self {
            extractor: ProfileExtractor::default(),
            catalog,
            embedder,
            weights: ScoringWeights::default(),
        }
    }

    pub fn catalog(&self) -> &JobCatalog {
        &self.catalog
    }

    pub fn embedder_name(&self) -> &'static str {
        self.embedder.name()
    }

    /// Scores the résumé against every posting and returns the top matches.
    /// The résumé embedding is computed fresh per call; job embeddings were
    /// precomputed at startup.
    pub async fn analyze(&self, text: &str) -> Result<Vec<JobMatch>, AppError> {
        let text = text.trim();
        if text.len() < MIN_RESUME_TEXT_LEN {
            return Err(AppError::TextTooShort);
        }

        info!("Analyzing resume text ({} chars)", text.len());

        let profile = self.extractor.extract(text);
        let resume_embedding = self.embedder.embed(text).await?;

        let mut ranked = rank_jobs(&profile, &resume_embedding, &self.catalog, &self.weights);
        ranked.truncate(TOP_MATCHES);

        if let Some(top) = ranked.first() {
            info!("Top match: {} ({}%)", top.title, top.final_score);
        }

        Ok(ranked)
    }
}
