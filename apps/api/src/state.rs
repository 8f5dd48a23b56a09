use std::sync::Arc;

use crate::config::Config;
use crate::matching::Matcher;

/// Shared application state injected into all route handlers via Axum
/// extractors. The matcher bundles the immutable job catalog (with its
/// precomputed embeddings), the extractor vocabulary, and the embedding
/// backend, so requests share it read-only with no locking.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub matcher: Arc<Matcher>,
}
