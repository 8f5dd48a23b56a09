use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status, the embedding backend in use, and the number of
/// jobs indexed at startup.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "jobmatch-api",
        "embedder": state.matcher.embedder_name(),
        "jobs_indexed": state.matcher.catalog().len()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{builtin_jobs, JobCatalog};
    use crate::config::Config;
    use crate::embedding::{Embedder, HashEmbedder};
    use crate::matching::Matcher;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_health_reports_jobs_indexed() {
        let embedder: Arc<dyn Embedder> = Arc::new(HashEmbedder::default());
        let catalog = JobCatalog::build(embedder.as_ref(), builtin_jobs())
            .await
            .unwrap();
        let state = AppState {
            config: Config::for_tests(),
            matcher: Arc::new(Matcher::new(catalog, embedder)),
        };

        let Json(body) = health_handler(State(state)).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["jobs_indexed"], 20);
        assert_eq!(body["embedder"], "hash");
    }
}
