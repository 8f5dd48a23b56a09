pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::matching::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Matching API
        .route("/api/v1/jobs", get(handlers::handle_list_jobs))
        .route(
            "/api/v1/match/analyze-text",
            post(handlers::handle_analyze_text),
        )
        .route(
            "/api/v1/match/upload-resume",
            post(handlers::handle_upload_resume),
        )
        .with_state(state)
}
