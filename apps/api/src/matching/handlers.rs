//! Axum route handlers for the Matching API.

use axum::{
    extract::{Multipart, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::catalog::JobPosting;
use crate::errors::AppError;
use crate::matching::ingest::extract_pdf_text;
use crate::matching::scoring::JobMatch;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeTextRequest {
    pub text: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct JobsQuery {
    pub role: Option<String>,
    pub location: Option<String>,
}

/// The response envelope shared by both analysis endpoints. A failed
/// analysis carries an explanatory message and an empty match list; it is
/// still a 200, never a crashed request.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub top_matches: Vec<JobMatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalyzeResponse {
    fn matches(top_matches: Vec<JobMatch>) -> Self {
        Self {
            top_matches,
            error: None,
        }
    }

    fn error(message: String) -> Self {
        Self {
            top_matches: vec![],
            error: Some(message),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/match/analyze-text
///
/// Scores already-extracted résumé text against the catalog.
pub async fn handle_analyze_text(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeTextRequest>,
) -> Json<AnalyzeResponse> {
    Json(analyze_to_envelope(&state, &request.text).await)
}

/// POST /api/v1/match/upload-resume
///
/// Accepts a multipart upload with a `file` part holding a PDF résumé,
/// extracts its text, and scores it against the catalog.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart payload: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        if !filename.to_lowercase().ends_with(".pdf") {
            return Ok(Json(AnalyzeResponse::error(
                "Please upload a valid PDF file".to_string(),
            )));
        }

        let data: bytes::Bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;

        let text = match extract_pdf_text(&data) {
            Ok(text) => text,
            Err(e) => return Ok(Json(AnalyzeResponse::error(e.to_string()))),
        };

        return Ok(Json(analyze_to_envelope(&state, &text).await));
    }

    Err(AppError::Validation(
        "Multipart payload is missing a 'file' part".to_string(),
    ))
}

/// GET /api/v1/jobs
///
/// Lists the catalog postings the service matches against, optionally
/// filtered by role (matches title or required skills) and location.
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    Query(params): Query<JobsQuery>,
) -> Json<Vec<JobPosting>> {
    let role = params.role.as_deref().map(str::to_lowercase);
    let location = params.location.as_deref().map(str::to_lowercase);

    let jobs = state
        .matcher
        .catalog()
        .postings()
        .filter(|job| match &role {
            Some(q) => {
                job.title.to_lowercase().contains(q)
                    || job
                        .required_skills
                        .iter()
                        .any(|s| s.to_lowercase().contains(q))
            }
            None => true,
        })
        .filter(|job| match &location {
            Some(q) => job.location.to_lowercase().contains(q),
            None => true,
        })
        .cloned()
        .collect();

    Json(jobs)
}

/// Runs the analysis and folds any failure into the response envelope.
/// A single bad résumé must never take the process down, so every error
/// becomes an empty match list plus its message.
async fn analyze_to_envelope(state: &AppState, text: &str) -> AnalyzeResponse {
    match state.matcher.analyze(text).await {
        Ok(top_matches) => AnalyzeResponse::matches(top_matches),
        Err(e) => {
            warn!("Resume analysis failed: {e}");
            AnalyzeResponse::error(e.to_string())
        }
    }
}
