//! Axum router configuration for TOPSIS endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{evaluate_matrix, export_result, health, submit_analysis, TopsisAppState};

/// Create the TOPSIS API router.
///
/// # Routes
/// - `POST /submit` - Multipart upload, result displayed or e-mailed
/// - `POST /evaluate` - JSON table, result displayed
/// - `POST /export` - JSON table, result downloaded as CSV
pub fn topsis_routes() -> Router<TopsisAppState> {
    Router::new()
        .route("/submit", post(submit_analysis))
        .route("/evaluate", post(evaluate_matrix))
        .route("/export", post(export_result))
}

/// Create the complete TOPSIS module router.
///
/// Mounts the API under `/api/topsis` and the liveness check at `/health`.
pub fn topsis_router() -> Router<TopsisAppState> {
    Router::new()
        .route("/health", get(health))
        .nest("/api/topsis", topsis_routes())
}
