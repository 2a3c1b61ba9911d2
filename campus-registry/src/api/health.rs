//! Health Check API Handler
//!
//! Liveness endpoint for monitoring. Does not touch the database.

use axum::{http::StatusCode, response::IntoResponse};

/// GET /health
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
