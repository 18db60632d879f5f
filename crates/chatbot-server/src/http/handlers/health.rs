//! Health handler.

use axum::{response::IntoResponse, Json};

use crate::http::responses::HealthResponse;

/// Health check endpoint.
pub async fn health_check() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}
