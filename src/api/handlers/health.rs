//! Handler for the health check endpoint.

use axum::Json;

use crate::api::dto::health::HealthResponse;

/// Returns service liveness and version.
///
/// Database connectivity is established (and migrations applied) before the
/// server starts accepting traffic, so this endpoint stays dependency-free.
///
/// # Endpoint
///
/// `GET /health`
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
