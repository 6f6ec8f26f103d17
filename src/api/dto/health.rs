//! DTOs for the health check endpoint.

use serde::Serialize;

/// Service health information.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
