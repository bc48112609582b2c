//! DTO for the health check endpoint.

use serde::Serialize;

/// Fixed liveness payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
