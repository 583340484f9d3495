//! Health check endpoint handler.

use crate::models::HealthResponse;
use actix_web::web;

/// Health check endpoint
///
/// Returns the current health status of the sandbox. Usable by load
/// balancers and monitoring probes.
pub async fn health() -> web::Json<HealthResponse> {
    web::Json(HealthResponse {
        status: "healthy".to_string(),
    })
}
