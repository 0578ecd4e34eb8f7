use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use tracing::info;

use super::APP_NAME;

pub const SERVICE_VERSION: &str = "0.0.1";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub service: &'static str,
    pub version: &'static str,
}

/// GET /health
///
/// Returns the service name and version. Always 200.
pub async fn health() -> (StatusCode, Json<HealthResponse>) {
    info!("Health check requested");
    (
        StatusCode::OK,
        Json(HealthResponse {
            service: APP_NAME,
            version: SERVICE_VERSION,
        }),
    )
}
