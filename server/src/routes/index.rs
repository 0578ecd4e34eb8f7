use axum::Json;
use serde::Serialize;
use tracing::debug;

use super::APP_NAME;

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
    pub app: &'static str,
}

/// GET /
///
/// Liveness banner for humans poking at the server.
pub async fn index() -> Json<RootResponse> {
    debug!("GET / requested");
    Json(RootResponse {
        message: "Server is running!",
        app: APP_NAME,
    })
}
