//! Health check endpoints for Kubernetes-style probes.
//!
//! - `/livez` - Basic liveness probe (immediate 200, no checks)
//! - `/healthz` - Repository round-trip check

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::state::AppState;

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately. Used to check if the server is accepting
/// connections. Does NOT touch the backing table.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

/// GET /healthz - Repository health check.
///
/// Performs a list call against the backing table. Returns 200 with the
/// record count if it succeeds, 503 with the error otherwise.
#[axum::debug_handler]
pub async fn healthz(State(state): State<AppState>) -> Response {
    match state.users.list_usernames().await {
        Ok(records) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "healthy": true,
                "records": records.len(),
            })),
        )
            .into_response(),
        Err(err) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(serde_json::json!({
                "healthy": false,
                "error": err.to_string(),
            })),
        )
            .into_response(),
    }
}
