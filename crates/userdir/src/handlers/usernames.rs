//! Username directory handlers.
//!
//! Both handlers go through the repository trait object on `AppState`;
//! the backing table is never touched directly.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use userdir_core::user::{is_falsy, UserRecord};

use crate::{handlers::AppError, models::CreateUsername, state::AppState};

/// List all usernames (GET /api/usernames).
///
/// Scans the backing table and returns the stored username values as a
/// JSON array. No ordering guarantee and no page continuation.
pub async fn list_usernames(
    State(state): State<AppState>,
) -> Result<Json<Vec<serde_json::Value>>, AppError> {
    let records = state.users.list_usernames().await?;
    let usernames: Vec<serde_json::Value> =
        records.into_iter().map(|record| record.username).collect();

    tracing::debug!(count = usernames.len(), "Listed usernames");

    Ok(Json(usernames))
}

/// Create a username (POST /api/usernames).
///
/// Upserts the record; a second create with the same value overwrites it.
/// Malformed JSON bodies are rejected by the `Json` extractor before this
/// logic runs.
pub async fn create_username(
    State(state): State<AppState>,
    Json(payload): Json<CreateUsername>,
) -> Result<impl IntoResponse, AppError> {
    let username = match payload.username {
        Some(value) if !is_falsy(&value) => value,
        _ => {
            tracing::warn!("Rejected create request without a username");
            return Ok((
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({
                    "error": "Missing required parameters: username"
                })),
            )
                .into_response());
        }
    };

    let record = UserRecord { username };
    state.users.put_username(&record).await?;

    tracing::info!(username = %record.key(), "Inserted username");

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({
            "message": "Data inserted successfully"
        })),
    )
        .into_response())
}
