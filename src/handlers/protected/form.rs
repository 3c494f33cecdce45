use axum::{extract::State, response::Json, Extension};
use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub message: &'static str,
    pub data: Value,
    #[serde(rename = "submissionId")]
    pub submission_id: u64,
}

#[derive(Debug, Serialize)]
pub struct SubmissionsResponse {
    pub message: &'static str,
    pub submissions: Vec<Value>,
}

/// POST /api/form/submit - store the payload as-is and report its id
pub async fn submit(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<Value>,
) -> Result<Json<SubmitResponse>, ApiError> {
    let submission_id = state.store.append(payload.clone()).await?;

    tracing::info!(username = %user.username, submission_id, "Stored form submission");

    Ok(Json(SubmitResponse {
        message: "Form submitted successfully",
        data: payload,
        submission_id,
    }))
}

/// GET /api/form/submissions - every stored payload in insertion order
pub async fn submissions(
    State(state): State<AppState>,
) -> Result<Json<SubmissionsResponse>, ApiError> {
    let submissions = state.store.list().await?;

    Ok(Json(SubmissionsResponse {
        message: "All form submissions",
        submissions,
    }))
}
