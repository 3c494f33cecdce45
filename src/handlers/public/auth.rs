use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};

use crate::auth::{issue_token, Claims};
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AuthRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub message: &'static str,
    pub token: String,
}

/// POST /api/form/auth - validate credentials and issue a signed token
pub async fn authenticate(
    State(state): State<AppState>,
    Json(payload): Json<AuthRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let auth = &state.config.auth;

    if !credentials_match(&payload, &auth.username, &auth.password) {
        tracing::info!(username = %payload.username, "Rejected credentials");
        return Err(ApiError::unauthorized("Invalid credentials"));
    }

    let claims = Claims::new(payload.username, auth.jwt_expiry_secs);
    let token = issue_token(&claims, &auth.jwt_secret)?;

    tracing::info!(username = %claims.username, "Issued token");

    Ok(Json(AuthResponse {
        message: "Authenticated successfully",
        token,
    }))
}

/// Plain string comparison against the configured reference values.
fn credentials_match(payload: &AuthRequest, username: &str, password: &str) -> bool {
    payload.username == username && payload.password == password
}
