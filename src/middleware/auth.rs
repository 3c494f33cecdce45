use axum::{
    extract::{Request, State},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Json, Response},
};

use crate::auth::{verify_token, Claims};
use crate::error::ApiError;
use crate::state::AppState;

/// Paths served without a token. Matched against the exact request path only.
const PUBLIC_PATHS: &[&str] = &["/api/form/auth"];

/// Authenticated user context extracted from a verified token
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub username: String,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            username: claims.username,
        }
    }
}

/// Token gate applied over the whole API: every request outside PUBLIC_PATHS
/// must carry a verifiable token before any handler runs.
pub async fn require_token(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, impl IntoResponse> {
    if PUBLIC_PATHS.contains(&request.uri().path()) {
        return Ok::<_, (StatusCode, Json<serde_json::Value>)>(next.run(request).await);
    }

    // Extract the token from the Authorization header
    let token = extract_token_from_headers(&headers).map_err(|msg| {
        let api_error = ApiError::unauthorized(msg);
        (
            StatusCode::from_u16(api_error.status_code()).unwrap(),
            Json(api_error.to_json()),
        )
    })?;

    // Verify signature and expiry
    let claims = verify_token(&token, &state.config.auth.jwt_secret).map_err(|err| {
        tracing::debug!("Token rejected: {}", err);
        let api_error = ApiError::unauthorized("Invalid token");
        (
            StatusCode::from_u16(api_error.status_code()).unwrap(),
            Json(api_error.to_json()),
        )
    })?;

    // Convert claims to AuthUser and inject into request
    let auth_user = AuthUser::from(claims);
    request.extensions_mut().insert(auth_user);

    Ok(next.run(request).await)
}

/// Extract the token from the Authorization header.
///
/// The segment after the first space is taken verbatim; the scheme itself is
/// not checked, so any "<scheme> <token>" value yields the token part.
fn extract_token_from_headers(headers: &HeaderMap) -> Result<String, &'static str> {
    let auth_header = headers.get("authorization").ok_or("No token provided")?;

    let auth_str = auth_header.to_str().map_err(|_| "Invalid token")?;

    auth_str
        .split(' ')
        .nth(1)
        .filter(|token| !token.is_empty())
        .map(|token| token.to_string())
        .ok_or("Invalid token")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_auth(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_missing_header_reports_no_token() {
        let headers = HeaderMap::new();

        assert_eq!(
            extract_token_from_headers(&headers),
            Err("No token provided")
        );
    }

    #[test]
    fn test_token_is_the_segment_after_the_first_space() {
        let headers = headers_with_auth("Bearer abc.def.ghi");

        assert_eq!(extract_token_from_headers(&headers).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn test_scheme_is_not_validated() {
        let headers = headers_with_auth("Token abc.def.ghi");

        assert_eq!(extract_token_from_headers(&headers).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn test_header_without_space_is_invalid() {
        let headers = headers_with_auth("abc.def.ghi");

        assert_eq!(extract_token_from_headers(&headers), Err("Invalid token"));
    }

    #[test]
    fn test_scheme_with_empty_token_is_invalid() {
        let headers = headers_with_auth("Bearer ");

        assert_eq!(extract_token_from_headers(&headers), Err("Invalid token"));
    }

    #[test]
    fn test_public_paths_match_exactly() {
        assert!(PUBLIC_PATHS.contains(&"/api/form/auth"));
        assert!(!PUBLIC_PATHS.contains(&"/api/form/auth/"));
        assert!(!PUBLIC_PATHS.contains(&"/api/form/authx"));
        assert!(!PUBLIC_PATHS.contains(&"/"));
    }
}
