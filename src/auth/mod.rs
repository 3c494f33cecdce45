use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub username: String,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn new(username: String, expiry_secs: i64) -> Self {
        let now = Utc::now();
        let exp = (now + Duration::seconds(expiry_secs)).timestamp();

        Self {
            username,
            exp,
            iat: now.timestamp(),
        }
    }
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Token signing failed: {0}")]
    Signing(jsonwebtoken::errors::Error),

    #[error("Token verification failed: {0}")]
    Verification(jsonwebtoken::errors::Error),
}

/// Sign claims into a compact HS256 token.
pub fn issue_token(claims: &Claims, secret: &str) -> Result<String, TokenError> {
    let encoding_key = EncodingKey::from_secret(secret.as_bytes());

    encode(&Header::default(), claims, &encoding_key).map_err(TokenError::Signing)
}

/// Verify signature and expiry. Expiry is exact: no clock leeway.
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, TokenError> {
    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let mut validation = Validation::default();
    validation.leeway = 0;

    decode::<Claims>(token, &decoding_key, &validation)
        .map(|data| data.claims)
        .map_err(TokenError::Verification)
}
