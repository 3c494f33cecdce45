use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;

/// Token lifetime applied when JWT_EXPIRY_SECS is unset.
pub const DEFAULT_JWT_EXPIRY_SECS: i64 = 3600;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    pub username: String,
    pub password: String,
    pub jwt_secret: String,
    pub jwt_expiry_secs: i64,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {var}: {value}")]
    InvalidVar { var: &'static str, value: String },
}

impl AppConfig {
    /// Load configuration from the environment.
    ///
    /// Credentials and the signing secret carry no defaults: an unset
    /// expected credential must never be matchable, so startup fails instead.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            auth: AuthConfig::from_env()?,
        })
    }
}

impl AuthConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let username = require_var("AUTH_USERNAME")?;
        let password = require_var("AUTH_PASSWORD")?;
        let jwt_secret = require_var("JWT_SECRET")?;

        let jwt_expiry_secs = match env::var("JWT_EXPIRY_SECS") {
            Ok(v) => v.parse().map_err(|_| ConfigError::InvalidVar {
                var: "JWT_EXPIRY_SECS",
                value: v,
            })?,
            Err(_) => DEFAULT_JWT_EXPIRY_SECS,
        };

        Ok(Self {
            username,
            password,
            jwt_secret,
            jwt_expiry_secs,
        })
    }
}

fn require_var(name: &'static str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(v) if !v.is_empty() => Ok(v),
        _ => Err(ConfigError::MissingVar(name)),
    }
}
