use std::sync::Arc;

use crate::config::AppConfig;
use crate::store::SubmissionStore;

/// Shared application state threaded through handlers and the token gate.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub store: Arc<dyn SubmissionStore>,
}

impl AppState {
    pub fn new(config: AppConfig, store: Arc<dyn SubmissionStore>) -> Self {
        Self { config, store }
    }
}
