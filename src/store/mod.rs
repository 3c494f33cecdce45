use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use tokio::sync::RwLock;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Submission store unavailable: {0}")]
    Unavailable(String),
}

/// Append-only storage for submitted form payloads.
///
/// Handlers only see this trait, so a persistence-backed store can replace
/// the in-memory one without touching them.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    /// Store a payload and return the id assigned to it.
    async fn append(&self, payload: Value) -> Result<u64, StoreError>;

    /// All stored payloads in insertion order.
    async fn list(&self) -> Result<Vec<Value>, StoreError>;
}

/// Process-local store: an unbounded list plus an id counter.
///
/// Ids start at 1 and are not attached to the stored record; they are only
/// reported back to the submitter.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Debug)]
struct Inner {
    submissions: Vec<Value>,
    next_id: u64,
}

impl Default for Inner {
    fn default() -> Self {
        Self {
            submissions: Vec::new(),
            next_id: 1,
        }
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SubmissionStore for MemoryStore {
    async fn append(&self, payload: Value) -> Result<u64, StoreError> {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.submissions.push(payload);
        inner.next_id += 1;

        Ok(id)
    }

    async fn list(&self) -> Result<Vec<Value>, StoreError> {
        let inner = self.inner.read().await;

        Ok(inner.submissions.clone())
    }
}
