use async_trait::async_trait;
use quiz_core::normalize::RawRecord;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced while loading the question source.
///
/// Both variants are terminal for the session: the load either completes or
/// the quiz never starts.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error("question source unavailable: {0}")]
    Unavailable(String),

    #[error("question source malformed: {0}")]
    Malformed(String),
}

/// Read-only source of raw question records.
///
/// Fetched once at startup, one-shot and best-effort: no retry, no timeout,
/// no cancellation semantics.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Fetch every raw record in source order.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if the source cannot be read or parsed.
    async fn fetch_records(&self) -> Result<Vec<RawRecord>, LoadError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    records: Arc<Mutex<Vec<RawRecord>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Builds a repository pre-filled with the given records.
    #[must_use]
    pub fn seeded(records: Vec<RawRecord>) -> Self {
        Self {
            records: Arc::new(Mutex::new(records)),
        }
    }

    /// Appends a record after the ones already present.
    pub fn push_record(&self, record: RawRecord) {
        if let Ok(mut guard) = self.records.lock() {
            guard.push(record);
        }
    }
}

#[async_trait]
impl QuestionRepository for InMemoryRepository {
    async fn fetch_records(&self) -> Result<Vec<RawRecord>, LoadError> {
        let guard = self
            .records
            .lock()
            .map_err(|e| LoadError::Unavailable(e.to_string()))?;
        Ok(guard.clone())
    }
}
