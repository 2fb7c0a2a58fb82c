//! JSON file adapter for the question repository.
//!
//! The data file is a single JSON array of question records. Records in either
//! source encoding may appear in the same file; each element resolves
//! independently through the untagged [`RawRecord`] shape.

use async_trait::async_trait;
use quiz_core::normalize::RawRecord;
use std::path::{Path, PathBuf};

use crate::repository::{LoadError, QuestionRepository};

/// Repository backed by a static JSON data file, read once per fetch.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl QuestionRepository for JsonFileRepository {
    async fn fetch_records(&self) -> Result<Vec<RawRecord>, LoadError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| LoadError::Unavailable(e.to_string()))?;
        serde_json::from_slice(&bytes).map_err(|e| LoadError::Malformed(e.to_string()))
    }
}
