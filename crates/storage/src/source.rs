use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::repository::StorageError;

/// Provides the raw text of the question file.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Read the whole source as text.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if the source does not exist and
    /// `StorageError::Io` for other read or decode failures.
    async fn load_text(&self) -> Result<String, StorageError>;

    /// Human readable location, used in logs.
    fn describe(&self) -> String;
}

/// Reads questions from a file on disk.
#[derive(Debug, Clone)]
pub struct FileQuestionSource {
    path: PathBuf,
}

impl FileQuestionSource {
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
impl QuestionSource for FileQuestionSource {
    async fn load_text(&self) -> Result<String, StorageError> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|err| {
            if err.kind() == std::io::ErrorKind::NotFound {
                StorageError::NotFound
            } else {
                StorageError::Io(err.to_string())
            }
        })?;
        tracing::debug!(path = %self.path.display(), bytes = bytes.len(), "read question file");
        String::from_utf8(bytes).map_err(|err| StorageError::Serialization(err.to_string()))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Serves a fixed string; used by tests and demos.
#[derive(Debug, Clone, Default)]
pub struct InMemoryQuestionSource {
    text: String,
}

impl InMemoryQuestionSource {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait]
impl QuestionSource for InMemoryQuestionSource {
    async fn load_text(&self) -> Result<String, StorageError> {
        Ok(self.text.clone())
    }

    fn describe(&self) -> String {
        "in-memory".to_string()
    }
}
