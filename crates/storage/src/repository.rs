use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

use crate::source::{InMemoryQuestionSource, QuestionSource};

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("io error: {0}")]
    Io(String),
}

/// String key/value store for small UI preferences.
#[async_trait]
pub trait PreferenceRepository: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn get_preference(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be stored.
    async fn set_preference(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    preferences: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            preferences: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl PreferenceRepository for InMemoryRepository {
    async fn get_preference(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .preferences
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    async fn set_preference(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self
            .preferences
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Aggregates the question source and preference store behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub questions: Arc<dyn QuestionSource>,
    pub preferences: Arc<dyn PreferenceRepository>,
}

impl Storage {
    #[must_use]
    pub fn new(
        questions: Arc<dyn QuestionSource>,
        preferences: Arc<dyn PreferenceRepository>,
    ) -> Self {
        Self {
            questions,
            preferences,
        }
    }

    /// Fully in-memory storage serving `questions_text` as the question file.
    #[must_use]
    pub fn in_memory(questions_text: impl Into<String>) -> Self {
        let questions: Arc<dyn QuestionSource> =
            Arc::new(InMemoryQuestionSource::new(questions_text));
        let preferences: Arc<dyn PreferenceRepository> = Arc::new(InMemoryRepository::new());
        Self {
            questions,
            preferences,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn round_trips_preference() {
        let repo = InMemoryRepository::new();
        assert_eq!(repo.get_preference("quiz-theme").await.unwrap(), None);

        repo.set_preference("quiz-theme", "dark").await.unwrap();
        repo.set_preference("quiz-theme", "light").await.unwrap();

        assert_eq!(
            repo.get_preference("quiz-theme").await.unwrap().as_deref(),
            Some("light")
        );
    }

    #[tokio::test]
    async fn in_memory_storage_shares_one_preference_store() {
        let storage = Storage::in_memory("Question,A\n");
        let clone = storage.clone();
        storage.preferences.set_preference("k", "v").await.unwrap();
        assert_eq!(
            clone.preferences.get_preference("k").await.unwrap().as_deref(),
            Some("v")
        );
    }
}
