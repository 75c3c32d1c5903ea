#![forbid(unsafe_code)]

pub mod repository;
pub mod source;
pub mod sqlite;

pub use repository::{InMemoryRepository, PreferenceRepository, Storage, StorageError};
pub use source::{FileQuestionSource, InMemoryQuestionSource, QuestionSource};
