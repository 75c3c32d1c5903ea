//! Shared error types for the services crate.

use thiserror::Error;

use storage::StorageError;
use storage::sqlite::SqliteInitError;

/// Why the question pool could not be loaded.
///
/// Fatal to the quiz: no block can be started until the app is relaunched.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error("could not read the question file: {0}")]
    Source(#[from] StorageError),
    #[error("no valid questions found")]
    NoValidQuestions,
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
}
