use std::sync::Arc;

use quiz_core::model::{PoolError, QuestionPool};
use quiz_core::parser::parse_records;
use storage::QuestionSource;

use crate::error::LoadError;

/// Counts gathered while building the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    /// Data lines read from the source.
    pub parsed: usize,
    /// Lines that failed validation.
    pub dropped: usize,
    /// Questions kept in the pool after capping.
    pub kept: usize,
}

impl LoadReport {
    /// Valid questions that did not fit under the pool cap.
    #[must_use]
    pub fn over_cap(&self) -> usize {
        self.parsed - self.dropped - self.kept
    }
}

/// Reads the question source once and turns it into a pool.
#[derive(Clone)]
pub struct QuizLoader {
    source: Arc<dyn QuestionSource>,
}

impl QuizLoader {
    #[must_use]
    pub fn new(source: Arc<dyn QuestionSource>) -> Self {
        Self { source }
    }

    /// Fetch, parse, validate and cap the questions.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Source` if the source cannot be read and
    /// `LoadError::NoValidQuestions` if nothing survives validation.
    pub async fn load(&self) -> Result<QuestionPool, LoadError> {
        self.load_with_report().await.map(|(pool, _)| pool)
    }

    /// Same as `load`, also returning the counts.
    ///
    /// # Errors
    ///
    /// See `load`.
    pub async fn load_with_report(&self) -> Result<(QuestionPool, LoadReport), LoadError> {
        let location = self.source.describe();
        let text = self.source.load_text().await.map_err(|err| {
            tracing::error!(source = %location, error = %err, "failed to read questions");
            LoadError::from(err)
        })?;

        let records = parse_records(&text);
        let (pool, dropped) = QuestionPool::from_records(&records).map_err(|_: PoolError| {
            tracing::error!(source = %location, parsed = records.len(), "no valid questions");
            LoadError::NoValidQuestions
        })?;

        let report = LoadReport {
            parsed: records.len(),
            dropped,
            kept: pool.len(),
        };
        if report.dropped > 0 {
            tracing::debug!(dropped = report.dropped, "skipped invalid question lines");
        }
        tracing::info!(
            source = %location,
            parsed = report.parsed,
            kept = report.kept,
            over_cap = report.over_cap(),
            blocks = pool.block_count(),
            "questions loaded"
        );
        Ok((pool, report))
    }
}
