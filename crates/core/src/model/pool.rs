use std::ops::Range;
use std::sync::Arc;

use thiserror::Error;

use crate::model::QuestionRecord;
use crate::parser::RawRecord;

/// Maximum number of questions kept from a source.
pub const POOL_CAP: usize = 100;

/// Number of questions in one block.
pub const BLOCK_SIZE: usize = 25;

/// Number of block slots a full pool offers.
pub const MAX_BLOCKS: usize = POOL_CAP / BLOCK_SIZE;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PoolError {
    #[error("no valid questions")]
    Empty,
}

/// Ordered, validated question set shared by every block.
///
/// Never empty and never longer than `POOL_CAP`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionPool {
    questions: Arc<[QuestionRecord]>,
}

impl QuestionPool {
    /// Build a pool from validated questions, keeping the first `POOL_CAP`.
    ///
    /// # Errors
    ///
    /// Returns `PoolError::Empty` if there are no questions.
    pub fn new(questions: impl IntoIterator<Item = QuestionRecord>) -> Result<Self, PoolError> {
        let questions: Vec<_> = questions.into_iter().take(POOL_CAP).collect();
        if questions.is_empty() {
            return Err(PoolError::Empty);
        }
        Ok(Self {
            questions: questions.into(),
        })
    }

    /// Keep the records that validate, in order, and build a pool.
    ///
    /// Returns the pool along with the number of records that were dropped.
    ///
    /// # Errors
    ///
    /// Returns `PoolError::Empty` if no record validates.
    pub fn from_records(records: &[RawRecord]) -> Result<(Self, usize), PoolError> {
        let valid: Vec<_> = records
            .iter()
            .filter_map(|record| QuestionRecord::from_raw(record).ok())
            .collect();
        let dropped = records.len() - valid.len();
        Ok((Self::new(valid)?, dropped))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn questions(&self) -> &[QuestionRecord] {
        &self.questions
    }

    /// Number of non-empty blocks.
    #[must_use]
    pub fn block_count(&self) -> usize {
        self.len().div_ceil(BLOCK_SIZE)
    }

    /// Index range covered by block `index`, clipped to the pool.
    #[must_use]
    pub fn block_range(&self, index: usize) -> Range<usize> {
        let start = index.saturating_mul(BLOCK_SIZE).min(self.len());
        let end = start.saturating_add(BLOCK_SIZE).min(self.len());
        start..end
    }

    /// The block at `index`, or `None` if its slice is empty.
    #[must_use]
    pub fn block(&self, index: usize) -> Option<Block> {
        let range = self.block_range(index);
        if range.is_empty() {
            return None;
        }
        Some(Block {
            index,
            range,
            pool: self.clone(),
        })
    }
}

/// A non-empty contiguous slice of the pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    index: usize,
    range: Range<usize>,
    pool: QuestionPool,
}

impl Block {
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Pool positions covered by this block.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.range.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    #[must_use]
    pub fn questions(&self) -> &[QuestionRecord] {
        &self.pool.questions()[self.range.clone()]
    }

    #[must_use]
    pub fn get(&self, position: usize) -> Option<&QuestionRecord> {
        self.questions().get(position)
    }

    #[must_use]
    pub fn last_position(&self) -> usize {
        self.len().saturating_sub(1)
    }
}
