/// Result of a finished block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockSummary {
    block_index: usize,
    score: u32,
    total: u32,
}

impl BlockSummary {
    /// `score` is clamped to `total`.
    #[must_use]
    pub fn new(block_index: usize, score: u32, total: u32) -> Self {
        Self {
            block_index,
            score: score.min(total),
            total,
        }
    }

    #[must_use]
    pub fn block_index(&self) -> usize {
        self.block_index
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn wrong(&self) -> u32 {
        self.total - self.score
    }

    /// Percentage of correct answers, rounded half away from zero.
    #[must_use]
    pub fn accuracy(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        // score <= total, so the result fits in 0..=100
        let percent = f64::from(self.score) / f64::from(self.total) * 100.0;
        percent.round() as u32
    }
}
