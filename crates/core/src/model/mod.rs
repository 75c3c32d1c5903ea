mod letter;
mod pool;
mod question;
mod summary;
mod theme;

pub use letter::{OptionLetter, ParseLetterError};
pub use pool::{BLOCK_SIZE, Block, MAX_BLOCKS, POOL_CAP, PoolError, QuestionPool};
pub use question::{
    ANSWER_COLUMN, EXPLANATION_COLUMN, QUESTION_COLUMN, QuestionRecord, RecordError,
};
pub use summary::BlockSummary;
pub use theme::{THEME_PREFERENCE_KEY, Theme};
