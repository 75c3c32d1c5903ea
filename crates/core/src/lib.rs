#![forbid(unsafe_code)]

pub mod model;
pub mod parser;
pub mod session;

pub use model::{
    BLOCK_SIZE, Block, BlockSummary, MAX_BLOCKS, OptionLetter, POOL_CAP, PoolError,
    QuestionPool, QuestionRecord, RecordError, Theme, THEME_PREFERENCE_KEY,
};
pub use parser::{RawRecord, parse_records, split_line};
pub use session::{
    AnswerFeedback, BlockChoice, OptionOutcome, OptionView, QuestionScreen, QuizSession,
    Screen, SessionPhase, SessionState, Transition, TransitionError, Trigger, transition,
};
