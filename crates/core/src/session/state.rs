use std::fmt;

use thiserror::Error;

use crate::model::{Block, BlockSummary, OptionLetter, QuestionPool, QuestionRecord};

//
// ─── TRIGGERS & PHASES ─────────────────────────────────────────────────────────
//

/// The four user actions the quiz reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    StartBlock(usize),
    /// `None` when the user submits without picking an option.
    Submit(Option<OptionLetter>),
    Advance,
    Restart,
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trigger::StartBlock(index) => write!(f, "start block {index}"),
            Trigger::Submit(Some(letter)) => write!(f, "submit {letter}"),
            Trigger::Submit(None) => f.write_str("submit without selection"),
            Trigger::Advance => f.write_str("advance"),
            Trigger::Restart => f.write_str("restart"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    BlockSelect,
    QuestionActive,
    QuestionLocked,
    Summary,
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionPhase::BlockSelect => "block selection",
            SessionPhase::QuestionActive => "active question",
            SessionPhase::QuestionLocked => "locked question",
            SessionPhase::Summary => "summary",
        };
        f.write_str(name)
    }
}

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// A rejected trigger. The session is left untouched.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum TransitionError {
    #[error("block {index} has no questions")]
    InvalidBlockSelection { index: usize },

    #[error("an answer must be selected before submitting")]
    NoSelectionOnSubmit,

    #[error("the current question is already answered")]
    AnswerLocked,

    #[error("cannot {trigger} during {phase}")]
    InvalidTransition {
        phase: SessionPhase,
        trigger: Trigger,
    },
}

//
// ─── FEEDBACK ──────────────────────────────────────────────────────────────────
//

/// How a single option is marked once the question is locked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OptionOutcome {
    Correct,
    Incorrect,
    #[default]
    Neutral,
}

/// Outcome of submitting an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerFeedback {
    chosen: OptionLetter,
    correct: OptionLetter,
    explanation: Option<String>,
}

impl AnswerFeedback {
    fn for_question(question: &QuestionRecord, chosen: OptionLetter) -> Self {
        Self {
            chosen,
            correct: question.correct(),
            explanation: question.explanation().map(str::to_string),
        }
    }

    #[must_use]
    pub fn chosen(&self) -> OptionLetter {
        self.chosen
    }

    #[must_use]
    pub fn correct(&self) -> OptionLetter {
        self.correct
    }

    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.chosen == self.correct
    }

    #[must_use]
    pub fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref()
    }

    /// The correct option is always marked; a wrong pick is marked incorrect.
    #[must_use]
    pub fn outcome(&self, letter: OptionLetter) -> OptionOutcome {
        if letter == self.correct {
            OptionOutcome::Correct
        } else if letter == self.chosen {
            OptionOutcome::Incorrect
        } else {
            OptionOutcome::Neutral
        }
    }

    #[must_use]
    pub fn outcomes(&self) -> [OptionOutcome; 4] {
        OptionLetter::ALL.map(|letter| self.outcome(letter))
    }
}

//
// ─── BLOCK PROGRESS ────────────────────────────────────────────────────────────
//

/// Progress through the active block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    block: Block,
    current_index: usize,
    score: u32,
    answered_count: u32,
    locked: bool,
    feedback: Option<AnswerFeedback>,
}

impl SessionState {
    fn new(block: Block) -> Self {
        Self {
            block,
            current_index: 0,
            score: 0,
            answered_count: 0,
            locked: false,
            feedback: None,
        }
    }

    #[must_use]
    pub fn block(&self) -> &Block {
        &self.block
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn answered_count(&self) -> u32 {
        self.answered_count
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    #[must_use]
    pub fn feedback(&self) -> Option<&AnswerFeedback> {
        self.feedback.as_ref()
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&QuestionRecord> {
        self.block.get(self.current_index)
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.current_index >= self.block.last_position()
    }

    fn summary(&self) -> BlockSummary {
        let total = u32::try_from(self.block.len()).unwrap_or(u32::MAX);
        BlockSummary::new(self.block.index(), self.score, total)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Stage {
    BlockSelect,
    InBlock(SessionState),
    Summary(BlockSummary),
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// The quiz controller: a loaded pool plus where the user is in it.
///
/// Every operation either applies fully or returns a `TransitionError` and
/// leaves the session as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    pool: QuestionPool,
    stage: Stage,
}

impl QuizSession {
    #[must_use]
    pub fn new(pool: QuestionPool) -> Self {
        Self {
            pool,
            stage: Stage::BlockSelect,
        }
    }

    #[must_use]
    pub fn pool(&self) -> &QuestionPool {
        &self.pool
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        match &self.stage {
            Stage::BlockSelect => SessionPhase::BlockSelect,
            Stage::InBlock(state) if state.locked => SessionPhase::QuestionLocked,
            Stage::InBlock(_) => SessionPhase::QuestionActive,
            Stage::Summary(_) => SessionPhase::Summary,
        }
    }

    /// Progress through the active block, if one is running.
    #[must_use]
    pub fn state(&self) -> Option<&SessionState> {
        match &self.stage {
            Stage::InBlock(state) => Some(state),
            _ => None,
        }
    }

    #[must_use]
    pub fn summary(&self) -> Option<&BlockSummary> {
        match &self.stage {
            Stage::Summary(summary) => Some(summary),
            _ => None,
        }
    }

    /// Dispatch a trigger to the matching operation.
    ///
    /// # Errors
    ///
    /// Returns the `TransitionError` of the rejected operation.
    pub fn apply(&mut self, trigger: Trigger) -> Result<(), TransitionError> {
        match trigger {
            Trigger::StartBlock(index) => self.start_block(index),
            Trigger::Submit(letter) => self.submit_answer(letter).map(|_| ()),
            Trigger::Advance => self.advance().map(|_| ()),
            Trigger::Restart => {
                self.restart();
                Ok(())
            }
        }
    }

    /// Start block `index` from the block selection or a finished block.
    ///
    /// # Errors
    ///
    /// Returns `TransitionError::InvalidBlockSelection` if the block has no questions,
    /// or `TransitionError::InvalidTransition` while a block is in progress.
    pub fn start_block(&mut self, index: usize) -> Result<(), TransitionError> {
        if matches!(self.stage, Stage::InBlock(_)) {
            return Err(self.invalid(Trigger::StartBlock(index)));
        }
        let block = self
            .pool
            .block(index)
            .ok_or(TransitionError::InvalidBlockSelection { index })?;
        self.stage = Stage::InBlock(SessionState::new(block));
        Ok(())
    }

    /// Submit an answer for the current question and lock it.
    ///
    /// # Errors
    ///
    /// Returns `TransitionError::NoSelectionOnSubmit` when `letter` is `None`,
    /// `TransitionError::AnswerLocked` if the question was already answered, and
    /// `TransitionError::InvalidTransition` outside of a block.
    pub fn submit_answer(
        &mut self,
        letter: Option<OptionLetter>,
    ) -> Result<&AnswerFeedback, TransitionError> {
        let trigger = Trigger::Submit(letter);
        let phase = self.phase();
        let Stage::InBlock(state) = &mut self.stage else {
            return Err(TransitionError::InvalidTransition { phase, trigger });
        };
        if state.locked {
            return Err(TransitionError::AnswerLocked);
        }
        let chosen = letter.ok_or(TransitionError::NoSelectionOnSubmit)?;
        let question = state
            .current_question()
            .ok_or(TransitionError::InvalidTransition { phase, trigger })?;

        let feedback = AnswerFeedback::for_question(question, chosen);
        if feedback.is_correct() {
            state.score += 1;
        }
        state.answered_count += 1;
        state.locked = true;
        Ok(&*state.feedback.insert(feedback))
    }

    /// Move past a locked question; the last one leads to the summary.
    ///
    /// # Errors
    ///
    /// Returns `TransitionError::InvalidTransition` unless the current question is locked.
    pub fn advance(&mut self) -> Result<SessionPhase, TransitionError> {
        let invalid = self.invalid(Trigger::Advance);
        let Stage::InBlock(state) = &mut self.stage else {
            return Err(invalid);
        };
        if !state.locked {
            return Err(invalid);
        }

        if state.is_last() {
            let summary = state.summary();
            self.stage = Stage::Summary(summary);
        } else {
            state.current_index += 1;
            state.locked = false;
            state.feedback = None;
        }
        Ok(self.phase())
    }

    /// Return to the block selection. The pool is kept.
    pub fn restart(&mut self) {
        self.stage = Stage::BlockSelect;
    }

    fn invalid(&self, trigger: Trigger) -> TransitionError {
        TransitionError::InvalidTransition {
            phase: self.phase(),
            trigger,
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
