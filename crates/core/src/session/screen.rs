use crate::model::{BlockSummary, MAX_BLOCKS, OptionLetter, QuestionPool};

use super::state::{
    AnswerFeedback, OptionOutcome, QuizSession, SessionPhase, TransitionError, Trigger,
};

/// One block button on the selection screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockChoice {
    pub index: usize,
    /// 1-based pool position of the first question; 0 when the block is empty.
    pub first: usize,
    /// 1-based pool position of the last question; 0 when the block is empty.
    pub last: usize,
    pub question_count: usize,
}

impl BlockChoice {
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.question_count > 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView {
    pub letter: OptionLetter,
    pub text: String,
    pub outcome: OptionOutcome,
}

/// Everything needed to draw the current question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionScreen {
    pub block_index: usize,
    /// 1-based position within the block.
    pub number: usize,
    pub total: usize,
    pub prompt: String,
    pub options: Vec<OptionView>,
    pub feedback: Option<AnswerFeedback>,
    pub score: u32,
    pub answered: u32,
    pub locked: bool,
    pub is_last: bool,
}

impl QuestionScreen {
    /// Fraction of the block reached, counting the current question.
    #[must_use]
    pub fn progress_ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.number as f64 / self.total as f64).min(1.0)
    }
}

/// Render description of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    BlockSelect { blocks: Vec<BlockChoice> },
    Question(QuestionScreen),
    Summary(BlockSummary),
}

/// Result of feeding one trigger through `transition`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub session: QuizSession,
    pub screen: Screen,
    pub rejection: Option<TransitionError>,
}

/// Apply `trigger` and describe the resulting screen.
///
/// A rejected trigger returns the session unchanged together with the reason.
#[must_use]
pub fn transition(mut session: QuizSession, trigger: Trigger) -> Transition {
    let rejection = session.apply(trigger).err();
    let screen = session.screen();
    Transition {
        session,
        screen,
        rejection,
    }
}

impl QuizSession {
    #[must_use]
    pub fn screen(&self) -> Screen {
        match self.phase() {
            SessionPhase::BlockSelect => Screen::BlockSelect {
                blocks: block_choices(self.pool()),
            },
            SessionPhase::Summary => match self.summary() {
                Some(summary) => Screen::Summary(*summary),
                None => Screen::BlockSelect {
                    blocks: block_choices(self.pool()),
                },
            },
            SessionPhase::QuestionActive | SessionPhase::QuestionLocked => {
                match self.question_screen() {
                    Some(screen) => Screen::Question(screen),
                    None => Screen::BlockSelect {
                        blocks: block_choices(self.pool()),
                    },
                }
            }
        }
    }

    fn question_screen(&self) -> Option<QuestionScreen> {
        let state = self.state()?;
        let question = state.current_question()?;
        let feedback = state.feedback().cloned();
        let options = OptionLetter::ALL
            .iter()
            .map(|&letter| OptionView {
                letter,
                text: question.option(letter).to_string(),
                outcome: feedback
                    .as_ref()
                    .map_or(OptionOutcome::Neutral, |fb| fb.outcome(letter)),
            })
            .collect();

        Some(QuestionScreen {
            block_index: state.block().index(),
            number: state.current_index() + 1,
            total: state.block().len(),
            prompt: question.prompt().to_string(),
            options,
            feedback,
            score: state.score(),
            answered: state.answered_count(),
            locked: state.is_locked(),
            is_last: state.is_last(),
        })
    }
}

/// Block buttons: always the full set of slots, plus any extra blocks a pool might hold.
fn block_choices(pool: &QuestionPool) -> Vec<BlockChoice> {
    (0..MAX_BLOCKS.max(pool.block_count()))
        .map(|index| {
            let range = pool.block_range(index);
            let question_count = range.len();
            let (first, last) = if range.is_empty() {
                (0, 0)
            } else {
                (range.start + 1, range.end)
            };
            BlockChoice {
                index,
                first,
                last,
                question_count,
            }
        })
        .collect()
}
