use quiz_core::{
    OptionLetter, QuestionPool, QuizSession, Screen, SessionPhase, Transition, TransitionError,
    Trigger, transition,
};
use services::QuizLoader;

use crate::views::ViewError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    StartBlock(usize),
    /// Pick an option; only honoured while the question is still open.
    Select(OptionLetter),
    Submit,
    Advance,
    Restart,
}

/// Wraps a `QuizSession` with the bits of state only the UI cares about:
/// the highlighted option and the last notice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizVm {
    session: QuizSession,
    screen: Screen,
    selected: Option<OptionLetter>,
    notice: Option<&'static str>,
}

impl QuizVm {
    #[must_use]
    pub fn new(pool: QuestionPool) -> Self {
        let session = QuizSession::new(pool);
        let screen = session.screen();
        Self {
            session,
            screen,
            selected: None,
            notice: None,
        }
    }

    #[must_use]
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.session.phase()
    }

    #[must_use]
    pub fn selected(&self) -> Option<OptionLetter> {
        self.selected
    }

    #[must_use]
    pub fn notice(&self) -> Option<&'static str> {
        self.notice
    }

    #[must_use]
    pub fn pool_len(&self) -> usize {
        self.session.pool().len()
    }

    pub fn dispatch(&mut self, intent: QuizIntent) {
        let trigger = match intent {
            QuizIntent::Select(letter) => {
                if self.session.phase() == SessionPhase::QuestionActive {
                    self.selected = Some(letter);
                    self.notice = None;
                }
                return;
            }
            QuizIntent::StartBlock(index) => Trigger::StartBlock(index),
            QuizIntent::Submit => Trigger::Submit(self.selected),
            QuizIntent::Advance => Trigger::Advance,
            QuizIntent::Restart => Trigger::Restart,
        };

        let Transition {
            session,
            screen,
            rejection,
        } = transition(self.session.clone(), trigger);
        self.session = session;
        self.screen = screen;

        if let Some(err) = rejection {
            tracing::debug!(%trigger, error = %err, "trigger rejected");
            self.notice = notice_for(err);
            return;
        }

        self.notice = None;
        if !matches!(trigger, Trigger::Submit(_)) {
            self.selected = None;
        }
        match (&self.screen, trigger) {
            (Screen::Question(question), Trigger::StartBlock(_)) => {
                tracing::info!(
                    block = question.block_index,
                    questions = question.total,
                    "block started"
                );
            }
            (Screen::Summary(summary), Trigger::Advance) => {
                tracing::info!(
                    block = summary.block_index(),
                    score = summary.score(),
                    total = summary.total(),
                    accuracy = summary.accuracy(),
                    "block completed"
                );
            }
            _ => {}
        }
    }
}

/// User-facing text for a rejected trigger, if it deserves one.
#[must_use]
pub fn notice_for(err: TransitionError) -> Option<&'static str> {
    match err {
        TransitionError::InvalidBlockSelection { .. } => Some("This block has no questions."),
        TransitionError::NoSelectionOnSubmit => Some("Select an answer first."),
        _ => None,
    }
}

/// # Errors
///
/// Returns `ViewError::LoadFailed` when the questions cannot be loaded.
pub async fn load_quiz(loader: &QuizLoader) -> Result<QuizVm, ViewError> {
    let pool = loader
        .load()
        .await
        .map_err(|err| ViewError::LoadFailed(err.to_string()))?;
    Ok(QuizVm::new(pool))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::{OptionOutcome, QuestionRecord};

    fn vm(len: usize) -> QuizVm {
        let questions = (0..len).map(|n| {
            QuestionRecord::new(
                format!("Q{n}"),
                ["a".into(), "b".into(), "c".into(), "d".into()],
                OptionLetter::B,
                None,
            )
            .unwrap()
        });
        QuizVm::new(QuestionPool::new(questions).unwrap())
    }

    #[test]
    fn starts_on_block_select() {
        let vm = vm(10);
        assert_eq!(vm.phase(), SessionPhase::BlockSelect);
        assert!(matches!(vm.screen(), Screen::BlockSelect { .. }));
        assert_eq!(vm.pool_len(), 10);
    }

    #[test]
    fn empty_block_sets_notice() {
        let mut vm = vm(10);
        vm.dispatch(QuizIntent::StartBlock(2));
        assert_eq!(vm.notice(), Some("This block has no questions."));
        assert_eq!(vm.phase(), SessionPhase::BlockSelect);

        vm.dispatch(QuizIntent::StartBlock(0));
        assert_eq!(vm.notice(), None);
        assert_eq!(vm.phase(), SessionPhase::QuestionActive);
    }

    #[test]
    fn submit_needs_a_selection() {
        let mut vm = vm(3);
        vm.dispatch(QuizIntent::StartBlock(0));
        vm.dispatch(QuizIntent::Submit);
        assert_eq!(vm.notice(), Some("Select an answer first."));
        assert_eq!(vm.phase(), SessionPhase::QuestionActive);

        vm.dispatch(QuizIntent::Select(OptionLetter::B));
        assert_eq!(vm.notice(), None);
        vm.dispatch(QuizIntent::Submit);
        assert_eq!(vm.phase(), SessionPhase::QuestionLocked);
        let Screen::Question(question) = vm.screen() else {
            panic!("expected question");
        };
        assert_eq!(question.score, 1);
        assert_eq!(question.options[1].outcome, OptionOutcome::Correct);
    }

    #[test]
    fn selection_is_frozen_once_locked() {
        let mut vm = vm(3);
        vm.dispatch(QuizIntent::StartBlock(0));
        vm.dispatch(QuizIntent::Select(OptionLetter::A));
        vm.dispatch(QuizIntent::Submit);
        vm.dispatch(QuizIntent::Select(OptionLetter::B));
        assert_eq!(vm.selected(), Some(OptionLetter::A));

        vm.dispatch(QuizIntent::Submit);
        assert_eq!(vm.notice(), None);
        let Screen::Question(question) = vm.screen() else {
            panic!("expected question");
        };
        assert_eq!(question.score, 0);
        assert_eq!(question.answered, 1);
    }

    #[test]
    fn advance_clears_selection_and_finishes_block() {
        let mut vm = vm(2);
        vm.dispatch(QuizIntent::StartBlock(0));
        for _ in 0..2 {
            vm.dispatch(QuizIntent::Select(OptionLetter::B));
            vm.dispatch(QuizIntent::Submit);
            vm.dispatch(QuizIntent::Advance);
            assert_eq!(vm.selected(), None);
        }
        let Screen::Summary(summary) = vm.screen() else {
            panic!("expected summary");
        };
        assert_eq!((summary.score(), summary.total()), (2, 2));

        vm.dispatch(QuizIntent::Restart);
        assert_eq!(vm.phase(), SessionPhase::BlockSelect);
    }

    #[tokio::test]
    async fn load_failure_maps_to_view_error() {
        use std::sync::Arc;
        use storage::InMemoryQuestionSource;

        let loader = QuizLoader::new(Arc::new(InMemoryQuestionSource::new("Question\n")));
        let err = load_quiz(&loader).await.unwrap_err();
        assert_eq!(
            err.message(),
            "Error: no valid questions found."
        );
    }
}
