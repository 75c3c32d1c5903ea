mod screen;
mod state;

pub use screen::{BlockChoice, OptionView, QuestionScreen, Screen, Transition, transition};
pub use state::{
    AnswerFeedback, OptionOutcome, QuizSession, SessionPhase, SessionState, TransitionError,
    Trigger,
};
