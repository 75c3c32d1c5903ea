mod block_select;
mod question;
mod quiz;
mod state;
mod summary;
mod theme_toggle;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

#[cfg(test)]
pub(crate) use quiz::QuizTestHandles;

pub use block_select::{BlockSelector, placeholder_blocks};
pub use question::QuestionCard;
pub use quiz::QuizView;
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use summary::SummaryCard;
pub use theme_toggle::ThemeToggle;
