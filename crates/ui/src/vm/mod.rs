mod labels;
mod quiz_vm;

pub use labels::{
    accuracy_label, block_range_label, block_title, explanation_label, feedback_label,
    next_label, progress_label, progress_percent, question_heading, score_label,
    summary_score_label, theme_toggle_label,
};
pub use quiz_vm::{QuizIntent, QuizVm, load_quiz, notice_for};
