use quiz_core::{AnswerFeedback, BlockChoice, BlockSummary, QuestionScreen, Theme};

#[must_use]
pub fn question_heading(question: &QuestionScreen) -> String {
    format!("{}. {}", question.number, question.prompt)
}

#[must_use]
pub fn progress_label(question: &QuestionScreen) -> String {
    let total = question.total;
    format!("{}/{total} questions", question.number.min(total))
}

/// Width of the progress bar in whole percent.
#[must_use]
pub fn progress_percent(question: &QuestionScreen) -> u32 {
    (question.progress_ratio() * 100.0).round().clamp(0.0, 100.0) as u32
}

#[must_use]
pub fn score_label(score: u32) -> String {
    format!("Score: {score}")
}

#[must_use]
pub fn feedback_label(feedback: &AnswerFeedback) -> String {
    if feedback.is_correct() {
        "Correct! Well done.".to_string()
    } else {
        format!("Incorrect. Correct answer: {}.", feedback.correct())
    }
}

#[must_use]
pub fn explanation_label(feedback: &AnswerFeedback) -> Option<String> {
    feedback
        .explanation()
        .map(|text| format!("Explanation: {text}"))
}

#[must_use]
pub fn next_label(is_last: bool) -> &'static str {
    if is_last { "See results" } else { "Next question" }
}

#[must_use]
pub fn block_title(choice: &BlockChoice) -> String {
    format!("Block {}", choice.index + 1)
}

#[must_use]
pub fn block_range_label(choice: &BlockChoice) -> String {
    if choice.is_available() {
        format!("Questions {}-{}", choice.first, choice.last)
    } else {
        "No questions".to_string()
    }
}

#[must_use]
pub fn summary_score_label(summary: &BlockSummary) -> String {
    format!("{}/{}", summary.score(), summary.total())
}

#[must_use]
pub fn accuracy_label(summary: &BlockSummary) -> String {
    format!("{}%", summary.accuracy())
}

/// The toggle names the theme it switches to.
#[must_use]
pub fn theme_toggle_label(theme: Theme) -> &'static str {
    if theme.is_dark() {
        "☀️ Light mode"
    } else {
        "🌙 Dark mode"
    }
}
