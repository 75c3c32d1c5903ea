use quiz_core::{OptionLetter, THEME_PREFERENCE_KEY};
use storage::{PreferenceRepository, Storage};

use super::test_harness::{
    ViewKind, questions_csv, setup_view_harness, setup_view_harness_with_storage,
};
use crate::vm::QuizIntent;

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_block_selector_after_load() {
    let mut harness = setup_view_harness(ViewKind::Quiz, &questions_csv(30));
    harness.load().await;

    let html = harness.render();
    assert!(html.contains("Choose a block"), "missing selector in {html}");
    assert!(html.contains("Questions 1-25"), "missing first block in {html}");
    assert!(html.contains("Questions 26-30"), "missing second block in {html}");
    assert!(html.contains("Block 4"), "missing last slot in {html}");
    assert!(html.contains("No questions"), "missing empty slot in {html}");
    assert!(!html.contains("Loading questions..."), "still loading in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_load_failure() {
    let mut harness = setup_view_harness(ViewKind::Quiz, "Question,A,B,C,D,Answer\nq,a,,c,d,A\n");
    harness.load().await;

    let html = harness.render();
    assert!(
        html.contains("Error: no valid questions found."),
        "missing error in {html}"
    );
    assert!(html.contains("disabled"), "block buttons should be disabled in {html}");
    assert!(!html.contains("Questions 1-"), "no ranges without a pool in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_plays_through_a_block() {
    let mut harness = setup_view_harness(ViewKind::Quiz, &questions_csv(27));
    harness.load().await;

    harness.dispatch(QuizIntent::StartBlock(3));
    let html = harness.render();
    assert!(
        html.contains("This block has no questions."),
        "missing empty block notice in {html}"
    );

    harness.dispatch(QuizIntent::StartBlock(1));
    let html = harness.render();
    assert!(html.contains("1. Q25"), "missing heading in {html}");
    assert!(html.contains("1/2 questions"), "missing progress in {html}");
    assert!(html.contains("Score: 0"), "missing score in {html}");

    harness.dispatch(QuizIntent::Submit);
    let html = harness.render();
    assert!(html.contains("Select an answer first."), "missing notice in {html}");

    harness.dispatch(QuizIntent::Select(OptionLetter::B));
    harness.dispatch(QuizIntent::Submit);
    let html = harness.render();
    assert!(html.contains("Correct! Well done."), "missing feedback in {html}");
    assert!(html.contains("Explanation: Because 25"), "missing explanation in {html}");
    assert!(html.contains("Score: 1"), "missing score in {html}");
    assert!(html.contains("Next question"), "missing next label in {html}");

    harness.dispatch(QuizIntent::Advance);
    harness.dispatch(QuizIntent::Select(OptionLetter::D));
    harness.dispatch(QuizIntent::Submit);
    let html = harness.render();
    assert!(
        html.contains("Incorrect. Correct answer: B."),
        "missing feedback in {html}"
    );
    assert!(html.contains("See results"), "missing results label in {html}");

    harness.dispatch(QuizIntent::Advance);
    let html = harness.render();
    assert!(html.contains("Block complete"), "missing summary in {html}");
    assert!(html.contains("1/2"), "missing score in {html}");
    assert!(html.contains("50%"), "missing accuracy in {html}");

    harness.dispatch(QuizIntent::Restart);
    let html = harness.render();
    assert!(html.contains("Choose a block"), "missing selector in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn shell_smoke_applies_stored_dark_theme() {
    let storage = Storage::in_memory(questions_csv(5));
    storage
        .preferences
        .set_preference(THEME_PREFERENCE_KEY, "dark")
        .await
        .expect("store theme");

    let mut harness = setup_view_harness_with_storage(ViewKind::Shell, storage, false);
    harness.load().await;

    let html = harness.render();
    assert!(html.contains("app dark"), "missing dark class in {html}");
    assert!(html.contains("☀️ Light mode"), "missing toggle label in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn shell_smoke_falls_back_to_system_theme() {
    let mut harness = setup_view_harness_with_storage(
        ViewKind::Shell,
        Storage::in_memory(questions_csv(5)),
        false,
    );
    harness.load().await;

    let html = harness.render();
    assert!(!html.contains("app dark"), "unexpected dark class in {html}");
    assert!(html.contains("🌙 Dark mode"), "missing toggle label in {html}");
    assert_eq!(
        harness
            .storage
            .preferences
            .get_preference(THEME_PREFERENCE_KEY)
            .await
            .expect("read theme"),
        None
    );
}

#[tokio::test(flavor = "current_thread")]
async fn shell_smoke_toggle_applies_and_persists_theme() {
    let mut harness = setup_view_harness_with_storage(
        ViewKind::Shell,
        Storage::in_memory(questions_csv(5)),
        false,
    );
    harness.load().await;
    assert!(!harness.render().contains("app dark"));

    harness.toggle_theme().await;

    let html = harness.render();
    assert!(html.contains("app dark"), "missing dark class in {html}");
    assert!(html.contains("☀️ Light mode"), "missing toggle label in {html}");
    assert_eq!(
        harness
            .storage
            .preferences
            .get_preference(THEME_PREFERENCE_KEY)
            .await
            .expect("read theme")
            .as_deref(),
        Some("dark")
    );
}

#[tokio::test(flavor = "current_thread")]
async fn shell_smoke_toggle_before_load_is_kept() {
    let mut harness = setup_view_harness_with_storage(
        ViewKind::Shell,
        Storage::in_memory(questions_csv(5)),
        false,
    );
    harness.rebuild();
    harness.toggle_theme().await;

    let html = harness.render();
    assert!(html.contains("app dark"), "missing dark class in {html}");
}
