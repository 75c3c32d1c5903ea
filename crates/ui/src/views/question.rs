use dioxus::prelude::*;

use quiz_core::{OptionLetter, OptionOutcome, OptionView, QuestionScreen};

use crate::vm::{
    QuizIntent, explanation_label, feedback_label, next_label, progress_label, progress_percent,
    question_heading, score_label,
};

#[component]
pub fn QuestionCard(
    question: QuestionScreen,
    selected: Option<OptionLetter>,
    on_intent: EventHandler<QuizIntent>,
) -> Element {
    let heading = question_heading(&question);
    let progress = progress_label(&question);
    let percent = progress_percent(&question);
    let score = score_label(question.score);
    let next = next_label(question.is_last);
    let locked = question.locked;
    let options: Vec<(String, OptionView, bool)> = question
        .options
        .iter()
        .map(|option| {
            let key = option.letter.to_string();
            (key, option.clone(), selected == Some(option.letter))
        })
        .collect();
    let feedback = question.feedback.as_ref().map(|feedback| {
        let tone = if feedback.is_correct() {
            "feedback good"
        } else {
            "feedback bad"
        };
        (tone, feedback_label(feedback), explanation_label(feedback))
    });

    rsx! {
        section { class: "quiz-card", id: "quiz-card",
            div { class: "quiz-meta",
                span { class: "progress-label", "{progress}" }
                span { class: "score-pill", "{score}" }
            }
            div { class: "progress",
                div { class: "progress__fill", style: "width: {percent}%" }
            }
            h2 { class: "question-text", "{heading}" }
            div { class: "options", role: "radiogroup",
                for (key, option, is_selected) in options {
                    OptionButton {
                        key: "{key}",
                        selected: is_selected,
                        option,
                        locked,
                        on_intent,
                    }
                }
            }
            if let Some((tone, line, explanation)) = feedback {
                p { class: "{tone}", role: "status", "{line}" }
                if let Some(explanation) = explanation {
                    p { class: "explanation", "{explanation}" }
                }
            }
            div { class: "quiz-actions",
                button {
                    class: "btn btn-primary",
                    id: "quiz-submit",
                    r#type: "button",
                    disabled: locked,
                    onclick: move |_| on_intent.call(QuizIntent::Submit),
                    "Submit"
                }
                button {
                    class: "btn btn-secondary",
                    id: "quiz-next",
                    r#type: "button",
                    disabled: !locked,
                    onclick: move |_| on_intent.call(QuizIntent::Advance),
                    "{next}"
                }
            }
        }
    }
}

#[component]
fn OptionButton(
    option: OptionView,
    selected: bool,
    locked: bool,
    on_intent: EventHandler<QuizIntent>,
) -> Element {
    let letter = option.letter;
    let class = match option.outcome {
        OptionOutcome::Correct => "option option--correct",
        OptionOutcome::Incorrect => "option option--incorrect",
        OptionOutcome::Neutral if selected => "option option--selected",
        OptionOutcome::Neutral => "option",
    };

    rsx! {
        button {
            class,
            r#type: "button",
            role: "radio",
            aria_checked: "{selected}",
            disabled: locked,
            onclick: move |_| on_intent.call(QuizIntent::Select(letter)),
            span { class: "option__badge", "{letter}" }
            span { class: "option__text", "{option.text}" }
        }
    }
}
