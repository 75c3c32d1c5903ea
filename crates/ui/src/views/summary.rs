use dioxus::prelude::*;

use quiz_core::BlockSummary;

use crate::vm::{QuizIntent, accuracy_label, summary_score_label};

#[component]
pub fn SummaryCard(summary: BlockSummary, on_intent: EventHandler<QuizIntent>) -> Element {
    let score = summary_score_label(&summary);
    let accuracy = accuracy_label(&summary);

    rsx! {
        section { class: "summary-card", id: "summary-card",
            h2 { class: "summary-card__title", "Block complete" }
            p { class: "summary-card__score", "{score}" }
            p { class: "summary-card__detail",
                "This block is finished. You can choose another block."
            }
            div { class: "progress",
                div { class: "progress__fill", style: "width: 100%" }
            }
            // Definition list reads well for label/value pairs.
            dl { class: "summary-stats",
                dt { "Correct" }
                dd { "{summary.score()}" }

                dt { "Wrong" }
                dd { "{summary.wrong()}" }

                dt { "Accuracy" }
                dd { "{accuracy}" }
            }
            button {
                class: "btn btn-primary",
                id: "quiz-restart",
                r#type: "button",
                onclick: move |_| on_intent.call(QuizIntent::Restart),
                "Choose another block"
            }
        }
    }
}
