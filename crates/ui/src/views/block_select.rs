use dioxus::prelude::*;

use quiz_core::{BlockChoice, MAX_BLOCKS};

use crate::vm::{QuizIntent, block_range_label, block_title};

/// Placeholder slots shown while the pool is loading or failed to load.
#[must_use]
pub fn placeholder_blocks() -> Vec<BlockChoice> {
    (0..MAX_BLOCKS)
        .map(|index| BlockChoice {
            index,
            first: 0,
            last: 0,
            question_count: 0,
        })
        .collect()
}

#[component]
pub fn BlockSelector(
    blocks: Vec<BlockChoice>,
    enabled: bool,
    on_intent: EventHandler<QuizIntent>,
) -> Element {
    rsx! {
        section { class: "block-selector", id: "block-selector",
            h2 { class: "block-selector__title", "Choose a block" }
            div { class: "block-grid",
                for choice in blocks {
                    BlockButton { key: "{choice.index}", choice, enabled, on_intent }
                }
            }
        }
    }
}

#[component]
fn BlockButton(choice: BlockChoice, enabled: bool, on_intent: EventHandler<QuizIntent>) -> Element {
    let title = block_title(&choice);
    let range = block_range_label(&choice);
    let index = choice.index;

    // Empty blocks stay clickable so the user gets an explanation.
    rsx! {
        button {
            class: "block-btn",
            r#type: "button",
            "data-block": "{index}",
            disabled: !enabled,
            onclick: move |_| on_intent.call(QuizIntent::StartBlock(index)),
            span { class: "block-btn__title", "{title}" }
            if enabled {
                span { class: "block-btn__range", "{range}" }
            }
        }
    }
}
