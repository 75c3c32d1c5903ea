use dioxus::prelude::*;

use quiz_core::Theme;

use crate::vm::theme_toggle_label;

#[component]
pub fn ThemeToggle(theme: Theme, on_toggle: EventHandler<()>) -> Element {
    let label = theme_toggle_label(theme);

    rsx! {
        button {
            class: "theme-toggle",
            id: "theme-toggle",
            r#type: "button",
            aria_pressed: "{theme.is_dark()}",
            onclick: move |_| on_toggle.call(()),
            "{label}"
        }
    }
}
