use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use quiz_core::Theme;

use crate::context::AppContext;
use crate::views::{QuizView, ThemeToggle};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", QuizView)] Quiz {},
}

#[component]
fn Layout() -> Element {
    let ctx = use_context::<AppContext>();
    let theme_service = ctx.theme_service();
    let theme = use_signal(Theme::default);
    let user_toggled = use_signal(|| false);

    let theme_service_for_load = theme_service.clone();
    let _stored_theme = use_resource(move || {
        let theme_service = theme_service_for_load.clone();
        let mut theme = theme;
        async move {
            let stored = theme_service.load().await;
            if !*user_toggled.peek() {
                theme.set(stored);
            }
        }
    });

    let on_toggle = use_callback(move |()| {
        let mut user_toggled = user_toggled;
        user_toggled.set(true);
        let mut theme = theme;
        let current = *theme.peek();
        theme.set(current.toggled());
        let theme_service = theme_service.clone();
        spawn(async move {
            theme.set(theme_service.toggle(current).await);
        });
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<crate::views::QuizTestHandles>() {
                handles.register_toggle(on_toggle);
            }
        }
    }

    let current = theme();
    let root_class = if current.is_dark() { "app dark" } else { "app" };

    rsx! {
        div { class: "{root_class}",
            header { class: "app-header",
                h1 { class: "app-header__title", "Block Quiz" }
                ThemeToggle { theme: current, on_toggle }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
