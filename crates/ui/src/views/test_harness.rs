use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{QuizLoader, ThemeService};
use storage::Storage;

use crate::context::{UiApp, build_app_context};
use crate::routes::Route;
use crate::views::QuizView;
use crate::views::QuizTestHandles;
use crate::vm::QuizIntent;

#[derive(Clone)]
struct TestApp {
    quiz_loader: Arc<QuizLoader>,
    theme_service: Arc<ThemeService>,
}

impl UiApp for TestApp {
    fn quiz_loader(&self) -> Arc<QuizLoader> {
        Arc::clone(&self.quiz_loader)
    }

    fn theme_service(&self) -> Arc<ThemeService> {
        Arc::clone(&self.theme_service)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    /// The quiz view on its own.
    Quiz,
    /// The full routed shell, header and theme toggle included.
    Shell,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    handles: QuizTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    match props.view {
        ViewKind::Quiz => rsx! { Router::<TestRoute> {} },
        ViewKind::Shell => rsx! { Router::<Route> {} },
    }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    rsx! { QuizView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
    handles: QuizTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Rebuild and let the load resources settle.
    pub async fn load(&mut self) {
        self.rebuild();
        for _ in 0..3 {
            self.drive_async().await;
        }
    }

    pub fn dispatch(&mut self, intent: QuizIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    /// Fire the shell's theme toggle and let the save settle.
    pub async fn toggle_theme(&mut self) {
        let toggle = self.handles.toggle();
        self.dom.in_runtime(|| toggle.call(()));
        drive_dom(&mut self.dom);
        for _ in 0..3 {
            self.drive_async().await;
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, questions_csv: &str) -> ViewHarness {
    setup_view_harness_with_storage(view, Storage::in_memory(questions_csv), false)
}

pub fn setup_view_harness_with_storage(
    view: ViewKind,
    storage: Storage,
    prefers_dark: bool,
) -> ViewHarness {
    let quiz_loader = Arc::new(QuizLoader::new(Arc::clone(&storage.questions)));
    let theme_service = Arc::new(
        ThemeService::new(Arc::clone(&storage.preferences)).with_system_dark(prefers_dark),
    );
    let app = Arc::new(TestApp {
        quiz_loader,
        theme_service,
    });
    let handles = QuizTestHandles::default();

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            handles: handles.clone(),
        },
    );

    ViewHarness {
        dom,
        storage,
        handles,
    }
}

/// A question file with `count` valid questions; every answer is `B`.
pub fn questions_csv(count: usize) -> String {
    let mut text = String::from("Question,A,B,C,D,Answer,Explanation\n");
    for n in 0..count {
        text.push_str(&format!("Q{n},w{n},x{n},y{n},z{n},B,Because {n}\n"));
    }
    text
}
