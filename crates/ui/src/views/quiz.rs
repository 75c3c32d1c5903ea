use dioxus::prelude::*;

use quiz_core::Screen;

use crate::context::AppContext;
use crate::views::block_select::{BlockSelector, placeholder_blocks};
use crate::views::question::QuestionCard;
use crate::views::summary::SummaryCard;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{QuizIntent, QuizVm, load_quiz};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let loader = ctx.quiz_loader();
    let vm = use_signal(|| None::<QuizVm>);

    let resource = use_resource(move || {
        let loader = loader.clone();
        let mut vm = vm;

        async move {
            let loaded = load_quiz(&loader).await?;
            vm.set(Some(loaded));
            Ok::<_, ViewError>(())
        }
    });
    let state = view_state_from_resource(resource);

    let dispatch_intent = use_callback(move |intent: QuizIntent| {
        let mut vm = vm;
        if let Some(vm) = vm.write().as_mut() {
            vm.dispatch(intent);
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch_intent);
            }
        }
    }

    let (screen, selected, notice) = {
        let guard = vm.read();
        guard.as_ref().map_or((None, None, None), |vm| {
            (Some(vm.screen().clone()), vm.selected(), vm.notice())
        })
    };

    rsx! {
        div { class: "page quiz-page",
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { class: "info info-muted", "Loading questions..." }
                    BlockSelector { blocks: placeholder_blocks(), enabled: false, on_intent: dispatch_intent }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "info bad", role: "alert", "{err.message()}" }
                    BlockSelector { blocks: placeholder_blocks(), enabled: false, on_intent: dispatch_intent }
                },
                ViewState::Ready(()) => rsx! {
                    if let Some(notice) = notice {
                        p { class: "info notice", role: "alert", "{notice}" }
                    }
                    match screen {
                        Some(Screen::BlockSelect { blocks }) => rsx! {
                            BlockSelector { blocks, enabled: true, on_intent: dispatch_intent }
                        },
                        Some(Screen::Question(question)) => rsx! {
                            QuestionCard { question, selected, on_intent: dispatch_intent }
                        },
                        Some(Screen::Summary(summary)) => rsx! {
                            SummaryCard { summary, on_intent: dispatch_intent }
                        },
                        None => rsx! {
                            p { class: "info info-muted", "Loading questions..." }
                        },
                    }
                },
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    toggle: Rc<RefCell<Option<Callback<()>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizIntent>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn register_toggle(&self, toggle: Callback<()>) {
        *self.toggle.borrow_mut() = Some(toggle);
    }

    pub(crate) fn toggle(&self) -> Callback<()> {
        (*self.toggle.borrow()).expect("theme toggle registered")
    }
}
