use dioxus::prelude::*;
use tracing::{debug, info};

use crate::context::AppContext;
use crate::vm::{LOADING_TEXT, QuizVm, QuizVmPhase};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// A user gesture on the quiz screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Select(usize),
    Submit,
    Next,
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        self.dispatch
            .borrow()
            .clone()
            .expect("dispatch registered")
    }

    fn register(&self, dispatch: Callback<QuizIntent>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
    }
}

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut controller = use_signal({
        let ctx = ctx.clone();
        move || ctx.new_controller()
    });

    let loader = ctx.loader();
    let source = ctx.source();
    let _load = use_resource(move || {
        let loader = loader.clone();
        let source = source.clone();
        async move {
            info!(%source, "loading quiz");
            match loader.load(&source).await {
                Ok(payload) => {
                    // A rejected payload is already on screen as a load error.
                    let _ = controller.write().on_data_loaded(&payload);
                }
                Err(err) => controller.write().on_load_failed(&err),
            }
        }
    });

    let dispatch_intent = use_callback(move |intent: QuizIntent| {
        debug!(?intent, "quiz intent");
        let mut controller = controller.write();
        match intent {
            QuizIntent::Select(index) => controller.select_option(index),
            QuizIntent::Submit => controller.submit(),
            QuizIntent::Next => controller.next(),
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

    let (vm, can_submit, can_advance) = {
        let controller = controller.read();
        let session = controller.session();
        (
            controller.renderer().clone(),
            session.can_submit(),
            session.can_advance(),
        )
    };

    rsx! {
        QuizCard {
            vm,
            can_submit,
            can_advance,
            on_select: move |index| dispatch_intent.call(QuizIntent::Select(index)),
            on_submit: move |()| dispatch_intent.call(QuizIntent::Submit),
            on_next: move |()| dispatch_intent.call(QuizIntent::Next),
        }
    }
}

#[component]
pub fn QuizCard(
    vm: QuizVm,
    can_submit: bool,
    can_advance: bool,
    on_select: EventHandler<usize>,
    on_submit: EventHandler<()>,
    on_next: EventHandler<()>,
) -> Element {
    let score_label = vm.score_label();
    let revealed = vm.is_revealed();
    let load_error = vm.load_error.clone().unwrap_or_default();

    rsx! {
        div { class: "page quiz",
            header { class: "quiz__header",
                h2 { class: "quiz__title", "Quiz" }
                span { class: "quiz__score", id: "score", "{score_label}" }
            }

            match vm.phase {
                QuizVmPhase::Loading => rsx! {
                    p { class: "quiz__loading", id: "loading", "{LOADING_TEXT}" }
                },
                QuizVmPhase::Failed => rsx! {
                    p { class: "quiz__loading quiz__loading--error", id: "loading",
                        "{load_error}"
                    }
                },
                QuizVmPhase::Question => rsx! {
                    h3 { class: "quiz__question", id: "question", "{vm.question_text}" }
                    div { class: "quiz__options", id: "options",
                        for (index, option) in vm.options.iter().enumerate() {
                            button {
                                key: "{index}",
                                class: "{option.state.css_class()}",
                                disabled: revealed,
                                onclick: move |_| on_select.call(index),
                                "{option.text}"
                            }
                        }
                    }
                    if let Some(feedback) = vm.feedback.as_ref() {
                        p { class: "quiz__feedback", id: "feedback", "{feedback}" }
                    }
                    div { class: "quiz__actions",
                        if can_advance {
                            button {
                                class: "btn btn-primary",
                                id: "next-btn",
                                onclick: move |_| on_next.call(()),
                                "Next"
                            }
                        } else {
                            button {
                                class: "btn btn-primary",
                                id: "submit-btn",
                                disabled: !can_submit,
                                onclick: move |_| on_submit.call(()),
                                "Submit"
                            }
                        }
                    }
                },
                QuizVmPhase::Completed => rsx! {
                    h3 { class: "quiz__question", id: "question", "{vm.question_text}" }
                    div { class: "quiz__result", id: "feedback",
                        for line in vm.feedback.as_deref().unwrap_or_default().lines() {
                            p { "{line}" }
                        }
                    }
                },
            }
        }
    }
}
