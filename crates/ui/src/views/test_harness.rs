use std::path::PathBuf;
use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::{QuestionLoader, QuestionSource, QuizConfig};

use super::quiz::{QuizCard, QuizIntent, QuizTestHandles, QuizView};
use crate::context::{UiApp, build_app_context};
use crate::vm::QuizVm;

struct TestApp {
    config: QuizConfig,
    loader: Arc<QuestionLoader>,
}

impl UiApp for TestApp {
    fn config(&self) -> QuizConfig {
        self.config.clone()
    }

    fn loader(&self) -> Arc<QuestionLoader> {
        Arc::clone(&self.loader)
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    handles: QuizTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn QuizViewHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { QuizView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: QuizTestHandles,
    path: PathBuf,
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

    /// Drive the DOM until the loading indicator goes away.
    pub async fn wait_until_loaded(&mut self) -> String {
        for _ in 0..40 {
            self.drive_async().await;
            let html = self.render();
            if !html.contains("id=\"loading\"") || html.contains("Error loading quiz") {
                return html;
            }
        }
        self.render()
    }

    pub fn send(&mut self, intent: QuizIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

impl Drop for ViewHarness {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Quiz view backed by a temp file holding `payload`, with a fixed seed.
pub fn setup_view_harness(name: &str, payload: &str, sample_size: usize) -> ViewHarness {
    let path = temp_path(name);
    std::fs::write(&path, payload).expect("write payload");
    build_harness(path, sample_size)
}

/// Quiz view whose source file does not exist.
pub fn setup_missing_source_harness(name: &str) -> ViewHarness {
    build_harness(temp_path(name), 20)
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("quiz-ui-{}-{name}.json", std::process::id()))
}

fn build_harness(path: PathBuf, sample_size: usize) -> ViewHarness {
    let app = Arc::new(TestApp {
        config: QuizConfig {
            source: QuestionSource::File(path.clone()),
            sample_size,
            seed: Some(7),
        },
        loader: Arc::new(QuestionLoader::new()),
    });
    let handles = QuizTestHandles::default();

    let dom = VirtualDom::new_with_props(
        QuizViewHarness,
        ViewHarnessProps {
            app,
            handles: handles.clone(),
        },
    );

    ViewHarness { dom, handles, path }
}

#[derive(Props, Clone, PartialEq)]
struct CardHarnessProps {
    vm: QuizVm,
    can_submit: bool,
    can_advance: bool,
}

#[component]
fn QuizCardHarness(props: CardHarnessProps) -> Element {
    rsx! {
        QuizCard {
            vm: props.vm,
            can_submit: props.can_submit,
            can_advance: props.can_advance,
            on_select: |_| {},
            on_submit: |()| {},
            on_next: |()| {},
        }
    }
}

/// Render `QuizCard` once for a fixed view model.
pub fn render_card(vm: QuizVm, can_submit: bool, can_advance: bool) -> String {
    let mut dom = VirtualDom::new_with_props(
        QuizCardHarness,
        CardHarnessProps {
            vm,
            can_submit,
            can_advance,
        },
    );
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}
