use std::sync::Arc;

use services::{QuestionLoader, QuestionSource, QuizConfig, QuizController};

use crate::vm::QuizVm;

pub trait UiApp: Send + Sync {
    fn config(&self) -> QuizConfig;
    fn loader(&self) -> Arc<QuestionLoader>;
}

#[derive(Clone)]
pub struct AppContext {
    config: QuizConfig,
    loader: Arc<QuestionLoader>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            config: app.config(),
            loader: app.loader(),
        }
    }

    #[must_use]
    pub fn source(&self) -> QuestionSource {
        self.config.source.clone()
    }

    #[must_use]
    pub fn loader(&self) -> Arc<QuestionLoader> {
        Arc::clone(&self.loader)
    }

    /// A fresh controller in `Loading`, seeded from the config when a seed is set.
    #[must_use]
    pub fn new_controller(&self) -> QuizController<QuizVm> {
        let sample_size = self.config.sample_size;
        match self.config.seed {
            Some(seed) => QuizController::with_seed(QuizVm::default(), sample_size, seed),
            None => QuizController::new(QuizVm::default(), sample_size),
        }
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
