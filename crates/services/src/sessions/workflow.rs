use quiz_core::model::DataFormatError;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::Value;
use tracing::{debug, error, info};

use super::service::{Advance, QuizSession};
use crate::error::LoadError;
use crate::renderer::Renderer;

/// Text shown in place of the loading indicator when the quiz cannot start.
#[must_use]
pub fn load_error_message(reason: &dyn std::error::Error) -> String {
    format!("Error loading quiz: {reason}. Please refresh the page or try again later.")
}

/// Single owner of a quiz session and the renderer that displays it.
///
/// Every user gesture goes through here: the session decides whether it
/// applies, and only accepted transitions reach the renderer.
pub struct QuizController<R: Renderer> {
    session: QuizSession,
    renderer: R,
    rng: StdRng,
}

impl<R: Renderer> QuizController<R> {
    /// Controller with an OS-seeded RNG.
    #[must_use]
    pub fn new(renderer: R, sample_size: usize) -> Self {
        Self::with_rng(renderer, sample_size, StdRng::from_os_rng())
    }

    /// Controller whose sample is reproducible for a given `seed`.
    #[must_use]
    pub fn with_seed(renderer: R, sample_size: usize, seed: u64) -> Self {
        Self::with_rng(renderer, sample_size, StdRng::seed_from_u64(seed))
    }

    #[must_use]
    pub fn with_rng(renderer: R, sample_size: usize, rng: StdRng) -> Self {
        Self {
            session: QuizSession::new(sample_size),
            renderer,
            rng,
        }
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Start the quiz from a loaded payload and show the first question.
    ///
    /// # Errors
    ///
    /// Returns `DataFormatError` if the payload has no usable questions. The
    /// error is also shown through the renderer, and the quiz never starts.
    pub fn on_data_loaded(&mut self, payload: &Value) -> Result<(), DataFormatError> {
        match self.session.on_data_loaded(payload, &mut self.rng) {
            Ok(true) => {
                info!(
                    total = self.session.total(),
                    sample_size = self.session.sample_size(),
                    "quiz started"
                );
                self.renderer.show_score(self.session.score());
                match self.session.outcome().copied() {
                    // A zero sample size finishes before the first question.
                    Some(outcome) => self.renderer.show_completion(&outcome.message()),
                    None => self.render_current(),
                }
                Ok(())
            }
            Ok(false) => {
                debug!("ignoring payload: quiz already started");
                Ok(())
            }
            Err(err) => {
                error!(error = %err, "question bank rejected");
                self.renderer.show_load_error(&load_error_message(&err));
                Err(err)
            }
        }
    }

    /// Report a failed fetch. The session stays in `Loading` for good.
    pub fn on_load_failed(&mut self, err: &LoadError) {
        error!(error = %err, "failed to load question bank");
        self.renderer.show_load_error(&load_error_message(err));
    }

    pub fn select_option(&mut self, index: usize) {
        if self.session.select_option(index) {
            debug!(index, "option selected");
            self.renderer.highlight_selected(index);
        }
    }

    pub fn submit(&mut self) {
        let Some(feedback) = self.session.submit() else {
            debug!("submit ignored");
            return;
        };
        debug!(correct = feedback.correct, "answer submitted");

        self.renderer
            .highlight_correct_and_incorrect(feedback.correct_index, feedback.selected_index);
        if feedback.correct {
            self.renderer.show_score(self.session.score());
        }
        self.renderer.show_feedback(&feedback.message());
    }

    pub fn next(&mut self) {
        match self.session.next() {
            Some(Advance::Question { position }) => {
                debug!(position, "next question");
                self.render_current();
            }
            Some(Advance::Finished(outcome)) => {
                info!(
                    score = outcome.score(),
                    total = outcome.total(),
                    percentage = outcome.percentage(),
                    tier = %outcome.tier(),
                    "quiz finished"
                );
                self.renderer.show_completion(&outcome.message());
            }
            None => debug!("next ignored"),
        }
    }

    fn render_current(&mut self) {
        if let Some(question) = self.session.current_question() {
            self.renderer.show_question(question.text(), question.options());
        }
    }
}
