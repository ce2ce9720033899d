use std::fmt;

use quiz_core::model::{AnswerFeedback, DataFormatError, Question, QuestionBank, QuizOutcome};
use quiz_core::sampler::{DEFAULT_SAMPLE_SIZE, sample};
use rand::Rng;
use serde_json::Value;

//
// ─── PHASE ─────────────────────────────────────────────────────────────────────
//

/// Where a quiz session currently stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizPhase {
    /// Waiting for the question bank.
    Loading,
    /// Showing the question at `position`.
    InProgress {
        position: usize,
        answered: bool,
        selection: Option<usize>,
    },
    /// All questions answered.
    Finished(QuizOutcome),
}

/// What `QuizSession::next` moved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Question { position: usize },
    Finished(QuizOutcome),
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory quiz over a sampled subset of a question bank.
///
/// Transitions that do not apply to the current phase are ignored and report
/// `false`/`None` rather than failing, so repeated or stray UI events are
/// harmless.
pub struct QuizSession {
    phase: QuizPhase,
    working_set: Vec<Question>,
    score: usize,
    sample_size: usize,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_SIZE)
    }
}

impl QuizSession {
    /// Create a session in the `Loading` phase that will draw up to
    /// `sample_size` questions once data arrives.
    #[must_use]
    pub fn new(sample_size: usize) -> Self {
        Self {
            phase: QuizPhase::Loading,
            working_set: Vec::new(),
            score: 0,
            sample_size,
        }
    }

    /// Validate a loaded payload and start the quiz.
    ///
    /// Returns `Ok(false)` without touching the payload if the session has
    /// already left `Loading`.
    ///
    /// # Errors
    ///
    /// Returns `DataFormatError` if the payload is neither `{"questions": [...]}`
    /// nor a bare array of valid questions. The session stays in `Loading`.
    pub fn on_data_loaded<R: Rng + ?Sized>(
        &mut self,
        payload: &Value,
        rng: &mut R,
    ) -> Result<bool, DataFormatError> {
        if !self.is_loading() {
            return Ok(false);
        }
        let bank = QuestionBank::from_value(payload)?;
        Ok(self.start(&bank, rng))
    }

    /// Sample the working set from `bank` and move to the first question.
    ///
    /// Ignored unless the session is still `Loading`.
    pub fn start<R: Rng + ?Sized>(&mut self, bank: &QuestionBank, rng: &mut R) -> bool {
        if !self.is_loading() {
            return false;
        }

        self.working_set = sample(bank.questions(), self.sample_size, rng);
        self.score = 0;
        self.phase = if self.working_set.is_empty() {
            QuizPhase::Finished(QuizOutcome::new(0, 0))
        } else {
            QuizPhase::InProgress {
                position: 0,
                answered: false,
                selection: None,
            }
        };
        true
    }

    /// Record `index` as the current choice, replacing any earlier one.
    ///
    /// Ignored once the question is answered, outside `InProgress`, or when
    /// `index` is not one of the current question's options.
    pub fn select_option(&mut self, index: usize) -> bool {
        let option_count = match self.current_question() {
            Some(question) => question.options().len(),
            None => return false,
        };
        match &mut self.phase {
            QuizPhase::InProgress {
                answered: false,
                selection,
                ..
            } if index < option_count => {
                *selection = Some(index);
                true
            }
            _ => false,
        }
    }

    /// Lock in the current selection and score it.
    ///
    /// Returns `None` if there is nothing to submit: no selection, already
    /// answered, or not in progress.
    pub fn submit(&mut self) -> Option<AnswerFeedback> {
        let QuizPhase::InProgress {
            position,
            answered: false,
            selection: Some(selected_index),
        } = self.phase
        else {
            return None;
        };

        let question = self.working_set.get(position)?;
        let correct = question.is_correct(selected_index);
        let feedback = AnswerFeedback {
            correct,
            correct_index: question.correct_index(),
            selected_index,
            explanation: question.explanation().to_string(),
        };

        if correct {
            self.score += 1;
        }
        if let QuizPhase::InProgress { answered, .. } = &mut self.phase {
            *answered = true;
        }

        Some(feedback)
    }

    /// Move past an answered question.
    ///
    /// Returns `None` unless the current question has been submitted.
    pub fn next(&mut self) -> Option<Advance> {
        let QuizPhase::InProgress {
            position,
            answered: true,
            ..
        } = self.phase
        else {
            return None;
        };

        let position = position + 1;
        if position < self.working_set.len() {
            self.phase = QuizPhase::InProgress {
                position,
                answered: false,
                selection: None,
            };
            Some(Advance::Question { position })
        } else {
            let outcome = QuizOutcome::new(self.score, self.working_set.len());
            self.phase = QuizPhase::Finished(outcome);
            Some(Advance::Finished(outcome))
        }
    }

    #[must_use]
    pub fn phase(&self) -> &QuizPhase {
        &self.phase
    }

    #[must_use]
    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    #[must_use]
    pub fn working_set(&self) -> &[Question] {
        &self.working_set
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    /// Number of questions in this session.
    #[must_use]
    pub fn total(&self) -> usize {
        self.working_set.len()
    }

    #[must_use]
    pub fn position(&self) -> Option<usize> {
        match self.phase {
            QuizPhase::InProgress { position, .. } => Some(position),
            _ => None,
        }
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.position().and_then(|position| self.working_set.get(position))
    }

    #[must_use]
    pub fn selection(&self) -> Option<usize> {
        match self.phase {
            QuizPhase::InProgress { selection, .. } => selection,
            _ => None,
        }
    }

    #[must_use]
    pub fn is_answered(&self) -> bool {
        matches!(self.phase, QuizPhase::InProgress { answered: true, .. })
    }

    /// True when a selection exists and the question is still open.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        matches!(
            self.phase,
            QuizPhase::InProgress {
                answered: false,
                selection: Some(_),
                ..
            }
        )
    }

    /// True when the current question is answered and `next` will move on.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        self.is_answered()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, QuizPhase::Loading)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self.phase, QuizPhase::Finished(_))
    }

    #[must_use]
    pub fn outcome(&self) -> Option<&QuizOutcome> {
        match &self.phase {
            QuizPhase::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("phase", &self.phase)
            .field("working_set_len", &self.working_set.len())
            .field("score", &self.score)
            .field("sample_size", &self.sample_size)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
