use serde::Deserialize;
use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Errors raised when a question violates its shape invariants.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("a question needs at least two options, got {len}")]
    TooFewOptions { len: usize },

    #[error("correct answer index {correct} is out of range for {len} options")]
    CorrectOutOfRange { correct: i64, len: usize },
}

//
// ─── QUESTION ─────────────────────────────────────────────────────────────────
//

/// A single multiple-choice question.
///
/// The correct index always points into `options`, and there are always at
/// least two options to choose from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    text: String,
    options: Vec<String>,
    correct_index: usize,
    explanation: String,
}

impl Question {
    pub const MIN_OPTIONS: usize = 2;

    /// Build a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::TooFewOptions` if fewer than two options are given.
    /// Returns `QuestionError::CorrectOutOfRange` if `correct_index` does not
    /// point into `options`.
    pub fn new(
        text: impl Into<String>,
        options: Vec<String>,
        correct_index: usize,
        explanation: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        if options.len() < Self::MIN_OPTIONS {
            return Err(QuestionError::TooFewOptions { len: options.len() });
        }
        if correct_index >= options.len() {
            return Err(QuestionError::CorrectOutOfRange {
                correct: i64::try_from(correct_index).unwrap_or(i64::MAX),
                len: options.len(),
            });
        }

        Ok(Self {
            text: text.into(),
            options,
            correct_index,
            explanation: explanation.into(),
        })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    /// Returns true if `index` is the correct option.
    #[must_use]
    pub fn is_correct(&self, index: usize) -> bool {
        index == self.correct_index
    }
}

/// Wire shape of one entry in the question bank JSON.
///
/// `correct` is read as a signed integer so negative values are reported as
/// range errors instead of generic decode failures.
#[derive(Debug, Deserialize)]
pub(crate) struct RawQuestion {
    question: String,
    options: Vec<String>,
    correct: i64,
    #[serde(default)]
    explanation: String,
}

impl TryFrom<RawQuestion> for Question {
    type Error = QuestionError;

    fn try_from(raw: RawQuestion) -> Result<Self, Self::Error> {
        let len = raw.options.len();
        let correct = usize::try_from(raw.correct).map_err(|_| {
            if len < Self::MIN_OPTIONS {
                QuestionError::TooFewOptions { len }
            } else {
                QuestionError::CorrectOutOfRange {
                    correct: raw.correct,
                    len,
                }
            }
        })?;
        Self::new(raw.question, raw.options, correct, raw.explanation)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
