use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::model::question::{Question, QuestionError, RawQuestion};

/// Errors raised when a loaded payload is not a usable question bank.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DataFormatError {
    #[error("Invalid data format: questions array not found")]
    MissingQuestions,

    #[error("Invalid data format: the question bank is empty")]
    Empty,

    #[error("Invalid data format: question {index} could not be read: {source}")]
    MalformedQuestion {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid data format: question {index} is invalid: {source}")]
    InvalidQuestion {
        index: usize,
        #[source]
        source: QuestionError,
    },
}

/// The full, validated set of questions loaded for a session.
///
/// Built once from the loaded payload and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Build a bank from already validated questions.
    ///
    /// # Errors
    ///
    /// Returns `DataFormatError::Empty` if `questions` is empty.
    pub fn new(questions: Vec<Question>) -> Result<Self, DataFormatError> {
        if questions.is_empty() {
            return Err(DataFormatError::Empty);
        }
        Ok(Self { questions })
    }

    /// Read a bank from a decoded JSON payload.
    ///
    /// Accepts either `{"questions": [...]}` or a bare array of questions.
    ///
    /// # Errors
    ///
    /// Returns `DataFormatError::MissingQuestions` for any other shape,
    /// `DataFormatError::Empty` for an empty array, and
    /// `MalformedQuestion`/`InvalidQuestion` for the first bad entry.
    pub fn from_value(payload: &Value) -> Result<Self, DataFormatError> {
        let entries = questions_array(payload).ok_or(DataFormatError::MissingQuestions)?;

        let questions = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let raw = RawQuestion::deserialize(entry)
                    .map_err(|source| DataFormatError::MalformedQuestion { index, source })?;
                Question::try_from(raw)
                    .map_err(|source| DataFormatError::InvalidQuestion { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(questions)
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false for a constructed bank; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

fn questions_array(payload: &Value) -> Option<&Vec<Value>> {
    match payload {
        Value::Array(items) => Some(items),
        Value::Object(map) => map.get("questions").and_then(Value::as_array),
        _ => None,
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(text: &str, correct: i64) -> Value {
        json!({
            "question": text,
            "options": ["a", "b", "c"],
            "correct": correct,
            "explanation": format!("because {text}"),
        })
    }

    #[test]
    fn wrapped_payload_parses() {
        let payload = json!({ "questions": [entry("one", 0), entry("two", 2)] });
        let bank = QuestionBank::from_value(&payload).unwrap();
        assert_eq!(bank.len(), 2);
        assert_eq!(bank.questions()[1].text(), "two");
        assert_eq!(bank.questions()[1].correct_index(), 2);
    }

    #[test]
    fn bare_array_parses() {
        let payload = json!([entry("one", 1)]);
        let bank = QuestionBank::from_value(&payload).unwrap();
        assert_eq!(bank.len(), 1);
        assert_eq!(bank.questions()[0].explanation(), "because one");
    }

    #[test]
    fn empty_object_is_missing_questions() {
        let err = QuestionBank::from_value(&json!({})).unwrap_err();
        assert!(matches!(err, DataFormatError::MissingQuestions));
    }

    #[test]
    fn non_array_questions_field_is_missing_questions() {
        let err = QuestionBank::from_value(&json!({ "questions": 3 })).unwrap_err();
        assert!(matches!(err, DataFormatError::MissingQuestions));
        let err = QuestionBank::from_value(&json!("questions")).unwrap_err();
        assert!(matches!(err, DataFormatError::MissingQuestions));
    }

    #[test]
    fn empty_array_is_rejected() {
        let err = QuestionBank::from_value(&json!([])).unwrap_err();
        assert!(matches!(err, DataFormatError::Empty));
    }

    #[test]
    fn bad_entry_reports_its_index() {
        let payload = json!([entry("ok", 0), entry("bad", 7)]);
        let err = QuestionBank::from_value(&payload).unwrap_err();
        match err {
            DataFormatError::InvalidQuestion { index, source } => {
                assert_eq!(index, 1);
                assert_eq!(source, QuestionError::CorrectOutOfRange { correct: 7, len: 3 });
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn entry_missing_fields_is_malformed() {
        let payload = json!([{ "question": "no options" }]);
        let err = QuestionBank::from_value(&payload).unwrap_err();
        assert!(matches!(err, DataFormatError::MalformedQuestion { index: 0, .. }));
    }

    #[test]
    fn missing_questions_message_matches_page_wording() {
        let err = QuestionBank::from_value(&json!({})).unwrap_err();
        assert_eq!(err.to_string(), "Invalid data format: questions array not found");
    }
}
