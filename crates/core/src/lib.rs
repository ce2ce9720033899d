#![forbid(unsafe_code)]

pub mod model;
pub mod sampler;

pub use model::{
    AnswerFeedback, DataFormatError, Question, QuestionBank, QuestionError, QuizOutcome,
    ScoreTier,
};
pub use sampler::{DEFAULT_SAMPLE_SIZE, sample};
