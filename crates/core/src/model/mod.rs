mod bank;
mod outcome;
mod question;

pub use bank::{DataFormatError, QuestionBank};
pub use outcome::{AnswerFeedback, QuizOutcome, ScoreTier};
pub use question::{Question, QuestionError};
