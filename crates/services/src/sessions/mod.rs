mod service;
mod workflow;

// Public API of the session subsystem.
pub use service::{Advance, QuizPhase, QuizSession};
pub use workflow::{QuizController, load_error_message};
