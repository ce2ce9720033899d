#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod loader;
pub mod renderer;
pub mod sessions;

pub use config::QuizConfig;
pub use error::{ConfigError, DataFormatError, LoadError};
pub use loader::{QuestionLoader, QuestionSource};
pub use renderer::Renderer;
pub use sessions::{Advance, QuizController, QuizPhase, QuizSession, load_error_message};
