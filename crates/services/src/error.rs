//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

pub use quiz_core::model::DataFormatError;

/// Errors emitted while fetching the question bank.
///
/// Every variant is fatal for the session; there is no retry.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error("Network request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Network response was not ok: {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("response is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while reading quiz configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("question count must be at least 1, got {raw:?}")]
    InvalidCount { raw: String },
    #[error("seed must be an unsigned integer, got {raw:?}")]
    InvalidSeed { raw: String },
    #[error("question source must not be empty")]
    EmptySource,
}
