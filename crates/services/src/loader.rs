use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info, instrument};
use url::Url;

use crate::error::{ConfigError, LoadError};

/// Where the question bank JSON lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuestionSource {
    /// An `http` or `https` URL.
    Remote(Url),
    /// A local file, given as a path or a `file://` URL.
    File(PathBuf),
}

impl QuestionSource {
    /// Interpret a user-supplied location.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::EmptySource` if `raw` is blank.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(ConfigError::EmptySource);
        }

        match Url::parse(raw) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(Self::Remote(url)),
            Ok(url) if url.scheme() == "file" => Ok(url
                .to_file_path()
                .map_or_else(|()| Self::File(PathBuf::from(raw)), Self::File)),
            // Anything else (including `C:\...` parsed as a scheme) is a path.
            _ => Ok(Self::File(PathBuf::from(raw))),
        }
    }
}

impl FromStr for QuestionSource {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for QuestionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remote(url) => write!(f, "{url}"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Fetches and decodes the raw question bank payload.
///
/// One attempt per call: no retry and no caching. Shape checks are left to
/// the session so that a bad payload surfaces as a data format error.
#[derive(Clone, Debug, Default)]
pub struct QuestionLoader {
    client: Client,
}

impl QuestionLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::with_client(Client::new())
    }

    #[must_use]
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Fetch `source` and parse it as JSON.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Http` if the request cannot be made,
    /// `LoadError::HttpStatus` for a non-success response, `LoadError::Io`
    /// if a local file cannot be read, and `LoadError::Json` if the body is
    /// not JSON.
    #[instrument(level = "info", skip(self))]
    pub async fn load(&self, source: &QuestionSource) -> Result<Value, LoadError> {
        let bytes = match source {
            QuestionSource::Remote(url) => {
                let response = self.client.get(url.clone()).send().await?;
                let status = response.status();
                if !status.is_success() {
                    return Err(LoadError::HttpStatus(status));
                }
                response.bytes().await?.to_vec()
            }
            QuestionSource::File(path) => {
                tokio::fs::read(path)
                    .await
                    .map_err(|source| LoadError::Io {
                        path: path.clone(),
                        source,
                    })?
            }
        };
        debug!(bytes = bytes.len(), "question bank fetched");

        let payload: Value = serde_json::from_slice(&bytes)?;
        info!("question bank loaded");
        Ok(payload)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
