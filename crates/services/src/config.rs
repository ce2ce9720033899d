use std::env;

use quiz_core::sampler::DEFAULT_SAMPLE_SIZE;

use crate::error::ConfigError;
use crate::loader::QuestionSource;

/// Runtime knobs for one quiz.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizConfig {
    pub source: QuestionSource,
    pub sample_size: usize,
    /// Fixed RNG seed; `None` draws a fresh sample every run.
    pub seed: Option<u64>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            source: QuestionSource::File(Self::DEFAULT_SOURCE.into()),
            sample_size: DEFAULT_SAMPLE_SIZE,
            seed: None,
        }
    }
}

impl QuizConfig {
    pub const DEFAULT_SOURCE: &'static str = "questions.json";

    pub const SOURCE_VAR: &'static str = "QUIZ_SOURCE";
    pub const COUNT_VAR: &'static str = "QUIZ_COUNT";
    pub const SEED_VAR: &'static str = "QUIZ_SEED";

    /// Read `QUIZ_SOURCE`, `QUIZ_COUNT` and `QUIZ_SEED`, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`QuizConfig::from_env`] with an injectable variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unusable value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = lookup(Self::SOURCE_VAR).filter(|value| !value.trim().is_empty()) {
            config.source = QuestionSource::parse(&raw)?;
        }
        if let Some(raw) = lookup(Self::COUNT_VAR) {
            config.sample_size = parse_count(&raw)?;
        }
        if let Some(raw) = lookup(Self::SEED_VAR) {
            config.seed = Some(parse_seed(&raw)?);
        }

        Ok(config)
    }
}

/// Parse a question count; zero is rejected.
///
/// # Errors
///
/// Returns `ConfigError::InvalidCount` for non-numeric or zero input.
pub fn parse_count(raw: &str) -> Result<usize, ConfigError> {
    match raw.trim().parse::<usize>() {
        Ok(count) if count > 0 => Ok(count),
        _ => Err(ConfigError::InvalidCount {
            raw: raw.to_string(),
        }),
    }
}

/// # Errors
///
/// Returns `ConfigError::InvalidSeed` for non-numeric input.
pub fn parse_seed(raw: &str) -> Result<u64, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidSeed {
        raw: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::path::PathBuf;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = QuizConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, QuizConfig::default());
        assert_eq!(config.sample_size, 20);
        assert_eq!(config.source, QuestionSource::File(PathBuf::from("questions.json")));
    }

    #[test]
    fn reads_all_variables() {
        let config = QuizConfig::from_lookup(lookup(&[
            ("QUIZ_SOURCE", "https://example.com/bank.json"),
            ("QUIZ_COUNT", "5"),
            ("QUIZ_SEED", "42"),
        ]))
        .unwrap();
        assert!(matches!(config.source, QuestionSource::Remote(_)));
        assert_eq!(config.sample_size, 5);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn zero_count_is_rejected() {
        let err = QuizConfig::from_lookup(lookup(&[("QUIZ_COUNT", "0")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidCount { raw: "0".into() });
    }

    #[test]
    fn bad_seed_is_rejected() {
        assert!(matches!(
            parse_seed("lucky"),
            Err(ConfigError::InvalidSeed { .. })
        ));
    }
}
