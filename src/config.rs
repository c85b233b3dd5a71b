//! Runtime configuration
//!
//! Read from a TOML file; every field has a default so an empty or missing
//! file is valid. Command-line flags are applied on top by the binary.
//!
//! ```toml
//! max-tries = 6
//! offline = false
//! on-validation-failure = "accept"   # or "reject"
//! translate-to = "ko"                # "none" or "en" keeps English definitions
//! timeout-secs = 5
//! answer-attempts = 5
//! answer-pool = "/path/to/answers.txt"   # optional
//!
//! [endpoints]
//! random-word = "https://random-word-api.herokuapp.com/word"
//! dictionary = "https://api.dictionaryapi.dev/api/v2/entries/en"
//! translate = "https://api.mymemory.translated.net/get"
//! ```

use crate::game::DEFAULT_MAX_TRIES;
use crate::services::{DEFAULT_ANSWER_ATTEMPTS, FailurePolicy};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::{fs, io};
use thiserror::Error;

/// Upper bound for `max-tries`
pub const MAX_TRIES_LIMIT: usize = 10;

const CONFIG_DIR: &str = "wordle-game";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("{field} must be {expected}, got {value}")]
    OutOfRange {
        field: &'static str,
        expected: &'static str,
        value: u64,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Endpoints {
    pub random_word: String,
    pub dictionary: String,
    pub translate: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            random_word: "https://random-word-api.herokuapp.com/word".to_string(),
            dictionary: "https://api.dictionaryapi.dev/api/v2/entries/en".to_string(),
            translate: "https://api.mymemory.translated.net/get".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    /// Guesses per game
    pub max_tries: usize,
    /// Use only the embedded word lists; no network access
    pub offline: bool,
    /// Policy when the dictionary service cannot be reached
    pub on_validation_failure: FailurePolicy,
    /// Language code definitions are translated into
    pub translate_to: String,
    pub timeout_secs: u64,
    /// Random-word requests before falling back to the answer pool
    pub answer_attempts: usize,
    /// File with one answer per line, replacing the embedded fallback pool
    pub answer_pool: Option<PathBuf>,
    pub endpoints: Endpoints,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_tries: DEFAULT_MAX_TRIES,
            offline: false,
            on_validation_failure: FailurePolicy::default(),
            translate_to: "ko".to_string(),
            timeout_secs: 5,
            answer_attempts: DEFAULT_ANSWER_ATTEMPTS,
            answer_pool: None,
            endpoints: Endpoints::default(),
        }
    }
}

impl Config {
    /// Default location: `<config dir>/wordle-game/config.toml`
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load configuration
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// used if the file exists, and built-in defaults otherwise.
    ///
    /// # Errors
    /// Returns `ConfigError` if the file cannot be read or parsed, or holds
    /// out-of-range values.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) if path.is_file() => path,
                _ => return Ok(Self::default()),
            },
        };

        let text = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let config = Self::from_toml(&text).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;
        config.validate()?;

        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse configuration text without validating ranges
    ///
    /// # Errors
    /// Returns the TOML error for malformed input or unknown keys.
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// # Errors
    /// Returns `ConfigError::OutOfRange` for the first invalid field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_TRIES_LIMIT).contains(&self.max_tries) {
            return Err(ConfigError::OutOfRange {
                field: "max-tries",
                expected: "between 1 and 10",
                value: self.max_tries as u64,
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::OutOfRange {
                field: "timeout-secs",
                expected: "at least 1",
                value: 0,
            });
        }
        if self.answer_attempts == 0 {
            return Err(ConfigError::OutOfRange {
                field: "answer-attempts",
                expected: "at least 1",
                value: 0,
            });
        }
        Ok(())
    }

    /// Target language for translated definitions, if translation is enabled
    #[must_use]
    pub fn translation_target(&self) -> Option<&str> {
        let lang = self.translate_to.trim();
        let disabled = lang.is_empty()
            || lang.eq_ignore_ascii_case("en")
            || lang.eq_ignore_ascii_case("none");
        (!disabled).then_some(lang)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.max_tries, 6);
        assert_eq!(config.on_validation_failure, FailurePolicy::Accept);
        assert_eq!(config.translation_target(), Some("ko"));
    }

    #[test]
    fn partial_config_overrides() {
        let config = Config::from_toml(
            r#"
            max-tries = 4
            on-validation-failure = "reject"
            translate-to = "en"

            [endpoints]
            dictionary = "http://localhost:9999/entries"
            "#,
        )
        .unwrap();

        assert_eq!(config.max_tries, 4);
        assert_eq!(config.on_validation_failure, FailurePolicy::Reject);
        assert_eq!(config.translation_target(), None);
        assert_eq!(config.endpoints.dictionary, "http://localhost:9999/entries");
        assert_eq!(config.endpoints.translate, Endpoints::default().translate);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(Config::from_toml("max-guesses = 3").is_err());
    }

    #[test]
    fn out_of_range_values() {
        let config = Config {
            max_tries: 0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OutOfRange {
                field: "max-tries",
                ..
            })
        ));

        let config = Config {
            timeout_secs: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "offline = true\nmax-tries = 8").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert!(config.offline);
        assert_eq!(config.max_tries, 8);
    }

    #[test]
    fn load_reports_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max-tries = 42").unwrap();
        assert!(matches!(
            Config::load(Some(file.path())),
            Err(ConfigError::OutOfRange { .. })
        ));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max-tries = \"six\"").unwrap();
        assert!(matches!(
            Config::load(Some(file.path())),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn load_missing_explicit_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(matches!(
            Config::load(Some(&missing)),
            Err(ConfigError::Io { .. })
        ));
    }
}
