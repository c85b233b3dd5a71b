//! Guess validation with a per-run cache and an explicit failure policy

use super::ServiceError;
use crate::core::Word;
use crate::wordlists::ALLOWED;
use log::warn;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, PoisonError};

/// Decides whether a word is an accepted guess
pub trait Validator: Send + Sync {
    /// # Errors
    /// Returns an error if the lookup itself failed (as opposed to "not a word").
    fn check(&self, word: &Word) -> Result<bool, ServiceError>;
}

/// What to do when the validator cannot be reached
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Treat the guess as valid (fail open)
    #[default]
    Accept,
    /// Treat the guess as invalid (fail closed)
    Reject,
}

/// Offline word list
#[derive(Debug, Clone, Default)]
pub struct WordListValidator {
    words: FxHashSet<String>,
}

impl WordListValidator {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_ascii_uppercase())
                .collect(),
        }
    }

    /// List compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(ALLOWED)
    }
}

impl<V: Validator + ?Sized> Validator for Arc<V> {
    fn check(&self, word: &Word) -> Result<bool, ServiceError> {
        (**self).check(word)
    }
}

impl Validator for WordListValidator {
    fn check(&self, word: &Word) -> Result<bool, ServiceError> {
        Ok(self.words.contains(word.text()))
    }
}

/// Consult `local` first and only ask `remote` about words it does not know
#[derive(Debug, Clone)]
pub struct Layered<L, R> {
    local: L,
    remote: R,
}

impl<L: Validator, R: Validator> Layered<L, R> {
    pub const fn new(local: L, remote: R) -> Self {
        Self { local, remote }
    }
}

impl<L: Validator, R: Validator> Validator for Layered<L, R> {
    fn check(&self, word: &Word) -> Result<bool, ServiceError> {
        if self.local.check(word)? {
            return Ok(true);
        }
        self.remote.check(word)
    }
}

/// Validator front end used by the game
///
/// Successful answers are cached per word for the lifetime of this value.
/// Failed lookups are resolved by the [`FailurePolicy`] and are not cached,
/// so a temporary outage does not permanently accept a word.
pub struct Validation {
    validator: Box<dyn Validator>,
    policy: FailurePolicy,
    cache: Mutex<FxHashMap<String, bool>>,
}

impl Validation {
    pub fn new(validator: impl Validator + 'static, policy: FailurePolicy) -> Self {
        Self {
            validator: Box::new(validator),
            policy,
            cache: Mutex::new(FxHashMap::default()),
        }
    }

    /// Cached answer for a word, if any
    #[must_use]
    pub fn cached(&self, word: &Word) -> Option<bool> {
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(word.text())
            .copied()
    }

    #[must_use]
    pub fn is_valid(&self, word: &Word) -> bool {
        if let Some(valid) = self.cached(word) {
            return valid;
        }

        match self.validator.check(word) {
            Ok(valid) => {
                self.cache
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .insert(word.text().to_string(), valid);
                valid
            }
            Err(e) => {
                let accept = self.policy == FailurePolicy::Accept;
                warn!(
                    "validation of {word} failed ({e}); {}",
                    if accept { "accepting" } else { "rejecting" }
                );
                accept
            }
        }
    }
}
