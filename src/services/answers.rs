//! Answer selection
//!
//! Sources never fail: a remote source that errors or keeps returning unusable
//! words falls back to the embedded pool.

use super::ServiceError;
use super::http::{HttpClient, expect_success};
use crate::core::Word;
use crate::wordlists::{ANSWERS, loader::words_from_slice};
use log::{debug, warn};
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;

/// Default number of remote attempts before falling back
pub const DEFAULT_ANSWER_ATTEMPTS: usize = 5;

/// Provides the secret word for a new session
pub trait AnswerSource: Send + Sync {
    /// Return a word not in `excluded` when possible
    fn next(&self, excluded: &FxHashSet<String>) -> Word;
}

/// Fixed list of answers, picked uniformly at random
#[derive(Debug, Clone)]
pub struct FallbackPool {
    words: Vec<Word>,
}

impl FallbackPool {
    /// # Errors
    /// Returns [`ServiceError::EmptyPool`] if `words` is empty.
    pub fn new(words: Vec<Word>) -> Result<Self, ServiceError> {
        if words.is_empty() {
            return Err(ServiceError::EmptyPool);
        }
        Ok(Self { words })
    }

    /// Pool compiled into the binary
    ///
    /// # Panics
    /// Will not panic - the build script rejects an empty answer list.
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(words_from_slice(ANSWERS)).expect("embedded answer list is not empty")
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Pick a word not in `excluded`; once every word is used, the first one
    pub fn pick<R: Rng + ?Sized>(&self, excluded: &FxHashSet<String>, rng: &mut R) -> Word {
        let candidates: Vec<&Word> = self
            .words
            .iter()
            .filter(|word| !excluded.contains(word.text()))
            .collect();

        match candidates.choose(rng) {
            Some(&word) => word.clone(),
            None => {
                debug!("fallback pool exhausted, reusing {}", self.words[0]);
                self.words[0].clone()
            }
        }
    }
}

impl AnswerSource for FallbackPool {
    fn next(&self, excluded: &FxHashSet<String>) -> Word {
        self.pick(excluded, &mut rand::rng())
    }
}

/// Random-word service (`GET {url}?number=1&length=5` -> `["word"]`)
#[derive(Debug, Clone)]
pub struct RandomWordApi {
    http: HttpClient,
    url: String,
    attempts: usize,
    fallback: FallbackPool,
}

impl RandomWordApi {
    pub fn new(http: HttpClient, url: impl Into<String>, fallback: FallbackPool) -> Self {
        Self {
            http,
            url: url.into(),
            attempts: DEFAULT_ANSWER_ATTEMPTS,
            fallback,
        }
    }

    #[must_use]
    pub fn with_attempts(mut self, attempts: usize) -> Self {
        self.attempts = attempts;
        self
    }

    fn fetch(&self) -> Result<String, ServiceError> {
        let response = self.http.get(&self.url, &[("number", "1"), ("length", "5")])?;
        let words: Vec<String> = expect_success(response)?.json()?;

        words
            .into_iter()
            .next()
            .ok_or_else(|| ServiceError::Malformed("empty word list".to_string()))
    }
}

impl AnswerSource for RandomWordApi {
    fn next(&self, excluded: &FxHashSet<String>) -> Word {
        for attempt in 1..=self.attempts {
            match self.fetch() {
                Ok(text) => match Word::new(&text) {
                    Ok(word) if !excluded.contains(word.text()) => return word,
                    Ok(word) => debug!("attempt {attempt}: {word} already used"),
                    Err(e) => debug!("attempt {attempt}: rejected '{text}': {e}"),
                },
                Err(e) => {
                    warn!("random word lookup failed: {e}");
                    break;
                }
            }
        }

        self.fallback.next(excluded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn pool(words: &[&str]) -> FallbackPool {
        FallbackPool::new(words_from_slice(words)).unwrap()
    }

    #[test]
    fn empty_pool_is_rejected() {
        assert!(matches!(
            FallbackPool::new(Vec::new()),
            Err(ServiceError::EmptyPool)
        ));
    }

    #[test]
    fn pick_skips_excluded() {
        let pool = pool(&["apple", "grape", "lemon"]);
        let excluded: FxHashSet<String> =
            ["APPLE", "LEMON"].map(String::from).into_iter().collect();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            assert_eq!(pool.pick(&excluded, &mut rng).text(), "GRAPE");
        }
    }

    #[test]
    fn pick_when_exhausted_returns_first() {
        let pool = pool(&["apple", "grape"]);
        let excluded: FxHashSet<String> =
            ["APPLE", "GRAPE"].map(String::from).into_iter().collect();
        let mut rng = StdRng::seed_from_u64(7);

        assert_eq!(pool.pick(&excluded, &mut rng).text(), "APPLE");
    }

    #[test]
    fn embedded_pool_has_classic_words() {
        let pool = FallbackPool::embedded();
        for word in ["APPLE", "MUSIC", "WATER"] {
            assert!(pool.words().iter().any(|w| w.text() == word));
        }
    }

    #[test]
    fn embedded_pool_is_drained_without_repeats() {
        let pool = FallbackPool::embedded();
        let mut used = FxHashSet::default();

        for _ in 0..pool.words().len() {
            let word = pool.next(&used);
            assert!(used.insert(word.text().to_string()), "{word} repeated");
        }
    }
}
