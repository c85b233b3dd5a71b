//! External collaborators: answer selection, validation and enrichment
//!
//! Each collaborator sits behind a small trait so the game can run against
//! the network services, the embedded word lists or test doubles.

mod answers;
mod dictionary;
mod enrichment;
mod error;
mod http;
mod validation;

pub use answers::{AnswerSource, DEFAULT_ANSWER_ATTEMPTS, FallbackPool, RandomWordApi};
pub use dictionary::DictionaryApi;
pub use enrichment::{DefinitionEnricher, Enricher, NoEnrichment, Translator};
pub use error::ServiceError;
pub use http::HttpClient;
pub use validation::{FailurePolicy, Layered, Validation, Validator, WordListValidator};

use crate::config::Config;
use crate::wordlists::loader::load_from_file;
use log::info;
use std::sync::Arc;
use std::time::Duration;

/// The collaborators one game talks to
///
/// Cheap to clone; worker threads get their own handle.
#[derive(Clone)]
pub struct Services {
    pub answers: Arc<dyn AnswerSource>,
    pub validation: Arc<Validation>,
    pub enricher: Arc<dyn Enricher>,
}

impl Services {
    pub fn new(
        answers: impl AnswerSource + 'static,
        validation: Validation,
        enricher: impl Enricher + 'static,
    ) -> Self {
        Self {
            answers: Arc::new(answers),
            validation: Arc::new(validation),
            enricher: Arc::new(enricher),
        }
    }

    /// Embedded answer pool and word list only
    #[must_use]
    pub fn offline() -> Self {
        Self::new(
            FallbackPool::embedded(),
            Validation::new(WordListValidator::embedded(), FailurePolicy::Reject),
            NoEnrichment,
        )
    }

    /// Build the collaborators described by `config`
    ///
    /// # Errors
    /// Returns an error if the answer pool file cannot be read or is empty, or
    /// if the HTTP client cannot be created.
    pub fn from_config(config: &Config) -> Result<Self, ServiceError> {
        let pool = match &config.answer_pool {
            Some(path) => {
                let words = load_from_file(path).map_err(|source| ServiceError::WordList {
                    path: path.clone(),
                    source,
                })?;
                FallbackPool::new(words)?
            }
            None => FallbackPool::embedded(),
        };

        if config.offline {
            info!("offline mode: using embedded word lists");
            return Ok(Self::new(
                pool,
                Validation::new(WordListValidator::embedded(), config.on_validation_failure),
                NoEnrichment,
            ));
        }

        let http = HttpClient::new(Duration::from_secs(config.timeout_secs))?;
        let endpoints = &config.endpoints;
        let dictionary = DictionaryApi::new(http.clone(), &endpoints.dictionary);

        let answers = RandomWordApi::new(http.clone(), &endpoints.random_word, pool)
            .with_attempts(config.answer_attempts);
        let validation = Validation::new(
            Layered::new(WordListValidator::embedded(), dictionary.clone()),
            config.on_validation_failure,
        );
        let translator = config
            .translation_target()
            .map(|lang| Translator::new(http, &endpoints.translate, lang));

        info!(
            "online mode: validation failures {:?}, translation {}",
            config.on_validation_failure,
            config.translation_target().unwrap_or("off")
        );
        Ok(Self::new(
            answers,
            validation,
            DefinitionEnricher::new(dictionary, translator),
        ))
    }
}
