//! Meanings for finished answers
//!
//! Enrichment is best effort: every failure is logged and turned into `None`.

use super::ServiceError;
use super::dictionary::DictionaryApi;
use super::http::{HttpClient, expect_success};
use crate::core::Word;
use log::warn;
use serde::Deserialize;

/// Produces a short human-readable note for a word
pub trait Enricher: Send + Sync {
    fn describe(&self, word: &Word) -> Option<String>;
}

/// Used in offline mode
#[derive(Debug, Clone, Copy, Default)]
pub struct NoEnrichment;

impl Enricher for NoEnrichment {
    fn describe(&self, _word: &Word) -> Option<String> {
        None
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslationResponse {
    response_data: TranslationData,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslationData {
    #[serde(default)]
    translated_text: Option<String>,
}

/// MyMemory translation API (`GET {url}?q=..&langpair=en|xx`)
#[derive(Debug, Clone)]
pub struct Translator {
    http: HttpClient,
    url: String,
    target: String,
}

impl Translator {
    pub fn new(http: HttpClient, url: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
            target: target.into(),
        }
    }

    /// Translate English `text` into the target language
    ///
    /// # Errors
    /// Network failures, unexpected statuses and unparseable bodies.
    pub fn translate(&self, text: &str) -> Result<Option<String>, ServiceError> {
        let langpair = format!("en|{}", self.target);
        let response = self
            .http
            .get(&self.url, &[("q", text), ("langpair", &langpair)])?;
        let body: TranslationResponse = expect_success(response)?.json()?;

        Ok(body
            .response_data
            .translated_text
            .filter(|t| !t.trim().is_empty()))
    }
}

/// First dictionary definition, optionally translated
///
/// If the translation fails the English definition is used instead.
#[derive(Debug, Clone)]
pub struct DefinitionEnricher {
    dictionary: DictionaryApi,
    translator: Option<Translator>,
}

impl DefinitionEnricher {
    pub const fn new(dictionary: DictionaryApi, translator: Option<Translator>) -> Self {
        Self {
            dictionary,
            translator,
        }
    }
}

impl Enricher for DefinitionEnricher {
    fn describe(&self, word: &Word) -> Option<String> {
        let definition = match self.dictionary.first_definition(word) {
            Ok(definition) => definition?,
            Err(e) => {
                warn!("definition lookup for {word} failed: {e}");
                return None;
            }
        };

        let Some(translator) = &self.translator else {
            return Some(definition);
        };

        match translator.translate(&definition) {
            Ok(Some(translated)) => Some(translated),
            Ok(None) => Some(definition),
            Err(e) => {
                warn!("translation for {word} failed: {e}");
                Some(definition)
            }
        }
    }
}
