//! Dictionary API client: word existence and definitions
//!
//! Entries live at `{base}/{word}`; unknown words answer 404. Only the first
//! definition of the first meaning is used.

use super::http::{HttpClient, expect_success};
use super::{ServiceError, Validator};
use crate::core::Word;
use reqwest::StatusCode;
use reqwest::blocking::Response;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Entry {
    #[serde(default)]
    meanings: Vec<Meaning>,
}

#[derive(Debug, Deserialize)]
struct Meaning {
    #[serde(default)]
    definitions: Vec<Definition>,
}

#[derive(Debug, Deserialize)]
struct Definition {
    definition: String,
}

#[derive(Debug, Clone)]
pub struct DictionaryApi {
    http: HttpClient,
    base_url: String,
}

impl DictionaryApi {
    pub fn new(http: HttpClient, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Look up a word; `Ok(None)` means the dictionary does not know it
    fn fetch(&self, word: &Word) -> Result<Option<Response>, ServiceError> {
        let url = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            word.text().to_ascii_lowercase()
        );
        let response = self.http.get(&url, &[])?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        expect_success(response).map(Some)
    }

    /// First definition of the word, if the dictionary has one
    ///
    /// # Errors
    /// Network failures, unexpected statuses and unparseable bodies.
    pub fn first_definition(&self, word: &Word) -> Result<Option<String>, ServiceError> {
        let Some(response) = self.fetch(word)? else {
            return Ok(None);
        };
        let entries: Vec<Entry> = response.json()?;

        Ok(entries
            .into_iter()
            .next()
            .and_then(|entry| entry.meanings.into_iter().next())
            .and_then(|meaning| meaning.definitions.into_iter().next())
            .map(|definition| definition.definition)
            .filter(|text| !text.trim().is_empty()))
    }
}

impl Validator for DictionaryApi {
    fn check(&self, word: &Word) -> Result<bool, ServiceError> {
        Ok(self.fetch(word)?.is_some())
    }
}
