//! Answers seen during this run, with optional meanings

use crate::core::Word;
use rustc_hash::FxHashSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub word: Word,
    /// Definition (possibly translated), filled in when the lookup completes
    pub meaning: Option<String>,
}

/// Append-only list of answers, at most one entry per word
#[derive(Debug, Clone, Default)]
pub struct History {
    seen: FxHashSet<String>,
    entries: Vec<HistoryEntry>,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a word unless it is already present
    ///
    /// Returns `true` if the word was added.
    pub fn add(&mut self, word: &Word) -> bool {
        if !self.seen.insert(word.text().to_string()) {
            return false;
        }
        self.entries.push(HistoryEntry {
            word: word.clone(),
            meaning: None,
        });
        true
    }

    /// Attach a meaning to an existing entry
    ///
    /// Returns `false` if the word is not in the history.
    pub fn annotate(&mut self, word: &Word, meaning: String) -> bool {
        match self.entries.iter_mut().find(|entry| entry.word == *word) {
            Some(entry) => {
                entry.meaning = Some(meaning);
                true
            }
            None => false,
        }
    }

    /// Entries with the most recent answer first
    pub fn newest_first(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().rev()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.seen.contains(word.text())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
