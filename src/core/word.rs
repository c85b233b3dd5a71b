//! Five-letter word representation
//!
//! A Word stores an uppercase 5-letter word as text and as bytes.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// Number of letters in every answer and guess
pub const WORD_LENGTH: usize = 5;

/// An uppercase 5-letter word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly {WORD_LENGTH} letters, got {0}")]
    InvalidLength(usize),
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is normalized to uppercase.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new("apple").unwrap();
    /// assert_eq!(word.text(), "APPLE");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let text = text.to_ascii_uppercase();

        let chars: [u8; WORD_LENGTH] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;

        if !chars.iter().all(u8::is_ascii_uppercase) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text, chars })
    }

    /// Build a word from letters already collected on the board
    ///
    /// # Errors
    /// Returns `WordError::InvalidCharacters` if any byte is not an ASCII letter.
    pub fn from_letters(letters: [u8; WORD_LENGTH]) -> Result<Self, WordError> {
        let chars = letters.map(|b| b.to_ascii_uppercase());
        if !chars.iter().all(u8::is_ascii_uppercase) {
            return Err(WordError::InvalidCharacters);
        }

        // All bytes are ASCII uppercase, so this is valid UTF-8
        let text = chars.iter().map(|&b| char::from(b)).collect();
        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Get the count of each letter in the word
    ///
    /// Used for feedback calculation with duplicate letters.
    #[inline]
    #[must_use]
    pub fn char_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.chars {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.trim())
    }
}
