//! Rejected operations
//!
//! A rejection never changes the session; the caller may show it and carry on.

use super::Severity;
use crate::core::Word;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("Not enough letters")]
    Incomplete,
    #[error("Not in word list: {0}")]
    NotAWord(Word),
    #[error("Loading the word...")]
    AnswerPending,
    #[error("Still checking the previous guess...")]
    ValidationPending,
    #[error("The game is over. Start a new game to play again")]
    GameOver,
    #[error("'{0}' is not a letter")]
    InvalidLetter(char),
    #[error("The row is full")]
    RowFull,
    #[error("Nothing to delete")]
    NothingToDelete,
    /// A lookup result arrived for a session or row that is no longer current
    #[error("Result belongs to a previous game or row")]
    Stale,
}

impl Rejection {
    /// Severity of the message shown to the player, or `None` to ignore silently
    #[must_use]
    pub const fn severity(&self) -> Option<Severity> {
        match self {
            Self::Incomplete | Self::NotAWord(_) => Some(Severity::Error),
            Self::AnswerPending | Self::ValidationPending | Self::GameOver => {
                Some(Severity::Info)
            }
            Self::InvalidLetter(_)
            | Self::RowFull
            | Self::NothingToDelete
            | Self::Stale => None,
        }
    }
}
