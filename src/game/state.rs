//! Session lifecycle states

use std::fmt;

/// Where a session is in its lifecycle
///
/// `AwaitingAnswer -> InProgress -> Won | Lost`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// Answer has been requested but not resolved yet
    AwaitingAnswer,
    /// Accepting letters and guesses
    InProgress,
    Won,
    Lost,
}

impl GameState {
    /// Check if no further input is accepted until a restart
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::AwaitingAnswer => "Loading",
            Self::InProgress => "Playing",
            Self::Won => "Won",
            Self::Lost => "Lost",
        };
        f.write_str(label)
    }
}
