//! Per-game board state

use super::GameState;
use crate::core::{Feedback, KeyboardState, WORD_LENGTH, Word};
use std::fmt;

/// Identifies one play-through; lookups issued for it carry this id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(pub(crate) u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One row of the board
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    letters: [Option<u8>; WORD_LENGTH],
    feedback: Option<Feedback>,
}

impl Row {
    #[must_use]
    pub fn letter(&self, col: usize) -> Option<char> {
        self.letters.get(col).copied().flatten().map(char::from)
    }

    /// Verdicts, once the row has been submitted and accepted
    #[must_use]
    pub const fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    /// The guess in this row, if all letters are filled
    pub(crate) fn word(&self) -> Option<Word> {
        let mut letters = [0u8; WORD_LENGTH];
        for (slot, letter) in letters.iter_mut().zip(self.letters) {
            *slot = letter?;
        }
        Word::from_letters(letters).ok()
    }
}

/// Everything that belongs to a single game
///
/// Only the state machine mutates a session; front ends read it.
#[derive(Debug, Clone)]
pub struct Session {
    pub(crate) id: SessionId,
    pub(crate) state: GameState,
    pub(crate) answer: Option<Word>,
    pub(crate) rows: Vec<Row>,
    pub(crate) row: usize,
    pub(crate) col: usize,
    pub(crate) keyboard: KeyboardState,
    /// Row whose validity lookup is outstanding
    pub(crate) pending: Option<usize>,
}

impl Session {
    pub(crate) fn new(id: SessionId, max_tries: usize) -> Self {
        Self {
            id,
            state: GameState::AwaitingAnswer,
            answer: None,
            rows: vec![Row::default(); max_tries],
            row: 0,
            col: 0,
            keyboard: KeyboardState::new(),
            pending: None,
        }
    }

    #[must_use]
    pub const fn id(&self) -> SessionId {
        self.id
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Current row index, equal to the number of accepted guesses
    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    #[must_use]
    pub const fn col(&self) -> usize {
        self.col
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    /// The secret word; front ends should only reveal it once the game is over
    #[must_use]
    pub const fn answer(&self) -> Option<&Word> {
        self.answer.as_ref()
    }

    #[must_use]
    pub const fn is_validating(&self) -> bool {
        self.pending.is_some()
    }

    pub(crate) fn set_letter(&mut self, row: usize, col: usize, letter: Option<u8>) {
        if let Some(slot) = self.rows.get_mut(row).and_then(|r| r.letters.get_mut(col)) {
            *slot = letter;
        }
    }

    pub(crate) fn set_feedback(&mut self, row: usize, feedback: Feedback) {
        if let Some(r) = self.rows.get_mut(row) {
            r.feedback = Some(feedback);
        }
    }

    pub(crate) fn current_word(&self) -> Option<Word> {
        self.rows.get(self.row).and_then(Row::word)
    }
}
