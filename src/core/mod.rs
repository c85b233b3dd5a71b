//! Core domain types for the game
//!
//! This module contains the word, verdict and feedback types plus the keyboard
//! aggregation. All types here are pure and have no I/O.

mod feedback;
mod keyboard;
mod verdict;
mod word;

pub use feedback::Feedback;
pub use keyboard::KeyboardState;
pub use verdict::Verdict;
pub use word::{WORD_LENGTH, Word, WordError};
