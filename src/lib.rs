//! Wordle Game
//!
//! A five-letter word-guessing game with a terminal UI, a line-based mode and
//! pluggable collaborators for answers, dictionary checks and word meanings.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Feedback, Verdict, Word};
//! use wordle_game::game::{Command, Game, GameState};
//! use wordle_game::services::Services;
//!
//! // Score a guess
//! let guess = Word::new("grape").unwrap();
//! let answer = Word::new("apple").unwrap();
//! let feedback = Feedback::evaluate(&guess, &answer);
//! assert_eq!(feedback.verdicts()[4], Verdict::Correct);
//!
//! // Drive a game with the embedded word lists
//! let services = Services::offline();
//! let mut game = Game::default();
//! game.dispatch(Command::Restart, &services).unwrap();
//! assert_eq!(game.session().state(), GameState::InProgress);
//! ```

// Core domain types
pub mod core;

// Game state machine
pub mod game;

// Answer, validation and enrichment collaborators
pub mod services;

// Runtime configuration
pub mod config;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
