//! Terminal output formatting
//!
//! Display utilities for the line-based front end and the `evaluate` command.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_evaluation, print_history, print_statistics};
