//! Command implementations

pub mod evaluate;
pub mod simple;

pub use evaluate::{Evaluation, evaluate_guess};
pub use simple::{play_lines, run_simple};
