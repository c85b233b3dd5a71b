//! Formatting utilities for terminal output

use crate::core::{Feedback, KeyboardState, Verdict, Word};
use colored::{ColoredString, Colorize};

/// On-screen keyboard layout, top row first
pub const KEY_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Paint a single letter tile for a verdict (`None` = not yet evaluated)
#[must_use]
pub fn tile(letter: char, verdict: Option<Verdict>) -> ColoredString {
    let text = format!(" {letter} ");
    match verdict {
        Some(Verdict::Correct) => text.black().on_green().bold(),
        Some(Verdict::Present) => text.black().on_yellow().bold(),
        Some(Verdict::Absent) => text.white().on_bright_black(),
        None => text.bold(),
    }
}

/// A whole guess as coloured tiles
#[must_use]
pub fn colored_guess(guess: &Word, feedback: &Feedback) -> String {
    guess
        .chars()
        .iter()
        .zip(feedback.verdicts())
        .map(|(&letter, &verdict)| tile(char::from(letter), Some(verdict)).to_string())
        .collect()
}

/// Keyboard rows with each key coloured by its best verdict so far
#[must_use]
pub fn keyboard_rows(keyboard: &KeyboardState) -> Vec<String> {
    KEY_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: String = row
                .bytes()
                .map(|key| {
                    let label = char::from(key).to_string();
                    let mut painted = match keyboard.get(key) {
                        Some(Verdict::Correct) => label.black().on_green().to_string(),
                        Some(Verdict::Present) => label.black().on_yellow().to_string(),
                        Some(Verdict::Absent) => label.bright_black().to_string(),
                        None => label,
                    };
                    painted.push(' ');
                    painted
                })
                .collect();
            format!("{}{}", " ".repeat(indent), keys.trim_end())
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (value * width / max).min(width)
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
