//! Display functions for game results

use super::formatters::{colored_guess, create_progress_bar, keyboard_rows, tile};
use crate::core::{Feedback, Word};
use crate::game::{History, Session, Statistics};
use colored::Colorize;

/// Print the feedback for one guess against a known answer
pub fn print_evaluation(guess: &Word, answer: &Word, feedback: &Feedback) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess {} against {}",
        guess.text().bright_yellow().bold(),
        answer.text().bright_cyan().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    println!("\n  {}", colored_guess(guess, feedback));
    println!("  {}  {}", feedback.to_emoji(), feedback);

    for (i, (&letter, verdict)) in guess.chars().iter().zip(feedback.verdicts()).enumerate() {
        println!("   {}. {} {verdict}", i + 1, char::from(letter));
    }
    println!();
}

/// Print the board so far: submitted rows coloured, the current row plain
pub fn print_board(session: &Session) {
    println!();
    for (index, row) in session.rows().iter().enumerate() {
        if index > session.row() {
            break;
        }
        let line: String = (0..crate::core::WORD_LENGTH)
            .map(|col| {
                let verdict = row.feedback().map(|f| f.verdicts()[col]);
                tile(row.letter(col).unwrap_or('·'), verdict).to_string()
            })
            .collect();
        if row.letter(0).is_some() {
            println!("  {line}");
        }
    }
    println!();
    for line in keyboard_rows(session.keyboard()) {
        println!("  {line}");
    }
    println!();
}

/// Print answers from this run, most recent first
pub fn print_history(history: &History) {
    if history.is_empty() {
        return;
    }

    println!("📖 {}", "Answers so far:".bright_cyan().bold());
    for entry in history.newest_first() {
        match &entry.meaning {
            Some(meaning) => println!("   {} - {meaning}", entry.word.text().bold()),
            None => println!("   {}", entry.word.text().bold()),
        }
    }
    println!();
}

/// Print win rate, streaks and the guess distribution
pub fn print_statistics(stats: &Statistics) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(" {} ", "STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(40).cyan());

    println!("   Played:          {}", stats.total_games);
    println!(
        "   Win rate:        {}",
        format!("{:.0}%", stats.win_rate()).bright_yellow().bold()
    );
    println!("   Current streak:  {}", stats.current_streak);
    println!("   Max streak:      {}", stats.max_streak);

    let max = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (i, &count) in stats.guess_distribution.iter().enumerate() {
        let bar = create_progress_bar(count, max, 20);
        println!("   {}: {} {count}", i + 1, bar.green());
    }
    println!();
}
