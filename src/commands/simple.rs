//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: each line is a whole guess or a command.

use crate::core::WORD_LENGTH;
use crate::game::{Command, Game, GameEvent, Severity};
use crate::output::{print_board, print_history, print_statistics};
use crate::services::Services;
use anyhow::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, BufRead, Write};
use std::sync::mpsc::Receiver;
use std::time::Duration;

/// Run the simple interactive CLI mode on stdin
///
/// # Errors
///
/// Returns an error if reading input or writing the prompt fails.
pub fn run_simple(game: &mut Game, services: &Services) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Wordle - Simple Mode                        ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the {WORD_LENGTH}-letter word in {} tries.", game.max_tries());
    println!("  - {} right letter, right spot", " G ".black().on_green());
    println!("  - {} in the word, wrong spot", " Y ".black().on_yellow());
    println!("  - {} not in the word\n", " - ".white().on_bright_black());
    println!("Commands: 'new' for a new game, 'stats', 'history', 'quit' to exit\n");

    play_lines(game, services, io::stdin().lock())
}

/// Drive a game from lines of input until `quit` or end of input
///
/// # Errors
///
/// Returns an error if reading input or flushing the prompt fails.
pub fn play_lines<R: BufRead>(game: &mut Game, services: &Services, mut input: R) -> Result<()> {
    let events = game.subscribe();
    restart(game, services);
    print_messages(&events);

    loop {
        let Some(line) = get_user_input(&mut input, &prompt(game))? else {
            break;
        };

        match line.to_lowercase().as_str() {
            "" => {}
            "quit" | "q" | "exit" => break,
            "new" | "n" => restart(game, services),
            "stats" | "s" => print_statistics(game.stats()),
            "history" | "h" => print_history(game.history()),
            guess => {
                if game.session().state().is_terminal() {
                    println!("Game over. Type 'new' to play again.\n");
                } else {
                    play_guess(game, services, guess);
                }
            }
        }

        print_messages(&events);
    }

    if game.stats().total_games > 0 {
        print_statistics(game.stats());
    }
    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

fn play_guess(game: &mut Game, services: &Services, guess: &str) {
    if guess.chars().count() > WORD_LENGTH {
        println!("{}", format!("Guesses have {WORD_LENGTH} letters").red());
        return;
    }
    if let Some(ch) = guess.chars().find(|ch| !ch.is_ascii_alphabetic()) {
        println!("{}", format!("'{ch}' is not a letter").red());
        return;
    }

    // A rejected word stays in the row; start the line from scratch
    while game.session().col() > 0 {
        if game.dispatch(Command::Delete, services).is_err() {
            break;
        }
    }
    for ch in guess.chars() {
        if game.dispatch(Command::EnterLetter(ch), services).is_err() {
            return;
        }
    }

    let submitted = with_spinner("Checking word...", || {
        game.dispatch(Command::Submit, services)
    });

    if let Ok(Some(submitted)) = submitted {
        print_board(game.session());
        if submitted.state.is_terminal() {
            print_history(game.history());
            println!("Type 'new' to play again or 'quit' to exit.\n");
        }
    }
}

fn restart(game: &mut Game, services: &Services) {
    // Restart only fails on a stale answer, which cannot happen inline
    let _ = with_spinner("Picking a word...", || {
        game.dispatch(Command::Restart, services)
    });
}

fn prompt(game: &Game) -> String {
    let session = game.session();
    if session.state().is_terminal() {
        "Command".to_string()
    } else {
        format!("Guess {}/{}", session.row() + 1, game.max_tries())
    }
}

fn print_messages(events: &Receiver<GameEvent>) {
    for event in events.try_iter() {
        if let GameEvent::Message { text, severity, .. } = event {
            let text = match severity {
                Severity::Info => text.cyan(),
                Severity::Success => text.bright_green().bold(),
                Severity::Error => text.red(),
            };
            println!("  {text}");
        }
    }
}

fn with_spinner<T>(message: &str, f: impl FnOnce() -> T) -> T {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));

    let result = f();
    spinner.finish_and_clear();
    result
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input<R: BufRead>(input: &mut R, prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
