//! Wordle - CLI
//!
//! Word-guessing game with TUI and line-based modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::{Env, Target, WriteStyle};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use wordle_game::{
    commands::{evaluate_guess, run_simple},
    config::Config,
    game::Game,
    output::print_evaluation,
    services::{FailurePolicy, Services},
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Guess the five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (default: <config dir>/wordle-game/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Use the embedded word lists only; no network access
    #[arg(long, global = true)]
    offline: bool,

    /// Guesses per game (1-10)
    #[arg(short = 't', long, global = true)]
    max_tries: Option<usize>,

    /// Reject guesses when the dictionary service cannot be reached
    #[arg(long, global = true)]
    fail_closed: bool,

    /// Write logs to this file (the TUI discards them otherwise)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,

    /// Show the feedback a guess would get against an answer
    Evaluate {
        /// The guessed word
        guess: String,

        /// The answer to score against
        answer: String,

        /// Fail unless the feedback matches this pattern (e.g. "Y-YY-")
        #[arg(long, value_name = "FEEDBACK")]
        expect: Option<String>,
    },
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);
    init_logging(matches!(command, Commands::Play), cli.log_file.as_deref())?;

    match command {
        Commands::Play => {
            let (game, services) = setup(&cli)?;
            run_play_command(game, services)
        }
        Commands::Simple => {
            let (mut game, services) = setup(&cli)?;
            run_simple(&mut game, &services)
        }
        Commands::Evaluate {
            guess,
            answer,
            expect,
        } => run_evaluate_command(&guess, &answer, expect.as_deref()),
    }
}

/// Route `log` output: a file if given, nowhere under the TUI, stderr otherwise
fn init_logging(tui: bool, log_file: Option<&Path>) -> Result<()> {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        builder
            .target(Target::Pipe(Box::new(file)))
            .write_style(WriteStyle::Never);
    } else if tui {
        builder.target(Target::Pipe(Box::new(io::sink())));
    }

    builder.init();
    Ok(())
}

/// Load the config file and apply command-line overrides
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load(cli.config.as_deref())?;

    if cli.offline {
        config.offline = true;
    }
    if let Some(max_tries) = cli.max_tries {
        config.max_tries = max_tries;
    }
    if cli.fail_closed {
        config.on_validation_failure = FailurePolicy::Reject;
    }

    config.validate()?;
    Ok(config)
}

fn setup(cli: &Cli) -> Result<(Game, Services)> {
    let config = load_config(cli)?;
    let services = Services::from_config(&config).context("failed to set up word services")?;
    Ok((Game::new(config.max_tries), services))
}

fn run_evaluate_command(guess: &str, answer: &str, expect: Option<&str>) -> Result<()> {
    let result = evaluate_guess(guess, answer).map_err(|e| anyhow::anyhow!(e))?;
    print_evaluation(&result.guess, &result.answer, &result.feedback);
    if let Some(expected) = expect {
        result.check_expected(expected).map_err(|e| anyhow::anyhow!(e))?;
    }
    Ok(())
}

fn run_play_command(game: Game, services: Services) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let app = App::new(game, services);
    run_tui(app)
}
