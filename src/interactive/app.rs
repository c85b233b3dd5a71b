//! TUI application state and logic

use super::worker::{LookupResult, Workers};
use crate::game::{Command, Game, GameEvent, Severity};
use crate::services::Services;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

/// How long the event loop waits for a key before draining lookups
const TICK: Duration = Duration::from_millis(50);

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub severity: Severity,
    expires: Option<Instant>,
}

/// Application state
pub struct App {
    pub game: Game,
    pub message: Option<Message>,
    pub should_quit: bool,
    events: Receiver<GameEvent>,
    workers: Workers,
}

impl App {
    #[must_use]
    pub fn new(mut game: Game, services: Services) -> Self {
        let events = game.subscribe();
        Self {
            game,
            message: None,
            should_quit: false,
            events,
            workers: Workers::new(services),
        }
    }

    /// Start a new session and ask for its answer in the background
    pub fn new_game(&mut self) {
        let request = self.game.start_game();
        self.workers.fetch_answer(request);
        self.drain_events();
    }

    pub fn handle_command(&mut self, command: Command) {
        // Rejections surface as game messages
        match command {
            Command::EnterLetter(ch) => {
                let _ = self.game.enter_letter(ch);
            }
            Command::Delete => {
                let _ = self.game.delete_letter();
            }
            Command::Submit => {
                if let Ok(request) = self.game.begin_submit() {
                    self.workers.validate(request);
                }
            }
            Command::Restart => self.new_game(),
        }
        self.drain_events();
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.handle_command(Command::Restart),
            KeyCode::Enter if self.game.session().state().is_terminal() => {
                self.handle_command(Command::Restart);
            }
            KeyCode::Enter => self.handle_command(Command::Submit),
            KeyCode::Backspace => self.handle_command(Command::Delete),
            KeyCode::Char(ch) if !ctrl && ch.is_ascii_alphabetic() => {
                self.handle_command(Command::EnterLetter(ch));
            }
            _ => {}
        }
    }

    /// Apply one finished lookup; stale results are dropped by the game
    pub fn apply(&mut self, result: LookupResult) {
        match result {
            LookupResult::Answer { session, word } => {
                let _ = self.game.resolve_answer(session, word);
            }
            LookupResult::Validity { request, valid } => {
                if let Ok(submitted) = self.game.complete_submit(&request, valid)
                    && let Some(word) = submitted.enrich
                {
                    self.workers.describe(word);
                }
            }
            LookupResult::Meaning { word, meaning } => {
                self.game.apply_enrichment(&word, meaning);
            }
        }
        self.drain_events();
    }

    /// Drain finished lookups and expire the current message
    pub fn tick(&mut self) {
        let finished: Vec<LookupResult> = self.workers.results().collect();
        for result in finished {
            self.apply(result);
        }

        if let Some(message) = &self.message
            && message.expires.is_some_and(|at| Instant::now() >= at)
        {
            self.message = None;
        }
    }

    fn drain_events(&mut self) {
        for event in self.events.try_iter() {
            if let GameEvent::Message {
                text,
                severity,
                clear_after,
            } = event
            {
                self.message = Some(Message {
                    text,
                    severity,
                    expires: clear_after.map(|after| Instant::now() + after),
                });
            }
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    app.new_game();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
        {
            app.handle_key(key);
        }
        app.tick();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
