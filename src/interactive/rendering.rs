//! TUI rendering with ratatui
//!
//! Board, keyboard, message line, answer history and run statistics.

use super::app::App;
use crate::core::{Verdict, WORD_LENGTH};
use crate::game::{GameState, Row, Severity};
use crate::output::formatters::KEY_ROWS;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Message
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board and keyboard
            Constraint::Percentage(45), // History
        ])
        .split(chunks[1]);

    render_play_panel(f, app, main_chunks[0]);
    render_history(f, app, main_chunks[1]);
    render_message(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn verdict_style(verdict: Option<Verdict>) -> Style {
    match verdict {
        Some(Verdict::Correct) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(Verdict::Present) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Some(Verdict::Absent) => Style::default().fg(Color::White).bg(Color::DarkGray),
        None => Style::default().add_modifier(Modifier::BOLD),
    }
}

fn render_play_panel(f: &mut Frame, app: &App, area: Rect) {
    let session = app.game.session();
    let board_height = u16::try_from(session.rows().len()).unwrap_or(u16::MAX);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(board_height.saturating_add(2)),
            Constraint::Length(5),
            Constraint::Min(0),
        ])
        .split(area);

    let lines: Vec<Line> = session
        .rows()
        .iter()
        .map(|row| Line::from(board_row(row)))
        .collect();

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(" Board {} ", session.id()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, chunks[0]);

    let keyboard = session.keyboard();
    let keys: Vec<Line> = KEY_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .bytes()
                .map(|key| {
                    Span::styled(
                        format!(" {} ", char::from(key)),
                        verdict_style(keyboard.get(key)),
                    )
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(keys)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(keyboard, chunks[1]);
}

fn board_row(row: &Row) -> Vec<Span<'static>> {
    (0..WORD_LENGTH)
        .map(|col| {
            let verdict = row.feedback().map(|feedback| feedback.verdicts()[col]);
            let letter = row.letter(col).unwrap_or('·');
            Span::styled(format!(" {letter} "), verdict_style(verdict))
        })
        .collect()
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .game
        .history()
        .newest_first()
        .map(|entry| {
            let mut lines = vec![Line::from(Span::styled(
                entry.word.text().to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ))];
            if let Some(meaning) = &entry.meaning {
                lines.push(Line::from(Span::styled(
                    format!("  {meaning}"),
                    Style::default().fg(Color::Gray),
                )));
            }
            ListItem::new(lines)
        })
        .collect();

    let history = List::new(items).block(
        Block::default()
            .title(" Answers ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(history, area);
}

fn render_message(f: &mut Frame, app: &App, area: Rect) {
    let (text, style) = match &app.message {
        Some(message) => {
            let color = match message.severity {
                Severity::Info => Color::White,
                Severity::Success => Color::Green,
                Severity::Error => Color::Red,
            };
            (
                message.text.as_str(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        }
        None => ("", Style::default()),
    };

    let paragraph = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double),
        );
    f.render_widget(paragraph, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(40),
            Constraint::Percentage(35),
        ])
        .split(area);

    let session = app.game.session();
    let state_text = if session.is_validating() {
        "Checking...".to_string()
    } else {
        format!("State: {}", session.state())
    };
    f.render_widget(
        Paragraph::new(state_text).alignment(Alignment::Center),
        chunks[0],
    );

    let stats = app.game.stats();
    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}% | Streak: {}",
        stats.total_games,
        stats.win_rate(),
        stats.current_streak
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help_text = match session.state() {
        GameState::Won | GameState::Lost => "Enter: New Game | Esc: Quit",
        _ => "Enter: Submit | Ctrl-N: New Game | Esc: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
