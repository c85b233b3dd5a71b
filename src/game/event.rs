//! Commands consumed by the state machine and notifications it publishes

use super::{GameState, SessionId};
use crate::core::{Feedback, Verdict, Word};
use std::time::Duration;

/// How long transient messages stay on screen
pub const MESSAGE_CLEAR_AFTER: Duration = Duration::from_millis(1500);

/// Player input, mapped 1:1 from whatever the front end reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    EnterLetter(char),
    Delete,
    Submit,
    Restart,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

/// State-change notification sent to every subscriber
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    SessionStarted {
        session: SessionId,
    },
    AnswerReady {
        session: SessionId,
    },
    /// A tile was filled (`Some`) or cleared (`None`)
    TileChanged {
        row: usize,
        col: usize,
        letter: Option<char>,
    },
    RowEvaluated {
        row: usize,
        guess: Word,
        feedback: Feedback,
    },
    KeyUpdated {
        letter: char,
        verdict: Verdict,
    },
    /// `clear_after: None` keeps the message until the next one
    Message {
        text: String,
        severity: Severity,
        clear_after: Option<Duration>,
    },
    StateChanged(GameState),
    HistoryChanged,
}

impl GameEvent {
    /// Transient message that clears after [`MESSAGE_CLEAR_AFTER`]
    pub fn transient(text: impl Into<String>, severity: Severity) -> Self {
        Self::Message {
            text: text.into(),
            severity,
            clear_after: Some(MESSAGE_CLEAR_AFTER),
        }
    }

    /// Message that stays until replaced
    pub fn sticky(text: impl Into<String>, severity: Severity) -> Self {
        Self::Message {
            text: text.into(),
            severity,
            clear_after: None,
        }
    }
}
