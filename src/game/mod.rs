//! Game state machine, sessions and run-wide bookkeeping

mod error;
mod event;
mod history;
mod machine;
mod session;
mod state;
mod stats;

pub use error::Rejection;
pub use event::{Command, GameEvent, MESSAGE_CLEAR_AFTER, Severity};
pub use history::{History, HistoryEntry};
pub use machine::{AnswerRequest, DEFAULT_MAX_TRIES, Game, Submitted, ValidationRequest};
pub use session::{Row, Session, SessionId};
pub use state::GameState;
pub use stats::Statistics;
