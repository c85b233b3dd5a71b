//! Interactive TUI interface

pub mod app;
pub mod rendering;
pub mod worker;

pub use app::{App, Message, run_tui};
pub use worker::{LookupResult, Workers};
