//! Collaborator failures
//!
//! These never reach the player: each caller decides on a fallback.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("word pool is empty")]
    EmptyPool,

    #[error("failed to read word list {path}: {source}")]
    WordList {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
