//! Top-level failures. Each one ends the process with status 1.

use thiserror::Error;

use crate::confluence::ConfluenceError;

/// Display renders the one-line `<context>: <error>` message for stderr
#[derive(Debug, Error)]
pub enum AppError {
    #[error("missing required flags: {}", .0.join(", "))]
    MissingInput(Vec<&'static str>),

    #[error("could not connect to api: {0}")]
    Connect(#[source] ConfluenceError),

    #[error("couldn't fetch results: {0}")]
    Search(#[source] ConfluenceError),

    #[error("could not encode output as json: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("could not write output: {0}")]
    Write(#[from] std::io::Error),

    #[error("could not start runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

impl AppError {
    /// Whether the usage text should accompany the message
    pub fn is_usage(&self) -> bool {
        matches!(self, AppError::MissingInput(_))
    }
}
