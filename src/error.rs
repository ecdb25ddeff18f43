//! Error types for fetching the collection and driving a quiz session.

use thiserror::Error;

/// Errors that can occur while loading the item collection.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The configured request timeout elapsed.
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    /// The body was not a JSON array of quiz items.
    #[error("malformed collection: {0}")]
    Parse(String),

    /// The background fetch could not be started.
    #[error("fetch worker failed: {0}")]
    Runtime(String),
}

/// Errors returned by quiz session transitions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("invalid selection {choice:?} for item {index}")]
    InvalidSelection { index: usize, choice: String },

    #[error("session is already completed")]
    SessionCompleted,
}
