//! Error types for text2jira

use thiserror::Error;

/// Errors raised by the tracker, submission and profile layers
///
/// Outline parsing never fails; per-line problems are reported as
/// [`crate::outline::ParseWarning`]s instead.
#[derive(Debug, Error)]
pub enum Error {
    /// No board with the given name is visible to the user
    #[error("board not found: '{0}'")]
    BoardNotFound(String),

    /// The project behind a board could not be resolved
    #[error("project not found: '{0}'")]
    ProjectNotFound(String),

    /// A requested component does not exist in the project
    #[error("component not found: '{0}'")]
    ComponentNotFound(String),

    /// Tickets were flagged for the sprint but the board has no active sprint
    #[error("no active sprint found on board '{0}'")]
    NoActiveSprint(String),

    /// Missing or rejected credentials
    #[error("authentication error: {0}")]
    Auth(String),

    /// The tracker answered with a non-success status
    #[error("tracker API error: {0}")]
    TrackerApi(String),

    /// Transport-level HTTP failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server URL could not be parsed
    #[error("invalid server URL: {0}")]
    InvalidUrl(String),

    /// Profile store could not be read or written
    #[error("profile store error: {0}")]
    Profile(String),

    /// Filesystem failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invariant violation inside the crate
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;
