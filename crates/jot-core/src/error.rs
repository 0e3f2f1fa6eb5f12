//! Error types for jot-core

use thiserror::Error;

use crate::models::NoteId;

/// Result type alias using jot-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in jot-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Transport-level HTTP failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server rejected the request; `message` carries the server's
    /// `message` payload when one was present
    #[error("{message}")]
    Api { status: u16, message: String },

    /// No note with the requested identifier exists on the server
    #[error("Invalid Note")]
    NoteNotFound(NoteId),

    /// Stored note content is not a valid document envelope
    #[error("Malformed note content: {0}")]
    MalformedContent(#[from] serde_json::Error),

    /// Whitespace-only content, rejected before any request is issued
    #[error("Note content shouldn't be empty")]
    EmptyContent,

    /// Invalid client configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(&'static str),
}
