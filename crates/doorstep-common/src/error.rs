//! Common error types for Doorstep components.

use thiserror::Error;

/// Common errors across Doorstep components.
///
/// Absence of a document (no code issued, no pending alert, no snapshot)
/// is never an error in this system; it degrades to the empty/null state.
/// Only genuinely broken operations surface here.
#[derive(Debug, Error)]
pub enum Error {
    /// Empty snapshot upload body
    #[error("no snapshot data in request body")]
    NoData,

    /// Filesystem read/write failure
    #[error("storage error: {0}")]
    Storage(String),

    /// Document could not be serialized for persistence
    #[error("encoding error: {0}")]
    Encoding(String),
}

impl Error {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NoData => 400,
            Self::Storage(_) => 500,
            Self::Encoding(_) => 500,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Encoding(err.to_string())
    }
}
