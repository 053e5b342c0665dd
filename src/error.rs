//! Error types for the fairhire library.

use std::io;
use thiserror::Error;

/// Result type alias for fairhire operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the fairhire library.
///
/// Redaction and normalization are pure string operations and cannot fail;
/// the only failure surface is I/O at the boundaries. Store *reads* recover
/// locally (a missing or malformed file is an empty collection) and never
/// produce an error; store *writes* propagate.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error during store writes or file access.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The document could not be opened or parsed at the extraction boundary.
    #[error("PDF extraction error: {0}")]
    Pdf(String),

    /// Record serialization error while writing a store.
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// A required input was not supplied (user-correctable precondition).
    #[error("Missing input: {0}")]
    MissingInput(String),

    /// No candidate with the given identifier exists in the record store.
    #[error("Unknown candidate: {0}")]
    UnknownCandidate(String),
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        Error::Pdf(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialize(err.to_string())
    }
}
