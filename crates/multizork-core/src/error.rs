//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// The requested instance or player does not exist.
    #[error("not found")]
    NotFound,

    /// The datastore could not be opened or reached.
    #[error("datastore unavailable: {0}")]
    Unavailable(String),

    /// A query against an open datastore failed.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
