//! Core error types.

use thiserror::Error;

/// Schema introspection errors.
///
/// A table missing from the catalog is not an error; loaders report it as
/// `Ok(None)`.
#[derive(Debug, Error)]
pub enum Error {
    /// Connection or query execution failed.
    ///
    /// Produced by [`Connection`](crate::Connection) implementations and
    /// passed through unchanged.
    #[error("connection error: {0}")]
    Connection(String),

    /// The response body was not a valid `FORMAT JSON` document.
    #[error("format error: {0}")]
    Format(#[from] serde_json::Error),

    /// The requested statement cannot be built.
    #[error("invalid query: {0}")]
    InvalidQuery(String),
}

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;
