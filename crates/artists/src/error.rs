//! Artist store error types

use thiserror::Error;

/// Errors raised by artist stores
#[derive(Error, Debug)]
pub enum ArtistError {
    /// A required field was not supplied
    #[error("Validation failed: `{0}` is required")]
    MissingField(&'static str),

    /// A field was supplied with an unusable value
    #[error("Validation failed: `{field}` {message}")]
    InvalidField { field: &'static str, message: String },

    /// Backend failure (connectivity, query, constraint)
    #[error("Storage error: {0}")]
    StorageError(String),
}

/// Result type for artist operations
pub type Result<T> = std::result::Result<T, ArtistError>;
