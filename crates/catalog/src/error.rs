//! Catalog error types.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors that can occur while handling catalog data.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Suggestion lookups need something to complete.
    #[error("Suggestion keyword must not be blank")]
    EmptyKeyword,

    /// Suggestion size outside the accepted range.
    #[error("Invalid suggestion size: {0} (expected 1..={max})", max = crate::search::MAX_SUGGEST_SIZE)]
    InvalidSize(usize),

    /// Invalid product identifier.
    #[error("Invalid product id: {0}")]
    InvalidId(String),

    /// Invalid index settings.
    #[error("Invalid index settings: {0}")]
    InvalidSettings(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// I/O error while writing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::SerializationError(e.to_string())
    }
}
