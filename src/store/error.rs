//! Error type for item store operations.

use thiserror::Error;

/// Message returned to callers in place of an internal failure's cause.
pub const INTERNAL_MESSAGE: &str = "Error processing request.";

/// Error type for item store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Input failed the non-empty string contract. The store was not touched.
    #[error("{0}")]
    Validation(String),
    /// No item with this id exists at operation time.
    #[error("Item not found.")]
    NotFound { id: String },
    /// Unexpected failure (poisoned lock, undecodable request, ...).
    #[error("internal error: {0}")]
    Internal(String),
}

impl StoreError {
    pub fn validation(message: impl Into<String>) -> Self {
        StoreError::Validation(message.into())
    }

    pub fn not_found(id: impl Into<String>) -> Self {
        StoreError::NotFound { id: id.into() }
    }

    /// Map this error to an HTTP-style status code.
    pub fn status_code(&self) -> u16 {
        match self {
            StoreError::Validation(_) => 400,
            StoreError::NotFound { .. } => 404,
            StoreError::Internal(_) => 500,
        }
    }

    /// Message safe to hand back to a caller. Internal causes are replaced
    /// with a generic message.
    pub fn public_message(&self) -> String {
        match self {
            StoreError::Internal(_) => INTERNAL_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}
