//! Input validation shared by the store and the HTTP boundary.

use crate::store::StoreError;

pub const CONTENT_REQUIRED: &str = "Content is required and must be a non-empty string.";
pub const ID_AND_CONTENT_REQUIRED: &str =
    "ID and content are required, and content must be a non-empty string.";
pub const ID_REQUIRED: &str = "ID is required and must be a non-empty string.";
pub const ID_QUERY_REQUIRED: &str = "ID is required as a query parameter.";

/// True when `value` is empty or whitespace only.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Fail with a validation error carrying `message` if `value` is blank.
pub fn require_non_blank(value: &str, message: &str) -> Result<(), StoreError> {
    if is_blank(value) {
        Err(StoreError::validation(message))
    } else {
        Ok(())
    }
}
