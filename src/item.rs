//! Item - the single record type held by the store.

use serde::{Deserialize, Serialize};

/// A stored record: a store-assigned identifier plus an opaque payload.
///
/// Serializes as `{"id": "...", "content": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub content: String,
}

impl Item {
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
        }
    }
}
