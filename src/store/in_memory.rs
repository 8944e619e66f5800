//! InMemoryItems - Vec-backed item collection, lost on process exit.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::{ItemCollection, StoreError};
use crate::item::Item;

/// In-memory item collection backed by an insertion-ordered `Vec`.
///
/// Clone-friendly via Arc: clones share the same storage.
#[derive(Clone, Default)]
pub struct InMemoryItems {
    storage: Arc<RwLock<Vec<Item>>>,
}

impl InMemoryItems {
    /// Create a new empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self, operation: &str) -> Result<RwLockReadGuard<'_, Vec<Item>>, StoreError> {
        self.storage
            .read()
            .map_err(|_| StoreError::Internal(format!("lock poisoned during {}", operation)))
    }

    fn write(&self, operation: &str) -> Result<RwLockWriteGuard<'_, Vec<Item>>, StoreError> {
        self.storage
            .write()
            .map_err(|_| StoreError::Internal(format!("lock poisoned during {}", operation)))
    }
}

impl ItemCollection for InMemoryItems {
    fn items(&self) -> Result<Vec<Item>, StoreError> {
        Ok(self.read("list")?.clone())
    }

    fn count(&self) -> Result<usize, StoreError> {
        Ok(self.read("count")?.len())
    }

    fn push(&self, item: Item) -> Result<(), StoreError> {
        self.write("create")?.push(item);
        Ok(())
    }

    fn replace_content(&self, id: &str, content: &str) -> Result<Option<Item>, StoreError> {
        let mut storage = self.write("update")?;
        Ok(storage.iter_mut().find(|item| item.id == id).map(|item| {
            item.content = content.to_string();
            item.clone()
        }))
    }

    fn remove(&self, id: &str) -> Result<usize, StoreError> {
        let mut storage = self.write("delete")?;
        let before = storage.len();
        storage.retain(|item| item.id != id);
        Ok(before - storage.len())
    }
}
