//! Item store - owns the item collection and applies the CRUD contract.
//!
//! `ItemStore` generates ids, validates input, and runs the four operations
//! against an [`ItemCollection`]. Every operation sleeps for the configured
//! simulated latency *after* its critical section, so the delay never holds
//! the collection lock.
//!
//! ## Example
//!
//! ```ignore
//! use std::time::Duration;
//! use item_store::{ItemStore, StoreConfig};
//!
//! let store = ItemStore::with_config(StoreConfig::default().with_latency(Duration::ZERO));
//! let item = store.create("hello").await?;
//! let updated = store.update(&item.id, "world").await?;
//! store.delete(&updated.id).await?;
//! assert!(store.list().await?.is_empty());
//! ```

mod error;
mod in_memory;

use std::time::Duration;

use tracing::debug;

use crate::id::IdScheme;
use crate::item::Item;
use crate::validate::{
    require_non_blank, CONTENT_REQUIRED, ID_AND_CONTENT_REQUIRED, ID_REQUIRED,
};

pub use error::{StoreError, INTERNAL_MESSAGE};
pub use in_memory::InMemoryItems;

/// Simulated latency applied when none is configured.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(300);

/// Storage behind an [`ItemStore`].
///
/// Each method is one critical section: implementations must hold exclusive
/// access to the whole collection for the duration of a mutating call.
pub trait ItemCollection: Send + Sync {
    /// Snapshot of every item, in insertion order.
    fn items(&self) -> Result<Vec<Item>, StoreError>;

    /// Number of stored items.
    fn count(&self) -> Result<usize, StoreError>;

    /// Append an item.
    fn push(&self, item: Item) -> Result<(), StoreError>;

    /// Replace the content of the item with this id. Returns the updated item,
    /// or `None` if no item matched.
    fn replace_content(&self, id: &str, content: &str) -> Result<Option<Item>, StoreError>;

    /// Remove every item with this id. Returns how many were removed.
    fn remove(&self, id: &str) -> Result<usize, StoreError>;
}

/// Tunables for an [`ItemStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    /// Delay added to every operation before it returns.
    pub latency: Duration,
    /// Scheme used for ids of newly created items.
    pub id_scheme: IdScheme,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            latency: DEFAULT_LATENCY,
            id_scheme: IdScheme::default(),
        }
    }
}

impl StoreConfig {
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn with_id_scheme(mut self, id_scheme: IdScheme) -> Self {
        self.id_scheme = id_scheme;
        self
    }
}

/// The item store.
///
/// Generic over `C`, the backing collection. Defaults to [`InMemoryItems`].
#[derive(Clone)]
pub struct ItemStore<C = InMemoryItems> {
    items: C,
    config: StoreConfig,
}

impl Default for ItemStore<InMemoryItems> {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemStore<InMemoryItems> {
    /// Create an empty in-memory store with the default configuration.
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// Create an empty in-memory store.
    pub fn with_config(config: StoreConfig) -> Self {
        Self::with_collection(InMemoryItems::new(), config)
    }
}

impl<C: ItemCollection> ItemStore<C> {
    /// Create a store over an existing collection.
    pub fn with_collection(items: C, config: StoreConfig) -> Self {
        Self { items, config }
    }

    /// Number of stored items. Not subject to simulated latency.
    pub fn len(&self) -> Result<usize, StoreError> {
        self.items.count()
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }

    /// Every stored item, in insertion order.
    pub async fn list(&self) -> Result<Vec<Item>, StoreError> {
        let result = self.items.items();
        self.simulate_latency().await;
        result
    }

    /// Store a new item with a freshly generated id.
    ///
    /// `content` is stored as given; only its trimmed form is checked for
    /// emptiness.
    pub async fn create(&self, content: impl Into<String>) -> Result<Item, StoreError> {
        let result = self.create_now(content.into());
        self.simulate_latency().await;
        result
    }

    /// Replace the content of an existing item. Last writer wins.
    pub async fn update(&self, id: &str, content: &str) -> Result<Item, StoreError> {
        let result = self.update_now(id, content);
        self.simulate_latency().await;
        result
    }

    /// Remove the item with this id. Returns how many items were removed.
    pub async fn delete(&self, id: &str) -> Result<usize, StoreError> {
        let result = self.delete_now(id);
        self.simulate_latency().await;
        result
    }

    /// Fail with `err` after the simulated latency. Used by callers that
    /// reject a request before it reaches an operation, so failures take as
    /// long as store-level ones.
    pub async fn reject<T>(&self, err: StoreError) -> Result<T, StoreError> {
        self.simulate_latency().await;
        Err(err)
    }

    fn create_now(&self, content: String) -> Result<Item, StoreError> {
        require_non_blank(&content, CONTENT_REQUIRED)?;
        let item = Item::new(self.config.id_scheme.generate(), content);
        self.items.push(item.clone())?;
        debug!(id = %item.id, "item created");
        Ok(item)
    }

    fn update_now(&self, id: &str, content: &str) -> Result<Item, StoreError> {
        require_non_blank(content, ID_AND_CONTENT_REQUIRED)?;
        let item = self
            .items
            .replace_content(id, content)?
            .ok_or_else(|| StoreError::not_found(id))?;
        debug!(id = %item.id, "item updated");
        Ok(item)
    }

    fn delete_now(&self, id: &str) -> Result<usize, StoreError> {
        require_non_blank(id, ID_REQUIRED)?;
        match self.items.remove(id)? {
            0 => Err(StoreError::not_found(id)),
            removed => {
                debug!(id, removed, "item deleted");
                Ok(removed)
            }
        }
    }

    async fn simulate_latency(&self) {
        if !self.config.latency.is_zero() {
            tokio::time::sleep(self.config.latency).await;
        }
    }
}
