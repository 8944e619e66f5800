//! item_store — an in-memory CRUD store for opaque string items, with an
//! artificial per-operation latency, served over HTTP.

mod config;
mod id;
mod item;
mod store;
mod validate;

#[cfg(feature = "http")]
pub mod http;

pub use config::Config;
pub use id::{IdScheme, SHORT_ID_LEN};
pub use item::Item;
pub use store::{
    InMemoryItems, ItemCollection, ItemStore, StoreConfig, StoreError, DEFAULT_LATENCY,
    INTERNAL_MESSAGE,
};
pub use validate::{CONTENT_REQUIRED, ID_AND_CONTENT_REQUIRED, ID_QUERY_REQUIRED, ID_REQUIRED};
