//! Server configuration, read from command-line flags with environment
//! variable fallbacks.

use std::time::Duration;

use clap::Parser;

use crate::id::IdScheme;
use crate::store::StoreConfig;

#[derive(Debug, Clone, Parser)]
#[command(name = "item-store", version, about = "In-memory item CRUD service")]
pub struct Config {
    /// Address to bind the HTTP listener to.
    #[arg(long, env = "ITEM_STORE_ADDR", default_value = "127.0.0.1:3000")]
    pub addr: String,

    /// Simulated latency added to every store operation, in milliseconds.
    #[arg(long, env = "ITEM_STORE_LATENCY_MS", default_value_t = 300)]
    pub latency_ms: u64,

    /// Id scheme for new items: `uuid` or `short`.
    #[arg(long, env = "ITEM_STORE_ID_SCHEME", default_value_t = IdScheme::Uuid)]
    pub id_scheme: IdScheme,

    /// Log filter used when `RUST_LOG` is unset.
    #[arg(long, env = "ITEM_STORE_LOG", default_value = "info")]
    pub log_level: String,
}

impl Config {
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::default()
            .with_latency(Duration::from_millis(self.latency_ms))
            .with_id_scheme(self.id_scheme)
    }
}
