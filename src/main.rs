use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use item_store::{http, Config, ItemStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .context("invalid log filter")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let store_config = config.store_config();
    info!(
        latency_ms = store_config.latency.as_millis() as u64,
        id_scheme = %store_config.id_scheme,
        "starting item store"
    );

    let store = Arc::new(ItemStore::with_config(store_config));
    http::serve(store, &config.addr)
        .await
        .with_context(|| format!("failed to serve on {}", config.addr))
}
