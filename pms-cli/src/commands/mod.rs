//! Command implementations for the pms CLI

pub mod schema;
pub mod serve;

use anyhow::{Context, Result};
use pms_core::PmsConfig;
use pms_server::{create_pool, PgPool, PoolSettings};

pub use schema::run_schema;
pub use serve::run_serve;

/// Load layered configuration, letting a `--database-url` flag win.
pub(crate) fn load_config(database_url: Option<String>) -> Result<PmsConfig> {
    let mut config = PmsConfig::load().context("Failed to load configuration")?;
    if let Some(url) = database_url {
        config.database.url = Some(url);
    }
    Ok(config)
}

/// Connect to the configured database.
pub(crate) async fn connect(config: &PmsConfig) -> Result<PgPool> {
    let url = config.database_url()?;
    let settings = PoolSettings::from_config(url, &config.database);

    create_pool(&settings)
        .await
        .context("Failed to create database pool")
}
