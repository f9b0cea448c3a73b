//! HTTP server command
//!
//! Runs the CRUD API for users, properties, leases, maintenance requests
//! and reviews.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use pms_server::{run_server, schema, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:3030, or PMS_BIND)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Database URL (overrides config/environment)
    #[arg(long)]
    pub database_url: Option<String>,

    /// Create missing tables before accepting requests
    #[arg(long)]
    pub init_schema: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let mut config = super::load_config(args.database_url)?;
    if let Some(bind) = args.bind {
        config.server.bind = bind;
    }
    config.server.cors_permissive |= args.cors_permissive;
    config.database.init_schema |= args.init_schema;

    tracing::info!("Starting pms server on {}", config.server.bind);

    let pool = super::connect(&config).await?;

    if config.database.init_schema {
        schema::init(&pool)
            .await
            .context("Failed to initialize schema")?;
    }

    // Blocks until shutdown
    run_server(pool, ServerConfig::from(&config.server))
        .await
        .context("Server error")?;

    Ok(())
}
