//! Schema bootstrap command

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pms_server::schema;

#[derive(Parser, Debug)]
pub struct SchemaArgs {
    #[command(subcommand)]
    pub command: SchemaCommands,
}

#[derive(Subcommand, Debug)]
pub enum SchemaCommands {
    /// Create any missing tables and indexes (safe to re-run)
    Init(InitArgs),
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Database URL (overrides config/environment)
    #[arg(long)]
    pub database_url: Option<String>,
}

pub async fn run_schema(args: SchemaArgs) -> Result<()> {
    match args.command {
        SchemaCommands::Init(args) => run_init(args).await,
    }
}

async fn run_init(args: InitArgs) -> Result<()> {
    let config = super::load_config(args.database_url)?;
    let pool = super::connect(&config).await?;

    schema::init(&pool)
        .await
        .context("Failed to initialize schema")?;

    println!("Schema ready: {}", schema::table_names().collect::<Vec<_>>().join(", "));
    Ok(())
}
