use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pms_core::PmsConfig;

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration (file + environment), password masked
    Show,
    /// Show config file path
    Path,
}

pub fn run_config(args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Show => run_show(),
        ConfigCommands::Path => run_path(),
    }
}

fn run_show() -> Result<()> {
    let config = PmsConfig::load().context("Failed to load configuration")?;
    let toml_str = config
        .to_redacted_toml()
        .context("Failed to serialize config to TOML")?;

    println!("{}", toml_str);
    Ok(())
}

fn run_path() -> Result<()> {
    println!("{}", PmsConfig::config_path().display());
    Ok(())
}
