//! Demongen - a static page generator for a Geometry Dash demon list.

mod cli;
mod config;
mod data;
mod generate;
mod init;
mod logger;

use anyhow::{Result, bail};
use clap::Parser;
use cli::{Cli, Commands};
use config::SiteConfig;
use generate::generate_pages;
use init::new_site;
use std::path::Path;

fn main() -> Result<()> {
    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));
    let config: &'static SiteConfig = Box::leak(Box::new(load_config(cli)?));

    match &cli.command {
        Commands::Init { name } => new_site(config, name.is_some()),
        Commands::Build => generate_pages(config).map(|_| ()),
    }
}

/// Load and validate configuration from CLI arguments.
///
/// A missing config file is not an error for `build`: the defaults
/// reproduce the conventional project layout (`data/demons.json`,
/// `demon-template.html`, `demons/`).
fn load_config(cli: &'static Cli) -> Result<SiteConfig> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config_path = root.join(&cli.config);

    let mut config = if config_path.exists() {
        SiteConfig::from_path(&config_path)?
    } else {
        SiteConfig::default()
    };
    config.update_with_cli(cli);

    if cli.is_init() && config.config_path.exists() {
        bail!("Config file already exists. Remove it manually or init in a different path.");
    }

    if !cli.is_init() {
        config.validate()?;
    }

    Ok(config)
}
