//! `planner config` command implementation

use anyhow::Result;
use clap::Subcommand;
use std::path::Path;

use crate::config::{default_config_path, Config};

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the config file location
    Path,

    /// Print the effective configuration as TOML
    Show,
}

pub fn run(config_path: Option<&Path>, command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Path => {
            let path = match config_path {
                Some(p) => p.to_path_buf(),
                None => default_config_path()?,
            };
            println!("{}", path.display());
        }
        ConfigCommands::Show => {
            let config = Config::load(config_path)?;
            print!("{}", config.to_toml()?);
        }
    }
    Ok(())
}
