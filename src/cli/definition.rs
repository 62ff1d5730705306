//! Command-line argument definitions

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use super::config::ConfigCommands;

#[derive(Parser)]
#[command(name = "planner")]
#[command(about = "Plan your day in conflict-free time slots")]
#[command(version)]
pub struct Cli {
    /// Path to config.toml (defaults to the platform config directory)
    #[arg(long, global = true, env = "DAY_PLANNER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log verbosity written to stderr (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive planner (default)
    Run,

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
