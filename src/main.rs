//! Day Planner - interactive console for planning a day

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use day_planner::cli::{self, Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.log_level.as_deref());

    match cli.command {
        Some(Commands::Completion { shell }) => {
            generate(shell, &mut Cli::command(), "planner", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Config { command }) => cli::config::run(cli.config.as_deref(), command),
        Some(Commands::Run) | None => cli::console::run(cli.config.as_deref()),
    }
}

/// Logs go to stderr so they never interleave with the console transcript.
fn init_logging(level: Option<&str>) {
    let filter = match level {
        Some(level) => format!("day_planner={}", level),
        None if std::env::var("DAY_PLANNER_DEBUG").is_ok() => "day_planner=debug".to_string(),
        None => return,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
