//! CLI command implementations

pub mod config;
pub mod console;
pub mod definition;

pub use console::Console;
pub use definition::{Cli, Commands};
