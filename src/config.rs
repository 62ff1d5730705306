//! User configuration management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::task::{TimeFormat, SUGGESTED_PRIORITIES};

const APP_DIR_NAME: &str = "day-planner";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub time: TimeConfig,

    #[serde(default)]
    pub notifications: NotificationsConfig,

    #[serde(default)]
    pub console: ConsoleConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeConfig {
    /// Accept `9:30` as well as `09:30`
    #[serde(default)]
    pub lenient_hours: bool,
}

impl TimeConfig {
    pub fn time_format(&self) -> TimeFormat {
        if self.lenient_hours {
            TimeFormat::Lenient
        } else {
            TimeFormat::Strict
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Labels listed in the priority prompt
    #[serde(default = "default_priorities")]
    pub priorities: Vec<String>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            priorities: default_priorities(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_priorities() -> Vec<String> {
    SUGGESTED_PRIORITIES.iter().map(|p| p.to_string()).collect()
}

pub fn get_app_dir() -> Result<PathBuf> {
    let base = dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
        .context("Could not determine a config directory")?;
    Ok(base.join(APP_DIR_NAME))
}

pub fn default_config_path() -> Result<PathBuf> {
    Ok(get_app_dir()?.join(CONFIG_FILE_NAME))
}

impl Config {
    /// Load from `path`, or from the default location when `None`.
    /// A missing file yields defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => default_config_path()?,
        };
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        tracing::debug!("Loading config from {}", path.display());
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        let config: Config =
            toml::from_str(&content).with_context(|| format!("Invalid config in {:?}", path))?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
