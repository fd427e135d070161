//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

use crate::infra::logging::{LogConfig, parse_level};

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Database file
    pub db: Option<PathBuf>,

    /// Default log level when no `-v` flag is given
    pub log_level: Option<String>,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/notepad/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("notepad")
            .join("config.toml")
    }

    /// Resolve the database path, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--db` argument
    /// 2. Config file `db` setting
    /// 3. `notes.db` in the platform data directory
    pub fn db_path(&self, cli_db: Option<&PathBuf>) -> PathBuf {
        cli_db
            .cloned()
            .or_else(|| self.db.clone())
            .unwrap_or_else(default_db_path)
    }

    /// Resolve logging settings. A `-v` flag wins over `log_level`.
    pub fn log_config(&self, verbose: u8, json: bool) -> Result<LogConfig> {
        let config = match (&self.log_level, verbose) {
            (Some(level), 0) => LogConfig::new(
                parse_level(level)
                    .with_context(|| format!("invalid log_level in {}", Self::config_path().display()))?,
            ),
            _ => LogConfig::from_verbosity(verbose),
        };
        Ok(config.with_target(verbose > 1).json_format(json))
    }
}

fn default_db_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("notepad")
        .join("notes.db")
}
