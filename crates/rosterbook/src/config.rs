//! Configuration management for rosterbook.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default data directory name.
const DATA_DIR_NAME: &str = "rosterbook";

/// Default roster snapshot file name.
const ROSTER_FILE_NAME: &str = "roster.json";

/// Output formats the display section accepts.
const KNOWN_FORMATS: [&str; 3] = ["plain", "table", "json"];

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `ROSTERBOOK_`)
/// 2. TOML config file at `~/.config/rosterbook/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Storage configuration.
    pub storage: StorageConfig,
    /// Display configuration.
    pub display: DisplayConfig,
}

/// Storage-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path to the roster snapshot file.
    /// Defaults to `~/.local/share/rosterbook/roster.json`
    pub roster_path: Option<PathBuf>,
}

/// Display-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Default output format when a command doesn't specify one.
    /// One of `plain`, `table`, `json`.
    pub default_format: String,
    /// Include the image reference column in tabular output.
    pub show_images: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            default_format: "table".to_string(),
            show_images: false,
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// Configuration is loaded in this order (later sources override earlier):
    /// 1. Default values
    /// 2. TOML config file (if exists)
    /// 3. Environment variables (prefixed with `ROSTERBOOK_`)
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file).nested())
            .merge(Env::prefixed("ROSTERBOOK_").split("_"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(DATA_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Get the default data directory path.
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from(".local/share"))
            .join(DATA_DIR_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if !KNOWN_FORMATS.contains(&self.display.default_format.as_str()) {
            return Err(Error::config_validation(format!(
                "unknown default_format '{}' (expected one of: {})",
                self.display.default_format,
                KNOWN_FORMATS.join(", ")
            )));
        }

        if let Some(path) = &self.storage.roster_path {
            if path.file_name().is_none() {
                return Err(Error::config_validation(format!(
                    "roster_path '{}' must name a file",
                    path.display()
                )));
            }
        }

        Ok(())
    }

    /// Get the roster snapshot path, resolving defaults if not set.
    #[must_use]
    pub fn roster_path(&self) -> PathBuf {
        self.storage
            .roster_path
            .clone()
            .unwrap_or_else(|| Self::default_data_dir().join(ROSTER_FILE_NAME))
    }
}
