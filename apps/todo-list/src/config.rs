//! Configuration for the to-do list.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Display settings.
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    /// Load configuration from the default path, falling back to defaults.
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|p| std::fs::read_to_string(p).ok())
            .and_then(|s| toml::from_str(&s).ok())
            .unwrap_or_default()
    }

    /// Save configuration to the default path.
    pub fn save(&self) -> anyhow::Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let content = toml::to_string_pretty(self)?;
            std::fs::write(path, content)?;
        }
        Ok(())
    }

    /// Get configuration file path.
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "todo-list")
            .map(|d| d.config_dir().join("config.toml"))
    }

    /// Get the storage root for tasks and the dark-mode flag.
    pub fn data_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "todo-list")
            .map(|d| d.data_dir().to_path_buf())
    }
}

/// Display settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Format for the prefilled date input.
    #[serde(default = "default_date_format")]
    pub date_format: String,
    /// Format for the prefilled time input.
    #[serde(default = "default_time_format")]
    pub time_format: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            time_format: default_time_format(),
        }
    }
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_time_format() -> String {
    "%H:%M".to_string()
}
