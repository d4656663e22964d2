//! Configuration management for the sicetac CLI
//!
//! Config stored at: ~/.config/sicetac/config.json

use serde::{Deserialize, Serialize};
use sicetac_types::{ConfigError, OutputFormat, Result};
use std::path::PathBuf;

use crate::request::DEFAULT_STANDBY_RATE;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the six lookup table CSV files
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Vehicle type used when a request does not name one
    #[serde(default = "default_vehicle")]
    pub default_vehicle: String,

    /// Stand-by rate per hour beyond the 8-hour baseline
    #[serde(default = "default_standby_rate")]
    pub default_standby_rate: f64,

    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,
}

fn default_vehicle() -> String {
    crate::request::default_vehicle()
}

fn default_standby_rate() -> f64 {
    DEFAULT_STANDBY_RATE
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            default_vehicle: default_vehicle(),
            default_standby_rate: default_standby_rate(),
            output_format: OutputFormat::Table,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("sicetac");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Directory the table store reads from
    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(ref dir) = self.data_dir {
            return Ok(dir.clone());
        }
        let data_dir = dirs::data_dir()
            .ok_or(ConfigError::NotFound)?
            .join("sicetac")
            .join("tables");
        Ok(data_dir)
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "SICETAC Configuration")?;
        writeln!(f, "=====================")?;
        writeln!(f)?;
        writeln!(
            f,
            "Data dir:         {}",
            self.data_dir()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "(error)".to_string())
        )?;
        writeln!(f, "Default vehicle:  {}", self.default_vehicle)?;
        writeln!(f, "Stand-by rate:    {}", self.default_standby_rate)?;
        writeln!(f, "Output format:    {}", self.output_format)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:      {}", path.display())?;
        }

        Ok(())
    }
}
