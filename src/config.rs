//! Configuration management for Remindr
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{CONFIG_GENERATED, SIDEBAR_DEFAULT_WIDTH, SIDEBAR_MAX_WIDTH, SIDEBAR_MIN_WIDTH};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub ui: UiConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

/// Remindr service connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the Remindr backend
    pub base_url: String,
    /// Environment variable holding the API token
    pub api_token_env: String,
    /// HTTP request timeout in seconds
    pub timeout_secs: u64,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Default view to open on startup
    /// Options: "today", "upcoming", "all", "channels"
    pub default_view: String,
    /// Sidebar width in columns
    pub sidebar_width: u16,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Date format for reminder schedule dates
    pub date_format: String,
    /// Time format for datetime fields
    pub time_format: String,
    /// Show channel badges next to reminders in list views
    pub show_channel_badges: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable file logging
    pub enabled: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            api_token_env: "REMINDR_API_TOKEN".to_string(),
            timeout_secs: 10,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_view: "today".to_string(),
            sidebar_width: SIDEBAR_DEFAULT_WIDTH,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: "%Y-%m-%d".to_string(),
            time_format: "%H:%M".to_string(),
            show_channel_badges: true,
        }
    }
}

impl Config {
    /// Path of the configuration file:
    /// `~/.config/remindr/config.toml` (or the platform equivalent).
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("could not determine config directory")?;
        Ok(config_dir.join("remindr").join("config.toml"))
    }

    /// Load the configuration from disk, generating a default file on first
    /// run. Unknown values fall back to defaults section by section.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;

        if !path.exists() {
            Self::generate_default_config(&path)?;
            eprintln!("{} at {}", CONFIG_GENERATED, path.display());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("could not read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("could not parse config file {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Resolve the API base URL; `REMINDR_API_URL` overrides the file.
    pub fn api_base_url(&self) -> String {
        std::env::var("REMINDR_API_URL").unwrap_or_else(|_| self.api.base_url.clone())
    }

    /// Resolve the API token from the configured environment variable.
    pub fn api_token(&self) -> Option<String> {
        std::env::var(&self.api.api_token_env).ok().filter(|t| !t.is_empty())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.ui.sidebar_width < SIDEBAR_MIN_WIDTH || self.ui.sidebar_width > SIDEBAR_MAX_WIDTH {
            anyhow::bail!(
                "sidebar_width {} out of range [{}, {}]",
                self.ui.sidebar_width,
                SIDEBAR_MIN_WIDTH,
                SIDEBAR_MAX_WIDTH
            );
        }

        match self.ui.default_view.as_str() {
            "today" | "upcoming" | "all" | "channels" => {}
            other => anyhow::bail!(
                "default_view '{}' not recognized (expected today, upcoming, all or channels)",
                other
            ),
        }

        if self.api.timeout_secs == 0 || self.api.timeout_secs > 300 {
            anyhow::bail!("timeout_secs {} out of range [1, 300]", self.api.timeout_secs);
        }

        if self.api.base_url.trim().is_empty() {
            anyhow::bail!("base_url cannot be empty");
        }

        if self.api.api_token_env.trim().is_empty() {
            anyhow::bail!("api_token_env cannot be empty");
        }

        if let Err(e) = chrono::NaiveDate::parse_from_str("2024-01-15", &self.display.date_format) {
            anyhow::bail!("Invalid date_format '{}': {}", self.display.date_format, e);
        }

        if let Err(e) = chrono::NaiveTime::parse_from_str("12:00", &self.display.time_format) {
            anyhow::bail!("Invalid time_format '{}': {}", self.display.time_format, e);
        }

        Ok(())
    }

    /// Write a commented default configuration file, creating parent
    /// directories as needed.
    pub fn generate_default_config(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("could not create config directory {}", parent.display()))?;
        }

        let default_config = Config::default();
        let toml_content =
            toml::to_string_pretty(&default_config).context("could not serialize default config")?;

        let content = format!(
            "# Remindr Configuration File\n\
             # Generated automatically - edit as needed\n\n{}",
            toml_content
        );

        std::fs::write(path, content)
            .with_context(|| format!("could not write config file {}", path.display()))?;

        Ok(())
    }
}
