//! Configuration loading and management
//!
//! Configuration is loaded from `~/.config/bingelog/config.toml`
//!
//! This module follows the XDG Base Directory Specification:
//! - Config: `$XDG_CONFIG_HOME/bingelog/` (~/.config/bingelog/)
//! - Data: `$XDG_DATA_HOME/bingelog/` (~/.local/share/bingelog/)
//! - State/Logs: `$XDG_STATE_HOME/bingelog/` (~/.local/state/bingelog/)

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Returns a best-effort home directory path.
fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Returns XDG_CONFIG_HOME or ~/.config
fn xdg_config_home() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".config"))
}

/// Returns XDG_DATA_HOME or ~/.local/share
fn xdg_data_home() -> PathBuf {
    std::env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local/share"))
}

/// Returns XDG_STATE_HOME or ~/.local/state
fn xdg_state_home() -> PathBuf {
    std::env::var("XDG_STATE_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local/state"))
}

/// Main configuration struct
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// AI oracle configuration (optional feature)
    #[serde(default)]
    pub oracle: OracleConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Maximum number of log files to keep
    #[serde(default = "default_max_log_files")]
    pub max_files: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            max_files: default_max_log_files(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_log_files() -> usize {
    5
}

/// AI oracle configuration
///
/// When enabled, bingelog asks an external model for coaching messages
/// and risk-window predictions. Everything else works without it.
#[derive(Debug, Deserialize, Clone)]
pub struct OracleConfig {
    /// Enable/disable the oracle
    #[serde(default)]
    pub enabled: bool,

    /// API key (can also use ANTHROPIC_API_KEY env var)
    pub api_key: Option<String>,

    /// API endpoint
    #[serde(default = "default_oracle_endpoint")]
    pub endpoint: String,

    /// Model to use
    #[serde(default = "default_oracle_model")]
    pub model: String,

    /// Max tokens per completion
    #[serde(default = "default_oracle_max_tokens")]
    pub max_tokens: u32,

    /// HTTP request timeout in seconds
    #[serde(default = "default_oracle_timeout")]
    pub timeout_secs: u64,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            api_key: None,
            endpoint: default_oracle_endpoint(),
            model: default_oracle_model(),
            max_tokens: default_oracle_max_tokens(),
            timeout_secs: default_oracle_timeout(),
        }
    }
}

impl OracleConfig {
    /// Resolved API key: config value first, env var fallback.
    pub fn resolved_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var("ANTHROPIC_API_KEY").ok())
    }

    /// Check if the oracle is properly configured and enabled
    pub fn is_ready(&self) -> bool {
        self.enabled && self.resolved_api_key().is_some()
    }

    /// Validate configuration, returning error message if invalid
    pub fn validate(&self) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        if self.resolved_api_key().is_none() {
            return Err(Error::Config(
                "oracle.api_key (or ANTHROPIC_API_KEY) is required when oracle is enabled"
                    .to_string(),
            ));
        }
        if self.endpoint.is_empty() {
            return Err(Error::Config(
                "oracle.endpoint must not be empty".to_string(),
            ));
        }
        if self.max_tokens == 0 {
            return Err(Error::Config(
                "oracle.max_tokens must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_oracle_endpoint() -> String {
    "https://api.anthropic.com".to_string()
}

fn default_oracle_model() -> String {
    "claude-3-haiku-20240307".to_string()
}

fn default_oracle_max_tokens() -> u32 {
    300
}

fn default_oracle_timeout() -> u64 {
    30
}

impl Config {
    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            return Ok(Config::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read config file {:?}: {}", path, e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Returns the default config file path
    ///
    /// `$XDG_CONFIG_HOME/bingelog/config.toml` (~/.config/bingelog/config.toml)
    pub fn config_path() -> PathBuf {
        xdg_config_home().join("bingelog").join("config.toml")
    }

    /// Returns the data directory path (for the state blob)
    ///
    /// `$XDG_DATA_HOME/bingelog/` (~/.local/share/bingelog/)
    pub fn data_dir() -> PathBuf {
        xdg_data_home().join("bingelog")
    }

    /// Returns the state directory path (for logs)
    ///
    /// `$XDG_STATE_HOME/bingelog/` (~/.local/state/bingelog/)
    pub fn state_dir() -> PathBuf {
        xdg_state_home().join("bingelog")
    }

    /// Returns the state blob path
    ///
    /// `$XDG_DATA_HOME/bingelog/state.json` (~/.local/share/bingelog/state.json)
    pub fn blob_path() -> PathBuf {
        Self::data_dir().join("state.json")
    }

    /// Returns the log file path
    ///
    /// `$XDG_STATE_HOME/bingelog/bingelog.log` (~/.local/state/bingelog/bingelog.log)
    pub fn log_path() -> PathBuf {
        Self::state_dir().join("bingelog.log")
    }
}
