//! Configuration management for Doorstep.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use doorstep_common::constants::{
    DEFAULT_CODE_EXPIRY_SECS, DEFAULT_DATA_DIR, DEFAULT_LISTEN_ADDR, DEFAULT_LOG_MAX_ENTRIES,
    DEFAULT_STATIC_DIR,
};

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// HTTP listen address
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Directory holding JSON documents and snapshot captures
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// Directory served as the static frontend
    #[serde(default = "default_static_dir")]
    pub static_dir: String,

    /// Verification code configuration
    #[serde(default)]
    pub code: CodeConfig,

    /// Access log configuration
    #[serde(default)]
    pub log: LogConfig,
}

/// Verification-code specific configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CodeConfig {
    /// Code validity in seconds
    #[serde(default = "default_code_expiry")]
    pub expiry_secs: u64,
}

impl Default for CodeConfig {
    fn default() -> Self {
        Self {
            expiry_secs: default_code_expiry(),
        }
    }
}

/// Access log configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Number of most-recent entries retained
    #[serde(default = "default_log_max")]
    pub max_entries: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            max_entries: default_log_max(),
        }
    }
}

// Default value functions
fn default_listen_addr() -> String {
    DEFAULT_LISTEN_ADDR.to_string()
}
fn default_data_dir() -> String {
    DEFAULT_DATA_DIR.to_string()
}
fn default_static_dir() -> String {
    DEFAULT_STATIC_DIR.to_string()
}
fn default_code_expiry() -> u64 {
    DEFAULT_CODE_EXPIRY_SECS
}
fn default_log_max() -> usize {
    DEFAULT_LOG_MAX_ENTRIES
}

impl AppConfig {
    /// Load configuration from file, with CLI overrides
    pub fn load(config_path: &str, args: &super::Args) -> Result<Self> {
        let mut config = if Path::new(config_path).exists() {
            let settings = config::Config::builder()
                .add_source(config::File::with_name(config_path))
                .build()
                .context("Failed to load config file")?;

            settings
                .try_deserialize()
                .context("Failed to parse config")?
        } else {
            // Use defaults if config file doesn't exist
            tracing::warn!("Config file not found, using defaults");
            Self::default()
        };

        // Apply CLI overrides
        if let Some(ref listen) = args.listen {
            config.listen_addr = listen.clone();
        }
        if let Some(ref data_dir) = args.data_dir {
            config.data_dir = data_dir.clone();
        }

        Ok(config)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            data_dir: default_data_dir(),
            static_dir: default_static_dir(),
            code: CodeConfig::default(),
            log: LogConfig::default(),
        }
    }
}
