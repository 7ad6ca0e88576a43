//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Config file (`--config` path, or the default location if present)
//! 3. Built-in defaults (always present)

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use stackgen_core::domain::{
    DEFAULT_API_KEY, DEFAULT_DATABASE_PASSWORD, DEFAULT_DATABASE_PORT, DEFAULT_DATABASE_USER,
    DEFAULT_HTTP_PORT,
};

use crate::error::{CliError, CliResult};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for new skeletons.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub template: String,
    pub db_port: u16,
    pub http_port: u16,
    pub db_user: String,
    pub db_pass: String,
    pub api_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            template: "default:simple".into(),
            db_port: DEFAULT_DATABASE_PORT,
            http_port: DEFAULT_HTTP_PORT,
            db_user: DEFAULT_DATABASE_USER.into(),
            db_pass: DEFAULT_DATABASE_PASSWORD.into(),
            api_key: DEFAULT_API_KEY.into(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults::default(),
            output: OutputConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// An explicit `--config` path must exist and parse; the default
    /// location is optional and silently skipped when absent.
    pub fn load(config_file: Option<&PathBuf>) -> CliResult<Self> {
        let (path, required) = match config_file {
            Some(p) => (p.clone(), true),
            None => (Self::config_path(), false),
        };

        if !path.exists() {
            if required {
                return Err(CliError::ConfigError {
                    message: format!("config file not found: {}", path.display()),
                    source: None,
                });
            }
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(&path).map_err(|e| CliError::ConfigError {
            message: format!("failed to read {}", path.display()),
            source: Some(Box::new(e)),
        })?;

        toml::from_str(&raw).map_err(|e| CliError::ConfigError {
            message: format!("failed to parse {}", path.display()),
            source: Some(Box::new(e)),
        })
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.stackgen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "stackgen", "stackgen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".stackgen.toml"))
    }
}
