//! Application settings management
//!
//! This module defines the runtime configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerConfig,
    pub skill: SkillSettings,
    pub trends: TrendsConfig,
    pub catalog: CatalogConfig,
    pub logging: LoggingConfig,
}

/// HTTP host configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_address: String,
}

/// Voice platform configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SkillSettings {
    /// Requests for any other application id are rejected when set
    pub application_id: Option<String>,
}

/// Trending topics gateway configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TrendsConfig {
    pub api_url: String,
    pub bearer_token: Option<String>,
    pub place_id: u64,
    pub timeout_seconds: u64,
    pub max_topics: usize,
}

/// Best seller catalog gateway configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub api_url: String,
    pub associate_tag: Option<String>,
    pub timeout_seconds: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// Daily-rolling log files are written here when set
    pub directory: Option<String>,
    pub json: bool,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::from_file("config")
    }

    /// Load settings from the named file (extension optional) overlaid by environment variables
    pub fn from_file(name: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(name).required(false))
            .add_source(
                config::Environment::with_prefix("SAVVY")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::SkillError> {
        super::validation::validate_settings(self)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

impl Default for TrendsConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.twitter.com/1.1".to_string(),
            bearer_token: None,
            place_id: 23424977,
            timeout_seconds: 5,
            max_topics: 9,
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8081".to_string(),
            associate_tag: None,
            timeout_seconds: 5,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
            json: false,
        }
    }
}
