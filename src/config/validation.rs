//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use std::net::SocketAddr;

use crate::utils::errors::{SkillError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_server_config(&settings.server)?;
    validate_skill_config(&settings.skill)?;
    validate_trends_config(&settings.trends)?;
    validate_catalog_config(&settings.catalog)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate HTTP host configuration
fn validate_server_config(config: &super::ServerConfig) -> Result<()> {
    config.bind_address.parse::<SocketAddr>().map_err(|e| {
        SkillError::Config(format!("Invalid bind address '{}': {}", config.bind_address, e))
    })?;

    Ok(())
}

/// Validate voice platform configuration
fn validate_skill_config(config: &super::SkillSettings) -> Result<()> {
    if let Some(ref application_id) = config.application_id {
        if application_id.trim().is_empty() {
            return Err(SkillError::Config(
                "Application id must not be blank when set".to_string()
            ));
        }
    }

    Ok(())
}

/// Validate trending topics gateway configuration
fn validate_trends_config(config: &super::TrendsConfig) -> Result<()> {
    if config.api_url.is_empty() {
        return Err(SkillError::Config(
            "Trends API URL is required".to_string()
        ));
    }

    url::Url::parse(&config.api_url)?;

    if config.timeout_seconds == 0 {
        return Err(SkillError::Config(
            "Trends timeout must be greater than 0".to_string()
        ));
    }

    if config.max_topics == 0 {
        return Err(SkillError::Config(
            "Trends max_topics must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate best seller catalog gateway configuration
fn validate_catalog_config(config: &super::CatalogConfig) -> Result<()> {
    if config.api_url.is_empty() {
        return Err(SkillError::Config(
            "Catalog API URL is required".to_string()
        ));
    }

    url::Url::parse(&config.api_url)?;

    if config.timeout_seconds == 0 {
        return Err(SkillError::Config(
            "Catalog timeout must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(SkillError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(SkillError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}
