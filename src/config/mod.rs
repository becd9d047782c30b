//! Configuration management module
//!
//! This module handles loading and validation of runtime settings from TOML
//! files and environment variables, and holds the build-time skill constants.

pub mod settings;
pub mod skill;
pub mod validation;

pub use settings::{Settings, ServerConfig, SkillSettings, TrendsConfig, CatalogConfig, LoggingConfig};
pub use skill::{SkillConfig, PAGINATION_SIZE, MAX_ITEMS, ORDINAL_WORDS};
