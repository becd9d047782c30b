//! Error handling for SavvyTrends
//!
//! This module defines the main error types used throughout the skill
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for the SavvyTrends skill
#[derive(Error, Debug)]
pub enum SkillError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration loading error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("Upstream API error: {0}")]
    Upstream(#[from] UpstreamError),

    #[error("Invalid application id: expected {expected}, got {actual}")]
    InvalidApplicationId { expected: String, actual: String },

    #[error("Invalid session state: {0}")]
    InvalidSessionState(String),

    #[error("Unsupported intent: {0}")]
    UnknownIntent(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Logging initialization error: {0}")]
    LogInit(String),
}

/// Errors raised by the trends and catalog gateways
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("{service} request failed: {message}")]
    RequestFailed { service: &'static str, message: String },

    #[error("{service} request timed out")]
    Timeout { service: &'static str },

    #[error("Invalid {service} response: {message}")]
    InvalidResponse { service: &'static str, message: String },

    #[error("{service} unavailable")]
    ServiceUnavailable { service: &'static str },
}

/// Result type alias for skill operations
pub type Result<T> = std::result::Result<T, SkillError>;

impl SkillError {
    /// Check if the error can be turned into a spoken reply
    pub fn is_recoverable(&self) -> bool {
        match self {
            SkillError::Config(_) => false,
            SkillError::ConfigLoad(_) => false,
            SkillError::Upstream(_) => true,
            SkillError::InvalidApplicationId { .. } => false,
            SkillError::InvalidSessionState(_) => true,
            SkillError::UnknownIntent(_) => true,
            SkillError::InvalidInput(_) => true,
            SkillError::Http(_) => true,
            SkillError::Serialization(_) => false,
            SkillError::Io(_) => true,
            SkillError::UrlParse(_) => false,
            SkillError::LogInit(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SkillError::Config(_) => ErrorSeverity::Critical,
            SkillError::ConfigLoad(_) => ErrorSeverity::Critical,
            SkillError::LogInit(_) => ErrorSeverity::Critical,
            SkillError::InvalidApplicationId { .. } => ErrorSeverity::Warning,
            SkillError::InvalidSessionState(_) => ErrorSeverity::Warning,
            SkillError::UnknownIntent(_) => ErrorSeverity::Warning,
            SkillError::InvalidInput(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
