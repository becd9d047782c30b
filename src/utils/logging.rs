//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the SavvyTrends skill.

use tracing::{info, debug, error};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};
use crate::config::LoggingConfig;
use crate::utils::errors::{SkillError, Result};

/// Initialize logging based on configuration
///
/// The returned guard flushes the file writer on drop and must be kept alive
/// for the lifetime of the process.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_new(&config.level)
        .map_err(|e| SkillError::LogInit(format!("invalid level '{}': {}", config.level, e)))?;

    let stdout_layer = if config.json {
        fmt::layer().json().with_writer(std::io::stdout).boxed()
    } else {
        fmt::layer().with_writer(std::io::stdout).boxed()
    };

    let (file_layer, guard) = match config.directory {
        Some(ref directory) => {
            let file_appender = tracing_appender::rolling::daily(directory, "savvytrends.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = fmt::layer().with_ansi(false).with_writer(non_blocking).boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| SkillError::LogInit(e.to_string()))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log an incoming turn
pub fn log_request(session_id: &str, request_id: &str, kind: &str, intent: Option<&str>) {
    info!(
        session_id = session_id,
        request_id = request_id,
        kind = kind,
        intent = intent,
        "Skill request received"
    );
}

/// Log the outcome of category resolution
pub fn log_category_resolution(session_id: &str, phrase: Option<&str>, category: Option<&str>) {
    info!(
        session_id = session_id,
        phrase = phrase,
        category = category,
        resolved = category.is_some(),
        "Category resolution"
    );
}

/// Log a pagination step
pub fn log_pagination(session_id: &str, cursor: usize, should_continue: bool) {
    debug!(
        session_id = session_id,
        cursor = cursor,
        should_continue = should_continue,
        "Pagination advanced"
    );
}

/// Log API errors with context
pub fn log_api_error(api: &str, error: &str, context: Option<&str>) {
    error!(
        api = api,
        error = error,
        context = context,
        "API error occurred"
    );
}
