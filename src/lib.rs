//! SavvyTrends voice skill
//!
//! A voice assistant skill that reads out trending topics and pages through
//! catalog best sellers across conversational turns. This library provides the
//! category resolver, the pagination engine, the turn handler and the HTTP host.

#![allow(non_snake_case)]

pub mod catalog;
pub mod config;
pub mod handlers;
pub mod models;
pub mod server;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::{Settings, SkillConfig};
pub use utils::errors::{SkillError, Result};

// Re-export main components for easy access
pub use catalog::{CategoryResolver, Resolution};
pub use handlers::{SkillDispatcher, TrendsSkill, TurnHandler};
pub use services::ServiceFactory;
pub use state::{PaginationEngine, SessionAttributes};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
