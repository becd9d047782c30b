//! Utility modules
//!
//! This module contains common utilities used throughout the skill,
//! including error handling and logging setup.

pub mod errors;
pub mod logging;

pub use errors::{SkillError, UpstreamError, Result};
