//! State management module
//!
//! This module handles the caller-owned session attributes and the list
//! pagination that runs on top of them.

pub mod attributes;
pub mod pagination;

// Re-export commonly used state components
pub use attributes::{SessionAttributes, KEY_CURRENT_CATEGORY, KEY_CURRENT_INDEX};
pub use pagination::{Advance, Page, PageEntry, PaginationEngine, CHOOSE_CATEGORY_PROMPT, HEAR_MORE_PROMPT};
