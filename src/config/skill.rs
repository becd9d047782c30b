//! Skill constants
//!
//! Batch size, list length and the catalog tables are fixed when the skill is
//! built. They are bundled into an immutable [`SkillConfig`] that is handed to
//! the category resolver and the pagination engine at construction.

use crate::catalog::{AliasTable, CategoryTable};
use crate::utils::errors::{SkillError, Result};

/// Number of items read out per pagination turn
pub const PAGINATION_SIZE: usize = 3;

/// Maximum number of items read from a list
pub const MAX_ITEMS: usize = 10;

/// Cardinal to ordinal word lookup for spoken output
pub const ORDINAL_WORDS: [&str; 11] = [
    "Zero",
    "First",
    "Second",
    "Third",
    "Fourth",
    "Fifth",
    "Sixth",
    "Seventh",
    "Eighth",
    "Ninth",
    "Tenth",
];

/// Immutable skill configuration shared by the resolver and the pagination engine
#[derive(Debug, Clone)]
pub struct SkillConfig {
    batch_size: usize,
    max_items: usize,
    categories: CategoryTable,
    aliases: AliasTable,
}

impl SkillConfig {
    /// Create a configuration over custom tables
    ///
    /// Every alias must point at a category present in `categories`.
    pub fn new(categories: CategoryTable, aliases: AliasTable) -> Result<Self> {
        if categories.is_empty() {
            return Err(SkillError::Config("Category table must not be empty".to_string()));
        }

        for (alias, target) in aliases.iter() {
            if categories.get(target).is_none() {
                return Err(SkillError::Config(format!(
                    "Alias '{}' points at unknown category '{}'",
                    alias, target
                )));
            }
        }

        Ok(Self {
            batch_size: PAGINATION_SIZE,
            max_items: MAX_ITEMS,
            categories,
            aliases,
        })
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn max_items(&self) -> usize {
        self.max_items
    }

    pub fn categories(&self) -> &CategoryTable {
        &self.categories
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    /// Ordinal word for a 1-based list position
    pub fn ordinal(&self, position: usize) -> Option<&'static str> {
        ORDINAL_WORDS.get(position).copied()
    }
}

impl Default for SkillConfig {
    fn default() -> Self {
        Self {
            batch_size: PAGINATION_SIZE,
            max_items: MAX_ITEMS,
            categories: CategoryTable::builtin(),
            aliases: AliasTable::builtin(),
        }
    }
}
