//! Spoken category resolution
//!
//! Maps a free-form spoken phrase onto a canonical catalog category. The
//! strategies are tried in order and the first match wins:
//!
//! 1. alias lookup on the normalized phrase
//! 2. case-insensitive exact match on a category name
//! 3. containment in either direction between phrase and category name
//!
//! Several containment matches are broken by the smallest length difference
//! to the phrase, then by the lexicographically smallest lower-cased name.

use std::collections::HashMap;
use std::sync::Arc;
use regex::Regex;
use tracing::debug;

use crate::catalog::CatalogCategory;
use crate::config::SkillConfig;
use crate::utils::errors::{SkillError, Result};

/// Which strategy produced a match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStrategy {
    Alias,
    Exact,
    Substring,
}

/// Outcome of resolving a spoken phrase
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Resolved {
        category: CatalogCategory,
        strategy: MatchStrategy,
    },
    Unresolved,
}

impl Resolution {
    pub fn category(&self) -> Option<&CatalogCategory> {
        match self {
            Resolution::Resolved { category, .. } => Some(category),
            Resolution::Unresolved => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved { .. })
    }
}

/// Resolves spoken category names against the catalog tables
#[derive(Debug, Clone)]
pub struct CategoryResolver {
    config: Arc<SkillConfig>,
    separators: Regex,
    /// Alias table keyed by the normalized alias
    aliases: HashMap<String, String>,
}

impl CategoryResolver {
    /// Build a resolver; fails if two aliases normalize to the same key but
    /// name different categories
    pub fn new(config: Arc<SkillConfig>) -> Result<Self> {
        let separators = Regex::new(r"[\s.]+")
            .map_err(|e| SkillError::Config(format!("Invalid separator pattern: {}", e)))?;

        let mut aliases: HashMap<String, String> = HashMap::new();
        for (alias, category) in config.aliases().iter() {
            let key = normalize_with(&separators, alias);
            if key.is_empty() {
                return Err(SkillError::Config(format!("Alias '{}' is blank after normalization", alias)));
            }
            match aliases.get(&key) {
                Some(existing) if existing != category => {
                    return Err(SkillError::Config(format!(
                        "Alias '{}' clashes with another alias for {}",
                        alias, existing
                    )));
                }
                _ => {
                    aliases.insert(key, category.to_string());
                }
            }
        }

        Ok(Self {
            config,
            separators,
            aliases,
        })
    }

    /// Lower-case, drop spaces and periods, and spell "three" as "3"
    pub fn normalize(&self, phrase: &str) -> String {
        normalize_with(&self.separators, phrase)
    }

    /// Resolve a raw slot value; `None` and blank phrases are unresolved
    pub fn resolve(&self, phrase: Option<&str>) -> Resolution {
        let Some(phrase) = phrase else {
            debug!("No category phrase supplied");
            return Resolution::Unresolved;
        };

        let normalized = self.normalize(phrase);
        if normalized.is_empty() {
            debug!(phrase = %phrase, "Category phrase is blank after normalization");
            return Resolution::Unresolved;
        }

        let resolution = self.resolve_normalized(&normalized);
        match &resolution {
            Resolution::Resolved { category, strategy } => {
                debug!(
                    phrase = %phrase,
                    normalized = %normalized,
                    category = %category.name,
                    strategy = ?strategy,
                    "Resolved spoken category"
                );
            }
            Resolution::Unresolved => {
                debug!(phrase = %phrase, normalized = %normalized, "Spoken category unresolved");
            }
        }
        resolution
    }

    fn resolve_normalized(&self, normalized: &str) -> Resolution {
        let categories = self.config.categories();

        if let Some(category) = self
            .aliases
            .get(normalized)
            .and_then(|name| categories.get(name))
        {
            return Resolution::Resolved {
                category: category.clone(),
                strategy: MatchStrategy::Alias,
            };
        }

        if let Some(category) = categories.find_ignore_case(normalized) {
            return Resolution::Resolved {
                category: category.clone(),
                strategy: MatchStrategy::Exact,
            };
        }

        let best = categories
            .iter()
            .map(|category| (category, category.name.to_lowercase()))
            .filter(|(_, key)| key.contains(normalized) || normalized.contains(key.as_str()))
            .min_by(|(_, a), (_, b)| {
                let distance = |key: &str| key.len().abs_diff(normalized.len());
                distance(a.as_str())
                    .cmp(&distance(b.as_str()))
                    .then_with(|| a.cmp(b))
            });

        match best {
            Some((category, _)) => Resolution::Resolved {
                category: category.clone(),
                strategy: MatchStrategy::Substring,
            },
            None => Resolution::Unresolved,
        }
    }
}

fn normalize_with(separators: &Regex, phrase: &str) -> String {
    let lowered = phrase.to_lowercase();
    separators.replace_all(&lowered, "").replace("three", "3")
}
