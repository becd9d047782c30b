//! Session attributes
//!
//! The voice platform hands the skill a key/value map with every request and
//! stores whatever map comes back in the response. This module wraps that map
//! with typed accessors for the keys the skill cares about.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::utils::errors::{SkillError, Result};

/// Key holding the pagination cursor
pub const KEY_CURRENT_INDEX: &str = "current";

/// Key holding the category of the active list
pub const KEY_CURRENT_CATEGORY: &str = "category";

/// Caller-owned session attribute map
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionAttributes {
    data: Map<String, Value>,
}

impl SessionAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the pagination cursor
    ///
    /// Returns `Ok(None)` when no list has been started. Numeric strings are
    /// accepted; anything else that is not a non-negative integer is an error.
    pub fn cursor(&self) -> Result<Option<usize>> {
        match self.data.get(KEY_CURRENT_INDEX) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Number(n)) => n
                .as_u64()
                .map(|n| Some(n as usize))
                .ok_or_else(|| SkillError::InvalidSessionState(format!("cursor {} is not a valid index", n))),
            Some(Value::String(s)) => s
                .trim()
                .parse::<usize>()
                .map(Some)
                .map_err(|_| SkillError::InvalidSessionState(format!("cursor '{}' is not a valid index", s))),
            Some(other) => Err(SkillError::InvalidSessionState(format!(
                "cursor has unexpected type: {}",
                other
            ))),
        }
    }

    pub fn set_cursor(&mut self, cursor: usize) {
        self.data.insert(KEY_CURRENT_INDEX.to_string(), Value::from(cursor));
    }

    /// Category of the active list, if any
    pub fn category(&self) -> Option<&str> {
        self.data.get(KEY_CURRENT_CATEGORY).and_then(Value::as_str)
    }

    pub fn set_category(&mut self, category: &str) {
        self.data.insert(KEY_CURRENT_CATEGORY.to_string(), Value::from(category));
    }

    /// Item stored at a list index; blank strings count as missing
    pub fn item(&self, index: usize) -> Option<&str> {
        self.data
            .get(&index.to_string())
            .and_then(Value::as_str)
            .filter(|item| !item.trim().is_empty())
    }

    /// Replace the stored list with `items`
    ///
    /// Index keys left over from a previous, longer list are removed.
    pub fn set_items<S: AsRef<str>>(&mut self, items: &[S]) {
        let stale: Vec<String> = self
            .data
            .keys()
            .filter(|key| key.parse::<usize>().is_ok())
            .cloned()
            .collect();
        for key in stale {
            self.data.remove(&key);
        }

        for (index, item) in items.iter().enumerate() {
            self.data.insert(index.to_string(), Value::from(item.as_ref()));
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.data.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.data.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.data
    }
}

impl From<Map<String, Value>> for SessionAttributes {
    fn from(data: Map<String, Value>) -> Self {
        Self { data }
    }
}
