//! Typed key-value store attached to an item.
//!
//! Every item may carry a [`PersistentData`] record inside its metadata. The
//! record travels with the item value and serializes with it, so there is no
//! global registry keyed by item identity. Reads are typed: asking for a
//! string under a key that holds an integer yields `None`, never a panic.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single typed value in a [`PersistentData`] record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum DataValue {
    /// A UTF-8 string.
    String(String),
    /// A signed integer.
    Integer(i64),
}

/// Namespaced, typed key-value entries owned by one item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersistentData {
    entries: BTreeMap<String, DataValue>,
}

impl PersistentData {
    /// Create an empty record.
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Store a string under `key`, replacing any previous value.
    pub fn set_string(&mut self, key: &str, value: impl Into<String>) {
        self.entries
            .insert(key.to_owned(), DataValue::String(value.into()));
    }

    /// Store an integer under `key`, replacing any previous value.
    pub fn set_integer(&mut self, key: &str, value: i64) {
        self.entries.insert(key.to_owned(), DataValue::Integer(value));
    }

    /// Read the string under `key`. `None` if absent or not a string.
    pub fn get_string(&self, key: &str) -> Option<&str> {
        match self.entries.get(key) {
            Some(DataValue::String(value)) => Some(value),
            _ => None,
        }
    }

    /// Read the integer under `key`. `None` if absent or not an integer.
    pub fn get_integer(&self, key: &str) -> Option<i64> {
        match self.entries.get(key) {
            Some(DataValue::Integer(value)) => Some(*value),
            _ => None,
        }
    }

    /// Whether a string value is stored under `key`.
    pub fn has_string(&self, key: &str) -> bool {
        self.get_string(key).is_some()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the record holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
