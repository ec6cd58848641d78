//! Persistent key/value store used for UI preferences.
//!
//! The browser implementation lives in `crate::web`; [`MemoryStore`] backs
//! tests and server-side rendering.

use std::collections::HashMap;

use crate::error::UiError;

/// String-keyed persistent store (browser localStorage or a fake).
pub trait KeyValueStore {
    /// Read a value. `None` means "never written".
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value, replacing any previous one.
    fn set(&mut self, key: &str, value: &str) -> Result<(), UiError>;

    /// Read a boolean flag stored as `"true"`/`"false"`. Anything else is `None`.
    fn get_flag(&self, key: &str) -> Option<bool> {
        match self.get(key)?.as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        }
    }

    fn set_flag(&mut self, key: &str, value: bool) -> Result<(), UiError> {
        self.set(key, if value { "true" } else { "false" })
    }
}

/// In-memory store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-seeded with entries (handy for "reload" scenarios).
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), UiError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Write to the store, logging instead of failing. Writes are best effort.
pub(crate) fn persist<S: KeyValueStore>(store: &mut S, key: &str, value: &str) {
    if let Err(e) = store.set(key, value) {
        tracing::warn!(key, error = %e, "Failed to persist UI state");
    }
}
