//! In-memory preference storage.
//!
//! Used when the platform offers no durable storage at all (the theme then
//! lasts for the current page only) and as the backing store in tests.

use std::cell::RefCell;
use std::collections::HashMap;

use folio_domain::error::StorageError;

use crate::ports::PreferenceStorage;

/// Session-only [`PreferenceStorage`] backed by a `HashMap`.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `items`.
    pub fn with_items<K, V>(items: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            items: RefCell::new(
                items
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl PreferenceStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_return_none_when_key_missing() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get_item("theme").unwrap(), None);
        assert!(storage.is_empty());
    }

    #[test]
    fn should_overwrite_existing_value() {
        let storage = MemoryStorage::with_items([("theme", "dark")]);
        storage.set_item("theme", "light").unwrap();
        assert_eq!(storage.get_item("theme").unwrap().as_deref(), Some("light"));
        assert_eq!(storage.len(), 1);
    }
}
