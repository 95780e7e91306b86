//! Preference storage port — the durable key-value record behind the theme.

use std::rc::Rc;
use std::sync::Arc;

use folio_domain::error::StorageError;

/// A string key-value store that survives page loads.
///
/// In the browser this is `localStorage`; anything that can fail (disabled
/// storage, quota exceeded, private browsing) reports a [`StorageError`].
pub trait PreferenceStorage {
    /// Read the value stored under `key`, or `None` if nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backing store cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, overwriting any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backing store rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<T: PreferenceStorage + ?Sized> PreferenceStorage for &T {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }
}

impl<T: PreferenceStorage + ?Sized> PreferenceStorage for Rc<T> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }
}

impl<T: PreferenceStorage + ?Sized> PreferenceStorage for Arc<T> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }
}
