//! Theme preference store — the single owner of the page-wide theme.
//!
//! Keeps three things in agreement: the in-memory [`ThemeValue`], the durable
//! record in [`PreferenceStorage`], and the markers on the [`DocumentRoot`].
//! Storage failures never escape: they are logged and the store carries on
//! with in-memory state for the rest of the page's life.

use folio_domain::theme::{THEME_STORAGE_KEY, ThemeValue};

use crate::ports::{DocumentRoot, PreferenceStorage};

/// Owned theme state for one page instance.
///
/// There is no "unset" state: the only way to obtain a store is
/// [`initialize`](Self::initialize), which resolves the starting theme and
/// applies its markers.
#[derive(Debug)]
pub struct ThemePreferenceStore<S, D> {
    storage: S,
    root: D,
    key: &'static str,
    current: ThemeValue,
    persisted: bool,
}

impl<S: PreferenceStorage, D: DocumentRoot> ThemePreferenceStore<S, D> {
    /// Resolve the starting theme from `storage` under the `"theme"` key and
    /// apply it to `root`.
    pub fn initialize(storage: S, root: D) -> Self {
        Self::initialize_with_key(storage, root, THEME_STORAGE_KEY)
    }

    /// Like [`initialize`](Self::initialize) with a custom storage key.
    ///
    /// A missing, unrecognised, or unreadable record resolves to the default
    /// theme. The default is applied to the root but not written back.
    pub fn initialize_with_key(storage: S, root: D, key: &'static str) -> Self {
        let restored = match storage.get_item(key) {
            Ok(Some(raw)) => {
                let parsed = ThemeValue::parse_stored(&raw);
                if parsed.is_none() {
                    tracing::debug!(key, value = %raw, "ignoring unrecognised stored theme");
                }
                parsed
            }
            Ok(None) => None,
            Err(err) => {
                tracing::warn!(key, error = %err, "theme preference unreadable, using default");
                None
            }
        };

        let current = restored.unwrap_or_default();
        root.set_markers(current.markers());
        tracing::debug!(theme = %current, restored = restored.is_some(), "theme initialised");

        Self {
            storage,
            root,
            key,
            current,
            persisted: restored.is_some(),
        }
    }

    /// Switch to the opposite theme, persist it, and update the root markers.
    ///
    /// Returns the new theme. A failed write is logged and otherwise ignored.
    pub fn toggle(&mut self) -> ThemeValue {
        let next = self.current.toggled();
        self.current = next;

        self.persisted = match self.storage.set_item(self.key, next.as_str()) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(
                    key = self.key,
                    error = %err,
                    "failed to persist theme, keeping it for this page only"
                );
                false
            }
        };
        self.root.set_markers(next.markers());

        tracing::debug!(theme = %next, persisted = self.persisted, "theme toggled");
        next
    }
}

impl<S, D> ThemePreferenceStore<S, D> {
    /// The active theme.
    #[must_use]
    pub fn current(&self) -> ThemeValue {
        self.current
    }

    /// Storage key the preference lives under.
    #[must_use]
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Whether durable storage holds the active theme.
    ///
    /// `false` after falling back to the default, and after a failed write.
    #[must_use]
    pub fn is_persisted(&self) -> bool {
        self.persisted
    }

    /// The backing storage.
    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }
}
