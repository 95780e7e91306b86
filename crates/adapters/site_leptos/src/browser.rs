//! Browser adapters for the theme store ports.

use folio_app::ports::{DocumentRoot, PreferenceStorage};
use folio_domain::error::StorageError;
use folio_domain::theme::{ThemeMarkers, ThemeValue};
use wasm_bindgen::JsValue;

/// [`PreferenceStorage`] backed by `window.localStorage`.
pub struct BrowserStorage {
    storage: web_sys::Storage,
}

impl BrowserStorage {
    /// Open `localStorage`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] when there is no window or the
    /// browser denies access (disabled storage, sandboxed iframe, …).
    pub fn open() -> Result<Self, StorageError> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .map(|storage| Self { storage })
            .ok_or(StorageError::Unavailable)
    }
}

fn js_reason(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

impl PreferenceStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage
            .get_item(key)
            .map_err(|err| StorageError::Read {
                key: key.to_string(),
                reason: js_reason(&err),
            })
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|err| StorageError::Write {
                key: key.to_string(),
                reason: js_reason(&err),
            })
    }
}

/// [`DocumentRoot`] for the `<html>` element.
///
/// Swaps theme classes token by token so classes set by anything else
/// survive, and mirrors the theme in `data-theme`.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlRoot;

impl DocumentRoot for HtmlRoot {
    fn set_markers(&self, markers: ThemeMarkers) {
        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        else {
            log::warn!("no document element, theme markers not applied");
            return;
        };

        swap_theme_classes(&el.class_list(), markers);
        if let Err(err) = el.set_attribute("data-theme", &markers.class_attr()) {
            log::warn!("failed to set data-theme: {}", js_reason(&err));
        }
    }
}

/// Token-level edits on an element's class list.
trait ClassTokens {
    fn add_token(&self, token: &str) -> Result<(), String>;
    fn remove_token(&self, token: &str) -> Result<(), String>;
}

impl ClassTokens for web_sys::DomTokenList {
    fn add_token(&self, token: &str) -> Result<(), String> {
        self.add_1(token).map_err(|err| js_reason(&err))
    }

    fn remove_token(&self, token: &str) -> Result<(), String> {
        self.remove_1(token).map_err(|err| js_reason(&err))
    }
}

/// Drop every theme marker not in `markers`, then add `markers`.
fn swap_theme_classes(classes: &impl ClassTokens, markers: ThemeMarkers) {
    for theme in ThemeValue::ALL {
        for stale in theme.markers().iter() {
            if markers.contains(stale) {
                continue;
            }
            if let Err(reason) = classes.remove_token(stale) {
                log::warn!("failed to remove root class {stale:?}: {reason}");
            }
        }
    }
    for marker in markers.iter() {
        if let Err(reason) = classes.add_token(marker) {
            log::warn!("failed to add root class {marker:?}: {reason}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Ordered class list, like `DOMTokenList`.
    #[derive(Default)]
    struct FakeClassList(RefCell<Vec<String>>);

    impl FakeClassList {
        fn with(classes: &[&str]) -> Self {
            Self(RefCell::new(classes.iter().map(ToString::to_string).collect()))
        }

        fn tokens(&self) -> Vec<String> {
            self.0.borrow().clone()
        }
    }

    impl ClassTokens for FakeClassList {
        fn add_token(&self, token: &str) -> Result<(), String> {
            let mut list = self.0.borrow_mut();
            if !list.iter().any(|t| t == token) {
                list.push(token.to_string());
            }
            Ok(())
        }

        fn remove_token(&self, token: &str) -> Result<(), String> {
            self.0.borrow_mut().retain(|t| t != token);
            Ok(())
        }
    }

    /// Rejects every edit, like a token containing whitespace.
    struct BrokenClassList;

    impl ClassTokens for BrokenClassList {
        fn add_token(&self, _token: &str) -> Result<(), String> {
            Err("InvalidCharacterError".to_string())
        }

        fn remove_token(&self, _token: &str) -> Result<(), String> {
            Err("InvalidCharacterError".to_string())
        }
    }

    #[test]
    fn should_keep_unrelated_classes_when_swapping_theme() {
        let classes = FakeClassList::with(&["dark", "scroll-smooth"]);

        swap_theme_classes(&classes, ThemeValue::Light.markers());

        assert_eq!(classes.tokens(), vec!["scroll-smooth", "light"]);
    }

    #[test]
    fn should_clear_every_stale_theme_class() {
        let classes = FakeClassList::with(&["light", "dark", "antialiased"]);

        swap_theme_classes(&classes, ThemeValue::Dark.markers());

        assert_eq!(classes.tokens(), vec!["dark", "antialiased"]);
    }

    #[test]
    fn should_add_marker_to_empty_class_list() {
        let classes = FakeClassList::default();

        swap_theme_classes(&classes, ThemeValue::Dark.markers());

        assert_eq!(classes.tokens(), vec!["dark"]);
    }

    #[test]
    fn should_keep_going_when_class_edits_fail() {
        swap_theme_classes(&BrokenClassList, ThemeValue::Light.markers());
    }
}
