//! Page-wide theme state, shared through Leptos context.
//!
//! The store is created once in [`provide_theme`] at the application root;
//! pages and components reach it with [`use_theme`].

use std::rc::Rc;

use folio_app::ports::PreferenceStorage;
use folio_app::services::ThemePreferenceStore;
use folio_app::storage::MemoryStorage;
use folio_domain::theme::ThemeValue;
use leptos::prelude::*;

use crate::browser::{BrowserStorage, HtmlRoot};

type SiteThemeStore = ThemePreferenceStore<Rc<dyn PreferenceStorage>, HtmlRoot>;

/// Reactive handle to the theme store.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    theme: ReadSignal<ThemeValue>,
    set_theme: WriteSignal<ThemeValue>,
    store: StoredValue<SiteThemeStore, LocalStorage>,
}

impl ThemeContext {
    /// The active theme, tracked by the reactive system.
    pub fn theme(&self) -> ReadSignal<ThemeValue> {
        self.theme
    }

    /// Switch theme, persist it, and update the `<html>` markers.
    pub fn toggle(&self) {
        if let Some(next) = self.store.try_update_value(|store| store.toggle()) {
            self.set_theme.set(next);
        }
    }
}

/// Pick the durable store: `localStorage` when the browser grants it, an
/// in-memory map otherwise.
fn open_storage() -> Rc<dyn PreferenceStorage> {
    match BrowserStorage::open() {
        Ok(storage) => Rc::new(storage),
        Err(err) => {
            log::warn!("{err}, theme preference will last for this page only");
            Rc::new(MemoryStorage::new())
        }
    }
}

/// Initialise the theme store and provide it as context.
///
/// Call exactly once, at the root of the component tree.
pub fn provide_theme() -> ThemeContext {
    let store = ThemePreferenceStore::initialize(open_storage(), HtmlRoot);
    let (theme, set_theme) = signal(store.current());

    let ctx = ThemeContext {
        theme,
        set_theme,
        store: StoredValue::new_local(store),
    };
    provide_context(ctx);
    ctx
}

/// Access the theme context.
///
/// Must be called within a component tree whose root called [`provide_theme`].
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found in context")
}
