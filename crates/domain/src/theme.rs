//! Theme — the light/dark presentation mode and its document-root markers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Storage key under which the theme preference is persisted.
pub const THEME_STORAGE_KEY: &str = "theme";

/// A named visual presentation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeValue {
    #[default]
    Dark,
    Light,
}

impl ThemeValue {
    /// Every theme, default first.
    pub const ALL: [Self; 2] = [Self::Dark, Self::Light];

    /// The opposite theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// The literal persisted in storage and used as the root marker.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Interpret a raw stored value.
    ///
    /// Only the exact literals `"dark"` and `"light"` are recognised; anything
    /// else is reported as absent.
    #[must_use]
    pub fn parse_stored(raw: &str) -> Option<Self> {
        match raw {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    /// Markers that must be present on the document root for this theme.
    #[must_use]
    pub fn markers(self) -> ThemeMarkers {
        match self {
            Self::Dark => ThemeMarkers(&["dark"]),
            Self::Light => ThemeMarkers(&["light"]),
        }
    }
}

impl fmt::Display for ThemeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by [`ThemeValue::from_str`] for anything but `dark` or `light`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme {0:?}")]
pub struct UnknownThemeError(pub String);

impl FromStr for ThemeValue {
    type Err = UnknownThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_stored(s).ok_or_else(|| UnknownThemeError(s.to_string()))
    }
}

/// The complete set of presentation markers for one theme.
///
/// Applied to the document root as a whole, replacing whatever was there, so
/// markers of a previous theme can never stay stacked with the new ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeMarkers(&'static [&'static str]);

impl ThemeMarkers {
    /// Markers in application order.
    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().copied()
    }

    #[must_use]
    pub fn contains(&self, marker: &str) -> bool {
        self.0.iter().any(|m| *m == marker)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Space-separated form, suitable for a `class` attribute.
    #[must_use]
    pub fn class_attr(&self) -> String {
        self.0.join(" ")
    }
}
