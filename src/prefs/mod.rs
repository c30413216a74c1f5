//! Visitor preferences: colour theme and accessibility mode.
//!
//! Both are read once from a [`PreferenceStore`] when the page loads and
//! written back on every toggle.

mod store;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SiteError};

pub use store::{MemoryPreferenceStore, PreferenceStore, SqlitePreferenceStore};

pub const THEME_KEY: &str = "theme";
pub const ACCESSIBILITY_KEY: &str = "accessibilityActive";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(SiteError::InvalidPreference {
                key: THEME_KEY.to_string(),
                value: other.to_string(),
            }),
        }
    }
}

/// Preferences as applied to the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub theme: Theme,
    pub accessibility_active: bool,
}

impl Preferences {
    /// Read both keys. An absent or unreadable theme counts as light;
    /// accessibility is on only for the exact value `true`.
    pub fn load(store: &dyn PreferenceStore) -> Result<Self> {
        let theme = stored_theme(store.get(THEME_KEY)?.as_deref());
        let accessibility_active = store.get(ACCESSIBILITY_KEY)?.as_deref() == Some("true");

        Ok(Self {
            theme,
            accessibility_active,
        })
    }

    /// Flip the stored theme (absent or unreadable counts as light) and
    /// adopt the result. The read and the write happen as one store update,
    /// so concurrent toggles never collapse into one.
    pub fn toggle_theme(&mut self, store: &dyn PreferenceStore) -> Result<Theme> {
        let stored = store.update(THEME_KEY, &|current: Option<&str>| {
            stored_theme(current).toggled().as_str().to_string()
        })?;
        self.theme = stored_theme(Some(&stored));
        Ok(self.theme)
    }

    /// Flip the stored accessibility mode and adopt the result.
    pub fn toggle_accessibility(&mut self, store: &dyn PreferenceStore) -> Result<bool> {
        let stored = store.update(ACCESSIBILITY_KEY, &|current: Option<&str>| {
            let next = current != Some("true");
            next.to_string()
        })?;
        self.accessibility_active = stored == "true";
        Ok(self.accessibility_active)
    }
}

fn stored_theme(raw: Option<&str>) -> Theme {
    match raw {
        Some(raw) => raw.parse::<Theme>().unwrap_or_else(|e| {
            log::warn!("Ignoring stored theme: {}", e);
            Theme::Light
        }),
        None => Theme::Light,
    }
}
