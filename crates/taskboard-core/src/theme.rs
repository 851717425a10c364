//! Light/dark theme preference and its persistent store.

use std::{cell::RefCell, collections::HashMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Default key under which the preference is persisted.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Two-valued color theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The persisted string form.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The opposite theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognised theme string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme: {0}")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

/// String key/value storage that outlives a page load.
///
/// Failures are swallowed by implementations.
pub trait PreferenceStorage {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str);
}

/// In-memory storage, used off the browser and in tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStorage for MemoryStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

impl<S: PreferenceStorage + ?Sized> PreferenceStorage for &S {
    fn load(&self, key: &str) -> Option<String> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) {
        (**self).save(key, value)
    }
}

/// Current theme preference backed by persistent storage.
///
/// Every change is written through to the storage.
#[derive(Debug)]
pub struct ThemeStore<S> {
    storage: S,
    key: String,
    theme: Theme,
}

impl<S: PreferenceStorage> ThemeStore<S> {
    /// Read the persisted preference under `key`, defaulting to light.
    pub fn load(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let theme = match storage.load(&key) {
            Some(value) => value.parse::<Theme>().unwrap_or_else(|err| {
                log::warn!("Ignoring stored theme preference: {err}");
                Theme::default()
            }),
            None => Theme::default(),
        };
        let store = Self {
            storage,
            key,
            theme,
        };
        store.persist();
        store
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Switch to the opposite theme and persist it.
    pub fn toggle(&mut self) -> Theme {
        self.set(self.theme.toggled());
        self.theme
    }

    /// Set the theme and persist it.
    pub fn set(&mut self, theme: Theme) {
        self.theme = theme;
        log::debug!("Theme changed to {theme}");
        self.persist();
    }

    fn persist(&self) {
        self.storage.save(&self.key, self.theme.as_str());
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_round_trip_strings() {
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert!("Dark".parse::<Theme>().is_err());
        assert_eq!(Theme::Dark.to_string(), "dark");
    }

    #[test]
    fn test_defaults_to_light() {
        let store = ThemeStore::load(MemoryStorage::new(), THEME_STORAGE_KEY);
        assert_eq!(store.theme(), Theme::Light);
        assert_eq!(
            store.storage().load(THEME_STORAGE_KEY).as_deref(),
            Some("light")
        );
    }

    #[test]
    fn test_reads_persisted_value() {
        let storage = MemoryStorage::new();
        storage.save(THEME_STORAGE_KEY, "dark");

        let store = ThemeStore::load(&storage, THEME_STORAGE_KEY);
        assert_eq!(store.theme(), Theme::Dark);
    }

    #[test]
    fn test_unknown_persisted_value_falls_back() {
        let storage = MemoryStorage::new();
        storage.save(THEME_STORAGE_KEY, "sepia");

        let store = ThemeStore::load(&storage, THEME_STORAGE_KEY);
        assert_eq!(store.theme(), Theme::Light);
        assert_eq!(storage.load(THEME_STORAGE_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn test_toggle_twice_persists_each_step() {
        let storage = MemoryStorage::new();
        let mut store = ThemeStore::load(&storage, THEME_STORAGE_KEY);
        let original = store.theme();

        let after_first = store.toggle();
        assert_eq!(after_first, Theme::Dark);
        assert_eq!(
            storage.load(THEME_STORAGE_KEY).as_deref(),
            Some(after_first.as_str())
        );

        let after_second = store.toggle();
        assert_eq!(after_second, original);
        assert_eq!(
            storage.load(THEME_STORAGE_KEY).as_deref(),
            Some(after_second.as_str())
        );
    }

    #[test]
    fn test_custom_key() {
        let storage = MemoryStorage::new();
        let mut store = ThemeStore::load(&storage, "my-theme");
        store.set(Theme::Dark);
        assert_eq!(storage.load("my-theme").as_deref(), Some("dark"));
        assert!(storage.load(THEME_STORAGE_KEY).is_none());
    }
}
