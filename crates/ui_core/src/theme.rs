//! Theme-preference model and storage contracts.
//!
//! The library persists a single `"light"`/`"dark"` token under a fixed key in a
//! key-value storage facility. The browser `localStorage` adapter lives in
//! `ui_host_web`.

use std::cell::RefCell;
use std::rc::Rc;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Storage key for the persisted theme preference token.
pub const THEME_STORAGE_KEY: &str = "theme";

/// User-selected color-scheme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThemePreference {
    /// Light color scheme.
    Light,
    /// Dark color scheme.
    Dark,
}

impl ThemePreference {
    /// Returns the stable storage token for the preference.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Returns the opposite preference.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Error for theme tokens that are neither `"light"` nor `"dark"`.
#[error("unknown theme preference token `{token}`")]
pub struct ParseThemeError {
    /// The rejected token.
    pub token: String,
}

impl FromStr for ThemePreference {
    type Err = ParseThemeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ParseThemeError {
                token: other.to_string(),
            }),
        }
    }
}

/// Host service persisting the theme token under [`THEME_STORAGE_KEY`].
pub trait ThemeStore {
    /// Loads the raw stored token, if any.
    fn load(&self) -> Option<String>;

    /// Saves the raw token.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage is unavailable or the write fails.
    fn save(&self, token: &str) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op theme store for unsupported targets.
pub struct NoopThemeStore;

impl ThemeStore for NoopThemeStore {
    fn load(&self) -> Option<String> {
        None
    }

    fn save(&self, _token: &str) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory theme store for tests and host-less targets.
pub struct MemoryThemeStore {
    inner: Rc<RefCell<Option<String>>>,
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Option<String> {
        self.inner.borrow().clone()
    }

    fn save(&self, token: &str) -> Result<(), String> {
        *self.inner.borrow_mut() = Some(token.to_string());
        Ok(())
    }
}

/// Loads and parses the persisted preference through a [`ThemeStore`] implementation.
///
/// Unparseable stored tokens are treated as absent.
pub fn load_theme_with<S: ThemeStore + ?Sized>(store: &S) -> Option<ThemePreference> {
    store.load()?.parse().ok()
}

/// Persists a preference through a [`ThemeStore`] implementation.
///
/// # Errors
///
/// Returns an error when the store save fails.
pub fn save_theme_with<S: ThemeStore + ?Sized>(
    store: &S,
    theme: ThemePreference,
) -> Result<(), String> {
    store.save(theme.as_str())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn preference_tokens_round_trip_through_memory_store() {
        let store = MemoryThemeStore::default();
        let store_obj: &dyn ThemeStore = &store;

        assert_eq!(load_theme_with(store_obj), None);
        save_theme_with(store_obj, ThemePreference::Dark).expect("save");
        assert_eq!(load_theme_with(store_obj), Some(ThemePreference::Dark));
        save_theme_with(store_obj, ThemePreference::Light).expect("save");
        assert_eq!(load_theme_with(store_obj), Some(ThemePreference::Light));
    }

    #[test]
    fn unknown_stored_tokens_are_treated_as_absent() {
        let store = MemoryThemeStore::default();
        store.save("solarized").expect("save");
        assert_eq!(load_theme_with(&store), None);

        let err = "solarized".parse::<ThemePreference>().expect_err("reject");
        assert_eq!(err.token, "solarized");
    }

    #[test]
    fn toggling_twice_restores_the_original_preference() {
        assert_eq!(ThemePreference::Light.toggled(), ThemePreference::Dark);
        assert_eq!(
            ThemePreference::Light.toggled().toggled(),
            ThemePreference::Light
        );
    }

    #[test]
    fn noop_store_is_empty_and_successful() {
        let store = NoopThemeStore;
        assert_eq!(store.load(), None);
        store.save("dark").expect("save");
        assert_eq!(store.load(), None);
    }
}
