//! `localStorage`-backed theme-preference store implementation.

use ui_core::{ThemeStore, THEME_STORAGE_KEY};

#[derive(Debug, Clone, Copy, Default)]
/// Browser theme store backed by `window.localStorage` under
/// [`THEME_STORAGE_KEY`].
pub struct WebThemeStore;

impl ThemeStore for WebThemeStore {
    fn load(&self) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            let storage = web_sys::window()?.local_storage().ok().flatten()?;
            storage.get_item(THEME_STORAGE_KEY).ok().flatten()
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            None
        }
    }

    fn save(&self, token: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            let storage = web_sys::window()
                .and_then(|w| w.local_storage().ok().flatten())
                .ok_or_else(|| "localStorage unavailable".to_string())?;
            storage
                .set_item(THEME_STORAGE_KEY, token)
                .map_err(|e| format!("localStorage set_item failed: {e:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = token;
            Ok(())
        }
    }
}
