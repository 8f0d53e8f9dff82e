//! UI preferences
//!
//! Persisted to LocalStorage so the dark-mode choice survives reloads.
//! Scores are deliberately not persisted.

use serde::{Deserialize, Serialize};

/// User preferences for the page chrome around the game
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Dark page styling (cosmetic only, no effect on the simulation)
    pub dark_mode: bool,
}

impl Settings {
    /// LocalStorage key
    const STORAGE_KEY: &'static str = "retro_pong_settings";

    /// Button label for the current mode
    pub fn dark_mode_label(&self) -> &'static str {
        if self.dark_mode {
            "☀️ Light Mode"
        } else {
            "🌙 Dark Mode"
        }
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage
            && let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY)
            && let Ok(settings) = serde_json::from_str(&json)
        {
            log::info!("Loaded settings from LocalStorage");
            return settings;
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage
            && let Ok(json) = serde_json::to_string(self)
        {
            let _ = storage.set_item(Self::STORAGE_KEY, &json);
            log::info!("Settings saved");
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
