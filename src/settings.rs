//! Engine start options
//!
//! Persisted in LocalStorage on the web so a page can remember its scale.

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_CANVAS_ID, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineOptions {
    /// Integer upscale factor of the display surface
    pub scale: u32,
    /// Id of the canvas element the web host draws to
    pub canvas_id: String,
    /// Log level name (`error`, `warn`, `info`, `debug`, `trace`)
    pub log_level: String,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            scale: 1,
            canvas_id: DEFAULT_CANVAS_ID.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl EngineOptions {
    /// Options with everything at its default except the scale
    pub fn with_scale(scale: u32) -> Self {
        Self {
            scale,
            ..Self::default()
        }
    }

    /// Parse options from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.scale == 0 {
            return Err(Error::InvalidScale(self.scale));
        }
        Ok(())
    }

    /// Size of the upscaled display surface in pixels
    pub fn display_size(&self) -> (u32, u32) {
        (
            SCREEN_WIDTH as u32 * self.scale,
            SCREEN_HEIGHT as u32 * self.scale,
        )
    }

    /// Parsed log level, `Info` if the name is not recognized
    pub fn level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "stumge_options";

    /// Load options from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(options) => {
                        log::info!("Loaded engine options from LocalStorage");
                        return options;
                    }
                    Err(e) => log::warn!("Ignoring stored engine options: {}", e),
                }
            }
        }

        log::info!("Using default engine options");
        Self::default()
    }

    /// Save options to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = self.to_json() {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Engine options saved");
            }
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
