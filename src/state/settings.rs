//! Map appearance settings.
//!
//! Settings are read from localStorage on the web and from a JSON
//! file named by `WORLD_MAP_SETTINGS` on native. Every field is optional;
//! unset fields fall back to [`MapStyle::default`] and the equirectangular
//! aspect ratio.

use crate::geo::{MapStyle, DEFAULT_ASPECT};
use eframe::egui::Color32;
use serde::{Deserialize, Serialize};

/// Overrides for the map's look.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapSettings {
    /// Country fill as unmultiplied RGBA
    pub country_color: Option<[u8; 4]>,
    /// Selected country fill as unmultiplied RGBA
    pub selected_color: Option<[u8; 4]>,
    /// Border color as unmultiplied RGBA
    pub border_color: Option<[u8; 4]>,
    /// Border width in map units
    pub border_width: Option<f32>,
    /// Map width over height
    pub aspect: Option<f64>,
}

impl MapSettings {
    /// localStorage key holding the settings JSON.
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "world_map_settings";

    /// Environment variable naming a settings file on native.
    #[cfg(not(target_arch = "wasm32"))]
    const ENV_VAR: &'static str = "WORLD_MAP_SETTINGS";

    /// Returns the effective style with overrides applied.
    pub fn style(&self) -> MapStyle {
        let defaults = MapStyle::default();
        let color = |rgba: Option<[u8; 4]>, fallback: Color32| {
            rgba.map(|[r, g, b, a]| Color32::from_rgba_unmultiplied(r, g, b, a))
                .unwrap_or(fallback)
        };

        MapStyle {
            country_color: color(self.country_color, defaults.country_color),
            selected_color: color(self.selected_color, defaults.selected_color),
            border_color: color(self.border_color, defaults.border_color),
            border_width: self
                .border_width
                .filter(|w| w.is_finite() && *w >= 0.0)
                .unwrap_or(defaults.border_width),
        }
    }

    /// Returns the effective map aspect ratio.
    pub fn effective_aspect(&self) -> f64 {
        self.aspect
            .filter(|a| a.is_finite() && *a > 0.0)
            .unwrap_or(DEFAULT_ASPECT)
    }

    /// Parses settings JSON, falling back to defaults on error.
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Failed to parse map settings: {}", e);
                Self::default()
            }
        }
    }

    /// Load settings from localStorage.
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let window = match web_sys::window() {
            Some(w) => w,
            None => return Self::default(),
        };

        let storage = match window.local_storage() {
            Ok(Some(s)) => s,
            _ => return Self::default(),
        };

        match storage.get_item(Self::STORAGE_KEY) {
            Ok(Some(json)) => {
                log::info!("Loaded map settings from localStorage");
                Self::from_json(&json)
            }
            _ => Self::default(),
        }
    }

    /// Load settings from the file named by `WORLD_MAP_SETTINGS`, if any.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Ok(path) = std::env::var(Self::ENV_VAR) else {
            return Self::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(json) => {
                log::info!("Loaded map settings from {}", path);
                Self::from_json(&json)
            }
            Err(e) => {
                log::warn!("Failed to read map settings from {}: {}", path, e);
                Self::default()
            }
        }
    }
}
