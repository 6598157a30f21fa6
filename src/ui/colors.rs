//! Centralized color constants for the UI.

use eframe::egui::Color32;

/// Colors for the top bar.
pub mod ui {
    use super::Color32;

    /// Muted gray for labels and status text.
    pub const LABEL: Color32 = Color32::from_rgb(140, 140, 150);
    /// Title text.
    pub const TITLE: Color32 = Color32::WHITE;
    /// Name of the selected country.
    pub const ACTIVE: Color32 = Color32::from_rgb(255, 170, 60);
}

/// Colors for the map canvas.
pub mod map {
    use super::Color32;

    /// Background behind the countries.
    pub const BACKGROUND: Color32 = Color32::from_rgb(20, 20, 35);
}
