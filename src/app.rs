//! The eframe application: loads the bundled countries once and wires the
//! panels together.

use crate::geo;
use crate::state::{AppState, MapSettings};
use crate::ui;
use eframe::egui;

// Embed country outlines at compile time
static WORLD_JSON: &str = include_str!("../assets/world.json");

/// Main application state and logic.
pub struct WorldMapApp {
    state: AppState,
}

impl WorldMapApp {
    /// Creates the app from the bundled world data and stored settings.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::from_document(WORLD_JSON, &MapSettings::load())
    }

    /// Creates the app from any feature collection JSON.
    pub fn from_document(json: &str, settings: &MapSettings) -> Self {
        let countries = geo::parse_str(json);
        log::info!(
            "Loaded {} countries ({} points)",
            countries.len(),
            countries
                .iter()
                .map(|c| c.geometry().point_count())
                .sum::<usize>()
        );

        Self {
            state: AppState::new(countries, settings),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Replaces the selection from outside the map (e.g. startup arguments).
    ///
    /// Returns `true` if the selection changed.
    pub fn set_selected<I, S>(&mut self, names: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.state.selection.set_selected(names)
    }
}

impl eframe::App for WorldMapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ui::render_top_bar(ctx, &mut self.state);
        ui::render_canvas(ctx, &mut self.state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::Coord;

    #[test]
    fn test_bundled_world_parses() {
        let app = WorldMapApp::from_document(WORLD_JSON, &MapSettings::default());
        let countries = app.state().countries();
        assert_eq!(countries.len(), 8);
        assert!(countries.iter().any(|c| c.name() == "Lesotho"));
    }

    #[test]
    fn test_bundled_world_hit_order() {
        let mut app = WorldMapApp::from_document(WORLD_JSON, &MapSettings::default());

        // Inland Brazil.
        assert!(app.state.select_at(Coord { x: -50.0, y: -10.0 }));
        assert_eq!(app.state().selected_label().as_deref(), Some("Brazil"));

        // Open ocean leaves the selection alone.
        assert!(!app.state.select_at(Coord { x: -30.0, y: 0.0 }));
        assert_eq!(app.state().selected_label().as_deref(), Some("Brazil"));

        // Tasmania is the second ring of Australia.
        assert!(app.state.select_at(Coord { x: 146.5, y: -41.5 }));
        assert_eq!(app.state().selected_label().as_deref(), Some("Australia"));
    }

    #[test]
    fn test_host_selection() {
        let mut app = WorldMapApp::from_document(WORLD_JSON, &MapSettings::default());
        assert!(app.set_selected(["Japan", "Iceland"]));
        assert_eq!(
            app.state().selected_label().as_deref(),
            Some("Iceland, Japan")
        );
        assert!(!app.set_selected(["Iceland", "Japan"]));
    }

    #[test]
    fn test_undecodable_document_is_empty() {
        let app = WorldMapApp::from_document("<html>", &MapSettings::default());
        assert!(app.state().countries().is_empty());
    }
}
