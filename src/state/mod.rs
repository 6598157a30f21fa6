//! Application state management.
//!
//! The country list is loaded once and never changes afterwards. The
//! selection is the only state mutated by input.

mod selection;
mod settings;

pub use selection::SelectionState;
pub use settings::MapSettings;

use crate::geo::{locate, Country, MapSize, MapStyle, Point};

/// Root application state.
pub struct AppState {
    /// Parsed countries, in drawing and hit-testing order
    countries: Vec<Country>,

    /// Selected country names
    pub selection: SelectionState,

    /// Logical canvas size derived from the loaded geometry
    pub logical_size: MapSize,

    /// Colors and border width
    pub style: MapStyle,

    /// Application status message displayed in top bar
    pub status_message: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Vec::new(), &MapSettings::default())
    }
}

impl AppState {
    pub fn new(countries: Vec<Country>, settings: &MapSettings) -> Self {
        let logical_size = MapSize::for_countries(&countries, settings.effective_aspect());
        let status_message = if countries.is_empty() {
            "No countries loaded".to_string()
        } else {
            format!("{} countries", countries.len())
        };

        Self {
            countries,
            selection: SelectionState::new(),
            logical_size,
            style: settings.style(),
            status_message,
        }
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    /// Selects the country under a point in map units.
    ///
    /// Returns `true` if the selection changed and the map needs a repaint.
    pub fn select_at(&mut self, point: Point) -> bool {
        let hit = locate(point, &self.countries);
        match hit {
            Some(name) => log::debug!("Hit {} at ({:.3}, {:.3})", name, point.x, point.y),
            None => log::debug!("No country at ({:.3}, {:.3})", point.x, point.y),
        }
        self.selection.apply_hit(hit)
    }

    /// Comma-separated selected names, or `None` when nothing is selected.
    pub fn selected_label(&self) -> Option<String> {
        if self.selection.is_empty() {
            None
        } else {
            Some(self.selection.iter().collect::<Vec<_>>().join(", "))
        }
    }
}
