//! Selectable World Map - an interactive map of country outlines.
//!
//! Countries are parsed once from a GeoJSON-like feature collection, drawn
//! with egui, and selected by clicking inside their outline.

pub mod app;
pub mod geo;
pub mod state;
pub mod ui;

pub use app::WorldMapApp;
