//! UI modules for the world map application.
//!
//! - Top bar: title, loaded country count, current selection
//! - Central canvas: the map itself

pub mod colors;
mod canvas;
mod top_bar;

pub use canvas::render_canvas;
pub use top_bar::render_top_bar;
