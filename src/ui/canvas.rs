//! Central canvas UI: the world map.

use super::colors;
use crate::geo::{render_countries, MapTransform};
use crate::state::AppState;
use eframe::egui::{self, Rect, Sense};

/// Render the map and handle clicks on it.
pub fn render_canvas(ctx: &egui::Context, state: &mut AppState) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let mut transform = MapTransform::new(state.logical_size, Rect::NOTHING);
        let size = transform.fit_surface_size(ui.available_size());

        let (response, mut painter) = ui.allocate_painter(size, Sense::click());
        transform.update(response.rect);

        painter.rect_filled(response.rect, 0.0, colors::map::BACKGROUND);

        render_countries(
            &mut painter,
            state.countries(),
            &|name| state.selection.contains(name),
            &transform,
            &state.style,
        );

        handle_canvas_interaction(&response, &transform, state);
    });
}

fn handle_canvas_interaction(
    response: &egui::Response,
    transform: &MapTransform,
    state: &mut AppState,
) {
    if !response.clicked() {
        return;
    }

    let Some(pos) = response.interact_pointer_pos() else {
        return;
    };

    if let Some(point) = transform.screen_to_map(pos) {
        if state.select_at(point) {
            response.ctx.request_repaint();
        }
    }
}
