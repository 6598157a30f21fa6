//! Top bar UI: app title, status, and selected country.

use super::colors;
use crate::state::AppState;
use eframe::egui::{self, RichText};

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    egui::TopBottomPanel::top("top_bar")
        .exact_height(36.0)
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                ui.label(
                    RichText::new("World Map")
                        .strong()
                        .size(16.0)
                        .color(colors::ui::TITLE),
                );

                ui.separator();

                ui.label(
                    RichText::new(&state.status_message)
                        .size(13.0)
                        .color(colors::ui::LABEL),
                );

                ui.separator();

                match state.selected_label() {
                    Some(label) => {
                        ui.label(RichText::new("Selected:").size(12.0).color(colors::ui::LABEL));
                        ui.label(RichText::new(label).size(13.0).color(colors::ui::ACTIVE));
                        if ui.small_button("Clear").clicked() && state.selection.clear() {
                            ctx.request_repaint();
                        }
                    }
                    None => {
                        ui.label(
                            RichText::new("Tap a country to select it")
                                .size(12.0)
                                .color(colors::ui::LABEL),
                        );
                    }
                }
            });
        });
}
