//! Country rendering.
//!
//! Draws every ring of every country as a closed, filled and stroked path.
//! Countries are drawn in list order, the same order hit testing walks, so
//! the country drawn on top of an overlap is the one a click does not pick.

use super::{Country, MapTransform};
use eframe::egui::epaint::{Mesh, PathShape};
use eframe::egui::{Color32, Painter, Pos2, Shape, Stroke};

/// Colors and border width for the map.
#[derive(Debug, Clone, PartialEq)]
pub struct MapStyle {
    /// Fill for countries not in the selection
    pub country_color: Color32,
    /// Fill for selected countries
    pub selected_color: Color32,
    /// Border color, shared by all countries
    pub border_color: Color32,
    /// Border width in map units (scaled with the map)
    pub border_width: f32,
}

impl Default for MapStyle {
    fn default() -> Self {
        Self {
            // Translucent secondary-label gray
            country_color: Color32::from_rgba_unmultiplied(142, 142, 147, 179),
            // Translucent orange
            selected_color: Color32::from_rgba_unmultiplied(255, 149, 0, 128),
            border_color: Color32::from_rgb(220, 220, 230),
            border_width: 0.2,
        }
    }
}

/// Something that can fill and stroke a closed path.
pub trait MapPainter {
    fn fill_stroke_path(&mut self, points: &[Pos2], fill: Color32, stroke: Stroke);
}

impl MapPainter for Painter {
    fn fill_stroke_path(&mut self, points: &[Pos2], fill: Color32, stroke: Stroke) {
        let indices = triangulate_ring(points);
        if !indices.is_empty() {
            let mut mesh = Mesh::default();
            for pos in points {
                mesh.colored_vertex(*pos, fill);
            }
            for tri in indices.chunks_exact(3) {
                mesh.add_triangle(tri[0], tri[1], tri[2]);
            }
            self.add(Shape::mesh(mesh));
        }
        self.add(Shape::Path(PathShape::closed_line(points.to_vec(), stroke)));
    }
}

/// Splits a closed ring into triangles with ear clipping.
///
/// Returns vertex indices into `points`, three per triangle. Concave rings
/// are covered exactly; a ring with fewer than three points, or one the
/// triangulator rejects, yields no triangles.
pub fn triangulate_ring(points: &[Pos2]) -> Vec<u32> {
    if points.len() < 3 {
        return Vec::new();
    }

    let coords: Vec<f32> = points.iter().flat_map(|p| [p.x, p.y]).collect();
    match earcutr::earcut(&coords, &[], 2) {
        Ok(indices) => indices.into_iter().map(|i| i as u32).collect(),
        Err(err) => {
            log::warn!("Failed to triangulate ring of {} points: {:?}", points.len(), err);
            Vec::new()
        }
    }
}

/// Renders all countries, highlighting those for which `is_selected`
/// returns `true` given the country name.
///
/// Returns the number of paths drawn.
pub fn render_countries<P: MapPainter + ?Sized>(
    painter: &mut P,
    countries: &[Country],
    is_selected: &dyn Fn(&str) -> bool,
    transform: &MapTransform,
    style: &MapStyle,
) -> usize {
    let stroke = Stroke::new(
        style.border_width * transform.scale() as f32,
        style.border_color,
    );

    let mut paths = 0;
    let mut points = Vec::new();
    for country in countries {
        let fill = if is_selected(country.name()) {
            style.selected_color
        } else {
            style.country_color
        };

        for ring in country.geometry().rings() {
            if ring.is_empty() {
                continue;
            }
            points.clear();
            points.extend(ring.iter().map(|p| transform.map_to_screen(*p)));
            painter.fill_stroke_path(&points, fill, stroke);
            paths += 1;
        }
    }
    paths
}
