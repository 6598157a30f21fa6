//! Logical map units to surface pixels and back.
//!
//! Geometry is stored already projected, centered at the origin with y
//! increasing upward. The surface has its origin top-left with y increasing
//! downward. Drawing uses [`MapTransform::map_to_screen`] and input uses
//! [`MapTransform::screen_to_map`]; the two must stay exact inverses or
//! clicks near a border select the wrong country.

use super::model::{Country, Extent, Point};
use eframe::egui::{Pos2, Rect, Vec2};
use geo_types::Coord;

/// Width over height of an equirectangular world map (360° by 180°).
pub const DEFAULT_ASPECT: f64 = 360.0 / 180.0;

/// Size of the logical canvas in map units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapSize {
    pub width: f64,
    pub height: f64,
}

impl MapSize {
    /// The whole globe in degrees.
    pub const WORLD: MapSize = MapSize {
        width: 360.0,
        height: 180.0,
    };

    /// Derives a logical size that fits every country and has the given
    /// aspect ratio. Falls back to [`MapSize::WORLD`] when there is nothing
    /// to measure.
    pub fn for_countries(countries: &[Country], aspect: f64) -> Self {
        let aspect = if aspect.is_finite() && aspect > 0.0 {
            aspect
        } else {
            DEFAULT_ASPECT
        };

        let Some(extent) = Extent::of_countries(countries) else {
            return Self::WORLD;
        };

        let (half_x, half_y) = extent.half_size();
        let width = (half_x * 2.0).max(half_y * 2.0 * aspect);
        if width <= 0.0 {
            return Self::WORLD;
        }

        Self {
            width,
            height: width / aspect,
        }
    }

    pub fn aspect(&self) -> f64 {
        self.width / self.height
    }
}

impl Default for MapSize {
    fn default() -> Self {
        Self::WORLD
    }
}

/// Transform between logical map units and a drawing surface.
#[derive(Debug, Clone)]
pub struct MapTransform {
    /// Logical canvas size in map units
    pub logical_size: MapSize,
    /// Surface rectangle in pixels
    pub surface: Rect,
}

impl Default for MapTransform {
    fn default() -> Self {
        Self {
            logical_size: MapSize::WORLD,
            surface: Rect::from_min_size(Pos2::ZERO, Vec2::new(720.0, 360.0)),
        }
    }
}

impl MapTransform {
    pub fn new(logical_size: MapSize, surface: Rect) -> Self {
        Self {
            logical_size,
            surface,
        }
    }

    /// Updates the surface after a resize.
    pub fn update(&mut self, surface: Rect) {
        self.surface = surface;
    }

    /// Pixels per map unit: surface width over logical width.
    pub fn scale(&self) -> f64 {
        self.surface.width() as f64 / self.logical_size.width
    }

    /// Largest surface size within `available` that keeps the logical
    /// canvas's aspect ratio.
    pub fn fit_surface_size(&self, available: Vec2) -> Vec2 {
        let aspect = self.logical_size.aspect() as f32;
        let height = available.x / aspect;
        if height <= available.y {
            Vec2::new(available.x, height)
        } else {
            Vec2::new(available.y * aspect, available.y)
        }
    }

    /// Forward transform: scale, flip y, then move the origin to the
    /// surface's center.
    pub fn map_to_screen(&self, point: Point) -> Pos2 {
        let scale = self.scale();
        let center = self.surface.center();
        Pos2::new(
            center.x + (point.x * scale) as f32,
            center.y - (point.y * scale) as f32,
        )
    }

    /// Inverse transform: undo the translation, the flip and the scale.
    ///
    /// Returns `None` for a surface with no width.
    pub fn screen_to_map(&self, pos: Pos2) -> Option<Point> {
        let scale = self.scale();
        if !(scale.is_finite() && scale > 0.0) {
            return None;
        }

        let center = self.surface.center();
        Some(Coord {
            x: (pos.x - center.x) as f64 / scale,
            y: (center.y - pos.y) as f64 / scale,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::Geometry;

    fn assert_close(a: Point, b: Point) {
        assert!(
            (a.x - b.x).abs() < 1e-3 && (a.y - b.y).abs() < 1e-3,
            "{:?} != {:?}",
            a,
            b
        );
    }

    #[test]
    fn test_origin_maps_to_surface_center() {
        let transform = MapTransform::new(
            MapSize::WORLD,
            Rect::from_min_size(Pos2::new(10.0, 20.0), Vec2::new(720.0, 360.0)),
        );
        assert_eq!(transform.scale(), 2.0);
        assert_eq!(
            transform.map_to_screen(Coord { x: 0.0, y: 0.0 }),
            Pos2::new(370.0, 200.0)
        );
        // North is up, east is right.
        assert_eq!(
            transform.map_to_screen(Coord { x: 180.0, y: 90.0 }),
            Pos2::new(730.0, 20.0)
        );
        assert_eq!(
            transform.map_to_screen(Coord { x: -180.0, y: -90.0 }),
            Pos2::new(10.0, 380.0)
        );
    }

    #[test]
    fn test_forward_then_inverse_is_identity() {
        let surfaces = [
            Rect::from_min_size(Pos2::ZERO, Vec2::new(720.0, 360.0)),
            Rect::from_min_size(Pos2::new(33.0, 71.5), Vec2::new(1013.0, 506.5)),
            Rect::from_min_size(Pos2::new(0.0, 40.0), Vec2::new(390.0, 195.0)),
        ];
        let points = [
            Coord { x: 0.0, y: 0.0 },
            Coord { x: 12.5, y: -41.25 },
            Coord { x: -179.9, y: 89.9 },
            Coord { x: 101.0, y: 3.0 },
        ];

        for surface in surfaces {
            let transform = MapTransform::new(MapSize::WORLD, surface);
            for point in points {
                let screen = transform.map_to_screen(point);
                let back = transform.screen_to_map(screen).unwrap();
                assert_close(back, point);
            }
        }
    }

    #[test]
    fn test_forward_then_inverse_with_size_from_data() {
        // Extent reaches x = -50 and y = 40, so the 2:1 canvas is 160 by 80.
        let countries = vec![
            Country::new(
                "A",
                "Alpha",
                Geometry::Polygon(vec![
                    Coord { x: 0.0, y: 0.0 },
                    Coord { x: 40.0, y: 0.0 },
                    Coord { x: 40.0, y: 40.0 },
                ]),
            ),
            Country::new(
                "B",
                "Beta",
                Geometry::Polygon(vec![
                    Coord { x: -50.0, y: -20.0 },
                    Coord { x: -10.0, y: -5.0 },
                ]),
            ),
        ];
        let size = MapSize::for_countries(&countries, DEFAULT_ASPECT);
        assert_eq!(
            size,
            MapSize {
                width: 160.0,
                height: 80.0
            }
        );

        let surfaces = [
            Rect::from_min_size(Pos2::ZERO, Vec2::new(640.0, 320.0)),
            Rect::from_min_size(Pos2::new(12.0, 57.25), Vec2::new(997.0, 498.5)),
        ];
        let points = [
            Coord { x: 0.0, y: 0.0 },
            Coord { x: -50.0, y: -20.0 },
            Coord { x: 79.9, y: 39.9 },
            Coord { x: 17.3, y: -8.6 },
        ];

        for surface in surfaces {
            let transform = MapTransform::new(size, surface);
            assert_eq!(transform.scale(), surface.width() as f64 / 160.0);
            for point in points {
                let screen = transform.map_to_screen(point);
                let back = transform.screen_to_map(screen).unwrap();
                assert_close(back, point);
            }
        }

        // The logical corners land on the surface corners.
        let transform = MapTransform::new(size, surfaces[0]);
        assert_eq!(
            transform.map_to_screen(Coord { x: -80.0, y: 40.0 }),
            Pos2::new(0.0, 0.0)
        );
        assert_eq!(
            transform.map_to_screen(Coord { x: 80.0, y: -40.0 }),
            Pos2::new(640.0, 320.0)
        );
    }

    #[test]
    fn test_inverse_of_zero_width_surface() {
        let transform = MapTransform::new(MapSize::WORLD, Rect::from_min_size(Pos2::ZERO, Vec2::ZERO));
        assert!(transform.screen_to_map(Pos2::new(1.0, 1.0)).is_none());
    }

    #[test]
    fn test_logical_size_from_extent() {
        let countries = vec![Country::new(
            "W",
            "Wide",
            Geometry::Polygon(vec![Coord { x: -100.0, y: -10.0 }, Coord { x: 50.0, y: 20.0 }]),
        )];
        assert_eq!(
            MapSize::for_countries(&countries, 2.0),
            MapSize {
                width: 200.0,
                height: 100.0
            }
        );

        let tall = vec![Country::new(
            "T",
            "Tall",
            Geometry::Polygon(vec![Coord { x: 1.0, y: -60.0 }, Coord { x: 2.0, y: 30.0 }]),
        )];
        assert_eq!(
            MapSize::for_countries(&tall, 2.0),
            MapSize {
                width: 240.0,
                height: 120.0
            }
        );
    }

    #[test]
    fn test_logical_size_fallbacks() {
        assert_eq!(MapSize::for_countries(&[], 2.0), MapSize::WORLD);

        let dot = vec![Country::new(
            "D",
            "Dot",
            Geometry::Polygon(vec![Coord { x: 0.0, y: 0.0 }]),
        )];
        assert_eq!(MapSize::for_countries(&dot, 2.0), MapSize::WORLD);

        let countries = vec![Country::new(
            "A",
            "A",
            Geometry::Polygon(vec![Coord { x: 90.0, y: 0.0 }]),
        )];
        assert_eq!(
            MapSize::for_countries(&countries, f64::NAN).aspect(),
            DEFAULT_ASPECT
        );
    }

    #[test]
    fn test_fit_surface_size_keeps_aspect() {
        let transform = MapTransform::default();
        assert_eq!(
            transform.fit_surface_size(Vec2::new(800.0, 600.0)),
            Vec2::new(800.0, 400.0)
        );
        assert_eq!(
            transform.fit_surface_size(Vec2::new(800.0, 300.0)),
            Vec2::new(600.0, 300.0)
        );
    }
}
