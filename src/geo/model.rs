//! Country geometry data structures.

use geo_types::Coord;

/// A point in logical map units (already projected, origin at the map center,
/// y increasing upward).
pub type Point = Coord<f64>;

/// An ordered boundary loop. Closure (first == last) is not required.
pub type Ring = Vec<Point>;

/// Shape of a country.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// A single ring (all source rings flattened together)
    Polygon(Ring),
    /// Independent rings, one per source polygon
    MultiPolygon(Vec<Ring>),
}

impl Geometry {
    /// Iterates every ring of this geometry in drawing order.
    pub fn rings(&self) -> impl Iterator<Item = &Ring> {
        let rings: &[Ring] = match self {
            Geometry::Polygon(ring) => std::slice::from_ref(ring),
            Geometry::MultiPolygon(rings) => rings,
        };
        rings.iter()
    }

    /// Total number of points across all rings.
    pub fn point_count(&self) -> usize {
        self.rings().map(Vec::len).sum()
    }
}

/// A selectable country.
///
/// `name` is the selection key and is not guaranteed unique: two countries
/// sharing a name are highlighted together.
#[derive(Debug, Clone, PartialEq)]
pub struct Country {
    id: String,
    name: String,
    geometry: Geometry,
}

impl Country {
    pub fn new(id: impl Into<String>, name: impl Into<String>, geometry: Geometry) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            geometry,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }
}

/// Axis-aligned bounds of a set of points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub min: Point,
    pub max: Point,
}

impl Extent {
    /// Computes the bounds of every point of every country, or `None` if
    /// there are no points at all.
    pub fn of_countries(countries: &[Country]) -> Option<Self> {
        countries
            .iter()
            .flat_map(|c| c.geometry().rings())
            .flatten()
            .fold(None, |extent: Option<Extent>, p| {
                Some(match extent {
                    None => Extent { min: *p, max: *p },
                    Some(e) => Extent {
                        min: Coord {
                            x: e.min.x.min(p.x),
                            y: e.min.y.min(p.y),
                        },
                        max: Coord {
                            x: e.max.x.max(p.x),
                            y: e.max.y.max(p.y),
                        },
                    },
                })
            })
    }

    /// Largest distance of the extent from the origin along each axis.
    pub fn half_size(&self) -> (f64, f64) {
        (
            self.min.x.abs().max(self.max.x.abs()),
            self.min.y.abs().max(self.max.y.abs()),
        )
    }
}
