//! Country geometry: parsing, hit testing and rendering.
//!
//! The country list is parsed once from a feature collection and shared
//! read-only by hit testing (on clicks) and rendering (on repaint). Both
//! identify a country by its name.

mod model;
mod parser;
mod projection;
mod renderer;

pub use hit_test::{country_contains, is_inside_ring, locate, locate_country};
pub use model::{Country, Extent, Geometry, Point, Ring};
pub use parser::{parse, parse_str, parse_with_issues, ParseIssue};
pub use projection::{MapSize, MapTransform, DEFAULT_ASPECT};
pub use renderer::{render_countries, triangulate_ring, MapPainter, MapStyle};
