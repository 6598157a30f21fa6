//! Feature collection parsing.
//!
//! Converts a loosely-typed GeoJSON-like document into [`Country`] values.
//! Parsing never fails as a whole: malformed features are dropped and
//! reported through the `log` facade, so the worst case is an empty list.
//!
//! All rings of a polygon (exterior and holes alike) are concatenated into
//! a single ring. Hit-testing and rendering both operate on that flattened
//! shape.

use super::model::{Country, Geometry, Point, Ring};
use geo_types::Coord;
use serde_json::Value;
use std::fmt;

/// A problem found while parsing. None of these abort the parse.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseIssue {
    /// The document has no `features` array; nothing was parsed.
    MalformedDocument,
    /// A required feature field is missing or has the wrong type.
    MalformedFeature { index: usize, field: &'static str },
    /// `geometry.type` is neither `Polygon` nor `MultiPolygon`.
    UnrecognizedGeometryType { index: usize, geo_type: String },
    /// A coordinate entry had no elements and was dropped.
    DegenerateCoordinate { index: usize },
    /// A ring or coordinate entry was not made of finite numbers and was dropped.
    MalformedCoordinate { index: usize },
}

impl fmt::Display for ParseIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseIssue::MalformedDocument => write!(f, "document has no \"features\" array"),
            ParseIssue::MalformedFeature { index, field } => {
                write!(f, "feature {}: missing or invalid \"{}\"", index, field)
            }
            ParseIssue::UnrecognizedGeometryType { index, geo_type } => {
                write!(f, "feature {}: unrecognized geometry type {}", index, geo_type)
            }
            ParseIssue::DegenerateCoordinate { index } => {
                write!(f, "feature {}: dropped empty coordinate", index)
            }
            ParseIssue::MalformedCoordinate { index } => {
                write!(f, "feature {}: dropped non-numeric coordinate", index)
            }
        }
    }
}

/// Parses a feature collection, dropping malformed features.
pub fn parse(document: &Value) -> Vec<Country> {
    parse_with_issues(document).0
}

/// Parses a feature collection and also returns every issue encountered.
pub fn parse_with_issues(document: &Value) -> (Vec<Country>, Vec<ParseIssue>) {
    let mut issues = Vec::new();

    let Some(features) = document.get("features").and_then(Value::as_array) else {
        let issue = ParseIssue::MalformedDocument;
        log::warn!("Skipping world data: {}", issue);
        issues.push(issue);
        return (Vec::new(), issues);
    };

    let mut countries = Vec::with_capacity(features.len());
    for (index, feature) in features.iter().enumerate() {
        match parse_country(index, feature, &mut issues) {
            Ok(country) => countries.push(country),
            Err(issue) => {
                log::warn!("Skipping {}", issue);
                issues.push(issue);
            }
        }
    }

    log::info!(
        "Parsed {} of {} features ({} issues)",
        countries.len(),
        features.len(),
        issues.len()
    );

    (countries, issues)
}

/// Decodes JSON text and parses it. Undecodable text yields an empty list.
pub fn parse_str(text: &str) -> Vec<Country> {
    match serde_json::from_str::<Value>(text) {
        Ok(document) => parse(&document),
        Err(e) => {
            log::warn!("Failed to decode world data: {}", e);
            Vec::new()
        }
    }
}

fn parse_country(
    index: usize,
    feature: &Value,
    issues: &mut Vec<ParseIssue>,
) -> Result<Country, ParseIssue> {
    let id = required_str(feature.get("id"), index, "id")?;
    let name = required_str(
        feature.get("properties").and_then(|p| p.get("name")),
        index,
        "properties.name",
    )?;
    let geometry = feature.get("geometry");
    let geo_type = required_str(
        geometry.and_then(|g| g.get("type")),
        index,
        "geometry.type",
    )?;

    if geo_type != "Polygon" && geo_type != "MultiPolygon" {
        return Err(ParseIssue::UnrecognizedGeometryType {
            index,
            geo_type: geo_type.to_string(),
        });
    }

    let coordinates = geometry
        .and_then(|g| g.get("coordinates"))
        .and_then(Value::as_array)
        .ok_or(ParseIssue::MalformedFeature {
            index,
            field: "geometry.coordinates",
        })?;

    let geometry = if geo_type == "Polygon" {
        Geometry::Polygon(flatten_rings(coordinates, index, issues))
    } else {
        let polygons = coordinates
            .iter()
            .map(|polygon| match polygon.as_array() {
                Some(rings) => flatten_rings(rings, index, issues),
                None => {
                    note(issues, ParseIssue::MalformedCoordinate { index });
                    Ring::new()
                }
            })
            .collect();
        Geometry::MultiPolygon(polygons)
    };

    Ok(Country::new(id, name, geometry))
}

fn required_str<'a>(
    value: Option<&'a Value>,
    index: usize,
    field: &'static str,
) -> Result<&'a str, ParseIssue> {
    value
        .and_then(Value::as_str)
        .ok_or(ParseIssue::MalformedFeature { index, field })
}

/// Concatenates every ring of one polygon into a single ring, ring-then-point.
fn flatten_rings(rings: &[Value], index: usize, issues: &mut Vec<ParseIssue>) -> Ring {
    let mut points = Ring::new();
    for ring in rings {
        let Some(entries) = ring.as_array() else {
            note(issues, ParseIssue::MalformedCoordinate { index });
            continue;
        };
        for entry in entries {
            if let Some(point) = parse_point(entry, index, issues) {
                points.push(point);
            }
        }
    }
    points
}

/// Reads `x` from the first element and `y` from the last one, so a
/// one-element entry yields a point with `x == y`.
fn parse_point(entry: &Value, index: usize, issues: &mut Vec<ParseIssue>) -> Option<Point> {
    let Some(values) = entry.as_array() else {
        note(issues, ParseIssue::MalformedCoordinate { index });
        return None;
    };

    let (Some(first), Some(last)) = (values.first(), values.last()) else {
        note(issues, ParseIssue::DegenerateCoordinate { index });
        return None;
    };

    match (finite(first), finite(last)) {
        (Some(x), Some(y)) => Some(Coord { x, y }),
        _ => {
            note(issues, ParseIssue::MalformedCoordinate { index });
            None
        }
    }
}

fn finite(value: &Value) -> Option<f64> {
    value.as_f64().filter(|v| v.is_finite())
}

fn note(issues: &mut Vec<ParseIssue>, issue: ParseIssue) {
    log::debug!("{}", issue);
    issues.push(issue);
}
