use super::split::{Wrapping, split_components, split_top_level, strip_one_layer};
use crate::core::{GeomResult, GeomType, GeometricObject, GeometryError};
use crate::geometry::Geometry;
use crate::linestring::{LineString, MultiLineString};
use crate::points::{MultiPoint, Point};
use crate::polygons::{LinearRing, MultiPolygon, Polygon};
use regex::Regex;
use std::str::FromStr;
use std::sync::OnceLock;

const GEOM_TYPE: &str = r"(?s)^\s*(\w+)\s*\(\s*(.*)\s*\)\s*$";

static GEOM_TYPE_RE: OnceLock<Regex> = OnceLock::new();

/// How the decoder reacts to malformed input below the `TYPE(...)` level
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strictness {
    /// Malformed coordinates become `NaN`, extra tokens are ignored and
    /// undecodable collection members are dropped.
    #[default]
    Lenient,
    /// Any defect is reported as a `GeometryError`.
    Strict,
}

impl Strictness {
    // Strict mode fails on the defect, lenient mode logs it and carries on
    fn tolerate(self, err: GeometryError) -> GeomResult<()> {
        match self {
            Strictness::Strict => Err(err),
            Strictness::Lenient => {
                log::trace!("Tolerating malformed WKT: {err}");
                Ok(())
            }
        }
    }
}

// Get geometry type regex once to avoid recompilation (thread-safe)
fn geom_type_re() -> &'static Regex {
    GEOM_TYPE_RE.get_or_init(|| Regex::new(GEOM_TYPE).unwrap())
}

/// Parse a WKT string and return the geometry it describes
///
/// Returns None if the text is not of the form `TYPE(...)` or the type is not
/// supported. Defects inside the body never fail the parse: unparseable
/// coordinates are read as `NaN`.
///
/// Examples
/// ```rust
/// use wktlib::serialization::parse_wkt;
/// use wktlib::{Geometry, Point};
///
/// match parse_wkt("POINT (1 2)") {
///     Some(Geometry::Point(pt)) => assert_eq!(pt, Point::new(1.0, 2.0)),
///     other => panic!("Expected a point, got {other:?}"),
/// }
///
/// assert!(parse_wkt("NOTAGEOM(1 2)").is_none());
/// ```
pub fn parse_wkt(raw: &str) -> Option<Geometry> {
    match parse_wkt_with(raw, Strictness::Lenient) {
        Ok(geom) => Some(geom),
        Err(err) => {
            log::debug!("No geometry decoded: {err}");
            None
        }
    }
}

/// Parse a WKT string, reporting any defect as an error
///
/// Examples
/// ```rust
/// use wktlib::GeometryError;
/// use wktlib::serialization::parse_wkt_strict;
///
/// assert!(parse_wkt_strict("LINESTRING(0 0, 1 1)").is_ok());
/// match parse_wkt_strict("POINT(1 y)") {
///     Err(GeometryError::NumericError(tok)) => assert_eq!(tok, "y"),
///     other => panic!("Expected a numeric error, got {other:?}"),
/// }
/// ```
pub fn parse_wkt_strict(raw: &str) -> GeomResult<Geometry> {
    parse_wkt_with(raw, Strictness::Strict)
}

/// Parse a WKT string with the given strictness
pub fn parse_wkt_with(raw: &str, mode: Strictness) -> GeomResult<Geometry> {
    let (geom_type, body) = identify_type(raw)?;
    let geom = match geom_type {
        GeomType::Point => Geometry::Point(parse_point(body, mode)?),
        GeomType::MultiPoint => Geometry::MultiPoint(parse_multipoint(body, mode)?),
        GeomType::LineString => Geometry::LineString(parse_linestring(body, mode)?),
        GeomType::MultiLineString => {
            Geometry::MultiLineString(parse_multilinestring(body, mode)?)
        }
        GeomType::Polygon => Geometry::Polygon(parse_polygon(body, mode)?),
        GeomType::MultiPolygon => Geometry::MultiPolygon(parse_multipolygon(body, mode)?),
        GeomType::GeometryCollection => {
            Geometry::GeometryCollection(parse_collection(body, mode)?)
        }
    };
    Ok(geom)
}

impl FromStr for Geometry {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_wkt_strict(s)
    }
}

/// Identifies the type of geometry and returns it with the parenthesized body
fn identify_type(raw: &str) -> GeomResult<(GeomType, &str)> {
    let caps = geom_type_re().captures(raw).ok_or_else(|| {
        GeometryError::ParsingError(String::from("Expected a geometry of the form TYPE(...)"))
    })?;
    let (Some(keyword), Some(body)) = (caps.get(1), caps.get(2)) else {
        return Err(GeometryError::ParsingError(String::from(
            "Could not parse shape type",
        )));
    };

    match GeomType::from_keyword(keyword.as_str()) {
        Some(geom_type) => Ok((geom_type, body.as_str())),
        None => Err(GeometryError::UnknownType(keyword.as_str().to_string())),
    }
}

/// Parse a single coordinate token; missing, invalid or non-finite tokens read as NaN when lenient
fn parse_coordinate(token: Option<&str>, mode: Strictness) -> GeomResult<f64> {
    match token {
        None => {
            mode.tolerate(GeometryError::ParsingError(String::from(
                "Expected two coordinates per point",
            )))?;
            Ok(f64::NAN)
        }
        Some(tok) => match tok.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => {
                mode.tolerate(GeometryError::NumericError(tok.to_string()))?;
                Ok(f64::NAN)
            }
        },
    }
}

/// Parse the whitespace separated coordinates of a point
fn parse_point(body: &str, mode: Strictness) -> GeomResult<Point> {
    let mut tokens = body.split_whitespace();
    let x = parse_coordinate(tokens.next(), mode)?;
    let y = parse_coordinate(tokens.next(), mode)?;

    if tokens.next().is_some() {
        mode.tolerate(GeometryError::ParsingError(format!(
            "Too many coordinates in '{}'",
            body.trim()
        )))?;
    }
    Ok(Point::new(x, y))
}

/// Parse a comma separated list of points, as found in a linestring or ring
fn parse_coordinate_list(body: &str, mode: Strictness) -> GeomResult<Vec<Point>> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    if body.contains(['(', ')']) {
        mode.tolerate(GeometryError::ParsingError(format!(
            "Unexpected parenthesis in coordinate list '{}'",
            body.trim()
        )))?;
    }
    body.split(',').map(|pt| parse_point(pt, mode)).collect()
}

/// Split a body into its parenthesized components with one layer of parentheses removed
fn component_bodies(body: &str, mode: Strictness) -> GeomResult<Vec<&str>> {
    let split = split_components(body);
    if !split.balanced {
        mode.tolerate(GeometryError::ParsingError(format!(
            "Unbalanced parentheses in '{}'",
            body.trim()
        )))?;
    }

    let mut components = Vec::with_capacity(split.fragments.len());
    for fragment in split.fragments {
        let (inner, wrapping) = strip_one_layer(fragment);
        if wrapping != Wrapping::Both {
            mode.tolerate(GeometryError::ParsingError(format!(
                "Expected parenthesized component, got '{}'",
                fragment.trim()
            )))?;
        }
        components.push(inner);
    }
    Ok(components)
}

/// Parse a list of points; each point may optionally be wrapped in parentheses
fn parse_multipoint(body: &str, mode: Strictness) -> GeomResult<MultiPoint> {
    let split = split_top_level(body);
    if !split.balanced {
        mode.tolerate(GeometryError::ParsingError(format!(
            "Unbalanced parentheses in '{}'",
            body.trim()
        )))?;
    }

    let mut points = Vec::with_capacity(split.fragments.len());
    for fragment in split.fragments {
        let (inner, wrapping) = strip_one_layer(fragment);
        if wrapping == Wrapping::Partial {
            mode.tolerate(GeometryError::ParsingError(format!(
                "Mismatched parentheses around point '{}'",
                fragment.trim()
            )))?;
        }
        points.push(parse_point(inner, mode)?);
    }
    Ok(MultiPoint::new(points))
}

fn parse_linestring(body: &str, mode: Strictness) -> GeomResult<LineString> {
    Ok(LineString::new(parse_coordinate_list(body, mode)?))
}

fn parse_multilinestring(body: &str, mode: Strictness) -> GeomResult<MultiLineString> {
    let lines = component_bodies(body, mode)?
        .into_iter()
        .map(|line| parse_linestring(line, mode))
        .collect::<GeomResult<Vec<LineString>>>()?;
    Ok(MultiLineString::new(lines))
}

// Parse a polygon body: a list of parenthesized rings, shell first
fn parse_polygon(body: &str, mode: Strictness) -> GeomResult<Polygon> {
    let rings = component_bodies(body, mode)?
        .into_iter()
        .map(|ring| parse_linestring(ring, mode).map(LinearRing::from))
        .collect::<GeomResult<Vec<LinearRing>>>()?;
    Ok(Polygon::new(rings))
}

fn parse_multipolygon(body: &str, mode: Strictness) -> GeomResult<MultiPolygon> {
    let polygons = component_bodies(body, mode)?
        .into_iter()
        .map(|poly| parse_polygon(poly, mode))
        .collect::<GeomResult<Vec<Polygon>>>()?;
    Ok(MultiPolygon::new(polygons))
}

/// Parse the members of a geometry collection; each member is a complete WKT geometry
fn parse_collection(body: &str, mode: Strictness) -> GeomResult<Vec<Geometry>> {
    let split = split_top_level(body);
    if !split.balanced {
        mode.tolerate(GeometryError::ParsingError(format!(
            "Unbalanced parentheses in '{}'",
            body.trim()
        )))?;
    }

    let mut members = Vec::with_capacity(split.fragments.len());
    for fragment in split.fragments {
        match parse_wkt_with(fragment, mode) {
            Ok(geom) => members.push(geom),
            Err(err) => match mode {
                Strictness::Strict => return Err(err),
                Strictness::Lenient => {
                    log::warn!("Dropping collection member '{}': {err}", fragment.trim());
                }
            },
        }
    }
    Ok(members)
}

/// Serialize a geometry to canonical WKT
///
/// Examples
/// ```rust
/// use wktlib::serialization::write_wkt;
/// use wktlib::{Geometry, Point};
///
/// assert_eq!(write_wkt(&Geometry::Point(Point::new(1.0, 2.0))), "POINT(1 2)");
/// ```
pub fn write_wkt(geom: &Geometry) -> String {
    geom.wkt()
}

/// Serialize a sequence of geometries as a single geometry collection
///
/// Examples
/// ```rust
/// use wktlib::serialization::write_collection;
///
/// assert_eq!(write_collection(&[]), "GEOMETRYCOLLECTION()");
/// ```
pub fn write_collection(geoms: &[Geometry]) -> String {
    let members = geoms
        .iter()
        .map(|g| g.wkt())
        .collect::<Vec<String>>()
        .join(",");
    format!("{}({})", GeomType::GeometryCollection.keyword(), members)
}
