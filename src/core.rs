use std::fmt;

const ATOL: f64 = 1e-12;
const RTOL: f64 = 1e-9;

/// The kinds of geometry understood by the WKT codec
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum GeomType {
    Point,
    MultiPoint,
    LineString,
    MultiLineString,
    Polygon,
    MultiPolygon,
    GeometryCollection,
}

impl GeomType {
    /// Look up a geometry kind from its WKT keyword, ignoring case.
    ///
    /// Example:
    /// ```rust
    /// use wktlib::GeomType;
    ///
    /// assert_eq!(GeomType::from_keyword("Polygon"), Some(GeomType::Polygon));
    /// assert_eq!(GeomType::from_keyword("circle"), None);
    /// ```
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.to_lowercase().as_str() {
            "point" => Some(GeomType::Point),
            "multipoint" => Some(GeomType::MultiPoint),
            "linestring" => Some(GeomType::LineString),
            "multilinestring" => Some(GeomType::MultiLineString),
            "polygon" => Some(GeomType::Polygon),
            "multipolygon" => Some(GeomType::MultiPolygon),
            "geometrycollection" => Some(GeomType::GeometryCollection),
            _ => None,
        }
    }

    /// The uppercase WKT keyword for this kind
    pub fn keyword(&self) -> &'static str {
        match self {
            GeomType::Point => "POINT",
            GeomType::MultiPoint => "MULTIPOINT",
            GeomType::LineString => "LINESTRING",
            GeomType::MultiLineString => "MULTILINESTRING",
            GeomType::Polygon => "POLYGON",
            GeomType::MultiPolygon => "MULTIPOLYGON",
            GeomType::GeometryCollection => "GEOMETRYCOLLECTION",
        }
    }
}

impl fmt::Display for GeomType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Trait with common functionality for all geometric objects
pub trait GeometricObject {
    /// The kind tag used to pick the WKT keyword
    fn geom_type(&self) -> GeomType;

    /// WKT text inside the outermost parentheses
    fn wkt_body(&self) -> String;

    /// Full WKT representation of the object
    fn wkt(&self) -> String {
        format!("{}({})", self.geom_type().keyword(), self.wkt_body())
    }
}

/// Macro to implement the Display trait for Geometric Object types
macro_rules! display_for_geom {
    ($type:ty) => {
        impl std::fmt::Display for $type {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(f, "{}", self.wkt())
            }
        }
    };
}

pub(crate) use display_for_geom;

/// Errors reported when decoding WKT in strict mode
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// The text does not have the expected shape
    ParsingError(String),
    /// The type keyword is not one of the supported geometry kinds
    UnknownType(String),
    /// A coordinate token is not a number
    NumericError(String),
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::ParsingError(msg) => write!(f, "Parsing error: {msg}"),
            GeometryError::UnknownType(kw) => write!(f, "Unsupported geometry type: {kw}"),
            GeometryError::NumericError(tok) => write!(f, "Invalid coordinate value: '{tok}'"),
        }
    }
}

impl std::error::Error for GeometryError {}

/// Result type for geometry operations
pub type GeomResult<T> = Result<T, GeometryError>;

/// Return whether two numbers are approximately equal.
///
/// Determines if the given numbers are close with the given absolute and relative tolerances.
///
/// Examples:
/// ```rust
/// use wktlib;
///
/// assert!(wktlib::is_close(1.0, 1.0 + 1e-11, 1e-10, 1e-10));
/// ```
pub fn is_close(a: f64, b: f64, rtol: f64, atol: f64) -> bool {
    assert!(rtol >= 0.0 && atol >= 0.0);
    let scale = a.abs().max(b.abs());
    (a - b).abs() < (atol + rtol * scale)
}

/// Determine if two values are approximately equal to one another.
///
/// Determine if two floating point values are approximately equal. This is equivalent to calling
/// `is_close` with relative tolerance of `1e-9` and absolute tolerance of `1e-12`.
///
/// Example:
/// ```rust
/// use wktlib;
/// let x1 = 0.123;
/// let x2 = 0.123 + 1e-14;
///
/// assert!(wktlib::approx(x1, x2));
/// ```
pub fn approx(a: f64, b: f64) -> bool {
    is_close(a, b, RTOL, ATOL)
}
