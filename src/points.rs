use super::core::{self, GeomType, GeometricObject, display_for_geom};

/// A single Point on the Plane (2D)
///
/// Coordinates are not validated: a point decoded from malformed text may hold `NaN`.
///
/// Examples
/// ```rust
/// use wktlib::Point;
/// let my_point = Point::new(0.2, -7.9);
/// let (x, y) = my_point.coords();
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

/// A simple collection of points
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MultiPoint {
    pub points: Vec<Point>,
}

impl Point {
    /// Instantiate a new point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Return true if the point is approximately equal to other.
    pub fn is_close(&self, other: &Point) -> bool {
        core::approx(self.x, other.x) && core::approx(self.y, other.y)
    }

    /// Get coordinates as a tuple
    pub fn coords(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Return true if both coordinates are finite numbers
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl GeometricObject for Point {
    fn geom_type(&self) -> GeomType {
        GeomType::Point
    }

    /// Coordinates separated by a single space
    fn wkt_body(&self) -> String {
        format!("{} {}", self.x, self.y)
    }
}

display_for_geom!(Point);

impl MultiPoint {
    /// Instantiate a multipoint collection
    ///
    /// Example
    /// ```rust
    /// use wktlib::{MultiPoint, Point};
    /// let my_points = MultiPoint::new(vec![Point::new(0.0, 0.0), Point::new(0.0, 1.0)]);
    /// assert_eq!(my_points.to_string(), "MULTIPOINT(0 0,0 1)");
    /// ```
    pub fn new(pts: Vec<Point>) -> Self {
        Self { points: pts }
    }
}

/// Comma-join the coordinates of a sequence of points
pub(crate) fn coordinate_list(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| p.wkt_body())
        .collect::<Vec<String>>()
        .join(",")
}

impl GeometricObject for MultiPoint {
    fn geom_type(&self) -> GeomType {
        GeomType::MultiPoint
    }

    fn wkt_body(&self) -> String {
        coordinate_list(&self.points)
    }
}

display_for_geom!(MultiPoint);
