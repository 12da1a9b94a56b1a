use super::Point;
use super::core::{GeomType, GeometricObject, display_for_geom};
use super::points::coordinate_list;

/// Represents a sequence of line segments in 2D
///
/// No minimum number of vertices is enforced.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LineString {
    pub points: Vec<Point>,
}

/// A collection of line strings
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MultiLineString {
    pub lines: Vec<LineString>,
}

impl GeometricObject for LineString {
    fn geom_type(&self) -> GeomType {
        GeomType::LineString
    }

    fn wkt_body(&self) -> String {
        coordinate_list(&self.points)
    }
}

display_for_geom!(LineString);

impl LineString {
    /// Instantiate a new LineString from a vector of points
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Get the total number of vertices in the linestring.
    pub fn total_vertices(&self) -> usize {
        self.points.len()
    }
}

impl MultiLineString {
    /// Instantiate a collection of line strings
    ///
    /// Example
    /// ```rust
    /// use wktlib::{LineString, MultiLineString, Point};
    /// let mls = MultiLineString::new(vec![
    ///     LineString::new(vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)]),
    ///     LineString::new(vec![Point::new(2.0, 2.0), Point::new(3.0, 2.0)]),
    /// ]);
    /// assert_eq!(mls.to_string(), "MULTILINESTRING((0 0,1 1),(2 2,3 2))");
    /// ```
    pub fn new(lines: Vec<LineString>) -> Self {
        Self { lines }
    }

    /// Get the total number of vertices over all line strings
    pub fn total_vertices(&self) -> usize {
        self.lines.iter().map(LineString::total_vertices).sum()
    }
}

impl GeometricObject for MultiLineString {
    fn geom_type(&self) -> GeomType {
        GeomType::MultiLineString
    }

    fn wkt_body(&self) -> String {
        self.lines
            .iter()
            .map(|l| format!("({})", l.wkt_body()))
            .collect::<Vec<String>>()
            .join(",")
    }
}

display_for_geom!(MultiLineString);

#[cfg(test)]
mod tests {
    use super::Point;
    use super::*;

    #[test]
    fn test_instantiation_permissive() {
        let ls = LineString::new(vec![Point::new(0.3, 0.3)]);
        assert_eq!(ls.total_vertices(), 1);

        let empty = LineString::new(vec![]);
        assert_eq!(empty.total_vertices(), 0);
        assert_eq!(empty.wkt(), "LINESTRING()");
    }

    #[test]
    fn test_linestring_wkt() {
        let pts = vec![
            Point::new(0.3, 0.3),
            Point::new(0.34, 0.98),
            Point::new(0.56, -123.6),
        ];
        let ls = LineString::new(pts);
        assert_eq!(ls.wkt(), "LINESTRING(0.3 0.3,0.34 0.98,0.56 -123.6)");
    }

    #[test]
    fn test_multilinestring_wkt() {
        let mls = MultiLineString::new(vec![
            LineString::new(vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)]),
            LineString::new(vec![
                Point::new(2.0, 2.0),
                Point::new(3.0, 2.0),
                Point::new(4.0, 5.0),
            ]),
        ]);
        assert_eq!(mls.wkt(), "MULTILINESTRING((0 0,1 1),(2 2,3 2,4 5))");
        assert_eq!(mls.total_vertices(), 5);
    }
}
