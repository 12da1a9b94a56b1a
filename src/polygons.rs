use super::core::{GeomType, GeometricObject, display_for_geom};
use super::linestring::LineString;
use super::points::*;

/// A closed sequence of points bounding a polygon.
///
/// Closure is not enforced on construction; use `is_closed` to check it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LinearRing {
    pub points: Vec<Point>,
}

/// Represents a polygon on the Plane
///
/// The first ring is the shell, any remaining rings are holes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    pub rings: Vec<LinearRing>,
}

/// A collection of polygons
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MultiPolygon {
    pub polygons: Vec<Polygon>,
}

impl LinearRing {
    /// Instantiate a ring from a vector of points
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Return true if the ring has at least 4 points and its first and last points match
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => self.points.len() >= 4 && first.is_close(last),
            _ => false,
        }
    }
}

impl From<LineString> for LinearRing {
    fn from(line: LineString) -> Self {
        Self::new(line.points)
    }
}

impl Polygon {
    /// Instantiate a polygon from its rings
    ///
    /// Examples
    /// ```rust
    /// use wktlib::{LinearRing, Point, Polygon};
    /// let shell = LinearRing::new(vec![
    ///     Point::new(0.0, 0.0),
    ///     Point::new(1.0, 0.0),
    ///     Point::new(1.0, 1.0),
    ///     Point::new(0.0, 0.0),
    /// ]);
    /// let poly = Polygon::new(vec![shell]);
    /// assert_eq!(poly.to_string(), "POLYGON((0 0,1 0,1 1,0 0))");
    /// ```
    pub fn new(rings: Vec<LinearRing>) -> Self {
        Self { rings }
    }

    /// The outer boundary, if any
    pub fn shell(&self) -> Option<&LinearRing> {
        self.rings.first()
    }

    /// Inner boundaries
    pub fn holes(&self) -> &[LinearRing] {
        self.rings.get(1..).unwrap_or(&[])
    }

    /// Get the total number of vertices over all rings
    pub fn total_vertices(&self) -> usize {
        self.rings.iter().map(|r| r.points.len()).sum()
    }
}

impl GeometricObject for Polygon {
    fn geom_type(&self) -> GeomType {
        GeomType::Polygon
    }

    fn wkt_body(&self) -> String {
        self.rings
            .iter()
            .map(|r| format!("({})", coordinate_list(&r.points)))
            .collect::<Vec<String>>()
            .join(",")
    }
}

display_for_geom!(Polygon);

impl MultiPolygon {
    /// Instantiate a collection of polygons
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }

    /// Get the total number of vertices over all polygons
    pub fn total_vertices(&self) -> usize {
        self.polygons.iter().map(Polygon::total_vertices).sum()
    }
}

impl GeometricObject for MultiPolygon {
    fn geom_type(&self) -> GeomType {
        GeomType::MultiPolygon
    }

    fn wkt_body(&self) -> String {
        self.polygons
            .iter()
            .map(|p| format!("({})", p.wkt_body()))
            .collect::<Vec<String>>()
            .join(",")
    }
}

display_for_geom!(MultiPolygon);

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x0: f64, y0: f64, side: f64) -> LinearRing {
        LinearRing::new(vec![
            Point::new(x0, y0),
            Point::new(x0 + side, y0),
            Point::new(x0 + side, y0 + side),
            Point::new(x0, y0 + side),
            Point::new(x0, y0),
        ])
    }

    #[test]
    fn test_ring_closure() {
        assert!(square(0.0, 0.0, 1.0).is_closed());

        let open = LinearRing::new(vec![
            Point::new(0.0, 1.0),
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 2.0),
        ]);
        assert!(!open.is_closed());

        let too_short = LinearRing::new(vec![Point::new(0.0, 0.0), Point::new(0.0, 0.0)]);
        assert!(!too_short.is_closed());
        assert!(!LinearRing::default().is_closed());
    }

    #[test]
    fn test_shell_and_holes() {
        let poly = Polygon::new(vec![square(0.0, 0.0, 10.0), square(2.0, 2.0, 2.0)]);
        assert_eq!(poly.shell(), Some(&square(0.0, 0.0, 10.0)));
        assert_eq!(poly.holes().len(), 1);
        assert_eq!(poly.total_vertices(), 10);

        let empty = Polygon::default();
        assert!(empty.shell().is_none());
        assert!(empty.holes().is_empty());
    }

    #[test]
    fn test_polygon_wkt() {
        let poly = Polygon::new(vec![square(0.0, 0.0, 10.0), square(2.0, 2.0, 2.0)]);
        assert_eq!(
            poly.wkt(),
            "POLYGON((0 0,10 0,10 10,0 10,0 0),(2 2,4 2,4 4,2 4,2 2))"
        );
        assert_eq!(Polygon::default().wkt(), "POLYGON()");
    }

    #[test]
    fn test_multipolygon_wkt() {
        let mp = MultiPolygon::new(vec![
            Polygon::new(vec![square(0.0, 0.0, 1.0)]),
            Polygon::new(vec![square(5.0, 5.0, 3.0), square(6.0, 6.0, 1.0)]),
        ]);
        assert_eq!(
            mp.wkt(),
            "MULTIPOLYGON(((0 0,1 0,1 1,0 1,0 0)),((5 5,8 5,8 8,5 8,5 5),(6 6,7 6,7 7,6 7,6 6)))"
        );
        assert_eq!(mp.total_vertices(), 15);
    }
}
