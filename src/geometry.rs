use super::core::{GeomType, GeometricObject, display_for_geom};
use super::linestring::*;
use super::points::*;
use super::polygons::*;

/// Any geometry the WKT codec can read or write.
///
/// A geometry collection holds arbitrary members, including further collections.
///
/// Examples
/// ```rust
/// use wktlib::{GeomType, GeometricObject, Geometry, LineString, Point};
///
/// let gc = Geometry::GeometryCollection(vec![
///     Geometry::Point(Point::new(1.0, 1.0)),
///     Geometry::LineString(LineString::new(vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)])),
/// ]);
/// assert_eq!(gc.geom_type(), GeomType::GeometryCollection);
/// assert_eq!(gc.to_string(), "GEOMETRYCOLLECTION(POINT(1 1),LINESTRING(0 0,1 1))");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    Point(Point),
    MultiPoint(MultiPoint),
    LineString(LineString),
    MultiLineString(MultiLineString),
    Polygon(Polygon),
    MultiPolygon(MultiPolygon),
    GeometryCollection(Vec<Geometry>),
}

impl Geometry {
    /// Number of direct components: points, lines, rings, polygons or members.
    /// A single point counts as one.
    pub fn total_components(&self) -> usize {
        match self {
            Geometry::Point(_) => 1,
            Geometry::MultiPoint(mp) => mp.points.len(),
            Geometry::LineString(ls) => ls.points.len(),
            Geometry::MultiLineString(mls) => mls.lines.len(),
            Geometry::Polygon(poly) => poly.rings.len(),
            Geometry::MultiPolygon(mp) => mp.polygons.len(),
            Geometry::GeometryCollection(members) => members.len(),
        }
    }

    /// Total number of vertices in the geometry, counting nested members
    pub fn total_vertices(&self) -> usize {
        match self {
            Geometry::Point(_) => 1,
            Geometry::MultiPoint(mp) => mp.points.len(),
            Geometry::LineString(ls) => ls.total_vertices(),
            Geometry::MultiLineString(mls) => mls.total_vertices(),
            Geometry::Polygon(poly) => poly.total_vertices(),
            Geometry::MultiPolygon(mp) => mp.total_vertices(),
            Geometry::GeometryCollection(members) => {
                members.iter().map(Geometry::total_vertices).sum()
            }
        }
    }
}

impl GeometricObject for Geometry {
    fn geom_type(&self) -> GeomType {
        match self {
            Geometry::Point(_) => GeomType::Point,
            Geometry::MultiPoint(_) => GeomType::MultiPoint,
            Geometry::LineString(_) => GeomType::LineString,
            Geometry::MultiLineString(_) => GeomType::MultiLineString,
            Geometry::Polygon(_) => GeomType::Polygon,
            Geometry::MultiPolygon(_) => GeomType::MultiPolygon,
            Geometry::GeometryCollection(_) => GeomType::GeometryCollection,
        }
    }

    fn wkt_body(&self) -> String {
        match self {
            Geometry::Point(pt) => pt.wkt_body(),
            Geometry::MultiPoint(mp) => mp.wkt_body(),
            Geometry::LineString(ls) => ls.wkt_body(),
            Geometry::MultiLineString(mls) => mls.wkt_body(),
            Geometry::Polygon(poly) => poly.wkt_body(),
            Geometry::MultiPolygon(mp) => mp.wkt_body(),
            Geometry::GeometryCollection(members) => members
                .iter()
                .map(|g| g.wkt())
                .collect::<Vec<String>>()
                .join(","),
        }
    }
}

display_for_geom!(Geometry);

macro_rules! geometry_from {
    ($type:ident) => {
        impl From<$type> for Geometry {
            fn from(value: $type) -> Self {
                Geometry::$type(value)
            }
        }
    };
}

geometry_from!(Point);
geometry_from!(MultiPoint);
geometry_from!(LineString);
geometry_from!(MultiLineString);
geometry_from!(Polygon);
geometry_from!(MultiPolygon);

impl From<Vec<Geometry>> for Geometry {
    fn from(members: Vec<Geometry>) -> Self {
        Geometry::GeometryCollection(members)
    }
}
