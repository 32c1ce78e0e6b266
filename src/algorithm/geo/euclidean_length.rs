use geo::EuclideanLength as _EuclideanLength;

use crate::geometry::{Geometry, LineString};
use crate::io::geo::line_string_to_geo;

/// Planar length of a geometry.
///
/// The length of a polygon is the length of all its rings. Points have zero length and
/// collections sum their members.
pub trait EuclideanLength {
    fn euclidean_length(&self) -> f64;
}

impl EuclideanLength for LineString {
    fn euclidean_length(&self) -> f64 {
        line_string_to_geo(self).euclidean_length()
    }
}

impl EuclideanLength for Geometry {
    fn euclidean_length(&self) -> f64 {
        match self {
            Geometry::Point(_) | Geometry::MultiPoint(_) => 0.,
            Geometry::LineString(g) => g.euclidean_length(),
            Geometry::Polygon(g) => g.rings().iter().map(|ring| ring.euclidean_length()).sum(),
            Geometry::MultiLineString(g) => g
                .line_strings()
                .iter()
                .map(|line| line.euclidean_length())
                .sum(),
            Geometry::MultiPolygon(g) => g
                .polygons()
                .iter()
                .flat_map(|polygon| polygon.rings())
                .map(|ring| ring.euclidean_length())
                .sum(),
            Geometry::GeometryCollection(g) => g
                .geometries()
                .iter()
                .map(|geom| geom.euclidean_length())
                .sum(),
        }
    }
}
