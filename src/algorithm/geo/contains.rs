use geo::Intersects as _Intersects;

use crate::geometry::{Geometry, Point};
use crate::io::geo::{geometry_to_geo, point_to_geo};

/// Point-in-geometry test where a point on the boundary counts as inside.
///
/// For a polygon, points inside a hole are outside, points on a ring are inside.
pub trait ContainsPoint {
    fn contains_point(&self, point: &Point) -> bool;
}

impl ContainsPoint for Geometry {
    fn contains_point(&self, point: &Point) -> bool {
        match (geometry_to_geo(self), point_to_geo(point)) {
            (Some(geom), Some(point)) => geom.intersects(&geo::Geometry::Point(point)),
            _ => false,
        }
    }
}
