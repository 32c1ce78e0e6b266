use geo::Area as _Area;

use crate::geometry::{Geometry, MultiPolygon, Polygon};
use crate::io::geo::{geometry_to_geo, multi_polygon_to_geo, polygon_to_geo};

/// Unsigned planar area of a geometry.
///
/// Interior rings are subtracted from their polygon. Points and curves have zero area.
///
/// # Examples
///
/// ```
/// use geoformat::algorithm::geo::Area;
/// use geoformat::io::wkt::read_wkt;
///
/// let polygon = read_wkt("POLYGON ((0 0, 5 0, 5 6, 0 6, 0 0))").unwrap();
/// assert_eq!(polygon.unsigned_area(), 30.);
///
/// let reversed = read_wkt("POLYGON ((0 0, 0 6, 5 6, 5 0, 0 0))").unwrap();
/// assert_eq!(reversed.unsigned_area(), 30.);
/// ```
pub trait Area {
    fn unsigned_area(&self) -> f64;
}

impl Area for Polygon {
    fn unsigned_area(&self) -> f64 {
        polygon_to_geo(self).unsigned_area()
    }
}

impl Area for MultiPolygon {
    fn unsigned_area(&self) -> f64 {
        multi_polygon_to_geo(self).unsigned_area()
    }
}

impl Area for Geometry {
    fn unsigned_area(&self) -> f64 {
        geometry_to_geo(self).map_or(0., |geom| geom.unsigned_area())
    }
}
