use geo::Centroid as _Centroid;

use crate::geometry::{Geometry, GeometryTrait, Point};
use crate::io::geo::geometry_to_geo;

/// Calculation of the centroid.
///
/// The centroid of a surface is area weighted, of a curve length weighted. Collections use the
/// members of their highest dimension. The result carries the SRID of the input.
pub trait Centroid {
    /// `None` when the geometry is empty.
    fn centroid(&self) -> Option<Point>;
}

impl Centroid for Geometry {
    fn centroid(&self) -> Option<Point> {
        if let Geometry::Point(point) = self {
            return (!point.is_empty()).then(|| point.clone());
        }
        let centroid = geometry_to_geo(self)?.centroid()?;
        Some(Point::new(centroid.x(), centroid.y()).with_srid(self.srid()))
    }
}
