use crate::geometry::{Geometry, GeometryTrait, Point};

/// The bounding box of a geometry as a geometry.
///
/// A box with no extent in either direction collapses to a Point; otherwise it is the closed
/// Polygon around the box. Empty geometries have no envelope.
pub fn envelope(geom: &impl GeometryTrait) -> Option<Geometry> {
    let rect = geom.bounding_box()?;
    if rect.width() == 0. && rect.height() == 0. {
        return Some(Point::new(rect.minx, rect.miny).with_srid(geom.srid()).into());
    }
    Some(rect.to_polygon().with_srid(geom.srid()).into())
}
