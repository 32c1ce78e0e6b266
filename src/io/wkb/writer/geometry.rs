use std::io::Write;

use crate::error::Result;
use crate::geometry::Geometry;
use crate::io::wkb::writer::{
    geometry_collection_wkb_size, line_string_wkb_size, multi_line_string_wkb_size,
    multi_point_wkb_size, multi_polygon_wkb_size, point_wkb_size, polygon_wkb_size,
    write_geometry_collection_as_wkb, write_line_string_as_wkb, write_multi_line_string_as_wkb,
    write_multi_point_as_wkb, write_multi_polygon_as_wkb, write_point_as_wkb,
    write_polygon_as_wkb, HeaderOptions,
};

/// The byte length of a Geometry
pub fn geometry_wkb_size(geom: &Geometry, header: HeaderOptions) -> usize {
    match geom {
        Geometry::Point(p) => point_wkb_size(p, header),
        Geometry::LineString(ls) => line_string_wkb_size(ls, header),
        Geometry::Polygon(p) => polygon_wkb_size(p, header),
        Geometry::MultiPoint(mp) => multi_point_wkb_size(mp, header),
        Geometry::MultiLineString(ml) => multi_line_string_wkb_size(ml, header),
        Geometry::MultiPolygon(mp) => multi_polygon_wkb_size(mp, header),
        Geometry::GeometryCollection(gc) => geometry_collection_wkb_size(gc, header),
    }
}

/// Write a Geometry to a Writer encoded as WKB
pub fn write_geometry_as_wkb<W: Write>(
    writer: &mut W,
    geom: &Geometry,
    header: HeaderOptions,
) -> Result<()> {
    match geom {
        Geometry::Point(p) => write_point_as_wkb(writer, p, header),
        Geometry::LineString(ls) => write_line_string_as_wkb(writer, ls, header),
        Geometry::Polygon(p) => write_polygon_as_wkb(writer, p, header),
        Geometry::MultiPoint(mp) => write_multi_point_as_wkb(writer, mp, header),
        Geometry::MultiLineString(ml) => write_multi_line_string_as_wkb(writer, ml, header),
        Geometry::MultiPolygon(mp) => write_multi_polygon_as_wkb(writer, mp, header),
        Geometry::GeometryCollection(gc) => write_geometry_collection_as_wkb(writer, gc, header),
    }
}
