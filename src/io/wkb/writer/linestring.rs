use std::io::Write;

use crate::error::Result;
use crate::geometry::{GeometryTrait, GeometryType, LineString};
use crate::io::wkb::writer::{
    coord_size, has_z, write_coord, write_count, write_header, HeaderOptions,
};

/// The byte length of a WKBLineString
pub fn line_string_wkb_size(geom: &LineString, header: HeaderOptions) -> usize {
    header.size() + line_string_body_size(geom, has_z(geom))
}

pub(super) fn line_string_body_size(geom: &LineString, has_z: bool) -> usize {
    4 + geom.num_points() * coord_size(has_z)
}

/// The point count and the vertices, without a header.
pub(super) fn write_line_string_body<W: Write>(
    writer: &mut W,
    geom: &LineString,
    has_z: bool,
) -> Result<()> {
    write_count(writer, geom.points().len())?;
    for point in geom.points() {
        write_coord(writer, point, has_z)?;
    }
    Ok(())
}

/// Write a LineString geometry to a Writer encoded as WKB
pub fn write_line_string_as_wkb<W: Write>(
    writer: &mut W,
    geom: &LineString,
    header: HeaderOptions,
) -> Result<()> {
    let has_z = has_z(geom);
    write_header(writer, GeometryType::LineString, has_z, header)?;
    write_line_string_body(writer, geom, has_z)
}
