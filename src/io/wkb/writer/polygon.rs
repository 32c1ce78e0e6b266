use std::io::Write;

use crate::error::Result;
use crate::geometry::{GeometryType, Polygon};
use crate::io::wkb::writer::linestring::{line_string_body_size, write_line_string_body};
use crate::io::wkb::writer::{has_z, write_count, write_header, HeaderOptions};

/// The byte length of a WKBPolygon
pub fn polygon_wkb_size(geom: &Polygon, header: HeaderOptions) -> usize {
    let has_z = has_z(geom);
    header.size()
        + 4
        + geom
            .rings()
            .iter()
            .map(|ring| line_string_body_size(ring, has_z))
            .sum::<usize>()
}

/// Write a Polygon geometry to a Writer encoded as WKB
pub fn write_polygon_as_wkb<W: Write>(
    writer: &mut W,
    geom: &Polygon,
    header: HeaderOptions,
) -> Result<()> {
    let has_z = has_z(geom);
    write_header(writer, GeometryType::Polygon, has_z, header)?;
    write_count(writer, geom.rings().len())?;
    for ring in geom.rings() {
        write_line_string_body(writer, ring, has_z)?;
    }
    Ok(())
}
