use std::io::Write;

use crate::error::Result;
use crate::geometry::{GeometryType, MultiPoint};
use crate::io::wkb::writer::point::{point_wkb_size, write_point_as_wkb};
use crate::io::wkb::writer::{has_z, write_count, write_header, HeaderOptions};

/// The byte length of a WKBMultiPoint
pub fn multi_point_wkb_size(geom: &MultiPoint, header: HeaderOptions) -> usize {
    header.size()
        + 4
        + geom
            .points()
            .iter()
            .map(|point| point_wkb_size(point, header.nested()))
            .sum::<usize>()
}

/// Write a MultiPoint geometry to a Writer encoded as WKB
///
/// Every member is written as a full Point record.
pub fn write_multi_point_as_wkb<W: Write>(
    writer: &mut W,
    geom: &MultiPoint,
    header: HeaderOptions,
) -> Result<()> {
    write_header(writer, GeometryType::MultiPoint, has_z(geom), header)?;
    write_count(writer, geom.points().len())?;
    for point in geom.points() {
        write_point_as_wkb(writer, point, header.nested())?;
    }
    Ok(())
}
