use std::io::Write;

use crate::error::Result;
use crate::geometry::{GeometryType, MultiLineString};
use crate::io::wkb::writer::linestring::{line_string_wkb_size, write_line_string_as_wkb};
use crate::io::wkb::writer::{has_z, write_count, write_header, HeaderOptions};

/// The byte length of a WKBMultiLineString
pub fn multi_line_string_wkb_size(geom: &MultiLineString, header: HeaderOptions) -> usize {
    header.size()
        + 4
        + geom
            .line_strings()
            .iter()
            .map(|ls| line_string_wkb_size(ls, header.nested()))
            .sum::<usize>()
}

/// Write a MultiLineString geometry to a Writer encoded as WKB
pub fn write_multi_line_string_as_wkb<W: Write>(
    writer: &mut W,
    geom: &MultiLineString,
    header: HeaderOptions,
) -> Result<()> {
    write_header(writer, GeometryType::MultiLineString, has_z(geom), header)?;
    write_count(writer, geom.line_strings().len())?;
    for line_string in geom.line_strings() {
        write_line_string_as_wkb(writer, line_string, header.nested())?;
    }
    Ok(())
}
