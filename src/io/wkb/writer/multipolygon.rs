use std::io::Write;

use crate::error::Result;
use crate::geometry::{GeometryType, MultiPolygon};
use crate::io::wkb::writer::polygon::{polygon_wkb_size, write_polygon_as_wkb};
use crate::io::wkb::writer::{has_z, write_count, write_header, HeaderOptions};

/// The byte length of a WKBMultiPolygon
pub fn multi_polygon_wkb_size(geom: &MultiPolygon, header: HeaderOptions) -> usize {
    header.size()
        + 4
        + geom
            .polygons()
            .iter()
            .map(|polygon| polygon_wkb_size(polygon, header.nested()))
            .sum::<usize>()
}

/// Write a MultiPolygon geometry to a Writer encoded as WKB
pub fn write_multi_polygon_as_wkb<W: Write>(
    writer: &mut W,
    geom: &MultiPolygon,
    header: HeaderOptions,
) -> Result<()> {
    write_header(writer, GeometryType::MultiPolygon, has_z(geom), header)?;
    write_count(writer, geom.polygons().len())?;
    for polygon in geom.polygons() {
        write_polygon_as_wkb(writer, polygon, header.nested())?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::io::wkb::read_wkb;
    use crate::test::multipolygon::mp0;

    #[test]
    fn round_trip() {
        let mut buf = Vec::new();
        write_multi_polygon_as_wkb(&mut buf, &mp0(), HeaderOptions::default()).unwrap();
        assert_eq!(buf.len(), multi_polygon_wkb_size(&mp0(), HeaderOptions::default()));
        assert_eq!(read_wkb(&buf).unwrap(), mp0().into());
    }
}
