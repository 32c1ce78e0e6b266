use std::io::Write;

use crate::error::Result;
use crate::geometry::{GeometryCollection, GeometryType};
use crate::io::wkb::writer::geometry::{geometry_wkb_size, write_geometry_as_wkb};
use crate::io::wkb::writer::{has_z, write_count, write_header, HeaderOptions};

/// The byte length of a WKBGeometryCollection
pub fn geometry_collection_wkb_size(geom: &GeometryCollection, header: HeaderOptions) -> usize {
    header.size()
        + 4
        + geom
            .geometries()
            .iter()
            .map(|inner| geometry_wkb_size(inner, header.nested()))
            .sum::<usize>()
}

/// Write a GeometryCollection geometry to a Writer encoded as WKB
pub fn write_geometry_collection_as_wkb<W: Write>(
    writer: &mut W,
    geom: &GeometryCollection,
    header: HeaderOptions,
) -> Result<()> {
    write_header(writer, GeometryType::GeometryCollection, has_z(geom), header)?;
    write_count(writer, geom.geometries().len())?;
    for inner in geom.geometries() {
        write_geometry_as_wkb(writer, inner, header.nested())?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::io::wkb::read_wkb;
    use crate::test::geometrycollection::gc0;

    #[test]
    fn nested_round_trip() {
        let geom = GeometryCollection::new(vec![
            gc0().into(),
            GeometryCollection::empty().into(),
        ]);
        let mut buf = Vec::new();
        write_geometry_collection_as_wkb(&mut buf, &geom, HeaderOptions::default()).unwrap();
        assert_eq!(buf.len(), geometry_collection_wkb_size(&geom, HeaderOptions::default()));
        assert_eq!(read_wkb(&buf).unwrap(), geom.into());
    }
}
