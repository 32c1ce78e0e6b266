use std::io::Write;

use crate::error::Result;
use crate::geometry::{GeometryType, Point};
use crate::io::wkb::writer::{coord_size, has_z, write_coord, write_header, HeaderOptions};

/// The byte length of a WKBPoint
pub fn point_wkb_size(geom: &Point, header: HeaderOptions) -> usize {
    header.size() + coord_size(has_z(geom))
}

/// Write a Point geometry to a Writer encoded as WKB
pub fn write_point_as_wkb<W: Write>(
    writer: &mut W,
    geom: &Point,
    header: HeaderOptions,
) -> Result<()> {
    let has_z = has_z(geom);
    write_header(writer, GeometryType::Point, has_z, header)?;
    write_coord(writer, geom, has_z)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::point::p_fractional;

    #[test]
    fn exact_bytes() {
        let mut buf = Vec::new();
        write_point_as_wkb(&mut buf, &p_fractional(), HeaderOptions::default()).unwrap();

        let mut expected = vec![0x01, 0x01, 0x00, 0x00, 0x00];
        expected.extend_from_slice(&1.5f64.to_le_bytes());
        expected.extend_from_slice(&(-2.25f64).to_le_bytes());
        assert_eq!(buf, expected);
        assert_eq!(buf.len(), point_wkb_size(&p_fractional(), HeaderOptions::default()));
    }

    #[test]
    fn empty_point_is_nan() {
        let mut buf = Vec::new();
        write_point_as_wkb(&mut buf, &Point::empty(), HeaderOptions::default()).unwrap();
        assert_eq!(buf.len(), 21);
        assert!(f64::from_le_bytes(buf[5..13].try_into().unwrap()).is_nan());
        assert!(f64::from_le_bytes(buf[13..21].try_into().unwrap()).is_nan());
    }

    #[test]
    fn z_and_srid_header() {
        let point = Point::new_3d(1., 2., 3.).with_srid(4326);
        let header = HeaderOptions::outer(&point, true);
        let mut buf = Vec::new();
        write_point_as_wkb(&mut buf, &point, header).unwrap();
        assert_eq!(&buf[1..5], &0xA000_0001u32.to_le_bytes());
        assert_eq!(&buf[5..9], &4326i32.to_le_bytes());
        assert_eq!(buf.len(), point_wkb_size(&point, header));
        assert_eq!(buf.len(), 1 + 4 + 4 + 24);

        let mut iso = Vec::new();
        write_point_as_wkb(&mut iso, &point, HeaderOptions::outer(&point, false)).unwrap();
        assert_eq!(&iso[1..5], &1001u32.to_le_bytes());
    }
}
