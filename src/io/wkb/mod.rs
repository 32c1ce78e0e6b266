//! Reading and writing Well-Known Binary, in ISO and EWKB flavours, raw or hex encoded.
//!
//! Records are always written little endian. Raw (non-hex) output is preceded by a 4-byte zero
//! integer for compatibility with the legacy wire format; the readers accept input with or
//! without it.

pub mod common;
mod reader;
pub mod writer;

pub use common::{WKBType, WkbHeader, EWKB_M_FLAG, EWKB_SRID_FLAG, EWKB_Z_FLAG};
pub use reader::{read_hex_wkb, read_wkb};
pub use writer::{geometry_wkb_size, write_geometry_as_wkb, HeaderOptions};

use crate::error::Result;
use crate::geometry::Geometry;
use crate::io::adapter::{input_as_str, FormatOptions, FormatOutput, GeoAdapter};
use crate::io::wkb::common::{strip_legacy_prefix, LEGACY_PREFIX_LEN};

fn write_record(geom: &Geometry, extended: bool) -> Result<Vec<u8>> {
    let header = HeaderOptions::outer(geom, extended);
    let mut buf = Vec::with_capacity(geometry_wkb_size(geom, header));
    write_geometry_as_wkb(&mut buf, geom, header)?;
    Ok(buf)
}

/// Encode a geometry as a bare ISO WKB record. The SRID is not written.
pub fn to_wkb(geom: &Geometry) -> Result<Vec<u8>> {
    write_record(geom, false)
}

/// Encode a geometry as a bare EWKB record, embedding its SRID when it has one.
pub fn to_ewkb(geom: &Geometry) -> Result<Vec<u8>> {
    write_record(geom, true)
}

/// Encode a geometry as uppercase hex WKB.
pub fn to_hex_wkb(geom: &Geometry) -> Result<String> {
    Ok(hex::encode_upper(to_wkb(geom)?))
}

/// Encode a geometry as uppercase hex EWKB.
pub fn to_hex_ewkb(geom: &Geometry) -> Result<String> {
    Ok(hex::encode_upper(to_ewkb(geom)?))
}

/// The WKB codec.
///
/// With [FormatOptions::hex] input is read as hex text and output is written as hex text.
/// Otherwise raw output carries the legacy 4-byte prefix.
#[derive(Debug, Clone, Copy, Default)]
pub struct WkbAdapter {
    extended: bool,
}

impl WkbAdapter {
    pub fn new() -> Self {
        Self { extended: false }
    }

    /// An adapter that writes EWKB.
    pub fn extended() -> Self {
        Self { extended: true }
    }
}

impl GeoAdapter for WkbAdapter {
    fn read(&self, input: &[u8], options: &FormatOptions) -> Result<Geometry> {
        if options.hex {
            read_hex_wkb(input_as_str(input)?)
        } else {
            read_wkb(strip_legacy_prefix(input))
        }
    }

    fn write(&self, geometry: &Geometry, options: &FormatOptions) -> Result<FormatOutput> {
        let record = write_record(geometry, self.extended)?;
        if options.hex {
            return Ok(FormatOutput::Text(hex::encode_upper(record)));
        }
        let mut buf = Vec::with_capacity(LEGACY_PREFIX_LEN + record.len());
        buf.extend_from_slice(&[0; LEGACY_PREFIX_LEN]);
        buf.extend_from_slice(&record);
        Ok(FormatOutput::Binary(buf))
    }
}

impl Geometry {
    /// This geometry as WKB, as written by [WkbAdapter].
    ///
    /// With `hex` the output is uppercase hex text, otherwise raw bytes with the legacy prefix.
    pub fn to_wkb(&self, hex: bool) -> Result<FormatOutput> {
        WkbAdapter::new().write(self, &FormatOptions { hex })
    }

    /// This geometry as EWKB, as written by [WkbAdapter::extended].
    pub fn to_ewkb(&self, hex: bool) -> Result<FormatOutput> {
        WkbAdapter::extended().write(self, &FormatOptions { hex })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::{GeometryTrait, LineString, Point, MAX_NESTING_DEPTH};
    use crate::io::wkt::read_wkt;
    use crate::test::{
        geometrycollection, linestring, multilinestring, multipoint, multipolygon, point, polygon,
    };

    fn fixtures() -> Vec<Geometry> {
        vec![
            point::p0().into(),
            point::p_fractional().into(),
            Point::empty().into(),
            Point::new_3d(1., 2., 3.).into(),
            linestring::ls0().into(),
            polygon::p1().into(),
            multipoint::mp0().into(),
            multilinestring::ml0().into(),
            multipolygon::mp0().into(),
            geometrycollection::gc0().into(),
        ]
    }

    #[test]
    fn raw_round_trip() {
        let options = FormatOptions::default();
        for adapter in [WkbAdapter::new(), WkbAdapter::extended()] {
            for geom in fixtures() {
                let out = adapter.write(&geom, &options).unwrap();
                assert_eq!(&out.as_bytes()[..4], &[0, 0, 0, 0]);
                assert_eq!(adapter.read(out.as_bytes(), &options).unwrap(), geom);
            }
        }
    }

    #[test]
    fn hex_round_trip() {
        let options = FormatOptions::hex();
        for geom in fixtures() {
            let out = WkbAdapter::new().write(&geom, &options).unwrap();
            let text = out.as_text().unwrap();
            assert_eq!(text, text.to_uppercase());
            assert_eq!(WkbAdapter::new().read(text.as_bytes(), &options).unwrap(), geom);
        }
    }

    #[test]
    fn raw_input_without_prefix() {
        let record = to_wkb(&point::p1().into()).unwrap();
        let geom = WkbAdapter::new()
            .read(&record, &FormatOptions::default())
            .unwrap();
        assert_eq!(geom, point::p1().into());
    }

    #[test]
    fn srid_only_in_extended_output() {
        let geom: Geometry = point::p0().with_srid(4326).into();
        let plain = read_wkb(&to_wkb(&geom).unwrap()).unwrap();
        assert_eq!(plain.srid(), 0);
        let extended = read_wkb(&to_ewkb(&geom).unwrap()).unwrap();
        assert_eq!(extended, geom);
    }

    #[test]
    fn geometry_methods() {
        let geom: Geometry = point::p0().with_srid(4326).into();
        let raw = geom.to_wkb(false).unwrap();
        assert_eq!(raw.as_bytes().len(), 4 + 21);
        let hex = geom.to_ewkb(true).unwrap();
        assert_eq!(hex.as_text().unwrap(), to_hex_ewkb(&geom).unwrap());
    }

    #[test]
    fn deepest_collection_round_trips() {
        let mut wkt = "MULTIPOINT ((1 2))".to_string();
        for _ in 0..MAX_NESTING_DEPTH {
            wkt = format!("GEOMETRYCOLLECTION ({wkt})");
        }
        let geom = read_wkt(&wkt).unwrap();
        assert_eq!(read_wkb(&to_wkb(&geom).unwrap()).unwrap(), geom);
    }

    #[test]
    fn mixed_z_is_dropped() {
        let geom: Geometry =
            LineString::try_new(vec![Point::new_3d(1., 2., 3.), Point::new(4., 5.)])
                .unwrap()
                .into();
        let flat: Geometry = LineString::try_new(vec![Point::new(1., 2.), Point::new(4., 5.)])
            .unwrap()
            .into();
        assert_eq!(read_wkb(&to_wkb(&geom).unwrap()).unwrap(), flat);
        assert_eq!(read_wkb(&to_ewkb(&geom).unwrap()).unwrap(), flat);
        // WKT writes each vertex with its own ordinates
        assert_eq!(geom.to_wkt(), "LINESTRING (1 2 3, 4 5)");
        assert_eq!(read_wkt(&geom.to_wkt()).unwrap(), geom);
    }

    #[test]
    fn hex_point() {
        let hex = to_hex_wkb(&Point::new(1., 2.).into()).unwrap();
        assert_eq!(hex, "0101000000000000000000F03F0000000000000040");
        let hex = to_hex_ewkb(&Point::new(1., 2.).with_srid(4326).into()).unwrap();
        assert_eq!(hex, "0101000020E6100000000000000000F03F0000000000000040");
    }
}
