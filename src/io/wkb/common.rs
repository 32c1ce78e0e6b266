use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::error::ParseErrorKind;
use crate::geometry::GeometryType;

/// EWKB flag: the record carries z ordinates.
pub const EWKB_Z_FLAG: u32 = 0x8000_0000;
/// EWKB flag: the record carries m ordinates.
pub const EWKB_M_FLAG: u32 = 0x4000_0000;
/// EWKB flag: a 4-byte SRID follows the type code.
pub const EWKB_SRID_FLAG: u32 = 0x2000_0000;

const EWKB_FLAGS: u32 = EWKB_Z_FLAG | EWKB_M_FLAG | EWKB_SRID_FLAG;

/// Length of the zero integer that precedes raw (non-hex) WKB on the legacy wire format.
pub const LEGACY_PREFIX_LEN: usize = 4;

/// Byte order flag at the start of every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum Endianness {
    BigEndian = 0,
    LittleEndian = 1,
}

/// ISO type codes, as written for plain WKB.
#[derive(Clone, Copy, Debug, PartialEq, TryFromPrimitive, IntoPrimitive)]
#[repr(u32)]
pub enum WKBType {
    Point = 1,
    LineString = 2,
    Polygon = 3,
    MultiPoint = 4,
    MultiLineString = 5,
    MultiPolygon = 6,
    GeometryCollection = 7,
    PointZ = 1001,
    LineStringZ = 1002,
    PolygonZ = 1003,
    MultiPointZ = 1004,
    MultiLineStringZ = 1005,
    MultiPolygonZ = 1006,
    GeometryCollectionZ = 1007,
}

impl WKBType {
    pub fn new(geometry_type: GeometryType, has_z: bool) -> Self {
        use GeometryType as G;
        match (geometry_type, has_z) {
            (G::Point, false) => WKBType::Point,
            (G::LineString, false) => WKBType::LineString,
            (G::Polygon, false) => WKBType::Polygon,
            (G::MultiPoint, false) => WKBType::MultiPoint,
            (G::MultiLineString, false) => WKBType::MultiLineString,
            (G::MultiPolygon, false) => WKBType::MultiPolygon,
            (G::GeometryCollection, false) => WKBType::GeometryCollection,
            (G::Point, true) => WKBType::PointZ,
            (G::LineString, true) => WKBType::LineStringZ,
            (G::Polygon, true) => WKBType::PolygonZ,
            (G::MultiPoint, true) => WKBType::MultiPointZ,
            (G::MultiLineString, true) => WKBType::MultiLineStringZ,
            (G::MultiPolygon, true) => WKBType::MultiPolygonZ,
            (G::GeometryCollection, true) => WKBType::GeometryCollectionZ,
        }
    }
}

/// The EWKB type integer: the base code with the Z and SRID flags.
pub fn ewkb_type_code(geometry_type: GeometryType, has_z: bool, has_srid: bool) -> u32 {
    let mut code = u32::from(geometry_type);
    if has_z {
        code |= EWKB_Z_FLAG;
    }
    if has_srid {
        code |= EWKB_SRID_FLAG;
    }
    code
}

/// A decoded type integer, from either the ISO or the EWKB convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WkbHeader {
    pub geometry_type: GeometryType,
    pub has_z: bool,
    pub has_m: bool,
    pub has_srid: bool,
}

impl WkbHeader {
    pub fn from_type_code(code: u32) -> std::result::Result<Self, ParseErrorKind> {
        let flags = code & EWKB_FLAGS;
        let base = code & !EWKB_FLAGS;
        let (iso_dimension, type_code) = (base / 1000, base % 1000);
        if iso_dimension > 3 {
            return Err(ParseErrorKind::UnknownTypeCode(code));
        }
        let geometry_type = GeometryType::try_from(type_code)
            .map_err(|_| ParseErrorKind::UnknownTypeCode(code))?;

        Ok(Self {
            geometry_type,
            has_z: flags & EWKB_Z_FLAG != 0 || iso_dimension == 1 || iso_dimension == 3,
            has_m: flags & EWKB_M_FLAG != 0 || iso_dimension == 2 || iso_dimension == 3,
            has_srid: flags & EWKB_SRID_FLAG != 0,
        })
    }

    /// Number of ordinates per vertex.
    pub fn coord_size(&self) -> usize {
        2 + usize::from(self.has_z) + usize::from(self.has_m)
    }
}

/// Remove the 4-byte zero prefix from raw WKB, if present.
///
/// The prefix is recognized only when it is followed by a byte order flag.
pub fn strip_legacy_prefix(buf: &[u8]) -> &[u8] {
    match buf {
        [0, 0, 0, 0, order, ..] if Endianness::try_from(*order).is_ok() => {
            &buf[LEGACY_PREFIX_LEN..]
        }
        _ => buf,
    }
}
