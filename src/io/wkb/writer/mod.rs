//! Encode geometries as WKB records, always little endian.

mod geometry;
mod geometrycollection;
mod linestring;
mod multilinestring;
mod multipoint;
mod multipolygon;
mod point;
mod polygon;

use std::io::Write;

use byteorder::{LittleEndian, WriteBytesExt};

pub use geometry::{geometry_wkb_size, write_geometry_as_wkb};
pub use geometrycollection::{geometry_collection_wkb_size, write_geometry_collection_as_wkb};
pub use linestring::{line_string_wkb_size, write_line_string_as_wkb};
pub use multilinestring::{multi_line_string_wkb_size, write_multi_line_string_as_wkb};
pub use multipoint::{multi_point_wkb_size, write_multi_point_as_wkb};
pub use multipolygon::{multi_polygon_wkb_size, write_multi_polygon_as_wkb};
pub use point::{point_wkb_size, write_point_as_wkb};
pub use polygon::{polygon_wkb_size, write_polygon_as_wkb};

use crate::error::{GeoFormatError, Result};
use crate::geometry::{GeometryTrait, GeometryType, Point};
use crate::io::wkb::common::{ewkb_type_code, Endianness, WKBType};

/// How the header of a record is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderOptions {
    /// Use EWKB flags instead of ISO type codes.
    pub extended: bool,
    /// SRID to embed. Only honoured for extended records.
    pub srid: Option<i32>,
}

impl HeaderOptions {
    /// Options for the outermost record of `geom`: the SRID is embedded when writing EWKB and
    /// the geometry has one.
    pub fn outer(geom: &impl GeometryTrait, extended: bool) -> Self {
        let srid = geom.srid();
        Self {
            extended,
            srid: (extended && srid != 0).then_some(srid),
        }
    }

    /// Options for a record nested inside this one. Nested records never carry an SRID.
    pub fn nested(self) -> Self {
        Self { srid: None, ..self }
    }

    /// Byte length of the header: byte order, type code and optional SRID.
    pub fn size(&self) -> usize {
        1 + 4 + if self.embedded_srid().is_some() { 4 } else { 0 }
    }

    fn embedded_srid(&self) -> Option<i32> {
        self.srid.filter(|_| self.extended)
    }
}

pub(crate) fn write_header<W: Write>(
    writer: &mut W,
    geometry_type: GeometryType,
    has_z: bool,
    options: HeaderOptions,
) -> Result<()> {
    writer.write_u8(Endianness::LittleEndian.into())?;
    let code = if options.extended {
        ewkb_type_code(geometry_type, has_z, options.embedded_srid().is_some())
    } else {
        WKBType::new(geometry_type, has_z).into()
    };
    writer.write_u32::<LittleEndian>(code)?;
    if let Some(srid) = options.embedded_srid() {
        writer.write_i32::<LittleEndian>(srid)?;
    }
    Ok(())
}

pub(crate) fn write_count<W: Write>(writer: &mut W, count: usize) -> Result<()> {
    let count = u32::try_from(count).map_err(|_| {
        GeoFormatError::Validation(format!("{count} elements exceed the WKB count limit"))
    })?;
    writer.write_u32::<LittleEndian>(count)?;
    Ok(())
}

/// Whether the record for `geom` carries z ordinates: only when every vertex has one.
pub(crate) fn has_z(geom: &impl GeometryTrait) -> bool {
    geom.num_points() > 0 && geom.flat_points().all(Point::has_z)
}

/// Byte length of one vertex.
pub(crate) fn coord_size(has_z: bool) -> usize {
    if has_z {
        24
    } else {
        16
    }
}

/// Write the ordinates of one vertex. An empty point is written as NaN ordinates.
pub(crate) fn write_coord<W: Write>(writer: &mut W, point: &Point, has_z: bool) -> Result<()> {
    let (x, y, z) = match point.coord() {
        Some(coord) => (coord.x, coord.y, coord.z),
        None => (f64::NAN, f64::NAN, None),
    };
    writer.write_f64::<LittleEndian>(x)?;
    writer.write_f64::<LittleEndian>(y)?;
    if has_z {
        writer.write_f64::<LittleEndian>(z.unwrap_or(f64::NAN))?;
    }
    Ok(())
}
