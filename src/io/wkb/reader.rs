use std::io::Cursor;

use byteorder::{LittleEndian, ReadBytesExt};

use crate::error::{GeoFormatError, ParseError, ParseErrorKind, Result};
use crate::geometry::{
    type_mismatch, Coord, Geometry, GeometryCollection, GeometryType, LineString,
    MultiLineString, MultiPoint, MultiPolygon, Point, Polygon, MAX_NESTING_DEPTH,
};
use crate::io::wkb::common::{Endianness, WkbHeader};

/// A single pass over one WKB or EWKB record.
///
/// Byte offsets in errors are relative to the start of the record.
struct WkbReader<'a> {
    reader: Cursor<&'a [u8]>,
    depth: usize,
}

impl<'a> WkbReader<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self {
            reader: Cursor::new(buf),
            depth: 0,
        }
    }

    fn position(&self) -> usize {
        self.reader.position() as usize
    }

    fn remaining(&self) -> usize {
        self.reader
            .get_ref()
            .len()
            .saturating_sub(self.position())
    }

    fn truncated_at(offset: usize) -> GeoFormatError {
        ParseError::at(ParseErrorKind::Truncated, offset).into()
    }

    fn read_u8(&mut self) -> Result<u8> {
        let offset = self.position();
        self.reader.read_u8().map_err(|_| Self::truncated_at(offset))
    }

    fn read_u32(&mut self) -> Result<u32> {
        let offset = self.position();
        self.reader
            .read_u32::<LittleEndian>()
            .map_err(|_| Self::truncated_at(offset))
    }

    fn read_f64(&mut self) -> Result<f64> {
        let offset = self.position();
        self.reader
            .read_f64::<LittleEndian>()
            .map_err(|_| Self::truncated_at(offset))
    }

    /// Read an element count and bound it by the bytes left, so a corrupt count cannot cause a
    /// huge allocation.
    fn read_count(&mut self, min_item_size: usize) -> Result<usize> {
        let count = self.read_u32()? as usize;
        if count.saturating_mul(min_item_size) > self.remaining() {
            return Err(Self::truncated_at(self.reader.get_ref().len()));
        }
        Ok(count)
    }

    fn read_header(&mut self) -> Result<(WkbHeader, i32)> {
        let start = self.position();
        let byte_order = self.read_u8()?;
        if byte_order != u8::from(Endianness::LittleEndian) {
            return Err(
                ParseError::at(ParseErrorKind::UnsupportedByteOrder(byte_order), start).into(),
            );
        }

        let code_offset = self.position();
        let header = WkbHeader::from_type_code(self.read_u32()?)
            .map_err(|kind| ParseError::at(kind, code_offset))?;
        let srid = if header.has_srid {
            self.read_u32()? as i32
        } else {
            0
        };
        Ok((header, srid))
    }

    fn read_coord(&mut self, header: &WkbHeader) -> Result<Point> {
        let x = self.read_f64()?;
        let y = self.read_f64()?;
        let z = if header.has_z {
            Some(self.read_f64()?)
        } else {
            None
        };
        if header.has_m {
            // m values are not modelled
            self.read_f64()?;
        }

        if x.is_nan() && y.is_nan() {
            Ok(Point::empty())
        } else {
            Point::try_from_coord(Coord { x, y, z })
        }
    }

    fn read_points(&mut self, header: &WkbHeader) -> Result<Vec<Point>> {
        let num_points = self.read_count(header.coord_size() * 8)?;
        (0..num_points).map(|_| self.read_coord(header)).collect()
    }

    fn read_line_string(&mut self, header: &WkbHeader) -> Result<LineString> {
        let points = self.read_points(header)?;
        if points.is_empty() {
            Ok(LineString::empty())
        } else {
            LineString::try_new(points)
        }
    }

    fn read_polygon(&mut self, header: &WkbHeader) -> Result<Polygon> {
        let num_rings = self.read_count(4)?;
        let rings = (0..num_rings)
            .map(|_| self.read_line_string(header))
            .collect::<Result<Vec<_>>>()?;
        if rings.is_empty() {
            Ok(Polygon::empty())
        } else {
            Polygon::try_new(rings)
        }
    }

    /// The members of a Multi* or GeometryCollection, each a full record.
    fn read_members(&mut self) -> Result<Vec<Geometry>> {
        // smallest record: byte order, type code, count
        let num_members = self.read_count(9)?;
        (0..num_members).map(|_| self.read_geometry()).collect()
    }

    /// Only GeometryCollection levels count toward the nesting limit.
    fn read_collection_members(&mut self) -> Result<Vec<Geometry>> {
        self.depth += 1;
        if self.depth > MAX_NESTING_DEPTH {
            return Err(ParseError::at(
                ParseErrorKind::DepthExceeded(MAX_NESTING_DEPTH),
                self.position(),
            )
            .into());
        }
        let members = self.read_members()?;
        self.depth -= 1;
        Ok(members)
    }

    fn read_homogeneous<T>(
        &mut self,
        container: GeometryType,
        expected: GeometryType,
        unwrap: impl Fn(Geometry) -> std::result::Result<T, Geometry>,
    ) -> Result<Vec<T>> {
        self.read_members()?
            .into_iter()
            .map(|member| unwrap(member).map_err(|other| type_mismatch(container, expected, &other)))
            .collect()
    }

    /// Read one record, discarding any SRID it carries.
    fn read_geometry(&mut self) -> Result<Geometry> {
        Ok(self.read_record()?.0)
    }

    fn read_record(&mut self) -> Result<(Geometry, i32)> {
        use GeometryType as G;

        let (header, srid) = self.read_header()?;
        let geometry: Geometry = match header.geometry_type {
            G::Point => self.read_coord(&header)?.into(),
            G::LineString => self.read_line_string(&header)?.into(),
            G::Polygon => self.read_polygon(&header)?.into(),
            G::MultiPoint => {
                let points = self.read_homogeneous(G::MultiPoint, G::Point, |g| match g {
                    Geometry::Point(p) => Ok(p),
                    other => Err(other),
                })?;
                let geom = if points.is_empty() {
                    MultiPoint::empty()
                } else {
                    MultiPoint::try_new(points)?
                };
                geom.into()
            }
            G::MultiLineString => {
                let line_strings =
                    self.read_homogeneous(G::MultiLineString, G::LineString, |g| match g {
                        Geometry::LineString(ls) => Ok(ls),
                        other => Err(other),
                    })?;
                let geom = if line_strings.is_empty() {
                    MultiLineString::empty()
                } else {
                    MultiLineString::try_new(line_strings)?
                };
                geom.into()
            }
            G::MultiPolygon => {
                let polygons = self.read_homogeneous(G::MultiPolygon, G::Polygon, |g| match g {
                    Geometry::Polygon(p) => Ok(p),
                    other => Err(other),
                })?;
                let geom = if polygons.is_empty() {
                    MultiPolygon::empty()
                } else {
                    MultiPolygon::try_new(polygons)?
                };
                geom.into()
            }
            G::GeometryCollection => {
                GeometryCollection::new(self.read_collection_members()?).into()
            }
        };
        Ok((geometry, srid))
    }
}

/// Parse a single WKB or EWKB record.
///
/// Both ISO (`+1000`) and EWKB (high bit flags) dimension conventions are accepted. The SRID of
/// the outermost record is attached to the result. Trailing bytes are an error.
pub fn read_wkb(buf: &[u8]) -> Result<Geometry> {
    if buf.is_empty() {
        return Err(ParseErrorKind::EmptyInput.into());
    }
    let mut reader = WkbReader::new(buf);
    let (geometry, srid) = reader.read_record()?;
    if reader.remaining() > 0 {
        return Err(ParseError::at(ParseErrorKind::TrailingInput, reader.position()).into());
    }
    Ok(geometry.with_srid(srid))
}

/// Decode a hex string (either case) and parse the record it holds.
pub fn read_hex_wkb(text: &str) -> Result<Geometry> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ParseErrorKind::EmptyInput.into());
    }
    let buf = hex::decode(text).map_err(|err| ParseErrorKind::InvalidHex(err.to_string()))?;
    read_wkb(&buf)
}
