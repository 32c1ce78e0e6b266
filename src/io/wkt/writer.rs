use std::fmt::{self, Write};

use crate::geometry::{Geometry, GeometryTrait, LineString, Point, Polygon};

fn write_coord<W: Write>(writer: &mut W, point: &Point) -> fmt::Result {
    match point.coord() {
        Some(coord) => {
            write!(writer, "{} {}", coord.x, coord.y)?;
            if let Some(z) = coord.z {
                write!(writer, " {z}")?;
            }
            Ok(())
        }
        None => writer.write_str("EMPTY"),
    }
}

fn write_joined<W: Write, T>(
    writer: &mut W,
    items: &[T],
    mut write_item: impl FnMut(&mut W, &T) -> fmt::Result,
) -> fmt::Result {
    if items.is_empty() {
        return writer.write_str("EMPTY");
    }
    writer.write_char('(')?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            writer.write_str(", ")?;
        }
        write_item(writer, item)?;
    }
    writer.write_char(')')
}

fn write_point_text<W: Write>(writer: &mut W, point: &Point) -> fmt::Result {
    if point.is_empty() {
        return writer.write_str("EMPTY");
    }
    writer.write_char('(')?;
    write_coord(writer, point)?;
    writer.write_char(')')
}

fn write_line_string_text<W: Write>(writer: &mut W, line_string: &LineString) -> fmt::Result {
    write_joined(writer, line_string.points(), write_coord)
}

fn write_polygon_text<W: Write>(writer: &mut W, polygon: &Polygon) -> fmt::Result {
    write_joined(writer, polygon.rings(), write_line_string_text)
}

/// Write the tagged text of a geometry, e.g. `POINT (1 2)` or `LINESTRING EMPTY`.
///
/// A geometry whose components are all empty is written as `<TYPE> EMPTY`, so it reads back
/// with no components. A ` Z` qualifier follows the keyword when every vertex carries a z value.
pub fn write_geometry_as_wkt<W: Write>(writer: &mut W, geom: &Geometry) -> fmt::Result {
    writer.write_str(geom.geometry_type().keyword())?;
    if geom.is_empty() {
        return writer.write_str(" EMPTY");
    }
    if geom.num_points() > 0 && geom.flat_points().all(Point::has_z) {
        writer.write_str(" Z")?;
    }
    writer.write_char(' ')?;

    match geom {
        Geometry::Point(g) => write_point_text(writer, g),
        Geometry::LineString(g) => write_line_string_text(writer, g),
        Geometry::Polygon(g) => write_polygon_text(writer, g),
        Geometry::MultiPoint(g) => write_joined(writer, g.points(), write_point_text),
        Geometry::MultiLineString(g) => {
            write_joined(writer, g.line_strings(), write_line_string_text)
        }
        Geometry::MultiPolygon(g) => write_joined(writer, g.polygons(), write_polygon_text),
        Geometry::GeometryCollection(g) => {
            write_joined(writer, g.geometries(), write_geometry_as_wkt)
        }
    }
}

/// Write EWKT: WKT preceded by `SRID=<n>;` when the geometry has a non-zero SRID.
pub fn write_geometry_as_ewkt<W: Write>(writer: &mut W, geom: &Geometry) -> fmt::Result {
    let srid = geom.srid();
    if srid != 0 {
        write!(writer, "SRID={srid};")?;
    }
    write_geometry_as_wkt(writer, geom)
}

/// Serialize a geometry to WKT.
pub fn to_wkt(geom: &Geometry) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_geometry_as_wkt(&mut out, geom);
    out
}

/// Serialize a geometry to EWKT.
pub fn to_ewkt(geom: &Geometry) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_geometry_as_ewkt(&mut out, geom);
    out
}

impl Geometry {
    /// This geometry as WKT. The SRID is not written.
    pub fn to_wkt(&self) -> String {
        to_wkt(self)
    }

    /// This geometry as EWKT, with a `SRID=<n>;` prefix when it has an SRID.
    pub fn to_ewkt(&self) -> String {
        to_ewkt(self)
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_geometry_as_wkt(f, self)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::{GeometryCollection, GeometryType, MultiPoint};
    use crate::io::wkt::read_wkt;
    use crate::test::{
        geometrycollection, linestring, multilinestring, multipoint, multipolygon, point, polygon,
    };

    #[test]
    fn point() {
        assert_eq!(to_wkt(&point::p0().into()), "POINT (0 1)");
        assert_eq!(to_wkt(&point::p_fractional().into()), "POINT (1.5 -2.25)");
    }

    #[test]
    fn line_string() {
        assert_eq!(to_wkt(&linestring::ls0().into()), "LINESTRING (0 1, 1 2)");
    }

    #[test]
    fn polygon() {
        assert_eq!(
            to_wkt(&polygon::p1().into()),
            "POLYGON ((0 0, 10 0, 10 10, 0 10, 0 0), (2 2, 4 2, 4 4, 2 4, 2 2))"
        );
    }

    #[test]
    fn multi_point_members_are_parenthesized() {
        assert_eq!(
            to_wkt(&multipoint::mp0().into()),
            "MULTIPOINT ((0 1), (1 2))"
        );
        let with_empty = MultiPoint::try_new(vec![Point::empty(), point::p1()]).unwrap();
        assert_eq!(to_wkt(&with_empty.into()), "MULTIPOINT (EMPTY, (1 2))");
    }

    #[test]
    fn collection() {
        assert_eq!(
            to_wkt(&geometrycollection::gc0().into()),
            "GEOMETRYCOLLECTION (POINT (0 1), LINESTRING (0 1, 1 2), POLYGON ((0 0, 10 0, 10 10, 0 10, 0 0)))"
        );
    }

    #[test]
    fn empties() {
        assert_eq!(to_wkt(&Geometry::empty(GeometryType::Point)), "POINT EMPTY");
        assert_eq!(
            to_wkt(&Geometry::empty(GeometryType::MultiPolygon)),
            "MULTIPOLYGON EMPTY"
        );
        assert_eq!(
            to_wkt(&GeometryCollection::new(vec![Geometry::empty(GeometryType::LineString)]).into()),
            "GEOMETRYCOLLECTION EMPTY"
        );
        assert_eq!(
            to_wkt(&MultiPoint::try_new(vec![Point::empty()]).unwrap().into()),
            "MULTIPOINT EMPTY"
        );
        assert_eq!(
            to_wkt(&GeometryCollection::new(vec![Point::empty().into()]).into()),
            "GEOMETRYCOLLECTION EMPTY"
        );
        assert_eq!(
            to_ewkt(&Polygon::try_new(vec![LineString::empty()]).unwrap().with_srid(4326).into()),
            "SRID=4326;POLYGON EMPTY"
        );
    }

    #[test]
    fn all_empty_members_round_trip_loosely() {
        let geoms: Vec<Geometry> = vec![
            MultiPoint::try_new(vec![Point::empty(), Point::empty()]).unwrap().into(),
            Polygon::try_new(vec![LineString::empty()]).unwrap().into(),
            GeometryCollection::new(vec![
                Point::empty().into(),
                GeometryCollection::empty().into(),
            ])
            .into(),
        ];
        for geom in geoms {
            let back = read_wkt(&to_wkt(&geom)).unwrap();
            assert!(back.is_empty());
            assert_eq!(back.geometry_type(), geom.geometry_type());
            assert!(back.equals(&geom));
            assert_ne!(back, geom);
        }
    }

    #[test]
    fn empty_members_next_to_points_are_kept() {
        let geom: Geometry =
            GeometryCollection::new(vec![Point::empty().into(), point::p0().into()]).into();
        assert_eq!(to_wkt(&geom), "GEOMETRYCOLLECTION (POINT EMPTY, POINT (0 1))");
        assert_eq!(read_wkt(&to_wkt(&geom)).unwrap(), geom);
    }

    #[test]
    fn z_qualifier() {
        assert_eq!(
            to_wkt(&Point::new_3d(1., 2., 3.).into()),
            "POINT Z (1 2 3)"
        );
    }

    #[test]
    fn ewkt() {
        let geom = read_wkt("SRID=4326;POINT (1 2)").unwrap();
        assert_eq!(to_ewkt(&geom), "SRID=4326;POINT (1 2)");
        assert_eq!(to_wkt(&geom), "POINT (1 2)");
        assert_eq!(to_ewkt(&point::p0().into()), "POINT (0 1)");
    }

    #[test]
    fn display_is_wkt() {
        let geom: Geometry = linestring::ls1().into();
        assert_eq!(geom.to_string(), to_wkt(&geom));
    }

    #[test]
    fn round_trip() {
        let geoms: Vec<Geometry> = vec![
            point::p2().into(),
            point::p_fractional().into(),
            linestring::ls0().into(),
            polygon::p1().into(),
            multipoint::mp0().into(),
            multilinestring::ml0().into(),
            multipolygon::mp0().into(),
            geometrycollection::gc0().into(),
        ];
        for geom in geoms {
            assert_eq!(read_wkt(&to_wkt(&geom)).unwrap(), geom);
        }
    }
}
