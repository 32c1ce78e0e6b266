use geo::Intersects as _Intersects;

use crate::geometry::Geometry;
use crate::io::geo::geometry_to_geo;

/// Checks if the geometry Self intersects the geometry Rhs.
///
/// Either the boundary or the interior of Self has a non-empty intersection with the boundary or
/// interior of Rhs. The predicate is symmetric, and an empty geometry intersects nothing.
pub trait Intersects<Rhs = Self> {
    fn intersects(&self, rhs: &Rhs) -> bool;
}

impl Intersects for Geometry {
    fn intersects(&self, rhs: &Geometry) -> bool {
        match (geometry_to_geo(self), geometry_to_geo(rhs)) {
            (Some(left), Some(right)) => left.intersects(&right),
            _ => false,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::{LineString, Point};
    use crate::io::wkt::read_wkt;
    use crate::test::{linestring, polygon};

    #[test]
    fn crossing_lines() {
        let a = read_wkt("LINESTRING (3 2, 7 6)").unwrap();
        let b = read_wkt("LINESTRING (3 4, 8 4)").unwrap();
        let c = read_wkt("LINESTRING (9 2, 11 5)").unwrap();
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn line_in_polygon() {
        let poly: Geometry = polygon::p0().into();
        let line: Geometry = linestring::ls0().into();
        assert!(poly.intersects(&line));
    }

    #[test]
    fn point_in_hole() {
        let poly: Geometry = polygon::p1().into();
        assert!(!poly.intersects(&Point::new(3., 3.).into()));
        assert!(poly.intersects(&Point::new(2., 3.).into()));
    }

    #[test]
    fn empty_never_intersects() {
        let poly: Geometry = polygon::p0().into();
        assert!(!poly.intersects(&Point::empty().into()));
        assert!(!Geometry::from(LineString::empty()).intersects(&poly));
    }
}
