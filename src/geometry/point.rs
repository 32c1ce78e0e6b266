use crate::error::{GeoFormatError, Result};
use crate::geometry::{BoundingBox, Dimension, GeometryTrait, GeometryType};

/// A single position. `z` is carried through the codecs but ignored by computations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coord {
    pub x: f64,
    pub y: f64,
    pub z: Option<f64>,
}

impl Coord {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: None }
    }

    pub fn x_y(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Whether every ordinate present is a finite number.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.map_or(true, f64::is_finite)
    }
}

/// A Point, possibly empty.
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    coord: Option<Coord>,
    srid: i32,
}

impl Point {
    /// Create a Point, rejecting NaN and infinite ordinates.
    pub fn try_new(x: f64, y: f64) -> Result<Self> {
        Self::try_from_coord(Coord::new(x, y))
    }

    pub fn try_new_3d(x: f64, y: f64, z: f64) -> Result<Self> {
        Self::try_from_coord(Coord { x, y, z: Some(z) })
    }

    pub fn try_from_coord(coord: Coord) -> Result<Self> {
        if !coord.is_finite() {
            return Err(GeoFormatError::Validation(format!(
                "Point ordinates must be finite, found {coord:?}"
            )));
        }
        Ok(Self::from_coord(coord))
    }

    /// Ordinates must be finite.
    pub(crate) fn new(x: f64, y: f64) -> Self {
        Self::from_coord(Coord::new(x, y))
    }

    #[cfg(test)]
    pub(crate) fn new_3d(x: f64, y: f64, z: f64) -> Self {
        Self::from_coord(Coord { x, y, z: Some(z) })
    }

    pub(crate) fn from_coord(coord: Coord) -> Self {
        Self {
            coord: Some(coord),
            srid: 0,
        }
    }

    /// The empty Point: no coordinates at all.
    pub fn empty() -> Self {
        Self {
            coord: None,
            srid: 0,
        }
    }

    pub fn with_srid(mut self, srid: i32) -> Self {
        self.srid = srid;
        self
    }

    pub fn coord(&self) -> Option<&Coord> {
        self.coord.as_ref()
    }

    pub fn x(&self) -> Option<f64> {
        self.coord.map(|c| c.x)
    }

    pub fn y(&self) -> Option<f64> {
        self.coord.map(|c| c.y)
    }

    pub fn z(&self) -> Option<f64> {
        self.coord.and_then(|c| c.z)
    }

    pub fn has_z(&self) -> bool {
        self.z().is_some()
    }

    /// Coordinate equality in x and y, or both empty.
    ///
    /// Unlike `==` this ignores the SRID and any z value.
    pub fn equals_point(&self, other: &Point) -> bool {
        match (self.coord, other.coord) {
            (Some(a), Some(b)) => a.x_y() == b.x_y(),
            (None, None) => true,
            _ => false,
        }
    }
}

impl TryFrom<(f64, f64)> for Point {
    type Error = GeoFormatError;

    fn try_from((x, y): (f64, f64)) -> Result<Self> {
        Point::try_new(x, y)
    }
}

impl GeometryTrait for Point {
    fn geometry_type(&self) -> GeometryType {
        GeometryType::Point
    }

    fn dimension(&self) -> Dimension {
        Dimension::Point
    }

    fn is_empty(&self) -> bool {
        self.coord.is_none()
    }

    fn num_points(&self) -> usize {
        usize::from(self.coord.is_some())
    }

    fn flat_points(&self) -> Box<dyn Iterator<Item = &Point> + '_> {
        Box::new(std::iter::once(self).filter(|p| !p.is_empty()))
    }

    fn srid(&self) -> i32 {
        self.srid
    }

    fn bounding_box(&self) -> Option<BoundingBox> {
        self.coord.map(|c| BoundingBox {
            minx: c.x,
            miny: c.y,
            maxx: c.x,
            maxy: c.y,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_point() {
        let point = Point::empty();
        assert!(point.is_empty());
        assert_eq!(point.num_points(), 0);
        assert_eq!(point.flat_points().count(), 0);
        assert_eq!(point.x(), None);
        assert!(point.bounding_box().is_none());
    }

    #[test]
    fn point_accessors() {
        let point = Point::new_3d(1., 2., 3.);
        assert_eq!(point.x(), Some(1.));
        assert_eq!(point.y(), Some(2.));
        assert_eq!(point.z(), Some(3.));
        assert_eq!(point.num_points(), 1);
        assert_eq!(point.dimension(), Dimension::Point);
    }

    #[test]
    fn equals_point_ignores_srid_and_z() {
        let a = Point::new(1., 2.).with_srid(4326);
        let b = Point::new_3d(1., 2., 9.);
        assert!(a.equals_point(&b));
        assert_ne!(a, b);
        assert!(Point::empty().equals_point(&Point::empty()));
        assert!(!Point::empty().equals_point(&a));
    }

    #[test]
    fn non_finite_ordinates_are_rejected() {
        assert!(Point::try_new(f64::NAN, 1.).unwrap_err().is_validation());
        assert!(Point::try_new(f64::INFINITY, 1.).unwrap_err().is_validation());
        assert!(Point::try_new(1., f64::NEG_INFINITY).unwrap_err().is_validation());
        assert!(Point::try_new_3d(1., 2., f64::NAN).unwrap_err().is_validation());
        assert!(Point::try_from((f64::NAN, f64::NAN)).is_err());
        assert_eq!(Point::try_new(1., 2.).unwrap(), Point::new(1., 2.));
    }
}
