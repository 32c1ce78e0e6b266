use crate::error::{GeoFormatError, Result};
use crate::geometry::{
    type_mismatch, validate_count, Dimension, Geometry, GeometryTrait, GeometryType, Point,
};

/// A homogeneous collection of Points.
#[derive(Clone, Debug, PartialEq)]
pub struct MultiPoint {
    points: Vec<Point>,
    srid: i32,
}

impl MultiPoint {
    pub fn try_new(points: Vec<Point>) -> Result<Self> {
        validate_count(GeometryType::MultiPoint, points.len(), 1)?;
        Ok(Self::new_unchecked(points))
    }

    pub(crate) fn new_unchecked(points: Vec<Point>) -> Self {
        Self { points, srid: 0 }
    }

    pub fn empty() -> Self {
        Self::new_unchecked(vec![])
    }

    pub fn with_srid(mut self, srid: i32) -> Self {
        self.srid = srid;
        self
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    pub fn num_geometries(&self) -> usize {
        self.points.len()
    }

    /// The `n`th member, counting from 1.
    pub fn geometry_n(&self, n: usize) -> Option<&Point> {
        n.checked_sub(1).and_then(|i| self.points.get(i))
    }
}

impl GeometryTrait for MultiPoint {
    fn geometry_type(&self) -> GeometryType {
        GeometryType::MultiPoint
    }

    fn dimension(&self) -> Dimension {
        Dimension::Point
    }

    fn is_empty(&self) -> bool {
        self.points.iter().all(|p| p.is_empty())
    }

    fn num_points(&self) -> usize {
        self.points.iter().map(|p| p.num_points()).sum()
    }

    fn flat_points(&self) -> Box<dyn Iterator<Item = &Point> + '_> {
        Box::new(self.points.iter().filter(|p| !p.is_empty()))
    }

    fn srid(&self) -> i32 {
        self.srid
    }
}

impl TryFrom<Vec<Geometry>> for MultiPoint {
    type Error = GeoFormatError;

    fn try_from(value: Vec<Geometry>) -> Result<Self> {
        let points = value
            .into_iter()
            .map(|geom| match geom {
                Geometry::Point(p) => Ok(p),
                other => Err(type_mismatch(
                    GeometryType::MultiPoint,
                    GeometryType::Point,
                    &other,
                )),
            })
            .collect::<Result<Vec<_>>>()?;
        Self::try_new(points)
    }
}
