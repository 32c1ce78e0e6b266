use crate::error::{GeoFormatError, Result};
use crate::geometry::{validate_count, Dimension, GeometryTrait, GeometryType, Point};

/// An ordered sequence of at least two points, or the empty LineString.
#[derive(Clone, Debug, PartialEq)]
pub struct LineString {
    points: Vec<Point>,
    srid: i32,
}

impl LineString {
    /// Fewest vertices a non-empty LineString may hold.
    pub const MIN_POINTS: usize = 2;

    /// Create a LineString, checking the vertex count and that no vertex is an empty point.
    pub fn try_new(points: Vec<Point>) -> Result<Self> {
        validate_count(GeometryType::LineString, points.len(), Self::MIN_POINTS)?;
        if points.iter().any(|p| p.is_empty()) {
            return Err(GeoFormatError::Validation(
                "LineString vertices must not be empty points".to_string(),
            ));
        }
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

    pub fn start_point(&self) -> Option<&Point> {
        self.points.first()
    }

    pub fn end_point(&self) -> Option<&Point> {
        self.points.last()
    }

    /// The `n`th vertex, counting from 1.
    pub fn point_n(&self, n: usize) -> Option<&Point> {
        n.checked_sub(1).and_then(|i| self.points.get(i))
    }

    /// Whether the first and last vertex coincide. Empty LineStrings are not closed.
    pub fn is_closed(&self) -> bool {
        match (self.start_point(), self.end_point()) {
            (Some(start), Some(end)) => start.equals_point(end),
            _ => false,
        }
    }
}

impl GeometryTrait for LineString {
    fn geometry_type(&self) -> GeometryType {
        GeometryType::LineString
    }

    fn dimension(&self) -> Dimension {
        Dimension::Curve
    }

    fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    fn num_points(&self) -> usize {
        self.points.len()
    }

    fn flat_points(&self) -> Box<dyn Iterator<Item = &Point> + '_> {
        Box::new(self.points.iter())
    }

    fn srid(&self) -> i32 {
        self.srid
    }
}
