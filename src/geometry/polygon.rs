use crate::error::Result;
use crate::geometry::{validate_count, Dimension, GeometryTrait, GeometryType, LineString, Point};

/// A surface bounded by an exterior ring and zero or more interior rings (holes).
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    rings: Vec<LineString>,
    srid: i32,
}

impl Polygon {
    /// Create a Polygon from its rings, exterior first. At least one ring is required; use
    /// [Polygon::empty] for the empty polygon.
    pub fn try_new(rings: Vec<LineString>) -> Result<Self> {
        validate_count(GeometryType::Polygon, rings.len(), 1)?;
        Ok(Self::new_unchecked(rings))
    }

    pub(crate) fn new_unchecked(rings: Vec<LineString>) -> Self {
        Self { rings, srid: 0 }
    }

    pub fn empty() -> Self {
        Self::new_unchecked(vec![])
    }

    pub fn with_srid(mut self, srid: i32) -> Self {
        self.srid = srid;
        self
    }

    /// All rings, exterior first.
    pub fn rings(&self) -> &[LineString] {
        &self.rings
    }

    pub fn into_rings(self) -> Vec<LineString> {
        self.rings
    }

    pub fn exterior(&self) -> Option<&LineString> {
        self.rings.first()
    }

    pub fn interiors(&self) -> &[LineString] {
        self.rings.get(1..).unwrap_or_default()
    }

    pub fn num_interior_rings(&self) -> usize {
        self.rings.len().saturating_sub(1)
    }

    /// The `n`th hole, counting from 1.
    pub fn interior_ring_n(&self, n: usize) -> Option<&LineString> {
        n.checked_sub(1).and_then(|i| self.interiors().get(i))
    }
}

impl GeometryTrait for Polygon {
    fn geometry_type(&self) -> GeometryType {
        GeometryType::Polygon
    }

    fn dimension(&self) -> Dimension {
        Dimension::Surface
    }

    fn is_empty(&self) -> bool {
        self.rings.iter().all(|ring| ring.is_empty())
    }

    fn num_points(&self) -> usize {
        self.rings.iter().map(|ring| ring.num_points()).sum()
    }

    fn flat_points(&self) -> Box<dyn Iterator<Item = &Point> + '_> {
        Box::new(self.rings.iter().flat_map(|ring| ring.points().iter()))
    }

    fn srid(&self) -> i32 {
        self.srid
    }
}
