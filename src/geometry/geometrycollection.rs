use crate::geometry::{Dimension, Geometry, GeometryTrait, GeometryType, Point};

/// A heterogeneous collection of geometries, possibly containing other collections.
#[derive(Clone, Debug, PartialEq)]
pub struct GeometryCollection {
    geometries: Vec<Geometry>,
    srid: i32,
}

impl GeometryCollection {
    /// Any number of members, including none, is valid.
    pub fn new(geometries: Vec<Geometry>) -> Self {
        Self {
            geometries,
            srid: 0,
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn with_srid(mut self, srid: i32) -> Self {
        self.srid = srid;
        self
    }

    pub fn geometries(&self) -> &[Geometry] {
        &self.geometries
    }

    pub fn into_geometries(self) -> Vec<Geometry> {
        self.geometries
    }

    pub fn num_geometries(&self) -> usize {
        self.geometries.len()
    }

    pub fn geometry_n(&self, n: usize) -> Option<&Geometry> {
        n.checked_sub(1).and_then(|i| self.geometries.get(i))
    }
}

impl GeometryTrait for GeometryCollection {
    fn geometry_type(&self) -> GeometryType {
        GeometryType::GeometryCollection
    }

    fn dimension(&self) -> Dimension {
        self.geometries
            .iter()
            .map(|g| g.dimension())
            .max()
            .unwrap_or(Dimension::Point)
    }

    fn is_empty(&self) -> bool {
        self.geometries.iter().all(|g| g.is_empty())
    }

    fn num_points(&self) -> usize {
        self.geometries.iter().map(|g| g.num_points()).sum()
    }

    fn flat_points(&self) -> Box<dyn Iterator<Item = &Point> + '_> {
        Box::new(self.geometries.iter().flat_map(|g| g.flat_points()))
    }

    fn srid(&self) -> i32 {
        self.srid
    }
}

impl From<Vec<Geometry>> for GeometryCollection {
    fn from(value: Vec<Geometry>) -> Self {
        Self::new(value)
    }
}
