use crate::error::{GeoFormatError, Result};
use crate::geometry::{
    type_mismatch, validate_count, Dimension, Geometry, GeometryTrait, GeometryType, Point,
    Polygon,
};

/// A homogeneous collection of Polygons.
#[derive(Clone, Debug, PartialEq)]
pub struct MultiPolygon {
    polygons: Vec<Polygon>,
    srid: i32,
}

impl MultiPolygon {
    pub fn try_new(polygons: Vec<Polygon>) -> Result<Self> {
        validate_count(GeometryType::MultiPolygon, polygons.len(), 1)?;
        Ok(Self::new_unchecked(polygons))
    }

    pub(crate) fn new_unchecked(polygons: Vec<Polygon>) -> Self {
        Self { polygons, srid: 0 }
    }

    pub fn empty() -> Self {
        Self::new_unchecked(vec![])
    }

    pub fn with_srid(mut self, srid: i32) -> Self {
        self.srid = srid;
        self
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    pub fn into_polygons(self) -> Vec<Polygon> {
        self.polygons
    }

    pub fn num_geometries(&self) -> usize {
        self.polygons.len()
    }

    pub fn geometry_n(&self, n: usize) -> Option<&Polygon> {
        n.checked_sub(1).and_then(|i| self.polygons.get(i))
    }
}

impl GeometryTrait for MultiPolygon {
    fn geometry_type(&self) -> GeometryType {
        GeometryType::MultiPolygon
    }

    fn dimension(&self) -> Dimension {
        Dimension::Surface
    }

    fn is_empty(&self) -> bool {
        self.polygons.iter().all(|p| p.is_empty())
    }

    fn num_points(&self) -> usize {
        self.polygons.iter().map(|p| p.num_points()).sum()
    }

    fn flat_points(&self) -> Box<dyn Iterator<Item = &Point> + '_> {
        Box::new(self.polygons.iter().flat_map(|p| p.flat_points()))
    }

    fn srid(&self) -> i32 {
        self.srid
    }
}

impl TryFrom<Vec<Geometry>> for MultiPolygon {
    type Error = GeoFormatError;

    fn try_from(value: Vec<Geometry>) -> Result<Self> {
        let polygons = value
            .into_iter()
            .map(|geom| match geom {
                Geometry::Polygon(p) => Ok(p),
                other => Err(type_mismatch(
                    GeometryType::MultiPolygon,
                    GeometryType::Polygon,
                    &other,
                )),
            })
            .collect::<Result<Vec<_>>>()?;
        Self::try_new(polygons)
    }
}
