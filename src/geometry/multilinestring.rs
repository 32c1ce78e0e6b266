use crate::error::{GeoFormatError, Result};
use crate::geometry::{
    type_mismatch, validate_count, Dimension, Geometry, GeometryTrait, GeometryType, LineString,
    Point,
};

/// A homogeneous collection of LineStrings.
#[derive(Clone, Debug, PartialEq)]
pub struct MultiLineString {
    line_strings: Vec<LineString>,
    srid: i32,
}

impl MultiLineString {
    pub fn try_new(line_strings: Vec<LineString>) -> Result<Self> {
        validate_count(GeometryType::MultiLineString, line_strings.len(), 1)?;
        Ok(Self::new_unchecked(line_strings))
    }

    pub(crate) fn new_unchecked(line_strings: Vec<LineString>) -> Self {
        Self {
            line_strings,
            srid: 0,
        }
    }

    pub fn empty() -> Self {
        Self::new_unchecked(vec![])
    }

    pub fn with_srid(mut self, srid: i32) -> Self {
        self.srid = srid;
        self
    }

    pub fn line_strings(&self) -> &[LineString] {
        &self.line_strings
    }

    pub fn into_line_strings(self) -> Vec<LineString> {
        self.line_strings
    }

    pub fn num_geometries(&self) -> usize {
        self.line_strings.len()
    }

    pub fn geometry_n(&self, n: usize) -> Option<&LineString> {
        n.checked_sub(1).and_then(|i| self.line_strings.get(i))
    }

    /// Closed when every member is closed. An empty MultiLineString is not.
    pub fn is_closed(&self) -> bool {
        !self.line_strings.is_empty() && self.line_strings.iter().all(LineString::is_closed)
    }
}

impl GeometryTrait for MultiLineString {
    fn geometry_type(&self) -> GeometryType {
        GeometryType::MultiLineString
    }

    fn dimension(&self) -> Dimension {
        Dimension::Curve
    }

    fn is_empty(&self) -> bool {
        self.line_strings.iter().all(|ls| ls.is_empty())
    }

    fn num_points(&self) -> usize {
        self.line_strings.iter().map(|ls| ls.num_points()).sum()
    }

    fn flat_points(&self) -> Box<dyn Iterator<Item = &Point> + '_> {
        Box::new(self.line_strings.iter().flat_map(|ls| ls.points().iter()))
    }

    fn srid(&self) -> i32 {
        self.srid
    }
}

impl TryFrom<Vec<Geometry>> for MultiLineString {
    type Error = GeoFormatError;

    fn try_from(value: Vec<Geometry>) -> Result<Self> {
        let line_strings = value
            .into_iter()
            .map(|geom| match geom {
                Geometry::LineString(ls) => Ok(ls),
                other => Err(type_mismatch(
                    GeometryType::MultiLineString,
                    GeometryType::LineString,
                    &other,
                )),
            })
            .collect::<Result<Vec<_>>>()?;
        Self::try_new(line_strings)
    }
}
