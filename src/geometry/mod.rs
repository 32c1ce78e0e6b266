//! The geometry model: an owned tree of the seven simple-feature variants.
//!
//! Every variant is validated when it is constructed and is immutable afterwards. Transformations,
//! including attaching a spatial reference id, consume the value and return a new one.

mod bounding_box;
mod geometrycollection;
mod linestring;
mod multilinestring;
mod multipoint;
mod multipolygon;
mod point;
mod polygon;

use std::fmt;

use num_enum::{IntoPrimitive, TryFromPrimitive};
use phf::phf_map;

pub use bounding_box::BoundingBox;
pub use geometrycollection::GeometryCollection;
pub use linestring::LineString;
pub use multilinestring::MultiLineString;
pub use multipoint::MultiPoint;
pub use multipolygon::MultiPolygon;
pub use point::{Coord, Point};
pub use polygon::Polygon;

use crate::error::{GeoFormatError, Result};

/// The deepest collection-in-collection nesting accepted by the readers.
pub const MAX_NESTING_DEPTH: usize = 64;

/// The concrete variant of a geometry.
///
/// The discriminants are the OGC type codes used by WKB.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u32)]
pub enum GeometryType {
    Point = 1,
    LineString = 2,
    Polygon = 3,
    MultiPoint = 4,
    MultiLineString = 5,
    MultiPolygon = 6,
    GeometryCollection = 7,
}

static KEYWORDS: phf::Map<&'static str, GeometryType> = phf_map! {
    "POINT" => GeometryType::Point,
    "LINESTRING" => GeometryType::LineString,
    "POLYGON" => GeometryType::Polygon,
    "MULTIPOINT" => GeometryType::MultiPoint,
    "MULTILINESTRING" => GeometryType::MultiLineString,
    "MULTIPOLYGON" => GeometryType::MultiPolygon,
    "GEOMETRYCOLLECTION" => GeometryType::GeometryCollection,
};

impl GeometryType {
    pub fn name(&self) -> &'static str {
        match self {
            GeometryType::Point => "Point",
            GeometryType::LineString => "LineString",
            GeometryType::Polygon => "Polygon",
            GeometryType::MultiPoint => "MultiPoint",
            GeometryType::MultiLineString => "MultiLineString",
            GeometryType::MultiPolygon => "MultiPolygon",
            GeometryType::GeometryCollection => "GeometryCollection",
        }
    }

    /// The uppercase WKT keyword.
    pub fn keyword(&self) -> &'static str {
        match self {
            GeometryType::Point => "POINT",
            GeometryType::LineString => "LINESTRING",
            GeometryType::Polygon => "POLYGON",
            GeometryType::MultiPoint => "MULTIPOINT",
            GeometryType::MultiLineString => "MULTILINESTRING",
            GeometryType::MultiPolygon => "MULTIPOLYGON",
            GeometryType::GeometryCollection => "GEOMETRYCOLLECTION",
        }
    }

    /// Look up a WKT keyword, ignoring ASCII case.
    pub fn from_keyword(word: &str) -> Option<Self> {
        KEYWORDS.get(word.to_ascii_uppercase().as_str()).copied()
    }

    /// The homogeneous collection type whose elements are of this type.
    pub fn multi(&self) -> Option<GeometryType> {
        match self {
            GeometryType::Point => Some(GeometryType::MultiPoint),
            GeometryType::LineString => Some(GeometryType::MultiLineString),
            GeometryType::Polygon => Some(GeometryType::MultiPolygon),
            _ => None,
        }
    }
}

impl fmt::Display for GeometryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Topological dimension of a geometry.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, TryFromPrimitive, IntoPrimitive,
)]
#[repr(u8)]
pub enum Dimension {
    /// Points
    Point = 0,
    /// Curves
    Curve = 1,
    /// Surfaces
    Surface = 2,
}

/// The contract every geometry variant implements.
pub trait GeometryTrait {
    /// The variant tag. Fixed for a given concrete type.
    fn geometry_type(&self) -> GeometryType;

    fn dimension(&self) -> Dimension;

    /// True when there are no points, or every component is itself empty.
    fn is_empty(&self) -> bool;

    /// Number of non-empty points in the flattened geometry.
    fn num_points(&self) -> usize;

    /// Every non-empty point of the geometry in depth-first component order.
    ///
    /// Each call returns a fresh iterator.
    fn flat_points(&self) -> Box<dyn Iterator<Item = &Point> + '_>;

    /// Spatial reference identifier, `0` when unset.
    fn srid(&self) -> i32;

    /// The axis-aligned bounding box, or `None` for an empty geometry.
    fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::from_points(self.flat_points())
    }
}

/// Any geometry.
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    Polygon(Polygon),
    MultiPoint(MultiPoint),
    MultiLineString(MultiLineString),
    MultiPolygon(MultiPolygon),
    GeometryCollection(GeometryCollection),
}

macro_rules! delegate {
    ($self:ident, $geom:ident => $expr:expr) => {
        match $self {
            Geometry::Point($geom) => $expr,
            Geometry::LineString($geom) => $expr,
            Geometry::Polygon($geom) => $expr,
            Geometry::MultiPoint($geom) => $expr,
            Geometry::MultiLineString($geom) => $expr,
            Geometry::MultiPolygon($geom) => $expr,
            Geometry::GeometryCollection($geom) => $expr,
        }
    };
}

impl Geometry {
    /// Return the same geometry tagged with `srid`.
    pub fn with_srid(self, srid: i32) -> Self {
        match self {
            Geometry::Point(g) => Geometry::Point(g.with_srid(srid)),
            Geometry::LineString(g) => Geometry::LineString(g.with_srid(srid)),
            Geometry::Polygon(g) => Geometry::Polygon(g.with_srid(srid)),
            Geometry::MultiPoint(g) => Geometry::MultiPoint(g.with_srid(srid)),
            Geometry::MultiLineString(g) => Geometry::MultiLineString(g.with_srid(srid)),
            Geometry::MultiPolygon(g) => Geometry::MultiPolygon(g.with_srid(srid)),
            Geometry::GeometryCollection(g) => Geometry::GeometryCollection(g.with_srid(srid)),
        }
    }

    /// Whether this geometry cannot be decomposed into components of another variant.
    pub fn is_single(&self) -> bool {
        matches!(
            self,
            Geometry::Point(_) | Geometry::LineString(_) | Geometry::Polygon(_)
        )
    }

    /// An empty instance of the given variant.
    pub fn empty(geometry_type: GeometryType) -> Self {
        match geometry_type {
            GeometryType::Point => Point::empty().into(),
            GeometryType::LineString => LineString::empty().into(),
            GeometryType::Polygon => Polygon::empty().into(),
            GeometryType::MultiPoint => MultiPoint::empty().into(),
            GeometryType::MultiLineString => MultiLineString::empty().into(),
            GeometryType::MultiPolygon => MultiPolygon::empty().into(),
            GeometryType::GeometryCollection => GeometryCollection::empty().into(),
        }
    }

    pub fn as_point(&self) -> Option<&Point> {
        match self {
            Geometry::Point(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_line_string(&self) -> Option<&LineString> {
        match self {
            Geometry::LineString(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_polygon(&self) -> Option<&Polygon> {
        match self {
            Geometry::Polygon(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_multi_point(&self) -> Option<&MultiPoint> {
        match self {
            Geometry::MultiPoint(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_multi_line_string(&self) -> Option<&MultiLineString> {
        match self {
            Geometry::MultiLineString(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_multi_polygon(&self) -> Option<&MultiPolygon> {
        match self {
            Geometry::MultiPolygon(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_geometry_collection(&self) -> Option<&GeometryCollection> {
        match self {
            Geometry::GeometryCollection(g) => Some(g),
            _ => None,
        }
    }

    /// Direct children of this geometry as owned [Geometry] values.
    ///
    /// Single geometries have no children; a Polygon's rings are not exposed here.
    pub fn components(&self) -> Vec<Geometry> {
        match self {
            Geometry::Point(_) | Geometry::LineString(_) | Geometry::Polygon(_) => vec![],
            Geometry::MultiPoint(g) => g.points().iter().cloned().map(Into::into).collect(),
            Geometry::MultiLineString(g) => {
                g.line_strings().iter().cloned().map(Into::into).collect()
            }
            Geometry::MultiPolygon(g) => g.polygons().iter().cloned().map(Into::into).collect(),
            Geometry::GeometryCollection(g) => g.geometries().to_vec(),
        }
    }

    /// Number of levels of GeometryCollection nesting, `0` for anything else.
    pub fn collection_depth(&self) -> usize {
        match self {
            Geometry::GeometryCollection(gc) => {
                1 + gc
                    .geometries()
                    .iter()
                    .map(Geometry::collection_depth)
                    .max()
                    .unwrap_or(0)
            }
            _ => 0,
        }
    }
}

impl GeometryTrait for Geometry {
    fn geometry_type(&self) -> GeometryType {
        delegate!(self, g => g.geometry_type())
    }

    fn dimension(&self) -> Dimension {
        delegate!(self, g => g.dimension())
    }

    fn is_empty(&self) -> bool {
        delegate!(self, g => g.is_empty())
    }

    fn num_points(&self) -> usize {
        delegate!(self, g => g.num_points())
    }

    fn flat_points(&self) -> Box<dyn Iterator<Item = &Point> + '_> {
        delegate!(self, g => g.flat_points())
    }

    fn srid(&self) -> i32 {
        delegate!(self, g => g.srid())
    }

    fn bounding_box(&self) -> Option<BoundingBox> {
        delegate!(self, g => g.bounding_box())
    }
}

macro_rules! impl_from_variant {
    ($variant:ident) => {
        impl From<$variant> for Geometry {
            fn from(value: $variant) -> Self {
                Geometry::$variant(value)
            }
        }
    };
}

impl_from_variant!(Point);
impl_from_variant!(LineString);
impl_from_variant!(Polygon);
impl_from_variant!(MultiPoint);
impl_from_variant!(MultiLineString);
impl_from_variant!(MultiPolygon);
impl_from_variant!(GeometryCollection);

/// Reject component lists shorter than the variant's minimum.
pub(crate) fn validate_count(
    geometry_type: GeometryType,
    count: usize,
    minimum: usize,
) -> Result<()> {
    if count < minimum {
        let entries = if minimum == 1 { "entry" } else { "entries" };
        return Err(GeoFormatError::Validation(format!(
            "{geometry_type} must contain at least {minimum} {entries}, found {count}"
        )));
    }
    Ok(())
}

pub(crate) fn type_mismatch(
    container: GeometryType,
    expected: GeometryType,
    found: &Geometry,
) -> GeoFormatError {
    GeoFormatError::Validation(format!(
        "{container} must be a collection of {expected}, found {}",
        found.geometry_type()
    ))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::{geometrycollection, linestring, multipoint, point, polygon};

    #[test]
    fn keyword_lookup_ignores_case() {
        assert_eq!(
            GeometryType::from_keyword("multipolygon"),
            Some(GeometryType::MultiPolygon)
        );
        assert_eq!(
            GeometryType::from_keyword("GeometryCollection"),
            Some(GeometryType::GeometryCollection)
        );
        assert_eq!(GeometryType::from_keyword("CIRCULARSTRING"), None);
    }

    #[test]
    fn type_codes() {
        assert_eq!(u32::from(GeometryType::Point), 1);
        assert_eq!(
            GeometryType::try_from(7u32).unwrap(),
            GeometryType::GeometryCollection
        );
        assert!(GeometryType::try_from(8u32).is_err());
    }

    #[test]
    fn num_points_is_sum_of_components() {
        let geoms: Vec<Geometry> = vec![
            point::p0().into(),
            linestring::ls0().into(),
            polygon::p0().into(),
            multipoint::mp0().into(),
            geometrycollection::gc0().into(),
        ];
        for geom in geoms {
            assert_eq!(geom.num_points(), geom.flat_points().count());
            assert_eq!(geom.is_empty(), geom.num_points() == 0);
        }
    }

    #[test]
    fn flat_points_is_restartable() {
        let geom: Geometry = linestring::ls0().into();
        let first: Vec<_> = geom.flat_points().collect();
        let second: Vec<_> = geom.flat_points().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_of_every_type() {
        for code in 1..=7u32 {
            let geometry_type = GeometryType::try_from(code).unwrap();
            let geom = Geometry::empty(geometry_type);
            assert_eq!(geom.geometry_type(), geometry_type);
            assert!(geom.is_empty());
            assert_eq!(geom.num_points(), 0);
            assert!(geom.bounding_box().is_none());
        }
    }

    #[test]
    fn with_srid_returns_tagged_copy() {
        let geom: Geometry = point::p0().into();
        let tagged = geom.clone().with_srid(4326);
        assert_eq!(geom.srid(), 0);
        assert_eq!(tagged.srid(), 4326);
        assert_ne!(geom, tagged);
    }

    #[test]
    fn collection_dimension_is_max_of_components() {
        let gc = geometrycollection::gc0();
        assert_eq!(gc.dimension(), Dimension::Surface);
        assert_eq!(GeometryCollection::empty().dimension(), Dimension::Point);
    }

    #[test]
    fn collection_depth() {
        let inner: Geometry = geometrycollection::gc0().into();
        let outer: Geometry = GeometryCollection::new(vec![inner]).into();
        assert_eq!(outer.collection_depth(), 2);
        assert_eq!(Geometry::from(point::p0()).collection_depth(), 0);
    }
}
