//! The seam to an external geometry engine.
//!
//! Geometries cross the seam as EWKB in both directions. A [`Prepared`] geometry forwards each
//! operation to the attached engine, or computes it locally when no engine is attached and a
//! local fallback exists.

use std::fmt;
use std::sync::OnceLock;

use tracing::debug;

use crate::algorithm::geo::{Area, Centroid, ContainsPoint, EuclideanLength, Intersects};
use crate::algorithm::native::envelope;
use crate::error::{GeoFormatError, Result};
use crate::geometry::{Geometry, GeometryTrait, Point};
use crate::io::wkb::{read_wkb, to_ewkb};

/// An operation on one geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnaryOp {
    Envelope,
    Area,
    Centroid,
    Length,
    ConvexHull,
    Buffer { distance: f64 },
}

impl UnaryOp {
    pub fn name(&self) -> &'static str {
        match self {
            UnaryOp::Envelope => "envelope",
            UnaryOp::Area => "area",
            UnaryOp::Centroid => "centroid",
            UnaryOp::Length => "length",
            UnaryOp::ConvexHull => "convex_hull",
            UnaryOp::Buffer { .. } => "buffer",
        }
    }
}

/// An operation on a pair of geometries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Intersects,
    Contains,
    Intersection,
    Union,
    Difference,
    Distance,
}

impl BinaryOp {
    pub fn name(&self) -> &'static str {
        match self {
            BinaryOp::Intersects => "intersects",
            BinaryOp::Contains => "contains",
            BinaryOp::Intersection => "intersection",
            BinaryOp::Union => "union",
            BinaryOp::Difference => "difference",
            BinaryOp::Distance => "distance",
        }
    }
}

/// What an engine hands back.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineOutput {
    /// A geometry, encoded as WKB or EWKB.
    Geometry(Vec<u8>),
    Float(f64),
    Bool(bool),
}

/// An external geometry engine.
///
/// Implementations receive EWKB records and report their own failures as
/// [`GeoFormatError::Engine`].
pub trait GeometryEngine: Send + Sync {
    fn unary(&self, op: UnaryOp, wkb: &[u8]) -> Result<EngineOutput>;

    fn binary(&self, op: BinaryOp, a: &[u8], b: &[u8]) -> Result<EngineOutput>;
}

/// A geometry bound to an optional engine.
///
/// The EWKB encoding handed to the engine is computed on first use and cached.
pub struct Prepared<'a> {
    geometry: &'a Geometry,
    engine: Option<&'a dyn GeometryEngine>,
    wkb: OnceLock<Vec<u8>>,
}

impl<'a> Prepared<'a> {
    /// Prepare a geometry with no engine; only operations with a local fallback succeed.
    pub fn new(geometry: &'a Geometry) -> Self {
        Self {
            geometry,
            engine: None,
            wkb: OnceLock::new(),
        }
    }

    pub fn with_engine(geometry: &'a Geometry, engine: &'a dyn GeometryEngine) -> Self {
        Self {
            geometry,
            engine: Some(engine),
            wkb: OnceLock::new(),
        }
    }

    pub fn geometry(&self) -> &'a Geometry {
        self.geometry
    }

    pub fn has_engine(&self) -> bool {
        self.engine.is_some()
    }

    /// The cached EWKB encoding of the geometry.
    pub fn wkb(&self) -> Result<&[u8]> {
        if let Some(wkb) = self.wkb.get() {
            return Ok(wkb);
        }
        let wkb = to_ewkb(self.geometry)?;
        Ok(self.wkb.get_or_init(|| wkb))
    }

    fn unary(&self, op: UnaryOp) -> Result<Option<EngineOutput>> {
        match self.engine {
            Some(engine) => engine.unary(op, self.wkb()?).map(Some),
            None => Ok(None),
        }
    }

    fn binary(&self, op: BinaryOp, other: &[u8]) -> Result<Option<EngineOutput>> {
        match self.engine {
            Some(engine) => engine.binary(op, self.wkb()?, other).map(Some),
            None => Ok(None),
        }
    }

    fn decode(&self, output: EngineOutput, op: &'static str) -> Result<Geometry> {
        match output {
            EngineOutput::Geometry(wkb) => {
                let geom = read_wkb(&wkb)?;
                if geom.srid() == 0 && self.geometry.srid() != 0 {
                    Ok(geom.with_srid(self.geometry.srid()))
                } else {
                    Ok(geom)
                }
            }
            other => Err(unexpected_output(op, "a geometry", &other)),
        }
    }

    fn require_geometry(&self, op: UnaryOp) -> Result<Geometry> {
        match self.unary(op)? {
            Some(output) => self.decode(output, op.name()),
            None => Err(GeoFormatError::EngineUnavailable(op.name())),
        }
    }

    fn require_binary_geometry(&self, op: BinaryOp, other: &Prepared) -> Result<Geometry> {
        if self.engine.is_none() {
            return Err(GeoFormatError::EngineUnavailable(op.name()));
        }
        match self.binary(op, other.wkb()?)? {
            Some(output) => self.decode(output, op.name()),
            None => Err(GeoFormatError::EngineUnavailable(op.name())),
        }
    }

    /// The bounding box as a Polygon, or a Point when the box has no extent.
    pub fn envelope(&self) -> Result<Option<Geometry>> {
        match self.unary(UnaryOp::Envelope)? {
            Some(output) => {
                let geom = self.decode(output, "envelope")?;
                Ok((!geom.is_empty()).then_some(geom))
            }
            None => {
                fallback("envelope");
                Ok(envelope(self.geometry))
            }
        }
    }

    /// Planar area, holes subtracted.
    pub fn area(&self) -> Result<f64> {
        match self.unary(UnaryOp::Area)? {
            Some(output) => expect_float(output, "area"),
            None => {
                fallback("area");
                Ok(self.geometry.unsigned_area())
            }
        }
    }

    /// `None` when the geometry is empty.
    pub fn centroid(&self) -> Result<Option<Point>> {
        match self.unary(UnaryOp::Centroid)? {
            Some(output) => match self.decode(output, "centroid")? {
                Geometry::Point(point) if point.is_empty() => Ok(None),
                Geometry::Point(point) => Ok(Some(point)),
                other => Err(GeoFormatError::Engine(format!(
                    "centroid returned a {}",
                    other.geometry_type()
                ))),
            },
            None => {
                fallback("centroid");
                Ok(self.geometry.centroid())
            }
        }
    }

    /// Planar length of all curves and rings.
    pub fn length(&self) -> Result<f64> {
        match self.unary(UnaryOp::Length)? {
            Some(output) => expect_float(output, "length"),
            None => {
                fallback("length");
                Ok(self.geometry.euclidean_length())
            }
        }
    }

    pub fn intersects(&self, other: &Prepared) -> Result<bool> {
        if self.engine.is_none() {
            fallback("intersects");
            return Ok(self.geometry.intersects(other.geometry));
        }
        match self.binary(BinaryOp::Intersects, other.wkb()?)? {
            Some(output) => expect_bool(output, "intersects"),
            None => Ok(self.geometry.intersects(other.geometry)),
        }
    }

    /// Whether `point` lies in the geometry. The local fallback counts the boundary as inside.
    pub fn contains_point(&self, point: &Point) -> Result<bool> {
        if self.engine.is_none() {
            fallback("contains_point");
            return Ok(self.geometry.contains_point(point));
        }
        let point_wkb = to_ewkb(&point.clone().into())?;
        match self.binary(BinaryOp::Contains, &point_wkb)? {
            Some(output) => expect_bool(output, "contains"),
            None => Ok(self.geometry.contains_point(point)),
        }
    }

    pub fn convex_hull(&self) -> Result<Geometry> {
        self.require_geometry(UnaryOp::ConvexHull)
    }

    pub fn buffer(&self, distance: f64) -> Result<Geometry> {
        self.require_geometry(UnaryOp::Buffer { distance })
    }

    pub fn intersection(&self, other: &Prepared) -> Result<Geometry> {
        self.require_binary_geometry(BinaryOp::Intersection, other)
    }

    pub fn union(&self, other: &Prepared) -> Result<Geometry> {
        self.require_binary_geometry(BinaryOp::Union, other)
    }

    pub fn difference(&self, other: &Prepared) -> Result<Geometry> {
        self.require_binary_geometry(BinaryOp::Difference, other)
    }

    pub fn distance(&self, other: &Prepared) -> Result<f64> {
        if self.engine.is_none() {
            return Err(GeoFormatError::EngineUnavailable(BinaryOp::Distance.name()));
        }
        match self.binary(BinaryOp::Distance, other.wkb()?)? {
            Some(output) => expect_float(output, "distance"),
            None => Err(GeoFormatError::EngineUnavailable(BinaryOp::Distance.name())),
        }
    }
}

impl fmt::Debug for Prepared<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Prepared")
            .field("geometry", self.geometry)
            .field("has_engine", &self.engine.is_some())
            .finish()
    }
}

impl Geometry {
    /// Bind this geometry to an optional engine for computational operations.
    pub fn prepare<'a>(&'a self, engine: Option<&'a dyn GeometryEngine>) -> Prepared<'a> {
        match engine {
            Some(engine) => Prepared::with_engine(self, engine),
            None => Prepared::new(self),
        }
    }
}

fn fallback(op: &'static str) {
    debug!(operation = op, "no geometry engine attached, computing locally");
}

fn unexpected_output(op: &str, expected: &str, output: &EngineOutput) -> GeoFormatError {
    GeoFormatError::Engine(format!("{op} expected {expected}, engine returned {output:?}"))
}

fn expect_float(output: EngineOutput, op: &'static str) -> Result<f64> {
    match output {
        EngineOutput::Float(value) => Ok(value),
        other => Err(unexpected_output(op, "a float", &other)),
    }
}

fn expect_bool(output: EngineOutput, op: &'static str) -> Result<bool> {
    match output {
        EngineOutput::Bool(value) => Ok(value),
        other => Err(unexpected_output(op, "a bool", &other)),
    }
}
