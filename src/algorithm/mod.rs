//! Algorithms on the geometry model.

pub mod engine;
pub mod geo;
pub mod native;
pub mod reduce;

pub use engine::{BinaryOp, EngineOutput, GeometryEngine, Prepared, UnaryOp};
pub use reduce::{reduce, reduce_geometry, wrap};
