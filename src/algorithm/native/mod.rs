//! Operations computed directly on the geometry model.

mod bounding_rect;
pub mod eq;

pub use bounding_rect::envelope;
pub use eq::{equals, point_multiset_eq};
