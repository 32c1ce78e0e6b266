//! Local fallback computations implemented on the geometry model using georust/geo algorithms.
//!
//! These are what [`Prepared`](crate::algorithm::engine::Prepared) uses when no geometry engine
//! is attached. Only the first two dimensions are considered.

/// Calculate the area of the surface of a `Geometry`.
pub mod area;
pub use area::Area;

/// Calculate the centroid of a `Geometry`.
pub mod centroid;
pub use centroid::Centroid;

/// Determine whether a `Geometry` contains a point, boundary included.
pub mod contains;
pub use contains::ContainsPoint;

/// Calculate the length of a `Geometry`.
pub mod euclidean_length;
pub use euclidean_length::EuclideanLength;

/// Determine whether two geometries intersect.
pub mod intersects;
pub use intersects::Intersects;
