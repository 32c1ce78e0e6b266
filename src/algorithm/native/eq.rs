//! Loose geometric equality.
//!
//! This is weaker than `==`. `==` compares variant, vertex order and SRID, which is
//! what the codecs round-trip. [equals] compares the flattened point sets, ignoring order, the
//! variant of collections and the SRID.

use crate::geometry::{Geometry, GeometryTrait, Point};

/// Whether both sequences contain the same points the same number of times, in any order.
///
/// Points match on x and y only.
pub fn point_multiset_eq<'a>(
    left: impl IntoIterator<Item = &'a Point>,
    right: impl IntoIterator<Item = &'a Point>,
) -> bool {
    let left: Vec<&Point> = left.into_iter().collect();
    let mut right: Vec<&Point> = right.into_iter().collect();
    if left.len() != right.len() {
        return false;
    }

    for point in left {
        match right.iter().position(|candidate| point.equals_point(candidate)) {
            Some(idx) => {
                right.swap_remove(idx);
            }
            None => return false,
        }
    }
    true
}

/// Loose equality of `left` against `right`.
///
/// A Point equals only another Point with the same coordinates, or both empty. Any other
/// geometry equals `right` when their flattened points match as a multiset, so a LineString and
/// its reverse are equal, as are a MultiPoint and a GeometryCollection of the same points.
pub fn equals(left: &Geometry, right: &Geometry) -> bool {
    match (left, right) {
        (Geometry::Point(a), Geometry::Point(b)) => a.equals_point(b),
        (Geometry::Point(_), _) => false,
        _ => point_multiset_eq(left.flat_points(), right.flat_points()),
    }
}

impl Geometry {
    /// Loose equality, see [equals].
    pub fn equals(&self, other: &Geometry) -> bool {
        equals(self, other)
    }
}
