use crate::geometry::MultiPolygon;
use crate::test::polygon::{p0, p1};

pub(crate) fn mp0() -> MultiPolygon {
    MultiPolygon::try_new(vec![p0(), p1()]).unwrap()
}
