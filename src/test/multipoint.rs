use crate::geometry::MultiPoint;
use crate::test::point::{p0, p1};

pub(crate) fn mp0() -> MultiPoint {
    MultiPoint::try_new(vec![p0(), p1()]).unwrap()
}
