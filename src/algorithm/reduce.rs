//! Normalize lists of geometries to the smallest sufficient representation.

use itertools::Itertools;

use crate::geometry::{
    Geometry, GeometryCollection, GeometryTrait, GeometryType, MultiLineString, MultiPoint,
    MultiPolygon,
};

/// Collapse a list of geometries.
///
/// - An empty list reduces to `None`.
/// - A list of one reduces as [reduce_geometry].
/// - Otherwise every member is flattened to its single geometries and the result is [wrap]ped.
pub fn reduce(geometries: &[Geometry]) -> Option<Geometry> {
    match geometries {
        [] => None,
        [geometry] => reduce_geometry(geometry.clone()),
        _ => {
            let mut singles = Vec::new();
            for geometry in geometries {
                flatten_into(geometry.clone(), &mut singles);
            }
            wrap(singles)
        }
    }
}

/// Collapse one geometry.
///
/// Single geometries are returned unchanged. A Multi* with exactly one member reduces to that
/// member, any other Multi* is returned unchanged. A GeometryCollection is flattened and
/// [wrap]ped, so an empty collection reduces to `None`.
pub fn reduce_geometry(geometry: Geometry) -> Option<Geometry> {
    match geometry {
        Geometry::GeometryCollection(gc) => {
            let mut singles = Vec::new();
            for member in gc.into_geometries() {
                flatten_into(member, &mut singles);
            }
            wrap(singles)
        }
        geometry if geometry.is_single() => Some(geometry),
        multi => {
            let mut components = multi.components();
            if components.len() == 1 {
                components.pop()
            } else {
                Some(multi)
            }
        }
    }
}

/// Push the single geometries of `geometry`, descending through every level of nesting.
fn flatten_into(geometry: Geometry, out: &mut Vec<Geometry>) {
    match geometry {
        Geometry::GeometryCollection(gc) => {
            for member in gc.into_geometries() {
                flatten_into(member, out);
            }
        }
        geometry if geometry.is_single() => out.push(geometry),
        multi => out.extend(multi.components()),
    }
}

/// Wrap a list in the smallest collection that can hold it.
///
/// One member is returned as is. Members all of one single type become the matching Multi*
/// type. Anything else becomes a GeometryCollection. An empty list wraps to `None`.
pub fn wrap(geometries: Vec<Geometry>) -> Option<Geometry> {
    let geometry_type = match geometries
        .iter()
        .map(|geom| geom.geometry_type())
        .all_equal_value()
    {
        Ok(geometry_type) => geometry_type,
        Err(None) => return None,
        Err(Some(_)) => return Some(GeometryCollection::new(geometries).into()),
    };

    if geometries.len() == 1 {
        return geometries.into_iter().next();
    }

    let wrapped = match geometry_type {
        GeometryType::Point => MultiPoint::new_unchecked(
            geometries
                .into_iter()
                .filter_map(|geom| match geom {
                    Geometry::Point(p) => Some(p),
                    _ => None,
                })
                .collect(),
        )
        .into(),
        GeometryType::LineString => MultiLineString::new_unchecked(
            geometries
                .into_iter()
                .filter_map(|geom| match geom {
                    Geometry::LineString(ls) => Some(ls),
                    _ => None,
                })
                .collect(),
        )
        .into(),
        GeometryType::Polygon => MultiPolygon::new_unchecked(
            geometries
                .into_iter()
                .filter_map(|geom| match geom {
                    Geometry::Polygon(p) => Some(p),
                    _ => None,
                })
                .collect(),
        )
        .into(),
        _ => GeometryCollection::new(geometries).into(),
    };
    Some(wrapped)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::{geometrycollection, linestring, multipoint, point, polygon};

    #[test]
    fn empty_input() {
        assert_eq!(reduce(&[]), None);
        assert_eq!(wrap(vec![]), None);
        assert_eq!(reduce_geometry(GeometryCollection::empty().into()), None);
    }

    #[test]
    fn single_is_returned_as_is() {
        let geom: Geometry = polygon::p1().into();
        assert_eq!(reduce(&[geom.clone()]), Some(geom.clone()));
        assert_eq!(wrap(vec![geom.clone()]), Some(geom));
    }

    #[test]
    fn multi_of_one_reduces_to_member() {
        let mp = MultiPoint::try_new(vec![point::p0()]).unwrap();
        assert_eq!(reduce(&[mp.into()]), Some(point::p0().into()));
        let mp: Geometry = multipoint::mp0().into();
        assert_eq!(reduce(&[mp.clone()]), Some(mp));
    }

    #[test]
    fn homogeneous_list_becomes_multi() {
        let reduced = reduce(&[point::p0().into(), point::p1().into()]).unwrap();
        assert_eq!(reduced, multipoint::mp0().into());

        let reduced = reduce(&[linestring::ls0().into(), linestring::ls1().into()]).unwrap();
        assert_eq!(reduced.geometry_type(), GeometryType::MultiLineString);
    }

    #[test]
    fn collection_of_one_type_becomes_multi() {
        let gc = GeometryCollection::new(vec![point::p0().into(), point::p1().into()]);
        assert_eq!(reduce_geometry(gc.into()), Some(multipoint::mp0().into()));
    }

    #[test]
    fn mixed_list_becomes_collection() {
        let reduced = reduce(&[
            multipoint::mp0().into(),
            linestring::ls0().into(),
        ])
        .unwrap();
        let gc = reduced.as_geometry_collection().unwrap();
        assert_eq!(gc.num_geometries(), 3);
        assert!(gc.geometries().iter().all(Geometry::is_single));
    }

    #[test]
    fn multi_types_are_not_promoted_again() {
        let geometries = vec![multipoint::mp0().into(), multipoint::mp0().into()];
        let wrapped = wrap(geometries).unwrap();
        assert_eq!(wrapped.geometry_type(), GeometryType::GeometryCollection);
    }

    #[test]
    fn idempotent() {
        let inputs: Vec<Vec<Geometry>> = vec![
            vec![geometrycollection::gc0().into()],
            vec![
                GeometryCollection::new(vec![
                    geometrycollection::gc0().into(),
                    multipoint::mp0().into(),
                ])
                .into(),
                polygon::p0().into(),
            ],
            vec![point::p0().into(), point::p2().into()],
            vec![MultiPoint::try_new(vec![point::p1()]).unwrap().into()],
        ];
        for input in inputs {
            let once = reduce(&input).unwrap();
            assert_eq!(reduce(&[once.clone()]), Some(once));
        }
    }
}
