//! Property-based tests over randomly generated geometries.

use proptest::prelude::*;

use geoformat::algorithm::{reduce, reduce_geometry};
use geoformat::io::geojson::{read_geojson, to_geojson};
use geoformat::io::wkb::{read_hex_wkb, read_wkb, to_ewkb, to_hex_ewkb, to_wkb};
use geoformat::io::wkt::read_wkt;
use geoformat::io::{detect, format, parse, DetectedFormat, FormatOptions};
use geoformat::{
    Geometry, GeometryCollection, GeometryTrait, LineString, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon,
};

/// Ordinates with at most two decimals, which every JSON float parser reads back exactly.
fn ordinate() -> impl Strategy<Value = f64> {
    (-100_000_000i64..100_000_000).prop_map(|v| v as f64 / 100.)
}

fn point_strategy() -> impl Strategy<Value = Point> {
    (ordinate(), ordinate()).prop_map(|(x, y)| Point::try_new(x, y).unwrap())
}

fn point_z_strategy() -> impl Strategy<Value = Point> {
    (ordinate(), ordinate(), ordinate()).prop_map(|(x, y, z)| Point::try_new_3d(x, y, z).unwrap())
}

fn line_string_strategy() -> impl Strategy<Value = LineString> {
    prop_oneof![
        1 => Just(LineString::empty()),
        8 => prop::collection::vec(point_strategy(), 2..8)
            .prop_map(|points| LineString::try_new(points).unwrap()),
    ]
}

/// Every vertex carries z, so binary output keeps it.
fn line_string_z_strategy() -> impl Strategy<Value = LineString> {
    prop::collection::vec(point_z_strategy(), 2..6)
        .prop_map(|points| LineString::try_new(points).unwrap())
}

fn maybe_empty_point_strategy() -> impl Strategy<Value = Point> {
    prop_oneof![
        1 => Just(Point::empty()),
        2 => point_strategy(),
    ]
}

fn polygon_strategy() -> impl Strategy<Value = Polygon> {
    prop_oneof![
        1 => Just(Polygon::empty()),
        8 => prop::collection::vec(line_string_strategy(), 1..4)
            .prop_map(|rings| Polygon::try_new(rings).unwrap()),
    ]
}

fn single_strategy() -> impl Strategy<Value = Geometry> {
    prop_oneof![
        point_strategy().prop_map(Geometry::from),
        point_z_strategy().prop_map(Geometry::from),
        Just(Geometry::from(Point::empty())),
        line_string_strategy().prop_map(Geometry::from),
        line_string_z_strategy().prop_map(Geometry::from),
        polygon_strategy().prop_map(Geometry::from),
    ]
}

fn multi_strategy() -> impl Strategy<Value = Geometry> {
    prop_oneof![
        prop::collection::vec(point_strategy(), 1..6)
            .prop_map(|points| MultiPoint::try_new(points).unwrap().into()),
        prop::collection::vec(point_z_strategy(), 1..6)
            .prop_map(|points| MultiPoint::try_new(points).unwrap().into()),
        prop::collection::vec(maybe_empty_point_strategy(), 1..6)
            .prop_map(|points| MultiPoint::try_new(points).unwrap().into()),
        prop::collection::vec(line_string_strategy(), 1..4)
            .prop_map(|lines| MultiLineString::try_new(lines).unwrap().into()),
        prop::collection::vec(polygon_strategy(), 1..3)
            .prop_map(|polygons| MultiPolygon::try_new(polygons).unwrap().into()),
        Just(Geometry::from(MultiPoint::empty())),
    ]
}

/// Geometries with components that are all empty.
fn all_empty_strategy() -> impl Strategy<Value = Geometry> {
    let leaf = prop_oneof![
        Just(Geometry::from(Point::empty())),
        Just(Geometry::from(LineString::empty())),
        (1..4usize).prop_map(|n| MultiPoint::try_new(vec![Point::empty(); n]).unwrap().into()),
        (1..3usize).prop_map(|n| {
            Polygon::try_new(vec![LineString::empty(); n]).unwrap().into()
        }),
    ];
    leaf.prop_recursive(2, 8, 3, |inner| {
        prop::collection::vec(inner, 0..3)
            .prop_map(|members| GeometryCollection::new(members).into())
    })
}

fn geometry_strategy() -> impl Strategy<Value = Geometry> {
    let leaf = prop_oneof![
        4 => single_strategy(),
        4 => multi_strategy(),
        1 => all_empty_strategy(),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop::collection::vec(inner, 0..4)
            .prop_map(|members| GeometryCollection::new(members).into())
    })
}

/// What WKT reads back: an empty geometry, at the top level or as a collection member, loses its
/// components. The SRID of the outermost geometry is kept.
fn wkt_shape(geom: &Geometry) -> Geometry {
    let shaped = if geom.is_empty() {
        Geometry::empty(geom.geometry_type())
    } else if let Some(gc) = geom.as_geometry_collection() {
        GeometryCollection::new(gc.geometries().iter().map(wkt_shape).collect()).into()
    } else {
        geom.clone()
    };
    shaped.with_srid(geom.srid())
}

fn srid_strategy() -> impl Strategy<Value = i32> {
    prop_oneof![Just(0), 1..100_000i32]
}

proptest! {
    #[test]
    fn wkt_round_trip(geom in geometry_strategy()) {
        let back = read_wkt(&geom.to_wkt()).unwrap();
        prop_assert!(back.equals(&geom));
        prop_assert_eq!(back, wkt_shape(&geom));
    }

    #[test]
    fn ewkt_round_trip(geom in geometry_strategy(), srid in srid_strategy()) {
        let geom = geom.with_srid(srid);
        let back = read_wkt(&geom.to_ewkt()).unwrap();
        prop_assert_eq!(back.srid(), srid);
        prop_assert_eq!(back, wkt_shape(&geom));
    }

    #[test]
    fn all_empty_writes_empty_keyword(geom in all_empty_strategy()) {
        let wkt = geom.to_wkt();
        prop_assert!(wkt.ends_with(" EMPTY"));
        prop_assert!(!wkt.contains('('));
    }

    #[test]
    fn wkb_round_trip(geom in geometry_strategy()) {
        prop_assert_eq!(read_wkb(&to_wkb(&geom).unwrap()).unwrap(), geom);
    }

    #[test]
    fn ewkb_round_trip(geom in geometry_strategy(), srid in srid_strategy()) {
        let geom = geom.with_srid(srid);
        prop_assert_eq!(read_wkb(&to_ewkb(&geom).unwrap()).unwrap(), geom.clone());
        let hex = to_hex_ewkb(&geom).unwrap();
        prop_assert_eq!(read_hex_wkb(&hex.to_lowercase()).unwrap(), geom);
    }

    #[test]
    fn geojson_round_trip(geom in geometry_strategy()) {
        prop_assert_eq!(read_geojson(&to_geojson(&geom).unwrap()).unwrap(), geom);
    }

    #[test]
    fn registry_round_trip(geom in geometry_strategy(), srid in srid_strategy()) {
        let geom = geom.with_srid(srid);
        for name in ["ewkt", "ewkb", "hex_ewkb"] {
            let expected = if name == "ewkt" { wkt_shape(&geom) } else { geom.clone() };
            let out = format(&geom, name).unwrap();
            prop_assert_eq!(parse(out.as_bytes(), Some(name)).unwrap(), expected.clone());
            prop_assert_eq!(parse(out.as_bytes(), None).unwrap(), expected);
        }
    }

    #[test]
    fn detect_text_output(geom in geometry_strategy(), srid in 1..100_000i32) {
        prop_assert_eq!(detect(geom.to_wkt().as_bytes()), DetectedFormat::Wkt);
        let geom = geom.with_srid(srid);
        prop_assert_eq!(detect(geom.to_ewkt().as_bytes()), DetectedFormat::Ewkt);
        let hex = geom.to_ewkb(true).unwrap();
        prop_assert_eq!(detect(hex.as_bytes()), DetectedFormat::HexEwkb);
    }

    #[test]
    fn reduce_is_idempotent(geoms in prop::collection::vec(geometry_strategy(), 0..5)) {
        let once = reduce(&geoms);
        let twice = once.clone().and_then(reduce_geometry);
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn reduce_single_is_minimal(geom in single_strategy()) {
        prop_assert_eq!(reduce(&[geom.clone()]), Some(geom));
    }

    #[test]
    fn hex_option_matches_hex_writer(geom in geometry_strategy()) {
        let out = format_hex(&geom);
        prop_assert_eq!(out, geoformat::io::wkb::to_hex_wkb(&geom).unwrap());
    }
}

fn format_hex(geom: &Geometry) -> String {
    geoformat::io::format_with(geom, "wkb", &FormatOptions::hex())
        .unwrap()
        .as_text()
        .unwrap()
        .to_string()
}
