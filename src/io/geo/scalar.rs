use crate::geometry::{
    Coord, Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon,
    Point, Polygon,
};

/// Convert a coordinate to a [`geo::Coord`].
///
/// Only the first two dimensions will be kept.
pub fn coord_to_geo(coord: &Coord) -> geo::Coord {
    geo::Coord {
        x: coord.x,
        y: coord.y,
    }
}

/// Convert a Point to a [`geo::Point`], or `None` when it is empty.
pub fn point_to_geo(point: &Point) -> Option<geo::Point> {
    point.coord().map(|coord| geo::Point(coord_to_geo(coord)))
}

/// Convert a LineString to a [`geo::LineString`].
///
/// Only the first two dimensions will be kept.
pub fn line_string_to_geo(line_string: &LineString) -> geo::LineString {
    geo::LineString::new(
        line_string
            .points()
            .iter()
            .filter_map(|point| point.coord().map(coord_to_geo))
            .collect(),
    )
}

/// Convert a Polygon to a [`geo::Polygon`].
///
/// An empty polygon becomes a polygon with an empty exterior.
pub fn polygon_to_geo(polygon: &Polygon) -> geo::Polygon {
    let exterior = polygon
        .exterior()
        .map(line_string_to_geo)
        .unwrap_or_else(|| geo::LineString::new(vec![]));
    let interiors = polygon.interiors().iter().map(line_string_to_geo).collect();
    geo::Polygon::new(exterior, interiors)
}

/// Convert a MultiPoint to a [`geo::MultiPoint`], dropping empty members.
pub fn multi_point_to_geo(multi_point: &MultiPoint) -> geo::MultiPoint {
    geo::MultiPoint::new(multi_point.points().iter().filter_map(point_to_geo).collect())
}

pub fn multi_line_string_to_geo(multi_line_string: &MultiLineString) -> geo::MultiLineString {
    geo::MultiLineString::new(
        multi_line_string
            .line_strings()
            .iter()
            .map(line_string_to_geo)
            .collect(),
    )
}

pub fn multi_polygon_to_geo(multi_polygon: &MultiPolygon) -> geo::MultiPolygon {
    geo::MultiPolygon::new(multi_polygon.polygons().iter().map(polygon_to_geo).collect())
}

/// Convert a GeometryCollection to a [`geo::GeometryCollection`], dropping empty points.
pub fn geometry_collection_to_geo(collection: &GeometryCollection) -> geo::GeometryCollection {
    geo::GeometryCollection::new_from(
        collection
            .geometries()
            .iter()
            .filter_map(geometry_to_geo)
            .collect(),
    )
}

/// Convert any Geometry to a [`geo::Geometry`].
///
/// `geo` has no empty point, so an empty Point converts to `None`. The SRID is not carried.
pub fn geometry_to_geo(geometry: &Geometry) -> Option<geo::Geometry> {
    let geom = match geometry {
        Geometry::Point(g) => geo::Geometry::Point(point_to_geo(g)?),
        Geometry::LineString(g) => geo::Geometry::LineString(line_string_to_geo(g)),
        Geometry::Polygon(g) => geo::Geometry::Polygon(polygon_to_geo(g)),
        Geometry::MultiPoint(g) => geo::Geometry::MultiPoint(multi_point_to_geo(g)),
        Geometry::MultiLineString(g) => {
            geo::Geometry::MultiLineString(multi_line_string_to_geo(g))
        }
        Geometry::MultiPolygon(g) => geo::Geometry::MultiPolygon(multi_polygon_to_geo(g)),
        Geometry::GeometryCollection(g) => {
            geo::Geometry::GeometryCollection(geometry_collection_to_geo(g))
        }
    };
    Some(geom)
}
