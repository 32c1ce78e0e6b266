use geojson::Value;

use crate::error::Result;
use crate::geometry::{Geometry, LineString, Point, Polygon};

fn point_to_position(point: &Point) -> Vec<f64> {
    match point.coord() {
        Some(coord) => match coord.z {
            Some(z) => vec![coord.x, coord.y, z],
            None => vec![coord.x, coord.y],
        },
        None => vec![],
    }
}

fn line_string_to_positions(line_string: &LineString) -> Vec<Vec<f64>> {
    line_string.points().iter().map(point_to_position).collect()
}

fn polygon_to_positions(polygon: &Polygon) -> Vec<Vec<Vec<f64>>> {
    polygon.rings().iter().map(line_string_to_positions).collect()
}

/// Convert a geometry to a [`geojson::Geometry`].
pub fn geometry_to_geojson(geometry: &Geometry) -> geojson::Geometry {
    let value = match geometry {
        Geometry::Point(g) => Value::Point(point_to_position(g)),
        Geometry::LineString(g) => Value::LineString(line_string_to_positions(g)),
        Geometry::Polygon(g) => Value::Polygon(polygon_to_positions(g)),
        Geometry::MultiPoint(g) => {
            Value::MultiPoint(g.points().iter().map(point_to_position).collect())
        }
        Geometry::MultiLineString(g) => Value::MultiLineString(
            g.line_strings()
                .iter()
                .map(line_string_to_positions)
                .collect(),
        ),
        Geometry::MultiPolygon(g) => {
            Value::MultiPolygon(g.polygons().iter().map(polygon_to_positions).collect())
        }
        Geometry::GeometryCollection(g) => Value::GeometryCollection(
            g.geometries().iter().map(geometry_to_geojson).collect(),
        ),
    };
    geojson::Geometry::new(value)
}

/// Serialize a geometry as a compact GeoJSON geometry object.
pub fn to_geojson(geometry: &Geometry) -> Result<String> {
    Ok(serde_json::to_string(&geometry_to_geojson(geometry))?)
}
