use geojson::{GeoJson, Value};

use crate::algorithm::reduce;
use crate::error::{GeoFormatError, ParseErrorKind, Result};
use crate::geometry::{
    Coord, Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon,
    Point, Polygon, MAX_NESTING_DEPTH,
};

fn json_error(message: impl Into<String>) -> GeoFormatError {
    ParseErrorKind::Json(message.into()).into()
}

/// Read a GeoJSON geometry, `Feature` or `FeatureCollection`.
///
/// A feature without a geometry is an error. An empty `FeatureCollection` reads as an empty
/// GeometryCollection.
pub fn read_geojson(text: &str) -> Result<Geometry> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ParseErrorKind::EmptyInput.into());
    }
    let geojson = text
        .parse::<GeoJson>()
        .map_err(|err| json_error(err.to_string()))?;
    process_geojson(&geojson)
}

/// Process top-level GeoJSON items
fn process_geojson(gj: &GeoJson) -> Result<Geometry> {
    match gj {
        GeoJson::FeatureCollection(collection) => {
            let geometries = collection
                .features
                .iter()
                .enumerate()
                .map(|(idx, feature)| match &feature.geometry {
                    Some(geometry) => process_geojson_geom_n(geometry, 0),
                    None => Err(json_error(format!("feature {idx} has no geometry"))),
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(reduce(&geometries).unwrap_or_else(|| GeometryCollection::empty().into()))
        }
        GeoJson::Feature(feature) => match &feature.geometry {
            Some(geometry) => process_geojson_geom_n(geometry, 0),
            None => Err(json_error("feature has no geometry")),
        },
        GeoJson::Geometry(geometry) => process_geojson_geom_n(geometry, 0),
    }
}

/// Process a GeoJSON geometry, `depth` levels of collection deep.
fn process_geojson_geom_n(geom: &geojson::Geometry, depth: usize) -> Result<Geometry> {
    let geometry = match &geom.value {
        Value::Point(position) => process_point(position)?.into(),
        Value::MultiPoint(positions) => {
            if positions.is_empty() {
                MultiPoint::empty().into()
            } else {
                let points = positions
                    .iter()
                    .map(|position| process_point(position))
                    .collect::<Result<Vec<_>>>()?;
                MultiPoint::try_new(points)?.into()
            }
        }
        Value::LineString(positions) => process_line_string(positions)?.into(),
        Value::MultiLineString(lines) => {
            if lines.is_empty() {
                MultiLineString::empty().into()
            } else {
                let lines = lines
                    .iter()
                    .map(|line| process_line_string(line))
                    .collect::<Result<Vec<_>>>()?;
                MultiLineString::try_new(lines)?.into()
            }
        }
        Value::Polygon(rings) => process_polygon(rings)?.into(),
        Value::MultiPolygon(polygons) => {
            if polygons.is_empty() {
                MultiPolygon::empty().into()
            } else {
                let polygons = polygons
                    .iter()
                    .map(|polygon| process_polygon(polygon))
                    .collect::<Result<Vec<_>>>()?;
                MultiPolygon::try_new(polygons)?.into()
            }
        }
        Value::GeometryCollection(members) => {
            if depth >= MAX_NESTING_DEPTH {
                return Err(ParseErrorKind::DepthExceeded(MAX_NESTING_DEPTH).into());
            }
            let members = members
                .iter()
                .map(|member| process_geojson_geom_n(member, depth + 1))
                .collect::<Result<Vec<_>>>()?;
            GeometryCollection::new(members).into()
        }
    };
    Ok(geometry)
}

/// An empty position reads as an empty Point.
fn process_point(position: &[f64]) -> Result<Point> {
    match position {
        [] => Ok(Point::empty()),
        _ => Point::try_from_coord(process_coord(position)?),
    }
}

fn process_coord(position: &[f64]) -> Result<Coord> {
    match *position {
        [x, y] => Ok(Coord { x, y, z: None }),
        [x, y, z, ..] => Ok(Coord { x, y, z: Some(z) }),
        _ => Err(json_error(format!(
            "a position needs at least two numbers, found {}",
            position.len()
        ))),
    }
}

fn process_line_string(positions: &[Vec<f64>]) -> Result<LineString> {
    if positions.is_empty() {
        return Ok(LineString::empty());
    }
    let points = positions
        .iter()
        .map(|position| process_coord(position).and_then(Point::try_from_coord))
        .collect::<Result<Vec<_>>>()?;
    LineString::try_new(points)
}

fn process_polygon(rings: &[Vec<Vec<f64>>]) -> Result<Polygon> {
    if rings.is_empty() {
        return Ok(Polygon::empty());
    }
    let rings = rings
        .iter()
        .map(|ring| process_line_string(ring))
        .collect::<Result<Vec<_>>>()?;
    Polygon::try_new(rings)
}
