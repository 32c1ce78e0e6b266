//! Reading and writing GeoJSON geometries.
//!
//! GeoJSON carries no SRID; one attached to a geometry is dropped on write.

mod reader;
mod writer;

pub use reader::read_geojson;
pub use writer::{geometry_to_geojson, to_geojson};

use crate::error::Result;
use crate::geometry::Geometry;
use crate::io::adapter::{input_as_str, FormatOptions, FormatOutput, GeoAdapter};

/// The GeoJSON codec.
///
/// A `Feature` reads as its geometry and a `FeatureCollection` as the reduction of its features'
/// geometries. Writing always produces a bare geometry object.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeoJsonAdapter;

impl GeoAdapter for GeoJsonAdapter {
    fn read(&self, input: &[u8], _options: &FormatOptions) -> Result<Geometry> {
        read_geojson(input_as_str(input)?)
    }

    fn write(&self, geometry: &Geometry, _options: &FormatOptions) -> Result<FormatOutput> {
        Ok(FormatOutput::Text(to_geojson(geometry)?))
    }
}
