//! Format codecs, detection and dispatch.

pub mod adapter;
mod api;
pub mod detect;
pub mod geo;
pub mod geojson;
pub mod registry;
pub mod wkb;
pub mod wkt;

pub use adapter::{FormatOptions, FormatOutput, GeoAdapter};
pub use api::{
    format, format_with, parse, parse_with, register_adapter, register_closures, registry,
};
pub use detect::{detect, DetectedFormat};
pub use registry::{AdapterRegistry, RegisteredAdapter};
