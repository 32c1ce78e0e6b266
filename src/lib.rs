//! A geometry model for the seven simple-feature types, with codecs for WKT, EWKT, WKB, EWKB and
//! GeoJSON, format detection and dispatch, and a seam to an external geometry engine.
//!
//! ```
//! use geoformat::io::{format, parse};
//!
//! let geom = parse(b"POLYGON ((0 0, 4 0, 4 3, 0 0))", None).unwrap();
//! let json = format(&geom, "geojson").unwrap();
//! assert_eq!(parse(json.as_bytes(), None).unwrap(), geom);
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub mod algorithm;
pub mod error;
pub mod geometry;
pub mod io;
#[cfg(test)]
pub(crate) mod test;

pub use error::{GeoFormatError, ParseError, ParseErrorKind, Result};
pub use geometry::{
    Geometry, GeometryCollection, GeometryTrait, GeometryType, LineString, MultiLineString,
    MultiPoint, MultiPolygon, Point, Polygon,
};
