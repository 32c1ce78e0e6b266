//! Process-wide entry points over a shared [AdapterRegistry].
//!
//! The registry is created on first use. Register extensions at startup, before it is used from
//! several threads.

use std::sync::OnceLock;

use crate::error::Result;
use crate::geometry::Geometry;
use crate::io::adapter::{FormatOptions, FormatOutput};
use crate::io::registry::{AdapterRegistry, RegisteredAdapter};

static REGISTRY: OnceLock<AdapterRegistry> = OnceLock::new();

/// The shared registry.
pub fn registry() -> &'static AdapterRegistry {
    REGISTRY.get_or_init(AdapterRegistry::new)
}

/// Parse `data` as the named format, detecting the format when `format` is `None`.
///
/// ```
/// use geoformat::io::parse;
///
/// let geom = parse(b"SRID=4326;POINT (1 2)", None).unwrap();
/// assert_eq!(geom.to_ewkt(), "SRID=4326;POINT (1 2)");
/// ```
pub fn parse(data: &[u8], format: Option<&str>) -> Result<Geometry> {
    registry().parse(data, format)
}

pub fn parse_with(data: &[u8], format: Option<&str>, options: &FormatOptions) -> Result<Geometry> {
    registry().parse_with(data, format, options)
}

/// Write `geometry` in the named format.
pub fn format(geometry: &Geometry, name: &str) -> Result<FormatOutput> {
    registry().format(geometry, name)
}

pub fn format_with(
    geometry: &Geometry,
    name: &str,
    options: &FormatOptions,
) -> Result<FormatOutput> {
    registry().format_with(geometry, name, options)
}

/// Register an adapter under `name` in the shared registry.
pub fn register_adapter(
    name: &str,
    adapter: impl Into<RegisteredAdapter>,
) -> Option<RegisteredAdapter> {
    registry().register(name, adapter)
}

/// Register a read/write function pair under `name` in the shared registry.
pub fn register_closures<R, W>(name: &str, read: R, write: W) -> Option<RegisteredAdapter>
where
    R: Fn(&[u8], &FormatOptions) -> Result<Geometry> + Send + Sync + 'static,
    W: Fn(&Geometry, &FormatOptions) -> Result<FormatOutput> + Send + Sync + 'static,
{
    registry().register_closures(name, read, write)
}
