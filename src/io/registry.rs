//! Resolution of format names to adapters, with runtime extensions.
//!
//! Names are matched case-insensitively with `_` and `-` ignored, so `GeoJson`, `geo_json` and
//! `geojson` are the same format. Extensions are consulted before the built-in formats and a
//! later registration under a name replaces an earlier one.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use phf::phf_map;
use tracing::{debug, trace};

use crate::error::{GeoFormatError, Result};
use crate::geometry::Geometry;
use crate::io::adapter::{FormatOptions, FormatOutput, GeoAdapter};
use crate::io::detect::{detect, DetectedFormat};
use crate::io::geojson::GeoJsonAdapter;
use crate::io::wkb::WkbAdapter;
use crate::io::wkt::WktAdapter;

/// The read half of a closure-pair extension.
pub type ReadFn = Arc<dyn Fn(&[u8], &FormatOptions) -> Result<Geometry> + Send + Sync>;

/// The write half of a closure-pair extension.
pub type WriteFn = Arc<dyn Fn(&Geometry, &FormatOptions) -> Result<FormatOutput> + Send + Sync>;

/// A runtime-registered format: either an adapter value or a pair of functions.
#[derive(Clone)]
pub enum RegisteredAdapter {
    Adapter(Arc<dyn GeoAdapter>),
    Closures { read: ReadFn, write: WriteFn },
}

impl RegisteredAdapter {
    pub fn read(&self, input: &[u8], options: &FormatOptions) -> Result<Geometry> {
        match self {
            RegisteredAdapter::Adapter(adapter) => adapter.read(input, options),
            RegisteredAdapter::Closures { read, .. } => read(input, options),
        }
    }

    pub fn write(&self, geometry: &Geometry, options: &FormatOptions) -> Result<FormatOutput> {
        match self {
            RegisteredAdapter::Adapter(adapter) => adapter.write(geometry, options),
            RegisteredAdapter::Closures { write, .. } => write(geometry, options),
        }
    }
}

impl fmt::Debug for RegisteredAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegisteredAdapter::Adapter(adapter) => {
                f.debug_tuple("Adapter").field(adapter).finish()
            }
            RegisteredAdapter::Closures { .. } => f.write_str("Closures"),
        }
    }
}

impl<A: GeoAdapter + 'static> From<A> for RegisteredAdapter {
    fn from(adapter: A) -> Self {
        RegisteredAdapter::Adapter(Arc::new(adapter))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Builtin {
    Wkt,
    Ewkt,
    Wkb,
    Ewkb,
    HexEwkb,
    GeoJson,
}

static BUILTINS: phf::Map<&'static str, Builtin> = phf_map! {
    "wkt" => Builtin::Wkt,
    "ewkt" => Builtin::Ewkt,
    "wkb" => Builtin::Wkb,
    "ewkb" => Builtin::Ewkb,
    "hexewkb" => Builtin::HexEwkb,
    "geojson" => Builtin::GeoJson,
};

impl Builtin {
    fn adapter(&self) -> RegisteredAdapter {
        match self {
            Builtin::Wkt => WktAdapter::new().into(),
            Builtin::Ewkt => WktAdapter::extended().into(),
            Builtin::Wkb => WkbAdapter::new().into(),
            Builtin::Ewkb | Builtin::HexEwkb => WkbAdapter::extended().into(),
            Builtin::GeoJson => GeoJsonAdapter.into(),
        }
    }

    fn options(&self, options: &FormatOptions) -> FormatOptions {
        match self {
            Builtin::HexEwkb => FormatOptions { hex: true },
            _ => *options,
        }
    }
}

/// Canonical form of a format name: ASCII lowercase without `_` or `-`.
pub fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '_' && *c != '-')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// An adapter resolved for one call, with the options it should be called with.
#[derive(Debug, Clone)]
pub struct Resolved {
    pub adapter: RegisteredAdapter,
    pub options: FormatOptions,
}

/// Maps format names to adapters.
///
/// Lookups take a shared lock and may run concurrently. Register extensions before the registry
/// is used from several threads.
#[derive(Debug, Default)]
pub struct AdapterRegistry {
    extensions: RwLock<HashMap<String, RegisteredAdapter>>,
}

impl AdapterRegistry {
    /// A registry holding only the built-in formats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `adapter` under `name`, returning the extension it replaced, if any.
    pub fn register(
        &self,
        name: &str,
        adapter: impl Into<RegisteredAdapter>,
    ) -> Option<RegisteredAdapter> {
        let key = normalize_name(name);
        if BUILTINS.contains_key(key.as_str()) {
            debug!(format = %key, "extension shadows built-in format");
        }
        let adapter = adapter.into();
        debug!(format = %key, adapter = ?adapter, "registered format adapter");
        self.extensions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, adapter)
    }

    /// Register a pair of functions as the format `name`.
    pub fn register_closures<R, W>(&self, name: &str, read: R, write: W) -> Option<RegisteredAdapter>
    where
        R: Fn(&[u8], &FormatOptions) -> Result<Geometry> + Send + Sync + 'static,
        W: Fn(&Geometry, &FormatOptions) -> Result<FormatOutput> + Send + Sync + 'static,
    {
        self.register(
            name,
            RegisteredAdapter::Closures {
                read: Arc::new(read),
                write: Arc::new(write),
            },
        )
    }

    /// Remove the extension registered under `name`, exposing the built-in again if there is one.
    pub fn unregister(&self, name: &str) -> Option<RegisteredAdapter> {
        self.extensions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&normalize_name(name))
    }

    /// Whether `name` resolves to an adapter.
    pub fn contains(&self, name: &str) -> bool {
        let key = normalize_name(name);
        BUILTINS.contains_key(key.as_str())
            || self
                .extensions
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .contains_key(&key)
    }

    /// Look up the adapter for `name`.
    pub fn resolve(&self, name: &str, options: &FormatOptions) -> Result<Resolved> {
        let key = normalize_name(name);
        let extension = self
            .extensions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
            .cloned();
        if let Some(adapter) = extension {
            trace!(format = %key, "resolved extension adapter");
            return Ok(Resolved {
                adapter,
                options: *options,
            });
        }
        match BUILTINS.get(key.as_str()) {
            Some(builtin) => {
                trace!(format = %key, "resolved built-in adapter");
                Ok(Resolved {
                    adapter: builtin.adapter(),
                    options: builtin.options(options),
                })
            }
            None => Err(GeoFormatError::UnknownFormat(name.to_string())),
        }
    }

    /// Parse `data` as the named format, or as the detected format when `format` is `None`.
    pub fn parse(&self, data: &[u8], format: Option<&str>) -> Result<Geometry> {
        self.parse_with(data, format, &FormatOptions::default())
    }

    pub fn parse_with(
        &self,
        data: &[u8],
        format: Option<&str>,
        options: &FormatOptions,
    ) -> Result<Geometry> {
        let resolved = match format {
            Some(name) => self.resolve(name, options)?,
            None => match detect(data) {
                DetectedFormat::Unknown => {
                    return Err(GeoFormatError::UnknownFormat(
                        DetectedFormat::Unknown.as_str().to_string(),
                    ))
                }
                detected => self.resolve(detected.as_str(), options)?,
            },
        };
        resolved.adapter.read(data, &resolved.options)
    }

    /// Write `geometry` in the named format.
    pub fn format(&self, geometry: &Geometry, name: &str) -> Result<FormatOutput> {
        self.format_with(geometry, name, &FormatOptions::default())
    }

    pub fn format_with(
        &self,
        geometry: &Geometry,
        name: &str,
        options: &FormatOptions,
    ) -> Result<FormatOutput> {
        let resolved = self.resolve(name, options)?;
        resolved.adapter.write(geometry, &resolved.options)
    }
}
