//! Reading and writing Well-Known Text, and EWKT with a leading `SRID=<n>;`.

mod reader;
mod writer;

pub use reader::read_wkt;
pub use writer::{to_ewkt, to_wkt, write_geometry_as_ewkt, write_geometry_as_wkt};

use crate::error::Result;
use crate::geometry::Geometry;
use crate::io::adapter::{input_as_str, FormatOptions, FormatOutput, GeoAdapter};

/// The WKT codec. The extended flavour writes the SRID prefix; both flavours read it.
#[derive(Debug, Clone, Copy, Default)]
pub struct WktAdapter {
    extended: bool,
}

impl WktAdapter {
    pub fn new() -> Self {
        Self { extended: false }
    }

    /// An adapter that writes EWKT.
    pub fn extended() -> Self {
        Self { extended: true }
    }
}

impl GeoAdapter for WktAdapter {
    fn read(&self, input: &[u8], _options: &FormatOptions) -> Result<Geometry> {
        read_wkt(input_as_str(input)?)
    }

    fn write(&self, geometry: &Geometry, _options: &FormatOptions) -> Result<FormatOutput> {
        let text = if self.extended {
            to_ewkt(geometry)
        } else {
            to_wkt(geometry)
        };
        Ok(FormatOutput::Text(text))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::GeometryTrait;

    #[test]
    fn adapter_flavours() {
        let options = FormatOptions::default();
        let geom = WktAdapter::new()
            .read(b"SRID=4326;POINT (1 2)", &options)
            .unwrap();
        assert_eq!(geom.srid(), 4326);

        let plain = WktAdapter::new().write(&geom, &options).unwrap();
        assert_eq!(plain.as_text(), Some("POINT (1 2)"));
        let extended = WktAdapter::extended().write(&geom, &options).unwrap();
        assert_eq!(extended.as_text(), Some("SRID=4326;POINT (1 2)"));
    }

    #[test]
    fn invalid_utf8() {
        let err = WktAdapter::new()
            .read(&[0xff, 0xfe], &FormatOptions::default())
            .unwrap_err();
        assert!(err.is_parse());
    }
}
