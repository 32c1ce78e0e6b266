//! Best-effort format sniffing over the first bytes of an input.
//!
//! The heuristic looks at a handful of leading bytes only and can misclassify adversarial
//! input. A classification is a hint for dispatch, not a validation.

use std::fmt;

use tracing::debug;

/// Minimum length of hex WKB text. `LINESTRING EMPTY` is nine bytes, so eighteen hex digits.
const MIN_HEX_WKB_LEN: usize = 18;

/// How many bytes of XML are searched for a format-identifying element.
const XML_SNIFF_LEN: usize = 256;

/// How many bytes are inspected for a geohash.
const GEOHASH_SNIFF_LEN: usize = 8;

/// The outcome of [detect].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DetectedFormat {
    Wkt,
    Ewkt,
    Wkb,
    Ewkb,
    /// Hex-encoded WKB or EWKB.
    HexEwkb,
    GeoJson,
    Kml,
    Gpx,
    GeoRss,
    GeoHash,
    Unknown,
}

impl DetectedFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            DetectedFormat::Wkt => "wkt",
            DetectedFormat::Ewkt => "ewkt",
            DetectedFormat::Wkb => "wkb",
            DetectedFormat::Ewkb => "ewkb",
            DetectedFormat::HexEwkb => "hex_ewkb",
            DetectedFormat::GeoJson => "geojson",
            DetectedFormat::Kml => "kml",
            DetectedFormat::Gpx => "gpx",
            DetectedFormat::GeoRss => "georss",
            DetectedFormat::GeoHash => "geohash",
            DetectedFormat::Unknown => "unknown",
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, DetectedFormat::Unknown)
    }
}

impl fmt::Display for DetectedFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn trim_start(input: &[u8]) -> &[u8] {
    let start = input
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(input.len());
    &input[start..]
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack
        .windows(needle.len())
        .any(|window| window == needle)
}

fn sniff_xml(input: &[u8]) -> DetectedFormat {
    let head = &input[..input.len().min(XML_SNIFF_LEN)];
    if contains(head, b"<kml") || contains(head, b"<coordinate") {
        DetectedFormat::Kml
    } else if contains(head, b"<gpx") {
        DetectedFormat::Gpx
    } else if contains(head, b"<georss") || contains(head, b"<rss") || contains(head, b"<feed") {
        DetectedFormat::GeoRss
    } else {
        DetectedFormat::Unknown
    }
}

fn is_geohash(input: &[u8]) -> bool {
    let head = &input[..input.len().min(GEOHASH_SNIFF_LEN)];
    let head = head.trim_ascii_end();
    !head.is_empty()
        && head
            .iter()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
}

fn classify(input: &[u8]) -> DetectedFormat {
    match input {
        [] => DetectedFormat::Unknown,
        [0 | 1, ..] => match input.get(4) {
            Some(flags) if *flags != 0 => DetectedFormat::Ewkb,
            _ => DetectedFormat::Wkb,
        },
        [b'0', b'1', ..] if input.len() >= MIN_HEX_WKB_LEN => DetectedFormat::HexEwkb,
        [b'0', b'1', ..] => DetectedFormat::Unknown,
        [b'{', ..] => DetectedFormat::GeoJson,
        [b'S', ..] => DetectedFormat::Ewkt,
        [b'P' | b'L' | b'M' | b'G', ..] => DetectedFormat::Wkt,
        [b'<', ..] => sniff_xml(input),
        _ if is_geohash(input) => DetectedFormat::GeoHash,
        _ => DetectedFormat::Unknown,
    }
}

/// Guess the format of `input` from its leading bytes.
///
/// Leading whitespace is skipped. Binary input whose fifth byte is nonzero is classified as
/// EWKB, and hex text needs at least eighteen characters.
pub fn detect(input: &[u8]) -> DetectedFormat {
    let format = classify(trim_start(input));
    debug!(format = format.as_str(), len = input.len(), "detected input format");
    format
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn text_formats() {
        assert_eq!(detect(b"POINT (1 2)"), DetectedFormat::Wkt);
        assert_eq!(detect(b"  \n\tLINESTRING (1 2, 3 4)"), DetectedFormat::Wkt);
        assert_eq!(detect(b"GEOMETRYCOLLECTION EMPTY"), DetectedFormat::Wkt);
        assert_eq!(detect(b"SRID=4326;POINT (1 2)"), DetectedFormat::Ewkt);
        assert_eq!(
            detect(br#"{"type":"Point","coordinates":[1,2]}"#),
            DetectedFormat::GeoJson
        );
        assert_eq!(detect(b"u4pruydq").as_str(), "geohash");
        assert_eq!(detect(b"u4pruydqqvj"), DetectedFormat::GeoHash);
        assert_eq!(detect(b"hello world"), DetectedFormat::Unknown);
        assert_eq!(detect(b""), DetectedFormat::Unknown);
        assert_eq!(detect(b"   "), DetectedFormat::Unknown);
    }

    #[test]
    fn binary_formats() {
        let wkb = [1, 1, 0, 0, 0, 0, 0, 0, 0];
        assert_eq!(detect(&wkb), DetectedFormat::Wkb);
        let ewkb = [1, 1, 0, 0, 0x20, 0xe6, 0x10, 0, 0];
        assert_eq!(detect(&ewkb), DetectedFormat::Ewkb);
        assert_eq!(detect(&[0, 0, 0, 1]), DetectedFormat::Wkb);
    }

    #[test]
    fn hex_length_threshold() {
        assert_eq!(detect(b"01010000000000000"), DetectedFormat::Unknown);
        assert_eq!(detect(b"010100000000000000"), DetectedFormat::HexEwkb);
        assert_eq!(detect(b"010100000000000000").as_str(), "hex_ewkb");
    }

    #[test]
    fn xml_family() {
        assert_eq!(
            detect(br#"<?xml version="1.0"?><kml xmlns="http://www.opengis.net/kml/2.2">"#),
            DetectedFormat::Kml
        );
        assert_eq!(detect(b"<gpx version=\"1.1\">"), DetectedFormat::Gpx);
        assert_eq!(detect(b"<feed><georss:point>"), DetectedFormat::GeoRss);
        assert_eq!(detect(b"<html>"), DetectedFormat::Unknown);
    }
}
