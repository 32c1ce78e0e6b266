//! A recursive-descent reader for WKT with an optional `SRID=<n>;` prefix.

use std::fmt;

use crate::error::{GeoFormatError, ParseError, ParseErrorKind, Result};
use crate::geometry::{
    Coord, Geometry, GeometryCollection, GeometryType, LineString, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon, MAX_NESTING_DEPTH,
};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token<'a> {
    Word(&'a str),
    Number(f64),
    LParen,
    RParen,
    Comma,
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Word(word) => write!(f, "`{word}`"),
            Token::Number(value) => write!(f, "number {value}"),
            Token::LParen => f.write_str("`(`"),
            Token::RParen => f.write_str("`)`"),
            Token::Comma => f.write_str("`,`"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Spanned<'a> {
    token: Token<'a>,
    offset: usize,
}

fn is_number_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'-' | b'+' | b'.')
}

/// Split `input` into tokens. Offsets are reported relative to `base`.
fn tokenize(input: &str, base: usize) -> Result<Vec<Spanned<'_>>> {
    let bytes = input.as_bytes();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let start = pos;
        let token = match bytes[pos] {
            b if b.is_ascii_whitespace() => {
                pos += 1;
                continue;
            }
            b'(' => {
                pos += 1;
                Token::LParen
            }
            b')' => {
                pos += 1;
                Token::RParen
            }
            b',' => {
                pos += 1;
                Token::Comma
            }
            b if b.is_ascii_alphabetic() => {
                while pos < bytes.len() && (bytes[pos].is_ascii_alphanumeric() || bytes[pos] == b'_')
                {
                    pos += 1;
                }
                Token::Word(&input[start..pos])
            }
            b if b.is_ascii_digit() || matches!(b, b'-' | b'+' | b'.') => {
                while pos < bytes.len() && is_number_byte(bytes[pos]) {
                    pos += 1;
                }
                let text = &input[start..pos];
                let value = lexical_core::parse::<f64>(text.as_bytes()).map_err(|_| {
                    ParseError::at(ParseErrorKind::InvalidNumber(text.to_string()), base + start)
                })?;
                Token::Number(value)
            }
            _ => {
                let found = input[start..]
                    .chars()
                    .next()
                    .map_or_else(String::new, |c| format!("`{c}`"));
                return Err(ParseError::at(
                    ParseErrorKind::UnexpectedToken {
                        expected: "WKT token".to_string(),
                        found,
                    },
                    base + start,
                )
                .into());
            }
        };
        tokens.push(Spanned {
            token,
            offset: base + start,
        });
    }

    Ok(tokens)
}

struct Parser<'a> {
    tokens: Vec<Spanned<'a>>,
    pos: usize,
    /// Offset reported for errors found after the last token.
    end: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(tokens: Vec<Spanned<'a>>, end: usize) -> Self {
        Self {
            tokens,
            pos: 0,
            end,
            depth: 0,
        }
    }

    fn peek(&self) -> Option<Token<'a>> {
        self.tokens.get(self.pos).map(|spanned| spanned.token)
    }

    fn offset(&self) -> usize {
        self.tokens
            .get(self.pos)
            .map_or(self.end, |spanned| spanned.offset)
    }

    fn advance(&mut self) -> Option<Spanned<'a>> {
        let spanned = self.tokens.get(self.pos).copied();
        if spanned.is_some() {
            self.pos += 1;
        }
        spanned
    }

    fn error(&self, kind: ParseErrorKind) -> GeoFormatError {
        ParseError::at(kind, self.offset()).into()
    }

    fn unexpected(&self, expected: &str) -> GeoFormatError {
        match self.peek() {
            Some(found) => self.error(ParseErrorKind::UnexpectedToken {
                expected: expected.to_string(),
                found: found.to_string(),
            }),
            None => self.error(ParseErrorKind::UnexpectedEnd),
        }
    }

    fn is_word(&self, word: &str) -> bool {
        matches!(self.peek(), Some(Token::Word(w)) if w.eq_ignore_ascii_case(word))
    }

    /// Consume a literal `EMPTY` if one is next.
    fn eat_empty(&mut self) -> bool {
        if self.is_word("EMPTY") {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect_lparen(&mut self) -> Result<()> {
        match self.peek() {
            Some(Token::LParen) => {
                self.pos += 1;
                Ok(())
            }
            _ => Err(self.unexpected("`(` or EMPTY")),
        }
    }

    fn expect_rparen(&mut self) -> Result<()> {
        match self.peek() {
            Some(Token::RParen) => {
                self.pos += 1;
                Ok(())
            }
            None => Err(self.error(ParseErrorKind::UnbalancedParens)),
            _ => Err(self.unexpected("`)`")),
        }
    }

    fn number(&mut self) -> Result<f64> {
        match self.peek() {
            Some(Token::Number(value)) => {
                self.pos += 1;
                Ok(value)
            }
            _ => Err(self.unexpected("number")),
        }
    }

    /// `( item, item, ... )`
    fn delimited<T>(&mut self, mut item: impl FnMut(&mut Self) -> Result<T>) -> Result<Vec<T>> {
        self.expect_lparen()?;
        let mut items = vec![item(self)?];
        loop {
            match self.peek() {
                Some(Token::Comma) => {
                    self.pos += 1;
                    items.push(item(self)?);
                }
                Some(Token::RParen) => {
                    self.pos += 1;
                    return Ok(items);
                }
                None => return Err(self.error(ParseErrorKind::UnbalancedParens)),
                _ => return Err(self.unexpected("`,` or `)`")),
            }
        }
    }

    /// `x y [z]`
    fn coord(&mut self) -> Result<Point> {
        let x = self.number()?;
        let y = self.number()?;
        let z = match self.peek() {
            Some(Token::Number(z)) => {
                self.pos += 1;
                Some(z)
            }
            _ => None,
        };
        Point::try_from_coord(Coord { x, y, z })
    }

    fn geometry(&mut self) -> Result<Geometry> {
        let keyword = match self.peek() {
            Some(Token::Word(word)) => word,
            _ => return Err(self.unexpected("geometry type keyword")),
        };
        let geometry_type = GeometryType::from_keyword(keyword)
            .ok_or_else(|| self.error(ParseErrorKind::UnknownKeyword(keyword.to_string())))?;
        self.pos += 1;

        // Coordinates carry their own dimension, so the qualifier only needs to be skipped.
        if self.is_word("Z") {
            self.pos += 1;
        }

        let geometry = match geometry_type {
            GeometryType::Point => self.point_text()?.into(),
            GeometryType::LineString => self.line_string_text()?.into(),
            GeometryType::Polygon => self.polygon_text()?.into(),
            GeometryType::MultiPoint => self.multi_point_text()?.into(),
            GeometryType::MultiLineString => {
                let geom = if self.eat_empty() {
                    MultiLineString::empty()
                } else {
                    MultiLineString::try_new(self.delimited(Self::line_string_text)?)?
                };
                geom.into()
            }
            GeometryType::MultiPolygon => {
                let geom = if self.eat_empty() {
                    MultiPolygon::empty()
                } else {
                    MultiPolygon::try_new(self.delimited(Self::polygon_text)?)?
                };
                geom.into()
            }
            GeometryType::GeometryCollection => self.geometry_collection_text()?.into(),
        };
        Ok(geometry)
    }

    fn point_text(&mut self) -> Result<Point> {
        if self.eat_empty() {
            return Ok(Point::empty());
        }
        self.expect_lparen()?;
        let point = self.coord()?;
        self.expect_rparen()?;
        Ok(point)
    }

    fn line_string_text(&mut self) -> Result<LineString> {
        if self.eat_empty() {
            return Ok(LineString::empty());
        }
        LineString::try_new(self.delimited(Self::coord)?)
    }

    fn polygon_text(&mut self) -> Result<Polygon> {
        if self.eat_empty() {
            return Ok(Polygon::empty());
        }
        Polygon::try_new(self.delimited(Self::line_string_text)?)
    }

    /// Members may be written either bare, `(1 2, 3 4)`, or parenthesized, `((1 2), (3 4))`.
    fn multi_point_text(&mut self) -> Result<MultiPoint> {
        if self.eat_empty() {
            return Ok(MultiPoint::empty());
        }
        let points = self.delimited(|parser| match parser.peek() {
            Some(Token::Number(_)) => parser.coord(),
            _ => parser.point_text(),
        })?;
        MultiPoint::try_new(points)
    }

    fn geometry_collection_text(&mut self) -> Result<GeometryCollection> {
        if self.eat_empty() {
            return Ok(GeometryCollection::empty());
        }
        self.depth += 1;
        if self.depth > MAX_NESTING_DEPTH {
            return Err(self.error(ParseErrorKind::DepthExceeded(MAX_NESTING_DEPTH)));
        }
        let geometries = self.delimited(Self::geometry)?;
        self.depth -= 1;
        Ok(GeometryCollection::new(geometries))
    }

    fn finish(&mut self) -> Result<()> {
        match self.advance() {
            None => Ok(()),
            Some(Spanned {
                token: Token::RParen,
                offset,
            }) => Err(ParseError::at(ParseErrorKind::UnbalancedParens, offset).into()),
            Some(Spanned { offset, .. }) => {
                Err(ParseError::at(ParseErrorKind::TrailingInput, offset).into())
            }
        }
    }
}

/// Parse the `SRID=<n>` part of an EWKT prefix.
fn parse_srid(prefix: &str, offset: usize) -> Result<i32> {
    let invalid = || ParseError::at(ParseErrorKind::InvalidSrid(prefix.to_string()), offset);
    let (key, value) = prefix.split_once('=').ok_or_else(invalid)?;
    if !key.trim().eq_ignore_ascii_case("SRID") {
        return Err(invalid().into());
    }
    lexical_core::parse::<i32>(value.trim().as_bytes()).map_err(|_| invalid().into())
}

/// Parse WKT, or EWKT with a leading `SRID=<n>;`, into a [Geometry].
///
/// Keywords are matched without regard to case. Error offsets are byte offsets into `input`.
pub fn read_wkt(input: &str) -> Result<Geometry> {
    let leading = input.len() - input.trim_start().len();
    let text = input.trim();
    if text.is_empty() {
        return Err(ParseErrorKind::EmptyInput.into());
    }

    let (srid, body, base) = match text.split_once(';') {
        Some((prefix, body)) => (
            parse_srid(prefix, leading)?,
            body,
            leading + prefix.len() + 1,
        ),
        None => (0, text, leading),
    };

    let tokens = tokenize(body, base)?;
    let mut parser = Parser::new(tokens, base + body.len());
    let geometry = parser.geometry()?;
    parser.finish()?;
    Ok(geometry.with_srid(srid))
}
