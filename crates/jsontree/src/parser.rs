//! The recursive-descent JSON parser.
//!
//! One [`parse`] call owns one [`Parser`]: a forward-only byte cursor over
//! the input text plus a scratch buffer reused while decoding string
//! literals. Each grammar production is one method advancing the shared
//! cursor; values are built bottom-up, so a failed parse leaves nothing
//! behind.
//!
//! # Examples
//!
//! ```rust
//! use jsontree::{ParseError, Value, parse};
//!
//! assert_eq!(parse("[true, null]").unwrap().as_array().unwrap().len(), 2);
//! assert_eq!(parse("[true, null"), Err(ParseError::MissCommaOrSquareBracket));
//! ```

use alloc::string::String;
use core::mem;

use crate::{
    error::ParseError,
    escape,
    value::{Array, Map, Value},
};

/// Parses one complete JSON document into a [`Value`] tree.
///
/// The whole input must be consumed: leading and trailing whitespace
/// (space, tab, LF, CR) is allowed, anything else after the root value is
/// [`ParseError::RootNotSingular`].
///
/// # Errors
///
/// Returns the first grammar violation encountered; see [`ParseError`].
pub fn parse(text: &str) -> Result<Value, ParseError> {
    let mut parser = Parser::new(text);
    parser.skip_whitespace();
    let value = parser.parse_value()?;
    parser.skip_whitespace();
    if parser.peek().is_some() {
        return Err(ParseError::RootNotSingular);
    }
    Ok(value)
}

struct Parser<'a> {
    input: &'a str,
    /// Byte offset of the cursor; only ever moves forward.
    pos: usize,
    /// Accumulates the decoded payload of the string literal currently
    /// being parsed.
    scratch: String,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            scratch: String::new(),
        }
    }

    // --------------------------------------------------------------------
    // Cursor primitives
    // --------------------------------------------------------------------

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn bump(&mut self) {
        self.pos += 1;
    }

    fn next_byte(&mut self) -> Option<u8> {
        let byte = self.peek();
        if byte.is_some() {
            self.pos += 1;
        }
        byte
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.bump();
        }
    }

    // --------------------------------------------------------------------
    // Grammar productions
    // --------------------------------------------------------------------

    /// Dispatches on the first byte of a value. The cursor must already
    /// be on a non-whitespace byte.
    fn parse_value(&mut self) -> Result<Value, ParseError> {
        match self.peek() {
            Some(b'n') => self.parse_literal("null", Value::Null),
            Some(b't') => self.parse_literal("true", Value::Boolean(true)),
            Some(b'f') => self.parse_literal("false", Value::Boolean(false)),
            Some(b'"') => self.parse_string().map(Value::String),
            Some(b'[') => self.parse_array(),
            Some(b'{') => self.parse_object(),
            None => Err(ParseError::ExpectValue),
            Some(_) => self.parse_number(),
        }
    }

    fn parse_literal(&mut self, literal: &str, value: Value) -> Result<Value, ParseError> {
        if self.input[self.pos..].starts_with(literal) {
            self.pos += literal.len();
            Ok(value)
        } else {
            Err(ParseError::InvalidValue)
        }
    }

    /// Scans the number grammar first, converts the matched lexeme after.
    ///
    /// `-? (0 | [1-9][0-9]*) (. [0-9]+)? ([eE] [+-]? [0-9]+)?`
    ///
    /// A leading zero ends the integer part, so `0123` stops after `0`
    /// and the leftover digits surface as `RootNotSingular` at the top
    /// level.
    fn parse_number(&mut self) -> Result<Value, ParseError> {
        let start = self.pos;
        if self.peek() == Some(b'-') {
            self.bump();
        }
        match self.peek() {
            Some(b'0') => self.bump(),
            Some(b'1'..=b'9') => self.skip_digits(),
            _ => return Err(ParseError::InvalidValue),
        }
        if self.peek() == Some(b'.') {
            self.bump();
            if !matches!(self.peek(), Some(b'0'..=b'9')) {
                return Err(ParseError::InvalidValue);
            }
            self.skip_digits();
        }
        if matches!(self.peek(), Some(b'e' | b'E')) {
            self.bump();
            if matches!(self.peek(), Some(b'+' | b'-')) {
                self.bump();
            }
            if !matches!(self.peek(), Some(b'0'..=b'9')) {
                return Err(ParseError::InvalidValue);
            }
            self.skip_digits();
        }

        let number: f64 = self.input[start..self.pos]
            .parse()
            .map_err(|_| ParseError::InvalidValue)?;
        if number.is_infinite() {
            return Err(ParseError::NumberTooBig);
        }
        Ok(Value::Number(number))
    }

    fn skip_digits(&mut self) {
        while matches!(self.peek(), Some(b'0'..=b'9')) {
            self.bump();
        }
    }

    /// Parses a string literal, cursor on the opening quote. Also used
    /// for object keys.
    fn parse_string(&mut self) -> Result<String, ParseError> {
        self.bump();
        self.scratch.clear();
        loop {
            match self.next_byte() {
                None => return Err(ParseError::MissQuotationMark),
                Some(b'"') => return Ok(mem::take(&mut self.scratch)),
                Some(b'\\') => match self.next_byte() {
                    Some(b'"') => self.scratch.push('"'),
                    Some(b'\\') => self.scratch.push('\\'),
                    Some(b'/') => self.scratch.push('/'),
                    Some(b'b') => self.scratch.push('\u{8}'),
                    Some(b'f') => self.scratch.push('\u{C}'),
                    Some(b'n') => self.scratch.push('\n'),
                    Some(b'r') => self.scratch.push('\r'),
                    Some(b't') => self.scratch.push('\t'),
                    Some(b'u') => {
                        let decoded = self.parse_unicode_escape()?;
                        self.scratch.push(decoded);
                    }
                    _ => return Err(ParseError::InvalidStringEscape),
                },
                Some(byte) if byte < 0x20 => return Err(ParseError::InvalidStringChar),
                Some(_) => self.take_plain_span(),
            }
        }
    }

    /// Copies the maximal run of unescaped, non-control bytes starting at
    /// the byte just consumed. The run boundaries are all ASCII, so the
    /// slice is always on char boundaries.
    fn take_plain_span(&mut self) {
        let start = self.pos - 1;
        while let Some(byte) = self.peek() {
            if byte == b'"' || byte == b'\\' || byte < 0x20 {
                break;
            }
            self.bump();
        }
        self.scratch.push_str(&self.input[start..self.pos]);
    }

    /// Decodes `XXXX` (and, for a high surrogate, the mandatory
    /// `\uXXXX` low half after it) into one scalar value. The cursor is
    /// just past the `u`.
    fn parse_unicode_escape(&mut self) -> Result<char, ParseError> {
        let unit = self.parse_hex4()?;
        if escape::is_high_surrogate(unit) {
            if self.next_byte() != Some(b'\\') || self.next_byte() != Some(b'u') {
                return Err(ParseError::InvalidUnicodeSurrogate);
            }
            let low = self.parse_hex4()?;
            return escape::combine_surrogates(unit, low)
                .ok_or(ParseError::InvalidUnicodeSurrogate);
        }
        // A lone low surrogate is not a scalar value.
        char::from_u32(u32::from(unit)).ok_or(ParseError::InvalidUnicodeSurrogate)
    }

    fn parse_hex4(&mut self) -> Result<u16, ParseError> {
        let mut unit = 0u16;
        for _ in 0..4 {
            let digit = self
                .next_byte()
                .and_then(escape::hex_digit)
                .ok_or(ParseError::InvalidUnicodeHex)?;
            unit = unit << 4 | digit;
        }
        Ok(unit)
    }

    fn parse_array(&mut self) -> Result<Value, ParseError> {
        self.bump();
        self.skip_whitespace();
        let mut elements = Array::new();
        if self.peek() == Some(b']') {
            self.bump();
            return Ok(Value::Array(elements));
        }
        loop {
            let element = self.parse_value()?;
            elements.push(element);
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => {
                    self.bump();
                    self.skip_whitespace();
                }
                Some(b']') => {
                    self.bump();
                    return Ok(Value::Array(elements));
                }
                _ => return Err(ParseError::MissCommaOrSquareBracket),
            }
        }
    }

    /// Keys must be non-empty quoted strings; a duplicate key overwrites
    /// the earlier member (last write wins). Rejecting the empty key is
    /// stricter than RFC 8259.
    fn parse_object(&mut self) -> Result<Value, ParseError> {
        self.bump();
        self.skip_whitespace();
        let mut members = Map::new();
        if self.peek() == Some(b'}') {
            self.bump();
            return Ok(Value::Object(members));
        }
        loop {
            if self.peek() != Some(b'"') {
                return Err(ParseError::MissKey);
            }
            let key = self.parse_string()?;
            if key.is_empty() {
                return Err(ParseError::MissKey);
            }
            self.skip_whitespace();
            if self.peek() != Some(b':') {
                return Err(ParseError::MissColon);
            }
            self.bump();
            self.skip_whitespace();
            let value = self.parse_value()?;
            members.insert(key, value);
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => {
                    self.bump();
                    self.skip_whitespace();
                }
                Some(b'}') => {
                    self.bump();
                    return Ok(Value::Object(members));
                }
                _ => return Err(ParseError::MissCommaOrCurlyBracket),
            }
        }
    }
}
