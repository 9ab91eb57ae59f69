// SPDX-License-Identifier: Apache-2.0

use log::{debug, trace};

use crate::number_parser;
use crate::parse_error::ParseError;
use crate::slice_input_buffer::SliceInputBuffer;
use crate::value::Value;

/// A single-use parser for one JSON scalar held in a slice.
///
/// The parser owns nothing but its cursor; each call to [`parse_into`] creates
/// a fresh one.
// Lifetime 'a is the input buffer lifetime
struct SliceParser<'a> {
    buffer: SliceInputBuffer<'a>,
}

impl<'a> SliceParser<'a> {
    fn new(input: &'a [u8]) -> Self {
        Self {
            buffer: SliceInputBuffer::new(input),
        }
    }

    fn skip_whitespace(&mut self) {
        self.buffer
            .skip_while(|b| matches!(b, b' ' | b'\t' | b'\n' | b'\r'));
    }

    /// Matches `literal` in full or fails without consuming anything.
    fn parse_literal(&mut self, literal: &[u8], result: Value) -> Result<Value, ParseError> {
        self.buffer.consume_exact(literal)?;
        Ok(result)
    }

    fn parse_number(&mut self) -> Result<Value, ParseError> {
        number_parser::parse_number(&mut self.buffer).map(Value::Number)
    }

    fn parse_value(&mut self) -> Result<Value, ParseError> {
        let Some(byte) = self.buffer.peek() else {
            return Err(ParseError::ExpectValue);
        };
        trace!(
            "Dispatching on {:?} at {}",
            byte as char,
            self.buffer.current_pos()
        );
        match byte {
            b'0'..=b'9' | b'-' => self.parse_number(),
            b'f' => self.parse_literal(b"false", Value::Boolean(false)),
            b't' => self.parse_literal(b"true", Value::Boolean(true)),
            b'n' => self.parse_literal(b"null", Value::Null),
            _ => Err(ParseError::InvalidValue),
        }
    }

    fn parse_root(&mut self, out: &mut Value) -> Result<(), ParseError> {
        self.skip_whitespace();
        *out = self.parse_value()?;
        self.skip_whitespace();
        if !self.buffer.is_at_end() {
            return Err(ParseError::RootNotSingular);
        }
        Ok(())
    }
}

/// Parses one JSON value from `input` into `out`.
///
/// `out` is reset to [`Value::Null`] before parsing starts, releasing whatever
/// it held. On success it holds the parsed value. On
/// [`ParseError::RootNotSingular`] it still holds the value that was parsed
/// before the trailing input; on every other error it is left `Null`.
///
/// # Example
/// ```
/// use leptjson::{parse_into, ParseError, Value, ValueType};
/// let mut v = Value::new();
/// assert_eq!(parse_into(&mut v, b"false null"), Err(ParseError::RootNotSingular));
/// assert_eq!(v.value_type(), ValueType::False);
/// ```
pub fn parse_into(out: &mut Value, input: &[u8]) -> Result<(), ParseError> {
    out.free();
    let mut parser = SliceParser::new(input);
    parser.parse_root(out).map_err(|e| {
        debug!(
            "Parse failed at {}: {:?}",
            parser.buffer.current_pos(),
            e
        );
        e
    })
}

/// Parses one JSON value from a byte slice.
///
/// # Example
/// ```
/// # use leptjson::{parse_slice, Value};
/// assert_eq!(parse_slice(b" true "), Ok(Value::Boolean(true)));
/// ```
pub fn parse_slice(input: &[u8]) -> Result<Value, ParseError> {
    let mut value = Value::new();
    parse_into(&mut value, input)?;
    Ok(value)
}

/// Parses one JSON value from a string slice.
///
/// # Example
/// ```
/// use leptjson::parse;
/// let v = parse("-1.5e3").unwrap();
/// assert_eq!(v.as_number(), Some(-1500.0));
/// ```
pub fn parse(input: &str) -> Result<Value, ParseError> {
    parse_slice(input.as_bytes())
}
