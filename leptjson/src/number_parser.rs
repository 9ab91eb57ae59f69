// SPDX-License-Identifier: Apache-2.0

//! JSON number grammar and conversion.
//!
//! The grammar is checked first and the text is handed to the float
//! conversion only once it is known to be a JSON number:
//!
//! ```text
//! number = [ "-" ] int [ frac ] [ exp ]
//! int    = "0" / ( digit1-9 *digit )
//! frac   = "." 1*digit
//! exp    = ( "e" / "E" ) [ "+" / "-" ] 1*digit
//! ```
//!
//! `f64::from_str` on its own would also take `+1`, `.5`, `1.`, `inf` and
//! `NaN`, none of which are JSON.

use core::str::FromStr;

use log::debug;

use crate::parse_error::ParseError;
use crate::slice_input_buffer::SliceInputBuffer;

/// The ways a numeric prefix can violate the JSON number grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberGrammarError {
    /// A `0` integer part followed by another digit or by `x`/`X` (`01`, `0x1F`).
    LeadingZero,
    /// No digit where the integer part should start (`-`, `-.5`).
    MissingIntegerDigits,
    /// A decimal point with no digit after it (`1.`, `2.x`).
    MissingFractionDigits,
    /// An exponent marker with no digit after the optional sign (`1e`, `1e+`).
    MissingExponentDigits,
}

impl From<NumberGrammarError> for ParseError {
    fn from(_: NumberGrammarError) -> Self {
        ParseError::InvalidValue
    }
}

fn count_digits(bytes: &[u8], from: usize) -> usize {
    bytes
        .get(from..)
        .map_or(0, |rest| rest.iter().take_while(|b| b.is_ascii_digit()).count())
}

/// Returns the length of the JSON number at the start of `bytes`.
///
/// Scanning stops at the first byte that cannot continue the number; whatever
/// follows is left for the caller to judge.
pub fn scan_number(bytes: &[u8]) -> Result<usize, NumberGrammarError> {
    let mut pos = 0;

    if bytes.first() == Some(&b'-') {
        pos += 1;
    }

    match bytes.get(pos) {
        Some(b'0') => {
            if let Some(b'0'..=b'9' | b'x' | b'X') = bytes.get(pos + 1) {
                return Err(NumberGrammarError::LeadingZero);
            }
            pos += 1;
        }
        Some(b'1'..=b'9') => {
            pos += 1;
            pos += count_digits(bytes, pos);
        }
        _ => return Err(NumberGrammarError::MissingIntegerDigits),
    }

    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        let digits = count_digits(bytes, pos);
        if digits == 0 {
            return Err(NumberGrammarError::MissingFractionDigits);
        }
        pos += digits;
    }

    if let Some(b'e' | b'E') = bytes.get(pos) {
        pos += 1;
        if let Some(b'+' | b'-') = bytes.get(pos) {
            pos += 1;
        }
        let digits = count_digits(bytes, pos);
        if digits == 0 {
            return Err(NumberGrammarError::MissingExponentDigits);
        }
        pos += digits;
    }

    Ok(pos)
}

/// Converts validated number text to the nearest double.
///
/// Magnitudes below the smallest subnormal round to a signed zero. Magnitudes
/// above `f64::MAX` come back from the conversion as infinities and are
/// reported as [`ParseError::NumberTooBig`].
pub fn convert_number(text: &[u8]) -> Result<f64, ParseError> {
    let s = core::str::from_utf8(text).map_err(|_| ParseError::InvalidValue)?;
    let value = f64::from_str(s).map_err(|_| ParseError::InvalidValue)?;
    if value.is_infinite() {
        return Err(ParseError::NumberTooBig);
    }
    Ok(value)
}

/// Parses the number under the cursor and advances past it.
///
/// On error the cursor is not moved.
pub fn parse_number(buffer: &mut SliceInputBuffer<'_>) -> Result<f64, ParseError> {
    let start = buffer.current_pos();
    let len = scan_number(buffer.remaining()).map_err(|e| {
        debug!("Number grammar error at {}: {:?}", start, e);
        e
    })?;
    let end = start + len;
    let value = convert_number(buffer.slice(start, end)?).map_err(|e| {
        debug!("Number conversion failed at {}: {:?}", start, e);
        e
    })?;
    buffer.advance(len)?;
    Ok(value)
}
