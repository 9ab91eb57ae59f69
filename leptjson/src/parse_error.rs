// SPDX-License-Identifier: Apache-2.0

use crate::slice_input_buffer;

/// Errors that can occur during JSON parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The input was empty or contained only whitespace.
    ExpectValue,
    /// The next token is not a valid `null`, `true`, `false` or number.
    InvalidValue,
    /// A value was parsed but non-whitespace input follows it.
    RootNotSingular,
    /// A number is well-formed but too large to represent as an f64.
    NumberTooBig,
}

impl From<slice_input_buffer::Error> for ParseError {
    fn from(err: slice_input_buffer::Error) -> Self {
        match err {
            slice_input_buffer::Error::ReachedEnd => ParseError::ExpectValue,
            slice_input_buffer::Error::Mismatch | slice_input_buffer::Error::InvalidSliceBounds => {
                ParseError::InvalidValue
            }
        }
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParseError::ExpectValue => f.write_str("expected a value"),
            ParseError::InvalidValue => f.write_str("invalid value"),
            ParseError::RootNotSingular => f.write_str("unexpected input after root value"),
            ParseError::NumberTooBig => f.write_str("number too big"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_error_conversion() {
        let error: ParseError = slice_input_buffer::Error::ReachedEnd.into();
        assert_eq!(error, ParseError::ExpectValue);

        let error: ParseError = slice_input_buffer::Error::Mismatch.into();
        assert_eq!(error, ParseError::InvalidValue);

        let error: ParseError = slice_input_buffer::Error::InvalidSliceBounds.into();
        assert_eq!(error, ParseError::InvalidValue);
    }

    #[test]
    fn test_display() {
        assert_eq!(ParseError::ExpectValue.to_string(), "expected a value");
        assert_eq!(ParseError::NumberTooBig.to_string(), "number too big");
    }
}
