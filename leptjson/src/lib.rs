// SPDX-License-Identifier: Apache-2.0

//! A small JSON scalar parser.
//!
//! Parses a single root `null`, `true`, `false` or number, optionally
//! surrounded by whitespace, into a [`Value`]. Numbers follow the JSON grammar
//! exactly and are converted to the nearest `f64`.
//!
//! ```
//! use leptjson::{parse, ParseError, ValueType};
//!
//! let v = parse(" 4.9406564584124654e-324 ").unwrap();
//! assert_eq!(v.value_type(), ValueType::Number);
//! assert_eq!(parse("1."), Err(ParseError::InvalidValue));
//! assert_eq!(parse("1e999"), Err(ParseError::NumberTooBig));
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]

extern crate alloc;

mod json_string;
pub use json_string::JsonString;

mod value;
pub use value::{Value, ValueType};

mod parse_error;
pub use parse_error::ParseError;

mod slice_input_buffer;

mod number_parser;
pub use number_parser::{scan_number, NumberGrammarError};

mod slice_parser;
pub use slice_parser::{parse, parse_into, parse_slice};
