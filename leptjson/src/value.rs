// SPDX-License-Identifier: Apache-2.0

//! The parsed JSON value.
//!
//! A [`Value`] holds exactly one scalar at a time. Every setter replaces the
//! whole value, so the previous payload (for strings, the owned buffer) is
//! dropped exactly once at the point of assignment.

use crate::JsonString;

/// The type tag of a [`Value`].
///
/// Booleans are reported as two tags so that `true` and `false` can be
/// told apart without reading the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Null,
    False,
    True,
    Number,
    String,
}

impl core::fmt::Display for ValueType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            ValueType::Null => "null",
            ValueType::False => "false",
            ValueType::True => "true",
            ValueType::Number => "number",
            ValueType::String => "string",
        };
        f.write_str(name)
    }
}

/// A single JSON scalar value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// `null`, and the state of a freshly created or freed value.
    #[default]
    Null,
    /// `true` or `false`.
    Boolean(bool),
    /// A finite double. The parser never produces NaN or infinities.
    Number(f64),
    /// An owned byte string.
    String(JsonString),
}

impl Value {
    /// Creates a `Null` value.
    pub const fn new() -> Self {
        Value::Null
    }

    /// Returns the type tag of the current variant.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Null => ValueType::Null,
            Value::Boolean(false) => ValueType::False,
            Value::Boolean(true) => ValueType::True,
            Value::Number(_) => ValueType::Number,
            Value::String(_) => ValueType::String,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Get the number if this value is a `Number`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the boolean if this value is a `Boolean`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the string payload if this value is a `String`.
    pub fn as_string(&self) -> Option<&JsonString> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the string content bytes if this value is a `String`.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        self.as_string().map(JsonString::as_bytes)
    }

    /// Length of the string payload in bytes, if this value is a `String`.
    pub fn string_len(&self) -> Option<usize> {
        self.as_string().map(JsonString::len)
    }

    /// Replaces the value with a number, releasing any previous payload.
    pub fn set_number(&mut self, n: f64) {
        *self = Value::Number(n);
    }

    /// Replaces the value with a boolean, releasing any previous payload.
    pub fn set_boolean(&mut self, b: bool) {
        *self = Value::Boolean(b);
    }

    /// Replaces the value with a copy of `bytes`, releasing any previous payload.
    pub fn set_string(&mut self, bytes: &[u8]) {
        *self = Value::String(JsonString::from_bytes(bytes));
    }

    /// Releases any owned payload and leaves the value `Null`.
    ///
    /// Calling this on a `Null` value does nothing.
    pub fn free(&mut self) {
        *self = Value::Null;
    }

    /// Moves the value out, leaving `Null` behind.
    pub fn take(&mut self) -> Value {
        core::mem::take(self)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.into())
    }
}

impl From<&[u8]> for Value {
    fn from(bytes: &[u8]) -> Self {
        Value::String(bytes.into())
    }
}

impl From<JsonString> for Value {
    fn from(s: JsonString) -> Self {
        Value::String(s)
    }
}
