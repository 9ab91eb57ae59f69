// SPDX-License-Identifier: Apache-2.0

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::ops::Deref;

/// An owned JSON string payload.
///
/// The bytes are stored with one trailing NUL byte so that callers handing the
/// buffer to C-style consumers get a terminated view for free. The terminator
/// is never counted in [`len`](Self::len), and the content itself may contain
/// NUL bytes.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct JsonString {
    // Always holds at least the terminator.
    buf: Box<[u8]>,
}

impl JsonString {
    /// Copies `bytes` into a new owned buffer.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut buf = Vec::with_capacity(bytes.len() + 1);
        buf.extend_from_slice(bytes);
        buf.push(0);
        Self {
            buf: buf.into_boxed_slice(),
        }
    }

    /// The string content, without the terminator.
    pub fn as_bytes(&self) -> &[u8] {
        let len = self.len();
        self.buf.get(..len).unwrap_or(&[])
    }

    /// The string content followed by the NUL terminator.
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.buf
    }

    /// Number of content bytes, excluding the terminator.
    pub fn len(&self) -> usize {
        self.buf.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Views the content as UTF-8.
    pub fn as_str(&self) -> Result<&str, core::str::Utf8Error> {
        core::str::from_utf8(self.as_bytes())
    }
}

impl Default for JsonString {
    fn default() -> Self {
        Self::from_bytes(&[])
    }
}

impl AsRef<[u8]> for JsonString {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Deref for JsonString {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        self.as_bytes()
    }
}

impl From<&[u8]> for JsonString {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<&str> for JsonString {
    fn from(s: &str) -> Self {
        Self::from_bytes(s.as_bytes())
    }
}

impl core::fmt::Debug for JsonString {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.as_str() {
            Ok(s) => write!(f, "{s:?}"),
            Err(_) => write!(f, "{:?}", self.as_bytes()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminator_not_counted() {
        let s = JsonString::from_bytes(b"Hello");
        assert_eq!(s.len(), 5);
        assert_eq!(s.as_bytes(), b"Hello");
        assert_eq!(s.as_bytes_with_nul(), b"Hello\0");
    }

    #[test]
    fn test_empty_string() {
        let s = JsonString::default();
        assert!(s.is_empty());
        assert_eq!(s.as_bytes(), b"");
        assert_eq!(s.as_bytes_with_nul(), b"\0");
        assert_eq!(s.as_str(), Ok(""));
    }

    #[test]
    fn test_embedded_nul() {
        let s = JsonString::from_bytes(b"a\0b");
        assert_eq!(s.len(), 3);
        assert_eq!(s.as_bytes(), b"a\0b");
        assert_eq!(&s[..], b"a\0b");
    }

    #[test]
    fn test_invalid_utf8_content() {
        let s = JsonString::from_bytes(&[0xFF, 0xFE]);
        assert_eq!(s.len(), 2);
        assert!(s.as_str().is_err());
    }
}
