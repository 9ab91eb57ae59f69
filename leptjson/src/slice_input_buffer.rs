// SPDX-License-Identifier: Apache-2.0

/// Error type for SliceInputBuffer operations.
#[derive(Debug, PartialEq)]
pub enum Error {
    /// Reached the end of input data.
    ReachedEnd,
    /// The input does not continue with the expected bytes.
    Mismatch,
    /// Invalid slice bounds provided.
    InvalidSliceBounds,
}

/// A read cursor over an immutable input slice.
///
/// The cursor only moves forward, and only through the methods that consume
/// input. Failed matches leave it where it was.
#[derive(Debug)]
pub struct SliceInputBuffer<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> SliceInputBuffer<'a> {
    /// Creates a new SliceInputBuffer with the given data.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn current_pos(&self) -> usize {
        self.pos
    }

    /// True once every byte has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// The byte under the cursor, without consuming it.
    pub fn peek(&self) -> Option<u8> {
        self.peek_at(0)
    }

    /// The byte `offset` positions past the cursor, without consuming it.
    pub fn peek_at(&self, offset: usize) -> Option<u8> {
        let idx = self.pos.checked_add(offset)?;
        self.data.get(idx).copied()
    }

    /// Everything from the cursor to the end of input.
    pub fn remaining(&self) -> &'a [u8] {
        self.data.get(self.pos..).unwrap_or(&[])
    }

    /// Moves the cursor forward by `count` bytes.
    pub fn advance(&mut self, count: usize) -> Result<(), Error> {
        let new_pos = self.pos.checked_add(count).ok_or(Error::InvalidSliceBounds)?;
        if new_pos > self.data.len() {
            return Err(Error::InvalidSliceBounds);
        }
        self.pos = new_pos;
        Ok(())
    }

    /// Consumes bytes while `pred` holds for them.
    pub fn skip_while(&mut self, mut pred: impl FnMut(u8) -> bool) {
        while let Some(byte) = self.peek() {
            if !pred(byte) {
                break;
            }
            self.pos += 1;
        }
    }

    /// Consumes `expected` if the input continues with exactly those bytes.
    pub fn consume_exact(&mut self, expected: &[u8]) -> Result<(), Error> {
        if self.is_at_end() {
            return Err(Error::ReachedEnd);
        }
        if !self.remaining().starts_with(expected) {
            return Err(Error::Mismatch);
        }
        self.advance(expected.len())
    }

    /// Gets a slice of the data from start to end positions, with bounds checking.
    pub fn slice(&self, start: usize, end: usize) -> Result<&'a [u8], Error> {
        self.data.get(start..end).ok_or(Error::InvalidSliceBounds)
    }
}
