//! Bounds-checked reading from a fully buffered input.

use std::ops::Range;

use crate::error::{Error, Result};

/// A forward-only read position over a borrowed input buffer.
///
/// The cursor never copies or mutates the input and never backtracks: the
/// offset moves forward by exactly the amount a successful read consumed, and
/// not at all when a read fails.
#[derive(Debug, Clone)]
pub struct Cursor<'de> {
    input: &'de [u8],
    offset: usize,
}

impl<'de> Cursor<'de> {
    /// Creates a cursor at the start of `input`.
    pub fn new(input: &'de [u8]) -> Self {
        Self { input, offset: 0 }
    }

    /// Gets the current read position within the input.
    ///
    /// Callers decoding maps record the offsets spanning each key's bytes and
    /// later hand the ranges back via [`Self::consumed`].
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Gets the remaining unread part of the input.
    pub fn remainder(&self) -> &'de [u8] {
        &self.input[self.offset..]
    }

    /// Reads the next `n` bytes and advances the offset past them.
    ///
    /// `n` of 0 always succeeds with an empty slice.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InputTooSmall`] when fewer than `n` bytes remain,
    /// leaving the offset unchanged.
    pub fn read(&mut self, n: usize) -> Result<&'de [u8]> {
        let end = self.offset.checked_add(n).ok_or(Error::InputTooSmall)?;
        let out = self
            .input
            .get(self.offset..end)
            .ok_or(Error::InputTooSmall)?;
        self.offset = end;
        Ok(out)
    }

    /// Reads a constant size chunk of bytes.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InputTooSmall`] when fewer than `N` bytes remain,
    /// leaving the offset unchanged.
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let out = self
            .remainder()
            .split_first_chunk::<N>()
            .ok_or(Error::InputTooSmall)?
            .0;
        self.offset += N;
        Ok(*out)
    }

    /// Gets a view of already consumed input, identified by offsets the
    /// caller recorded via [`Self::offset`].
    ///
    /// The view stays valid for as long as the input itself.
    ///
    /// # Panics
    ///
    /// Panics when the range reaches past the consumed part of the input.
    /// Offsets recorded from [`Self::offset`] around successful reads always
    /// lie within it.
    pub fn consumed(&self, range: Range<usize>) -> &'de [u8] {
        assert!(
            range.end <= self.offset,
            "consumed range must lie within already read input"
        );
        &self.input[range]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_advances_exactly() {
        let mut cursor = Cursor::new(&[1, 2, 3, 4, 5]);
        assert_eq!(cursor.read(2).expect("in bounds"), &[1, 2]);
        assert_eq!(cursor.offset(), 2);
        assert_eq!(cursor.read(3).expect("in bounds"), &[3, 4, 5]);
        assert_eq!(cursor.offset(), 5);
    }

    #[test]
    fn read_zero_always_succeeds() {
        let mut cursor = Cursor::new(&[]);
        assert_eq!(cursor.read(0).expect("empty read"), &[] as &[u8]);
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn failed_read_leaves_offset() {
        let mut cursor = Cursor::new(&[1, 2, 3]);
        cursor.read(2).expect("in bounds");
        assert_eq!(cursor.read(2), Err(Error::InputTooSmall));
        assert_eq!(cursor.offset(), 2, "failure must not consume bytes");
        // the session stays at the failure point, it never skips ahead
        assert_eq!(cursor.read(2), Err(Error::InputTooSmall));
        assert_eq!(cursor.read(1).expect("in bounds"), &[3]);
    }

    #[test]
    fn read_array_matches_read() {
        let mut cursor = Cursor::new(&[9, 8, 7]);
        assert_eq!(cursor.read_array::<2>().expect("in bounds"), [9, 8]);
        assert_eq!(cursor.read_array::<2>(), Err(Error::InputTooSmall));
        assert_eq!(cursor.offset(), 2);
    }

    #[test]
    fn consumed_returns_recorded_range() {
        let mut cursor = Cursor::new(&[1, 2, 3, 4]);
        let start = cursor.offset();
        cursor.read(3).expect("in bounds");
        let end = cursor.offset();
        assert_eq!(cursor.consumed(start..end), &[1, 2, 3]);
    }

    #[test]
    #[should_panic(expected = "consumed range")]
    fn consumed_rejects_unread_range() {
        let mut cursor = Cursor::new(&[1, 2, 3, 4]);
        cursor.read(2).expect("in bounds");
        let _ = cursor.consumed(1..4);
    }
}
