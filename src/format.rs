//! Wire-format extension points.
//!
//! The decoding core fixes how primitive values are laid out; the only
//! operations that differ between wire variants are gathered behind
//! [`Format`]: length prefixes, enum variant tags, and the canonical key
//! ordering rule. Keeping this surface minimal is what lets one core serve
//! multiple wire-compatible-but-not-identical formats.

use crate::cursor::Cursor;
use crate::error::{Error, Result};
use crate::leb128;

/// The operations a concrete wire variant must supply.
///
/// Implementations are zero-sized strategies selected as a type parameter at
/// session construction, see [`Decoder`](crate::de::Decoder).
pub trait Format {
    /// Decodes a length prefix for strings, byte sequences, lists, and maps.
    ///
    /// # Errors
    ///
    /// Values that cannot index memory on this platform fail with
    /// [`Error::InvalidLength`].
    fn decode_len(cursor: &mut Cursor<'_>) -> Result<usize>;

    /// Decodes the discriminant selecting which case of an enum follows.
    ///
    /// # Errors
    ///
    /// Fails when the discriminant encoding is malformed or the input ends.
    fn decode_variant_index(cursor: &mut Cursor<'_>) -> Result<u32>;

    /// Checks that two raw key slices, in the order they were decoded,
    /// satisfy the variant's canonical ordering rule.
    ///
    /// Variants without a canonicality requirement accept everything; the
    /// core calls this uniformly either way.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::NonCanonicalOrdering`] when the rule is violated.
    /// This must abort the decode: accepting the input would break the
    /// one-encoding-per-value guarantee.
    fn check_key_ordering(previous: &[u8], next: &[u8]) -> Result<()>;
}

/// Wire variant with fixed-width prefixes.
///
/// Lengths are 8-byte and variant indices 4-byte little-endian values. Map
/// entries may appear in any order.
#[derive(Debug)]
pub enum Fixed {}

impl Format for Fixed {
    fn decode_len(cursor: &mut Cursor<'_>) -> Result<usize> {
        let len = u64::from_le_bytes(cursor.read_array()?);
        usize::try_from(len).map_err(|_| Error::InvalidLength)
    }

    fn decode_variant_index(cursor: &mut Cursor<'_>) -> Result<u32> {
        Ok(u32::from_le_bytes(cursor.read_array()?))
    }

    fn check_key_ordering(_previous: &[u8], _next: &[u8]) -> Result<()> {
        Ok(())
    }
}

/// Wire variant with ULEB128 prefixes and canonical key ordering.
///
/// Lengths and variant indices are ULEB128 values, and map entries must be
/// encoded with keys in strictly increasing lexicographic byte order.
#[derive(Debug)]
pub enum Varint {}

impl Format for Varint {
    fn decode_len(cursor: &mut Cursor<'_>) -> Result<usize> {
        let len: u64 = leb128::read(cursor)?;
        usize::try_from(len).map_err(|_| Error::InvalidLength)
    }

    fn decode_variant_index(cursor: &mut Cursor<'_>) -> Result<u32> {
        leb128::read(cursor)
    }

    fn check_key_ordering(previous: &[u8], next: &[u8]) -> Result<()> {
        if previous < next {
            Ok(())
        } else {
            Err(Error::NonCanonicalOrdering)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_len_is_u64_le() {
        let mut cursor = Cursor::new(&[5, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(Fixed::decode_len(&mut cursor), Ok(5));
        assert_eq!(cursor.offset(), 8);
    }

    #[test]
    fn fixed_len_short_input_fails_clean() {
        let mut cursor = Cursor::new(&[5, 0, 0, 0]);
        assert_eq!(Fixed::decode_len(&mut cursor), Err(Error::InputTooSmall));
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn fixed_variant_index_is_u32_le() {
        let mut cursor = Cursor::new(&[2, 1, 0, 0]);
        assert_eq!(Fixed::decode_variant_index(&mut cursor), Ok(258));
    }

    #[test]
    fn fixed_accepts_any_key_order() {
        assert_eq!(Fixed::check_key_ordering(&[2], &[1]), Ok(()));
        assert_eq!(Fixed::check_key_ordering(&[1], &[1]), Ok(()));
    }

    #[test]
    fn varint_len_is_uleb128() {
        let mut cursor = Cursor::new(&[0xE5, 0x8E, 0x26]);
        assert_eq!(Varint::decode_len(&mut cursor), Ok(624_485));
    }

    #[test]
    fn varint_variant_index_is_uleb128() {
        let mut cursor = Cursor::new(&[0x83, 0x01]);
        assert_eq!(Varint::decode_variant_index(&mut cursor), Ok(131));
    }

    #[test]
    fn varint_requires_strictly_increasing_keys() {
        assert_eq!(Varint::check_key_ordering(&[0x01], &[0x02]), Ok(()));
        assert_eq!(
            Varint::check_key_ordering(&[0x02], &[0x01]),
            Err(Error::NonCanonicalOrdering)
        );
        assert_eq!(
            Varint::check_key_ordering(&[0x01], &[0x01]),
            Err(Error::NonCanonicalOrdering)
        );
        // a strict prefix orders before its extension
        assert_eq!(Varint::check_key_ordering(&[0x01], &[0x01, 0x00]), Ok(()));
    }
}
