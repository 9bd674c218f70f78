//! ULEB128 variable-length integer decoding.
//!
//! The [`Varint`](crate::format::Varint) wire variant encodes length prefixes
//! and enum variant indices this way. Value integers are always fixed-width
//! and never pass through here.
//!
//! See also: <https://en.wikipedia.org/wiki/LEB128>

use std::ops::{BitOrAssign, Shl, Shr};

use crate::cursor::Cursor;
use crate::error::{Error, Result};

/// Supports the decoding function.
///
/// Implemented for the unsigned integers the wire variants prefix with.
pub(crate) trait Uleb128:
    Sized
    + Default
    + Copy
    + PartialEq
    + Shl<usize, Output = Self>
    + Shr<usize, Output = Self>
    + BitOrAssign
    + From<u8>
{
}

impl Uleb128 for u32 {}
impl Uleb128 for u64 {}

const fn bitness<T>() -> usize {
    size_of::<T>() * 8
}

/// Reads a ULEB128 value from the cursor.
///
/// # Errors
///
/// Fails with [`Error::IntegerOverflow`] when the encoded value does not fit
/// `T`, and with [`Error::InputTooSmall`] when the input ends inside the
/// encoding.
pub(crate) fn read<T: Uleb128>(cursor: &mut Cursor<'_>) -> Result<T> {
    let mut x = T::default();
    let mut s = 0usize;
    loop {
        let [b] = cursor.read_array()?;
        // ensure the shift isn't greater than the bit-count of `T`
        if s >= bitness::<T>() {
            return Err(Error::IntegerOverflow);
        }

        // convert to shifted `T`
        // ensure that all bits fit into `T`
        let tb = T::from(b & 0x7F);
        let ts = tb << s;
        if ts >> s != tb {
            return Err(Error::IntegerOverflow);
        }

        x |= ts;
        s += 7;

        if b < 0x80 {
            // No continuation bit is set
            return Ok(x);
        }
    }
}
