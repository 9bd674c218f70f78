//! Exposes the decoding session driven by structural decode code.

use std::marker::PhantomData;
use std::ops::Range;

use crate::cursor::Cursor;
use crate::depth::DepthGuard;
use crate::error::{Error, Result};
use crate::format::{Fixed, Format, Varint};

/// A [`Decoder`] over the [`Fixed`] wire variant.
pub type FixedDecoder<'de> = Decoder<'de, Fixed>;

/// A [`Decoder`] over the [`Varint`] wire variant.
pub type VarintDecoder<'de> = Decoder<'de, Varint>;

/// A decoding session over one fully buffered input.
///
/// Structural decode code drives the session with an ordered sequence of
/// primitive calls mirroring the shape of the encoded value; the session
/// itself keeps no knowledge of that shape beyond the container depth budget.
/// The input is borrowed for the session's lifetime and consumed strictly
/// forward.
///
/// A session is confined to one logical decode: once any call fails, the
/// session should be discarded. Independent inputs decoded in parallel each
/// get their own session.
#[derive(Debug)]
pub struct Decoder<'de, F> {
    cursor: Cursor<'de>,
    depth: DepthGuard,
    _format: PhantomData<F>,
}

macro_rules! decode_int {
    ($($fn_name:ident as $Ty:ty),* $(,)?) => { $(
        #[doc = concat!("Decodes a little-endian [`", stringify!($Ty), "`] from its exact-width bytes.")]
        ///
        /// # Errors
        ///
        /// Fails with [`Error::InputTooSmall`] when the input ends, leaving
        /// the offset unchanged.
        pub fn $fn_name(&mut self) -> Result<$Ty> {
            Ok(<$Ty>::from_le_bytes(self.cursor.read_array()?))
        }
    )* };
}

impl<'de, F: Format> Decoder<'de, F> {
    /// Creates a session over `input` allowing containers to nest at most
    /// `max_depth` levels deep.
    pub fn new(input: &'de [u8], max_depth: usize) -> Self {
        Self {
            cursor: Cursor::new(input),
            depth: DepthGuard::new(max_depth),
            _format: PhantomData,
        }
    }

    /// Gets the current read position within the input.
    ///
    /// Map-decoding callers record the offsets around each key and later pass
    /// the ranges to [`Self::check_key_ordering`].
    pub fn current_offset(&self) -> usize {
        self.cursor.offset()
    }

    /// Gets the remaining unread part of the input.
    pub fn remainder(&self) -> &'de [u8] {
        self.cursor.remainder()
    }

    /// Consumes the session, verifying the input was read to the end.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::ExcessData`] when unread bytes remain.
    pub fn finish(self) -> Result<()> {
        match self.cursor.remainder().len() {
            0 => Ok(()),
            n => Err(Error::ExcessData(n)),
        }
    }

    decode_int! {
        decode_u8 as u8,
        decode_u16 as u16,
        decode_u32 as u32,
        decode_u64 as u64,
        decode_u128 as u128,
        decode_i8 as i8,
        decode_i16 as i16,
        decode_i32 as i32,
        decode_i64 as i64,
        decode_i128 as i128,
    }

    /// Decodes an [`f32`] by reinterpreting the bits of its 4 little-endian
    /// bytes. NaN payloads and signed zeros come through exactly.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InputTooSmall`] when the input ends.
    pub fn decode_f32(&mut self) -> Result<f32> {
        Ok(f32::from_le_bytes(self.cursor.read_array()?))
    }

    /// Decodes an [`f64`] by reinterpreting the bits of its 8 little-endian
    /// bytes.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InputTooSmall`] when the input ends.
    pub fn decode_f64(&mut self) -> Result<f64> {
        Ok(f64::from_le_bytes(self.cursor.read_array()?))
    }

    /// Decodes a [`bool`] from one byte.
    ///
    /// Any nonzero byte is accepted as `true`. Existing encoders only emit 0
    /// and 1, but inputs with other values have always decoded; tightening
    /// this would change wire compatibility.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InputTooSmall`] when the input ends.
    pub fn decode_bool(&mut self) -> Result<bool> {
        let [b] = self.cursor.read_array()?;
        Ok(b != 0)
    }

    /// Decodes the unit value. Consumes nothing.
    ///
    /// # Errors
    ///
    /// Never fails; the signature matches the rest of the primitive set.
    pub fn decode_unit(&mut self) -> Result<()> {
        Ok(())
    }

    /// Characters have no encoding in this binary format.
    ///
    /// # Errors
    ///
    /// Always fails with [`Error::UnsupportedOperation`].
    pub fn decode_char(&mut self) -> Result<char> {
        Err(Error::UnsupportedOperation)
    }

    /// Decodes a length-prefixed byte sequence, borrowed from the input.
    ///
    /// # Errors
    ///
    /// Fails when the length prefix is malformed or the input ends before
    /// the data does.
    pub fn decode_bytes(&mut self) -> Result<&'de [u8]> {
        let len = self.decode_len()?;
        self.cursor.read(len)
    }

    /// Decodes a length-prefixed UTF-8 string, borrowed from the input.
    ///
    /// # Errors
    ///
    /// In addition to [`Self::decode_bytes`] errors, fails with
    /// [`Error::InvalidUtf8`] when the data is not valid UTF-8. Invalid data
    /// is never substituted or truncated.
    pub fn decode_str(&mut self) -> Result<&'de str> {
        let v = self.decode_bytes()?;
        std::str::from_utf8(v).map_err(|_| Error::InvalidUtf8)
    }

    /// Decodes an [`Option`] presence tag: `false` for absent, `true` for
    /// present. A present payload follows in the input and is decoded by the
    /// caller.
    ///
    /// # Errors
    ///
    /// Bytes other than 0 and 1 fail with [`Error::InvalidOptionTag`]
    /// carrying the offending value.
    pub fn decode_option_tag(&mut self) -> Result<bool> {
        let [b] = self.cursor.read_array()?;
        match b {
            0 => Ok(false),
            1 => Ok(true),
            b => Err(Error::InvalidOptionTag(b)),
        }
    }

    /// Decodes a length prefix in the session's wire variant.
    ///
    /// # Errors
    ///
    /// See [`Format::decode_len`].
    pub fn decode_len(&mut self) -> Result<usize> {
        F::decode_len(&mut self.cursor)
    }

    /// Decodes an enum variant index in the session's wire variant.
    ///
    /// # Errors
    ///
    /// See [`Format::decode_variant_index`].
    pub fn decode_variant_index(&mut self) -> Result<u32> {
        F::decode_variant_index(&mut self.cursor)
    }

    /// Checks two consecutively decoded keys against the wire variant's
    /// canonical ordering rule.
    ///
    /// The ranges are input offsets recorded via [`Self::current_offset`]
    /// around each key's decode.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::NonCanonicalOrdering`] when the variant requires
    /// strictly increasing keys and these are not.
    ///
    /// # Panics
    ///
    /// Panics when a range reaches past the consumed input, see
    /// [`Cursor::consumed`].
    pub fn check_key_ordering(&self, previous: Range<usize>, next: Range<usize>) -> Result<()> {
        F::check_key_ordering(self.cursor.consumed(previous), self.cursor.consumed(next))
    }

    /// Claims one level of the container depth budget before decoding into a
    /// nested container.
    ///
    /// Every successful call must be paired with exactly one
    /// [`Self::exit_container`], including on failure paths.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::MaxDepthExceeded`] when the input nests deeper
    /// than the session allows. The whole decode should be aborted.
    pub fn enter_container(&mut self) -> Result<()> {
        self.depth.enter()
    }

    /// Returns one level of the container depth budget.
    pub fn exit_container(&mut self) {
        self.depth.exit()
    }
}
