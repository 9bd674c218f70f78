//! # bindec
//!
//! Schema-driven binary decoding core. Structural decode code — typically
//! generated from a type schema — drives a [`Decoder`] session with an
//! ordered sequence of primitive calls; this crate owns the only place where
//! untrusted bytes become program values and defends it with bounds-checked
//! reads, strict validation, and a recursion-depth budget.
//!
//! The primitive layer is fixed across wire variants:
//!
//! - integers: exact-width little-endian, signedness by two's-complement
//!   reinterpretation of the same bytes
//! - floats: bit-pattern reinterpretation, NaN payloads preserved
//! - `bool`: one byte, any nonzero value reads as `true`
//! - `str`/bytes: length prefix followed by raw data, strings must be valid
//!   UTF-8
//! - options: one presence byte, 0 or 1
//!
//! Only three operations differ between wire variants and live behind the
//! [`format::Format`] strategy trait: length prefixes, enum variant indices,
//! and the canonical key ordering rule. Two variants ship here:
//! [`format::Fixed`] (fixed-width prefixes, no ordering requirement) and
//! [`format::Varint`] (ULEB128 prefixes, map keys in strictly increasing
//! byte order).
//!
//! The matching encoder is a separate concern; only the byte layout above is
//! shared with it.

pub mod cursor;
pub mod de;
mod depth;
pub mod error;
pub mod format;
mod leb128;

pub use de::{Decoder, FixedDecoder, VarintDecoder};
pub use error::{Error, Result};
