//! Error handling types.
//!
//! Every operation in this crate fails through the one shared [`Error`] type.
//! All of its variants are fatal to the decode session: the engine never
//! retries, recovers, or reports partial success.

pub type Result<T> = std::result::Result<T, Error>;

/// Potential errors to encounter when decoding binary data.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A read would run past the end of the input buffer. The read offset is
    /// left where it was.
    #[error("input ended before the value could be read")]
    InputTooSmall,
    /// A decoded length prefix is not representable as an in-memory size.
    #[error("length prefix exceeds the addressable range")]
    InvalidLength,
    /// An [`Option`] presence byte was neither 0 nor 1. Carries the byte that
    /// was read.
    #[error("invalid option tag value {0}")]
    InvalidOptionTag(u8),
    /// String data was not valid UTF-8.
    #[error("invalid utf-8 in data for string")]
    InvalidUtf8,
    /// The operation has no encoding in this binary format.
    #[error("operation is not supported by this binary format")]
    UnsupportedOperation,
    /// The container recursion budget ran out. The input nests deeper than
    /// the limit the session was created with.
    #[error("maximum container depth exceeded")]
    MaxDepthExceeded,
    /// Map or set keys were not encoded in strictly increasing order, so the
    /// input is not the canonical encoding of its value.
    #[error("keys are not in strictly increasing order")]
    NonCanonicalOrdering,
    /// While reading ULEB128 integer data, the data overflowed the target
    /// type.
    #[error("ULEB128 encoded integer overflows target type")]
    IntegerOverflow,
    /// The input held more bytes than the decoded value consumed. Carries the
    /// number of unread bytes.
    #[error("input has {0} excess bytes after the decoded value")]
    ExcessData(usize),
}
