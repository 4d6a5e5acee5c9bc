//! Error types for the replay-wire crate.
//!
//! This module provides a unified error type [`WireError`] that covers all
//! possible failure modes when decoding or encoding raw session records.

use std::io;

/// The error type for record wire operations.
///
/// This enum represents all possible errors that can occur while reading
/// or writing the binary record stream of a recorded session.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// An I/O error occurred while loading capture data.
    #[error("I/O error while reading capture data: {0}")]
    Io(#[from] io::Error),

    /// The stream ended in the middle of a record.
    #[error("truncated record: needed {expected} more byte(s), {remaining} available")]
    Truncated {
        /// Bytes still required by the field being decoded.
        expected: usize,
        /// Bytes left in the stream.
        remaining: usize,
    },

    /// A variable-length integer did not terminate within 64 bits.
    #[error("varint exceeds 64 bits")]
    VarintOverflow,

    /// A numeric field did not fit its declared width.
    #[error("integer field exceeds 32 bits")]
    IntOutOfRange,

    /// A string field contained invalid UTF-8.
    #[error("invalid UTF-8 in string field")]
    InvalidUtf8(#[source] std::str::Utf8Error),
}

/// A specialized Result type for record wire operations.
pub type Result<T> = std::result::Result<T, WireError>;
