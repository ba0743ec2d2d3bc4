//! Wire-level error types.

use thiserror::Error;

/// Errors that can occur while decoding wire payloads.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WireError {
    /// Input ended before the field being read.
    #[error("payload too short: expected at least {expected} bytes, got {actual}")]
    Truncated {
        /// Minimum number of bytes the read requires.
        expected: usize,
        /// Number of bytes actually available.
        actual: usize,
    },

    /// A field held a value outside its wire encoding.
    #[error("invalid value 0x{value:02X} for {field}")]
    InvalidValue {
        /// Name of the offending field.
        field: &'static str,
        /// Raw value read from the wire.
        value: u32,
    },
}
