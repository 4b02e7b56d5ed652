//! Error types for wire encoding and decoding

use thiserror::Error;

/// Convenience alias for wire operations
pub type Result<T> = core::result::Result<T, WireError>;

/// Errors from length-prefixed encoding or decoding
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WireError {
    /// A variable-length field does not fit its length prefix
    #[error("value too large: {actual} bytes exceeds prefix capacity {max}")]
    ValueTooLarge {
        /// Length of the value that was offered
        actual: usize,
        /// Largest length the chosen prefix can express
        max: usize,
    },

    /// The input ended before a complete field could be read
    #[error("unexpected end of input: needed {needed} bytes, {remaining} remaining")]
    UnexpectedEnd {
        /// Bytes required to finish the read
        needed: usize,
        /// Bytes actually left in the input
        remaining: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_too_large_display() {
        let err = WireError::ValueTooLarge { actual: 70000, max: 65535 };
        assert_eq!(err.to_string(), "value too large: 70000 bytes exceeds prefix capacity 65535");
    }

    #[test]
    fn unexpected_end_display() {
        let err = WireError::UnexpectedEnd { needed: 4, remaining: 1 };
        assert_eq!(err.to_string(), "unexpected end of input: needed 4 bytes, 1 remaining");
    }
}
