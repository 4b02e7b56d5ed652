//! Error types for secret derivation

use emberlink_wire::WireError;
use thiserror::Error;

/// Errors from the expansion engine and the secret-derivation operations
///
/// Derivation is a pure deterministic function, so none of these are
/// retried: the same inputs would fail the same way. The handshake driver
/// treats every variant as a connection-abort condition.
#[derive(Debug, Error)]
pub enum DerivationError {
    /// The MAC primitive rejected the secret as a key
    #[error("invalid key for MAC primitive: {reason}")]
    InvalidKey {
        /// Rejection reason reported by the primitive
        reason: String,
    },

    /// Export derivation requested with a label lacking a reserved prefix
    #[error("label not allowed for export: {label:?}")]
    LabelNotAllowed {
        /// The offending label, decoded lossily for display
        label: String,
    },

    /// A length-prefixed field would overflow its prefix capacity
    #[error("value too large: {actual} bytes exceeds prefix capacity {max}")]
    ValueTooLarge {
        /// Length of the secret that was offered
        actual: usize,
        /// Largest length the wire prefix can express
        max: usize,
    },

    /// Unexpected failure from the underlying primitive during expansion
    #[error("crypto engine failure: {reason}")]
    CryptoEngine {
        /// Description of the primitive fault
        reason: String,
    },
}

impl DerivationError {
    /// Returns true if this error is a caller-contract violation
    ///
    /// Contract violations (bad export label, oversized secret) are caller
    /// bugs caught before any cryptographic work. The remaining variants are
    /// primitive failures surfaced from below.
    pub fn is_contract_violation(&self) -> bool {
        match self {
            Self::LabelNotAllowed { .. } | Self::ValueTooLarge { .. } => true,
            Self::InvalidKey { .. } | Self::CryptoEngine { .. } => false,
        }
    }
}

impl From<WireError> for DerivationError {
    fn from(err: WireError) -> Self {
        match err {
            WireError::ValueTooLarge { actual, max } => Self::ValueTooLarge { actual, max },
            WireError::UnexpectedEnd { .. } => Self::CryptoEngine { reason: err.to_string() },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_not_allowed_is_contract_violation() {
        let err = DerivationError::LabelNotAllowed { label: "random".to_string() };
        assert!(err.is_contract_violation());
    }

    #[test]
    fn value_too_large_is_contract_violation() {
        let err = DerivationError::ValueTooLarge { actual: 70000, max: 65535 };
        assert!(err.is_contract_violation());
    }

    #[test]
    fn invalid_key_is_not_contract_violation() {
        let err = DerivationError::InvalidKey { reason: "bad length".to_string() };
        assert!(!err.is_contract_violation());
    }

    #[test]
    fn crypto_engine_is_not_contract_violation() {
        let err = DerivationError::CryptoEngine { reason: "short buffer".to_string() };
        assert!(!err.is_contract_violation());
    }

    #[test]
    fn wire_value_too_large_converts() {
        let err: DerivationError = WireError::ValueTooLarge { actual: 65536, max: 65535 }.into();
        match err {
            DerivationError::ValueTooLarge { actual, max } => {
                assert_eq!(actual, 65536);
                assert_eq!(max, 65535);
            },
            other => unreachable!("expected ValueTooLarge, got {other:?}"),
        }
    }

    #[test]
    fn error_display() {
        let err = DerivationError::ValueTooLarge { actual: 70000, max: 65535 };
        assert_eq!(err.to_string(), "value too large: 70000 bytes exceeds prefix capacity 65535");
    }
}
