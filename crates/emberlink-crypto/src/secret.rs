//! Owned secret key material with guaranteed erasure

use core::fmt;

use zeroize::Zeroize;

/// Owned byte sequence holding cryptographic key material.
///
/// Exactly one derivation step owns a secret at a time; the bytes are
/// zeroized when the owner drops it. Construction copies caller-supplied
/// bytes once, so a caller's own secret is never mutated in place.
///
/// `Debug` prints only the length. Secret bytes never reach log output.
#[derive(Clone)]
pub struct SecretBytes {
    bytes: Vec<u8>,
}

impl SecretBytes {
    /// Copy `bytes` into a new owned secret.
    #[must_use]
    pub fn from_slice(bytes: &[u8]) -> Self {
        Self { bytes: bytes.to_vec() }
    }

    /// Take ownership of an already-built buffer without copying.
    #[must_use]
    pub fn from_vec(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Raw key material.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Length of the key material in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the secret is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl Drop for SecretBytes {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

impl fmt::Debug for SecretBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretBytes({} bytes)", self.bytes.len())
    }
}
