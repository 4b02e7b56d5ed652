//! Secret expansion (`P_hash`) as defined in RFC 5246 section 5
//!
//! ```text
//! P_hash(secret, seed) = HMAC_hash(secret, A(1) + seed) +
//!                        HMAC_hash(secret, A(2) + seed) +
//!                        HMAC_hash(secret, A(3) + seed) + ...
//!
//! A(0) = seed
//! A(i) = HMAC_hash(secret, A(i-1))
//! ```
//!
//! For the TLS PRF the seed entering `P_hash` is `label || seed`.
//!
//! # Security
//!
//! - The working buffer holding `A(n) || label || seed` is zeroized on every
//!   exit path: normal completion, truncation in the last block, and
//!   propagated primitive errors
//! - The output buffer is allocated at exactly the requested length; the
//!   final partial block is computed into the working buffer and only its
//!   leading remainder is copied out

use hmac::Mac;
use hmac::digest::{FixedOutputReset, KeyInit};
use zeroize::{Zeroize, Zeroizing};

use crate::error::DerivationError;

/// Keyed-hash capability consumed by the expansion engine.
///
/// Implementations arrive already keyed with the secret. The engine treats
/// this as a capability, not a concrete algorithm; any MAC (HMAC-SHA256 is
/// the stock choice) satisfying the contract works. A blanket impl covers
/// every RustCrypto `Mac` that can reset after finalization.
pub trait KeyedMac {
    /// Width of one MAC output block in bytes.
    fn mac_len(&self) -> usize;

    /// Feed input into the running computation.
    fn update(&mut self, data: &[u8]);

    /// Finish the computation, writing exactly [`mac_len`](Self::mac_len)
    /// bytes into `out`, and reset for the next computation under the same
    /// key.
    ///
    /// # Errors
    ///
    /// `CryptoEngine` if `out` does not hold exactly one MAC block.
    fn finalize_into(&mut self, out: &mut [u8]) -> Result<(), DerivationError>;
}

impl<M> KeyedMac for M
where
    M: Mac + FixedOutputReset,
{
    fn mac_len(&self) -> usize {
        M::output_size()
    }

    fn update(&mut self, data: &[u8]) {
        Mac::update(self, data);
    }

    fn finalize_into(&mut self, out: &mut [u8]) -> Result<(), DerivationError> {
        let width = M::output_size();
        if out.len() != width {
            return Err(DerivationError::CryptoEngine {
                reason: format!("MAC output buffer holds {} bytes, block is {width}", out.len()),
            });
        }
        let mut tag = self.finalize_reset().into_bytes();
        out.copy_from_slice(tag.as_slice());
        tag.as_mut_slice().zeroize();
        Ok(())
    }
}

/// Key a MAC primitive with a secret.
pub(crate) fn keyed<M>(secret: &[u8]) -> Result<M, DerivationError>
where
    M: Mac + KeyInit,
{
    <M as KeyInit>::new_from_slice(secret)
        .map_err(|err| DerivationError::InvalidKey { reason: err.to_string() })
}

/// Expand a secret into exactly `length` bytes via `P_hash`.
///
/// `mac` must already be keyed with the secret. The output is a
/// deterministic function of (key, label, seed, length); `length == 0`
/// yields an empty vector.
///
/// # Errors
///
/// `CryptoEngine` if the primitive misbehaves during expansion. Primitive
/// faults propagate; they are never logged-and-swallowed.
pub fn expand(
    mac: &mut dyn KeyedMac,
    label: &[u8],
    seed: &[u8],
    length: usize,
) -> Result<Vec<u8>, DerivationError> {
    let mac_len = mac.mac_len();
    if mac_len == 0 {
        return Err(DerivationError::CryptoEngine {
            reason: "MAC primitive reports zero output width".to_string(),
        });
    }

    let mut expansion = Zeroizing::new(vec![0u8; length]);
    // Working buffer layout: A(n) || label || seed. Held between rounds and
    // scrubbed on every exit path, including errors propagated with `?`.
    let mut a_and_seed = Zeroizing::new(vec![0u8; mac_len + label.len() + seed.len()]);
    a_and_seed[mac_len..mac_len + label.len()].copy_from_slice(label);
    a_and_seed[mac_len + label.len()..].copy_from_slice(seed);

    // A(1) from A(0) = label || seed
    mac.update(label);
    mac.update(seed);

    let mut offset = 0;
    loop {
        // A(n) lands at the head of the working buffer
        mac.finalize_into(&mut a_and_seed[..mac_len])?;
        // HMAC_hash(secret, A(n) || label || seed)
        mac.update(&a_and_seed);
        let next = offset + mac_len;
        if next > length {
            // Last block overshoots the request: compute it into the working
            // buffer and copy only the leading remainder
            mac.finalize_into(&mut a_and_seed[..mac_len])?;
            expansion[offset..].copy_from_slice(&a_and_seed[..length - offset]);
            break;
        }
        mac.finalize_into(&mut expansion[offset..next])?;
        if next == length {
            break;
        }
        offset = next;
        // A(n+1) from the head of the working buffer ("A(n)")
        mac.update(&a_and_seed[..mac_len]);
    }

    Ok(core::mem::take(&mut *expansion))
}
