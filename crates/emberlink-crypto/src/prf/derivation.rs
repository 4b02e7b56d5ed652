//! Named secret-derivation operations over the expansion engine
//!
//! Each operation is a single synchronous call with no state carried
//! between handshake phases: key the primitive, expand, scrub, return.
//! Concurrent handshakes get independent working buffers, so there is no
//! shared mutable state between calls.

use emberlink_wire::{PrefixSize, WireWriter};
use hmac::Mac;
use hmac::digest::{FixedOutputReset, KeyInit};
use tracing::trace;
use zeroize::Zeroizing;

use crate::error::DerivationError;
use crate::prf::expansion;
use crate::prf::label::{self, PrfLabel};
use crate::secret::SecretBytes;

/// Derive key material using a label's canonical output length.
///
/// Covers the catalog purposes directly: key-expansion blocks (128 bytes)
/// and Finished verify data (12 bytes) as well as the master-secret labels.
///
/// # Errors
///
/// `InvalidKey` if the primitive rejects `secret` as a key; `CryptoEngine`
/// on primitive faults during expansion.
pub fn derive<M>(
    secret: &SecretBytes,
    label: PrfLabel,
    seed: &[u8],
) -> Result<SecretBytes, DerivationError>
where
    M: Mac + KeyInit + FixedOutputReset,
{
    derive_with_length::<M>(secret, label, seed, label.length())
}

/// Derive key material with an explicit output length.
///
/// The label's canonical length is authoritative for ordinary use;
/// this override exists for protocol-mandated exceptions such as cipher
/// suites whose key block exceeds 128 bytes.
pub fn derive_with_length<M>(
    secret: &SecretBytes,
    label: PrfLabel,
    seed: &[u8],
    length: usize,
) -> Result<SecretBytes, DerivationError>
where
    M: Mac + KeyInit + FixedOutputReset,
{
    let mut mac: M = expansion::keyed(secret.as_bytes())?;
    let bytes = expansion::expand(&mut mac, label.as_bytes(), seed, length)?;
    trace!(label = %String::from_utf8_lossy(label.as_bytes()), length, "expanded key material");
    Ok(SecretBytes::from_vec(bytes))
}

/// Generate the (extended) master secret from a premaster secret.
///
/// Always 48 bytes. `extended` selects the `extended master secret` label
/// (RFC 7627) over the plain `master secret` label; for the same seed the
/// two results differ.
pub fn derive_master_secret<M>(
    premaster_secret: &SecretBytes,
    seed: &[u8],
    extended: bool,
) -> Result<SecretBytes, DerivationError>
where
    M: Mac + KeyInit + FixedOutputReset,
{
    let lbl = if extended { PrfLabel::EXTENDED_MASTER_SECRET } else { PrfLabel::MASTER_SECRET };
    let master = derive::<M>(premaster_secret, lbl, seed)?;
    trace!(extended, "derived master secret");
    Ok(master)
}

/// Derive exported key material (RFC 5705).
///
/// The label must carry the `EXPORTER` or `EXPERIMENTAL` prefix; the policy
/// check runs before any cryptographic work.
///
/// # Errors
///
/// `LabelNotAllowed` for labels failing the export-prefix test.
pub fn derive_export_key<M>(
    secret: &SecretBytes,
    export_label: &[u8],
    seed: &[u8],
    length: usize,
) -> Result<SecretBytes, DerivationError>
where
    M: Mac + KeyInit + FixedOutputReset,
{
    if !label::is_export_label(export_label) {
        return Err(DerivationError::LabelNotAllowed {
            label: String::from_utf8_lossy(export_label).into_owned(),
        });
    }
    let mut mac: M = expansion::keyed(secret.as_bytes())?;
    let bytes = expansion::expand(&mut mac, export_label, seed, length)?;
    trace!(length, "derived exporter key material");
    Ok(SecretBytes::from_vec(bytes))
}

/// Build the premaster secret for a PSK key exchange (RFC 4279 section 2).
///
/// Wire format, with 16-bit Big Endian length fields:
///
/// ```text
/// struct {
///     opaque other_secret<0..2^16-1>;
///     opaque psk<0..2^16-1>;
/// };
/// ```
///
/// For plain PSK (`other_secret` absent) the first field is a zero block of
/// the **PSK's** length, not the missing secret's. Working copies of both
/// source secrets are erased once the composite is built.
///
/// # Errors
///
/// `ValueTooLarge` if either secret exceeds the 65535-byte capacity of its
/// length field; rejected before serialization.
pub fn derive_premaster_secret_from_psk(
    other_secret: Option<&SecretBytes>,
    psk_secret: &SecretBytes,
) -> Result<SecretBytes, DerivationError> {
    let psk_bytes = Zeroizing::new(psk_secret.as_bytes().to_vec());
    let other_bytes = Zeroizing::new(match other_secret {
        Some(other) => other.as_bytes().to_vec(),
        None => vec![0u8; psk_bytes.len()],
    });

    let mut writer = WireWriter::secret(other_bytes.len() + psk_bytes.len() + 4);
    writer.write_var_bytes(&other_bytes, PrefixSize::U16)?;
    writer.write_var_bytes(&psk_bytes, PrefixSize::U16)?;

    trace!(
        psk_len = psk_bytes.len(),
        other_len = other_bytes.len(),
        "built PSK premaster secret"
    );
    Ok(SecretBytes::from_vec(writer.finish()))
}
