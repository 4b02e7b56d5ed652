//! Fuzz target for PSK premaster-secret framing
//!
//! Builds premaster secrets from arbitrary PSK and other-secret bytes.
//! Construction must never panic; oversized inputs must come back as
//! errors, and every success must parse as two u16-prefixed fields.

#![no_main]

use emberlink_crypto::{SecretBytes, derive_premaster_secret_from_psk};
use emberlink_wire::{PrefixSize, WireReader};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (Option<Vec<u8>>, Vec<u8>)| {
    let (other, psk) = input;
    let other_secret = other.map(|bytes| SecretBytes::from_vec(bytes));
    let psk_secret = SecretBytes::from_vec(psk);

    if let Ok(premaster) = derive_premaster_secret_from_psk(other_secret.as_ref(), &psk_secret) {
        let mut reader = WireReader::new(premaster.as_bytes());
        reader.read_var_bytes(PrefixSize::U16).expect("first field parses");
        let second = reader.read_var_bytes(PrefixSize::U16).expect("second field parses");
        assert_eq!(second.len(), psk_secret.len());
        assert!(reader.is_exhausted());
    }
});
