//! Property-based tests for length-prefixed wire encoding
//!
//! Verifies that variable-length framing holds for ALL inputs the prefix can
//! express, not just hand-picked examples.

use emberlink_wire::{PrefixSize, WireError, WireReader, WireWriter};
use proptest::prelude::*;

fn arbitrary_prefix() -> impl Strategy<Value = PrefixSize> {
    prop_oneof![Just(PrefixSize::U8), Just(PrefixSize::U16), Just(PrefixSize::U24)]
}

#[test]
fn prop_var_bytes_roundtrip() {
    proptest!(|(bytes in prop::collection::vec(any::<u8>(), 0..255), prefix in arbitrary_prefix())| {
        let mut writer = WireWriter::new();
        writer.write_var_bytes(&bytes, prefix).expect("within every prefix capacity");
        let encoded = writer.finish();

        // PROPERTY: total size is prefix width plus value length
        prop_assert_eq!(encoded.len(), prefix.width() + bytes.len());

        let mut reader = WireReader::new(&encoded);
        let decoded = reader.read_var_bytes(prefix).expect("decode must succeed");

        // PROPERTY: round-trip is identity and consumes everything
        prop_assert_eq!(decoded, bytes.as_slice());
        prop_assert!(reader.is_exhausted());
    });
}

#[test]
fn prop_oversized_values_rejected_cleanly() {
    proptest!(|(extra in 1usize..64)| {
        let bytes = vec![0u8; PrefixSize::U8.max_len() + extra];
        let mut writer = WireWriter::new();
        let result = writer.write_var_bytes(&bytes, PrefixSize::U8);

        prop_assert_eq!(
            result,
            Err(WireError::ValueTooLarge { actual: bytes.len(), max: PrefixSize::U8.max_len() })
        );
        // PROPERTY: a rejected write leaves the buffer untouched
        prop_assert!(writer.is_empty());
    });
}

#[test]
fn prop_truncated_input_never_panics() {
    proptest!(|(bytes in prop::collection::vec(any::<u8>(), 0..64), cut in 0usize..64)| {
        let input = &bytes[..cut.min(bytes.len())];
        let mut reader = WireReader::new(input);
        // Reads on arbitrary truncations must return Ok or UnexpectedEnd, never panic
        let _ = reader.read_var_bytes(PrefixSize::U16);
        let _ = reader.read_u24();
        let _ = reader.read_u8();
    });
}
