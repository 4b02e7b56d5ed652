//! Fuzz target for the wire reader
//!
//! Feeds arbitrary bytes through every read operation. Reads must return
//! Ok or UnexpectedEnd for any truncation; they must never panic or
//! over-read.

#![no_main]

use emberlink_wire::{PrefixSize, WireReader};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut reader = WireReader::new(data);
    while reader.read_var_bytes(PrefixSize::U16).is_ok() {}

    let mut reader = WireReader::new(data);
    while reader.read_var_bytes(PrefixSize::U8).is_ok() {}

    let mut reader = WireReader::new(data);
    let _ = reader.read_u8();
    let _ = reader.read_u16();
    let _ = reader.read_u24();
    let remaining = reader.remaining();
    let _ = reader.read_bytes(remaining);
    assert!(reader.is_exhausted() || remaining == 0);
});
