//! Emberlink Wire Encoding
//!
//! Length-prefixed byte framing shared by the DTLS handshake and the
//! secret-derivation layer. All multi-byte integers are Big Endian
//! (network byte order), and variable-length fields are written as
//! `length prefix || bytes` with a fixed-width prefix.
//!
//! The writer has a secret mode for buffers that carry key material:
//! a secret-mode [`WireWriter`] zeroizes its internal buffer when it is
//! dropped, so partially built secrets never outlive the writer even
//! when encoding fails midway.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod errors;

mod reader;
mod writer;

pub use errors::{Result, WireError};
pub use reader::WireReader;
pub use writer::{PrefixSize, WireWriter};
