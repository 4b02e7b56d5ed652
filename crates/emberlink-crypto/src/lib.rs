//! Emberlink Cryptographic Primitives
//!
//! Secret expansion and derivation for DTLS 1.2 sessions. Pure functions
//! with deterministic outputs; no state survives a call.
//!
//! # Secret Lifecycle
//!
//! This section describes how the shared secret from key exchange becomes
//! session key material. The premaster secret is expanded into the 48-byte
//! master secret, which in turn feeds every later derivation: the
//! key-expansion block, the Finished verify data, and exported application
//! keys.
//!
//! ```text
//! Premaster Secret (key exchange or PSK framing)
//!        │
//!        ▼
//! PRF → Master Secret (48 bytes, per session)
//!        │
//!        ├─► PRF → Key Expansion Block → record-layer keys and IVs
//!        ├─► PRF → Finished Verify Data (client / server)
//!        └─► PRF → Exporter Keys (RFC 5705, gated labels)
//! ```
//!
//! The PRF is the RFC 5246 `P_hash` construction over a keyed-hash
//! capability; HMAC-SHA256 is the stock provider but any MAC satisfying
//! [`KeyedMac`] works.
//!
//! # Security
//!
//! Scoped Erasure:
//! - Working buffers holding `A(n)` chain state are zeroized on every exit
//!   path, including propagated errors
//! - A premaster secret is consumed into the master secret; its working
//!   copies do not outlive the deriving call
//! - [`SecretBytes`] zeroizes owned key material on drop
//!
//! Label Policy:
//! - Exporter derivations accept only labels with the `EXPORTER` or
//!   `EXPERIMENTAL` prefix; anything else is rejected before any
//!   cryptographic work
//!
//! Failure Discipline:
//! - Key rejection and primitive faults surface as one closed error enum;
//!   nothing is retried and nothing is swallowed, so the handshake driver
//!   can abort the connection on any variant

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod error;
pub mod prf;
pub mod secret;

pub use error::DerivationError;
pub use prf::{
    KeyedMac, PrfLabel, derive, derive_export_key, derive_master_secret,
    derive_premaster_secret_from_psk, derive_with_length, expand, is_export_label,
};
pub use secret::SecretBytes;
