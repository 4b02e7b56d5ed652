//! TLS 1.2 pseudo-random function and the derivations built on it
//!
//! The expansion engine implements `P_hash` from RFC 5246 section 5; the
//! derivation operations fix labels and enforce policy on top of it
//! (master secret, exporter keys, PSK premaster framing).

mod derivation;
mod expansion;
mod label;

pub use derivation::{
    derive, derive_export_key, derive_master_secret, derive_premaster_secret_from_psk,
    derive_with_length,
};
pub use expansion::{KeyedMac, expand};
pub use label::{PrfLabel, is_export_label};
