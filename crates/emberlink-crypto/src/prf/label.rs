//! Derivation labels and the export-label policy

/// A named derivation purpose with its canonical output length.
///
/// The catalog below is a closed set; new purposes are added by extending
/// it with another constant. Convenience derivations use the canonical
/// length, and explicit-length calls may override it for protocol-mandated
/// exceptions (oversized key blocks for some cipher suites).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrfLabel {
    value: &'static [u8],
    length: usize,
}

impl PrfLabel {
    /// Master secret, always 48 bytes (RFC 5246 section 8.1).
    pub const MASTER_SECRET: Self = Self::new(b"master secret", 48);

    /// Extended master secret, always 48 bytes (RFC 7627 section 4).
    pub const EXTENDED_MASTER_SECRET: Self = Self::new(b"extended master secret", 48);

    /// Key-expansion block (RFC 5246 section 6.3). 128 bytes covers the
    /// suites of RFC 5246; suites needing more override the length.
    pub const KEY_EXPANSION: Self = Self::new(b"key expansion", 128);

    /// Client Finished verify data, always 12 bytes (RFC 5246 section 7.4.9).
    pub const CLIENT_FINISHED: Self = Self::new(b"client finished", 12);

    /// Server Finished verify data, always 12 bytes (RFC 5246 section 7.4.9).
    pub const SERVER_FINISHED: Self = Self::new(b"server finished", 12);

    const fn new(value: &'static [u8], length: usize) -> Self {
        Self { value, length }
    }

    /// Label bytes as they enter the PRF seed.
    pub const fn as_bytes(self) -> &'static [u8] {
        self.value
    }

    /// Canonical output length in bytes.
    pub const fn length(self) -> usize {
        self.length
    }
}

const EXPORTER: &[u8] = b"EXPORTER";
const EXPERIMENTAL: &[u8] = b"EXPERIMENTAL";

/// Check whether a label is allowed for key-material export (RFC 5705).
///
/// True iff `label` starts with `EXPORTER` or `EXPERIMENTAL` as a literal
/// byte prefix. Pure test, no side effects.
pub fn is_export_label(label: &[u8]) -> bool {
    label.starts_with(EXPORTER) || label.starts_with(EXPERIMENTAL)
}
