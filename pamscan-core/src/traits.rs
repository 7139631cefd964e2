//! Core abstractions shared across the pamscan crates.

/// Types exposing an underlying byte-level biological sequence.
pub trait Sequence {
    /// The raw (uppercase) sequence bytes.
    fn as_bytes(&self) -> &[u8];

    /// Sequence length in bases.
    fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Whether the sequence is empty.
    fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }
}

/// Types that can describe themselves in a single human-readable line.
pub trait Summarizable {
    /// One-line summary suitable for reports and logs.
    fn summary(&self) -> String;
}
