//! Validated target sequence type.
//!
//! [`TargetSeq`] is a newtype over `Vec<u8>` holding a strict-ACGT DNA
//! sequence. Construction uppercases and validates every byte, so the inner
//! data is always uppercase and safe to slice directly in downstream
//! `&[u8]` code.

use std::fmt;
use std::ops::Deref;

use pamscan_core::{PamscanError, Result, Sequence, Summarizable};

/// Valid uppercase bases for a target sequence. Ambiguity codes are
/// rejected: a guide must be an exact, unambiguous protospacer.
const VALID_BASES: &[u8] = b"ACGT";

/// A validated DNA target sequence (strict ACGT, always uppercase).
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TargetSeq {
    data: Vec<u8>,
}

impl TargetSeq {
    /// Create a new validated target sequence from raw bytes.
    ///
    /// Input is uppercased, then every byte is checked against `ACGT`.
    ///
    /// # Errors
    ///
    /// Returns [`PamscanError::InvalidBase`] naming the first offending
    /// character and its position.
    pub fn new(bytes: impl AsRef<[u8]>) -> Result<Self> {
        let data: Vec<u8> = bytes
            .as_ref()
            .iter()
            .map(|b| b.to_ascii_uppercase())
            .collect();
        for (i, &b) in data.iter().enumerate() {
            if !VALID_BASES.contains(&b) {
                return Err(PamscanError::InvalidBase {
                    base: b as char,
                    code: b,
                    position: i,
                });
            }
        }
        Ok(Self { data })
    }

    /// Consume the sequence and return the inner byte vector.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

impl Deref for TargetSeq {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.data
    }
}

impl AsRef<[u8]> for TargetSeq {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl Sequence for TargetSeq {
    fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl Summarizable for TargetSeq {
    fn summary(&self) -> String {
        let preview_len = self.data.len().min(20);
        let preview = std::str::from_utf8(&self.data[..preview_len]).unwrap_or("???");
        if self.data.len() > 20 {
            format!("DNA target ({} bp): {}...", self.data.len(), preview)
        } else {
            format!("DNA target ({} bp): {}", self.data.len(), preview)
        }
    }
}

impl fmt::Debug for TargetSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = std::str::from_utf8(&self.data).unwrap_or("???");
        write!(f, "TargetSeq(\"{}\")", s)
    }
}

impl fmt::Display for TargetSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = std::str::from_utf8(&self.data).unwrap_or("???");
        f.write_str(s)
    }
}
