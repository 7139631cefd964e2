//! Structured error types for guide design.

use thiserror::Error;

/// Unified error type for all pamscan operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PamscanError {
    /// Input contains a byte outside the strict DNA alphabet.
    #[error("invalid DNA base '{base}' (0x{code:02X}) at position {position}")]
    InvalidBase {
        /// The offending character, after uppercasing.
        base: char,
        /// Raw byte value of the offending character.
        code: u8,
        /// 0-based position of the offending character in the input.
        position: usize,
    },

    /// Input is too short to hold a full guide plus PAM.
    #[error("sequence too short: {length} bp, need at least {required} bp (guide + PAM)")]
    SequenceTooShort {
        /// Actual input length in bases.
        length: usize,
        /// Minimum required length in bases.
        required: usize,
    },
}

/// Convenience alias used throughout the pamscan crates.
pub type Result<T> = std::result::Result<T, PamscanError>;
