//! Shared primitives for the pamscan crates.
//!
//! `pamscan-core` provides the foundation the domain crates build on:
//!
//! - **Error types** — [`PamscanError`] and [`Result`] for structured error handling
//! - **Traits** — [`Sequence`] for byte-level sequence access, [`Summarizable`]
//!   for one-line human-readable summaries

pub mod error;
pub mod traits;

pub use error::{PamscanError, Result};
pub use traits::{Sequence, Summarizable};
