//! CRISPR-Cas9 guide RNA candidate design.
//!
//! Scans a DNA target sequence for SpCas9 PAM sites (NGG) and emits the
//! 20 bp protospacer immediately upstream of each as a scored [`Candidate`]:
//!
//! - **Target sequences** — [`TargetSeq`], validated strict-ACGT DNA
//! - **Scanning & scoring** — [`design_guides`], GC content and
//!   homopolymer heuristics
//! - **Reports** — [`format_report`], a ranked human-readable listing
//!
//! # Example
//!
//! ```
//! use pamscan::{design_guides, TargetSeq};
//!
//! // Lowercased input is normalized to uppercase.
//! let target = TargetSeq::new(b"acgtacgtacgtacgtacgttgg").unwrap();
//!
//! let candidates = design_guides(&target).unwrap();
//! assert_eq!(candidates.len(), 1);
//! assert_eq!(candidates[0].position, 0);
//! assert_eq!(candidates[0].guide, b"ACGTACGTACGTACGTACGT");
//! assert_eq!(&candidates[0].pam, b"TGG");
//! ```

pub mod design;
pub mod report;
pub mod seq;

pub use design::{
    design_guides, find_pam_sites, Candidate, GuideWarning, GUIDE_LEN, MAX_SCORE, PAM_LEN,
};
pub use report::format_report;
pub use seq::TargetSeq;
