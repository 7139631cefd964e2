//! Human-readable report formatting for ranked candidates.
//!
//! Formatting is presentation only; it is not a compatibility contract.
//! The scanner itself stays pure and knows nothing about output.

use std::fmt::Write;

use pamscan_core::Summarizable;

use crate::design::{Candidate, MAX_SCORE};

/// Maximum number of candidates shown in a report.
const MAX_SHOWN: usize = 10;

const RULE: &str = "================================================================================";

/// Render a ranked candidate list as a human-readable report.
///
/// Shows at most the top 10 candidates. An empty list renders an
/// informational message rather than an empty string.
pub fn format_report(candidates: &[Candidate]) -> String {
    let mut out = String::new();

    if candidates.is_empty() {
        out.push_str("No suitable gRNA candidates found.\n");
        return out;
    }

    let _ = writeln!(out, "Found {} gRNA candidate(s)\n", candidates.len());
    let _ = writeln!(out, "{RULE}");

    for (rank, c) in candidates.iter().take(MAX_SHOWN).enumerate() {
        let guide = std::str::from_utf8(&c.guide).unwrap_or("???");
        let pam = std::str::from_utf8(&c.pam).unwrap_or("???");

        let _ = writeln!(out, "\nCandidate #{}", rank + 1);
        let _ = writeln!(out, "  gRNA sequence:  5'-{}-3'", guide);
        let _ = writeln!(out, "  PAM:            {}", pam);
        let _ = writeln!(out, "  Position:       {}", c.position);
        let _ = writeln!(out, "  GC content:     {:.1}%", c.gc_percent());
        let _ = writeln!(out, "  Quality score:  {}/{}", c.score, MAX_SCORE);

        if c.warnings.is_empty() {
            let _ = writeln!(out, "  Warnings:       none");
        } else {
            let joined: Vec<String> = c.warnings.iter().map(|w| w.to_string()).collect();
            let _ = writeln!(out, "  Warnings:       {}", joined.join(", "));
        }
    }

    let _ = writeln!(out, "\n{RULE}");
    let _ = writeln!(out, "Top candidate: {}", candidates[0].summary());

    out
}
