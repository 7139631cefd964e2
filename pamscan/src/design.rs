//! CRISPR-Cas9 guide candidate scanning and scoring.
//!
//! Scans a target sequence for SpCas9 PAM sites (`NGG`) and emits the 20 bp
//! protospacer immediately upstream of each as a [`Candidate`], scored with
//! composition heuristics: GC content (optimal 40-60%), homopolymer runs,
//! and the `TTTT` Pol III terminator motif.

use std::fmt;

use pamscan_core::{PamscanError, Result, Sequence, Summarizable};

use crate::seq::TargetSeq;

/// Guide (protospacer) length in bases.
pub const GUIDE_LEN: usize = 20;

/// PAM length in bases (`NGG`).
pub const PAM_LEN: usize = 3;

/// Maximum achievable quality score.
pub const MAX_SCORE: i32 = 5;

/// Minimum run of identical bases treated as a homopolymer risk.
const MIN_HOMOPOLYMER_RUN: usize = 4;

/// A quality warning attached to a scored candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideWarning {
    /// GC content outside the optimal 40-60% band but within 30-70%.
    GcSuboptimal,
    /// GC content outside 30-70%.
    GcOutOfRange,
    /// Run of four or more identical bases.
    HomopolymerRun,
    /// Contains `TTTT`, a Pol III terminator that truncates transcription.
    PolIiiTerminator,
}

impl fmt::Display for GuideWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            GuideWarning::GcSuboptimal => "GC content suboptimal",
            GuideWarning::GcOutOfRange => "GC content outside recommended range",
            GuideWarning::HomopolymerRun => "homopolymer run (potential off-target risk)",
            GuideWarning::PolIiiTerminator => "contains TTTT (Pol III terminator)",
        };
        f.write_str(msg)
    }
}

/// A scored guide candidate adjacent to a PAM site.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// The 20 bp protospacer, uppercase.
    pub guide: Vec<u8>,
    /// 0-based start of the guide in the target sequence.
    pub position: usize,
    /// The adjacent 3-base `NGG` motif.
    pub pam: [u8; PAM_LEN],
    /// Fraction of G/C bases in the guide, in [0.0, 1.0].
    pub gc_content: f64,
    /// Whether the guide contains a run of >= 4 identical bases.
    pub has_homopolymer_risk: bool,
    /// Composite quality score, at most [`MAX_SCORE`].
    pub score: i32,
    /// Quality warnings, in the order they were detected.
    pub warnings: Vec<GuideWarning>,
}

impl Candidate {
    /// GC content as a percentage in [0.0, 100.0].
    pub fn gc_percent(&self) -> f64 {
        self.gc_content * 100.0
    }
}

impl Summarizable for Candidate {
    fn summary(&self) -> String {
        let guide = std::str::from_utf8(&self.guide).unwrap_or("???");
        let pam = std::str::from_utf8(&self.pam).unwrap_or("???");
        format!(
            "5'-{}-3' @ {} (PAM {}, GC {:.1}%, score {}/{})",
            guide,
            self.position,
            pam,
            self.gc_percent(),
            self.score,
            MAX_SCORE
        )
    }
}

/// Find all `NGG` PAM sites on the forward strand.
///
/// Returns every index `p` such that `seq[p+1] == 'G'` and `seq[p+2] == 'G'`,
/// with the 3-base window fully inside the sequence. The base at `p` itself
/// is unconstrained (the `N` of `NGG`). Input should be uppercase DNA.
pub fn find_pam_sites(seq: &[u8]) -> Vec<usize> {
    if seq.len() < PAM_LEN {
        return Vec::new();
    }
    (0..=seq.len() - PAM_LEN)
        .filter(|&p| seq[p + 1] == b'G' && seq[p + 2] == b'G')
        .collect()
}

/// GC content of a sequence as a fraction in [0.0, 1.0].
///
/// Returns 0.0 for empty input.
fn gc_fraction(seq: &[u8]) -> f64 {
    if seq.is_empty() {
        return 0.0;
    }
    let gc = seq.iter().filter(|&&b| b == b'G' || b == b'C').count();
    gc as f64 / seq.len() as f64
}

/// Whether the sequence contains a run of >= [`MIN_HOMOPOLYMER_RUN`]
/// identical consecutive bases.
fn has_homopolymer(seq: &[u8]) -> bool {
    let mut run = 1;
    for pair in seq.windows(2) {
        if pair[0] == pair[1] {
            run += 1;
            if run >= MIN_HOMOPOLYMER_RUN {
                return true;
            }
        } else {
            run = 1;
        }
    }
    false
}

/// Score a guide and collect its warnings.
///
/// GC in [0.40, 0.60] earns +3, [0.30, 0.70] earns +2 with a warning,
/// anything else +1 with a warning. Absence of a homopolymer run earns +2;
/// presence costs 1. A `TTTT` Pol III terminator costs another 2. An
/// in-band guide with no homopolymer run always scores [`MAX_SCORE`].
fn score_guide(gc: f64, homopolymer: bool, guide: &[u8]) -> (i32, Vec<GuideWarning>) {
    let mut score = 0;
    let mut warnings = Vec::new();

    if (0.40..=0.60).contains(&gc) {
        score += 3;
    } else if (0.30..=0.70).contains(&gc) {
        score += 2;
        warnings.push(GuideWarning::GcSuboptimal);
    } else {
        score += 1;
        warnings.push(GuideWarning::GcOutOfRange);
    }

    if homopolymer {
        score -= 1;
        warnings.push(GuideWarning::HomopolymerRun);
    } else {
        score += 2;
    }

    if guide.windows(4).any(|w| w == b"TTTT") {
        score -= 2;
        warnings.push(GuideWarning::PolIiiTerminator);
    }

    (score, warnings)
}

/// Enumerate and score guide candidates for a target sequence.
///
/// A candidate is emitted for every PAM site with a full 20 bp upstream
/// window. Candidates are sorted by descending score; ties are broken by
/// ascending position, so the output order is deterministic.
///
/// A valid sequence with no usable PAM site yields an empty vector, not an
/// error.
///
/// # Errors
///
/// Returns [`PamscanError::SequenceTooShort`] if the target cannot hold a
/// full guide plus PAM (23 bp).
pub fn design_guides(target: &TargetSeq) -> Result<Vec<Candidate>> {
    let seq = target.as_bytes();
    let required = GUIDE_LEN + PAM_LEN;
    if seq.len() < required {
        return Err(PamscanError::SequenceTooShort {
            length: seq.len(),
            required,
        });
    }

    let mut candidates = Vec::new();
    for pam_pos in find_pam_sites(seq) {
        if pam_pos < GUIDE_LEN {
            continue;
        }
        let position = pam_pos - GUIDE_LEN;
        let guide = &seq[position..pam_pos];

        let gc_content = gc_fraction(guide);
        let has_homopolymer_risk = has_homopolymer(guide);
        let (score, warnings) = score_guide(gc_content, has_homopolymer_risk, guide);

        candidates.push(Candidate {
            guide: guide.to_vec(),
            position,
            pam: [seq[pam_pos], seq[pam_pos + 1], seq[pam_pos + 2]],
            gc_content,
            has_homopolymer_risk,
            score,
            warnings,
        });
    }

    candidates.sort_by(|a, b| b.score.cmp(&a.score).then(a.position.cmp(&b.position)));
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(seq: &[u8]) -> TargetSeq {
        TargetSeq::new(seq).unwrap()
    }

    // --- PAM site finding ---

    #[test]
    fn pam_sites_basic() {
        // TGG at 0, AGG at 4
        assert_eq!(find_pam_sites(b"TGGAAGG"), vec![0, 4]);
    }

    #[test]
    fn pam_sites_overlapping_run() {
        // GGGG: NGG windows at 0 (GGG) and 1 (GGG)
        assert_eq!(find_pam_sites(b"GGGG"), vec![0, 1]);
    }

    #[test]
    fn pam_sites_none() {
        assert!(find_pam_sites(b"ATATATAT").is_empty());
    }

    #[test]
    fn pam_sites_short_input() {
        assert!(find_pam_sites(b"GG").is_empty());
        assert!(find_pam_sites(b"").is_empty());
    }

    // --- GC content ---

    #[test]
    fn gc_fraction_exact() {
        assert!((gc_fraction(b"ATGC") - 0.5).abs() < 1e-12);
        assert_eq!(gc_fraction(b"AAAA"), 0.0);
        assert_eq!(gc_fraction(b"GGCC"), 1.0);
        assert_eq!(gc_fraction(b""), 0.0);
    }

    // --- Homopolymer detection ---

    #[test]
    fn homopolymer_run_of_four() {
        assert!(has_homopolymer(b"ACGTTTTA"));
        assert!(has_homopolymer(b"GGGG"));
    }

    #[test]
    fn homopolymer_run_of_three_ok() {
        assert!(!has_homopolymer(b"ACGTTTAC"));
        assert!(!has_homopolymer(b"GGG"));
    }

    #[test]
    fn homopolymer_interrupted_run() {
        assert!(!has_homopolymer(b"AATAATAATAAT"));
    }

    // --- Scoring ---

    #[test]
    fn ideal_guide_scores_max() {
        // 50% GC, no homopolymer, no TTTT
        let guide = b"ACGTACGTACGTACGTACGT";
        let gc = gc_fraction(guide);
        let (score, warnings) = score_guide(gc, has_homopolymer(guide), guide);
        assert_eq!(score, MAX_SCORE);
        assert!(warnings.is_empty());
    }

    #[test]
    fn low_gc_homopolymer_guide() {
        // All A: GC 0% (+1, warning), homopolymer (-1, warning)
        let guide = [b'A'; GUIDE_LEN];
        let gc = gc_fraction(&guide);
        let (score, warnings) = score_guide(gc, has_homopolymer(&guide), &guide);
        assert_eq!(score, 0);
        assert_eq!(
            warnings,
            vec![GuideWarning::GcOutOfRange, GuideWarning::HomopolymerRun]
        );
    }

    #[test]
    fn pol_iii_terminator_penalized() {
        // TTTT + 16 alternating bases: GC 8/20 = 0.40 (+3),
        // homopolymer (-1), TTTT (-2) => 0
        let guide = b"TTTTACGTACGTACGTACGT";
        let gc = gc_fraction(guide);
        let (score, warnings) = score_guide(gc, has_homopolymer(guide), guide);
        assert_eq!(score, 0);
        assert_eq!(
            warnings,
            vec![GuideWarning::HomopolymerRun, GuideWarning::PolIiiTerminator]
        );
    }

    #[test]
    fn suboptimal_gc_band() {
        // 7 GC of 20 = 0.35: +2 with suboptimal warning, +2 no homopolymer
        let guide = b"ACGTACGTACGTACATATAT";
        let gc = gc_fraction(guide);
        assert!((gc - 0.35).abs() < 1e-12);
        let (score, warnings) = score_guide(gc, has_homopolymer(guide), guide);
        assert_eq!(score, 4);
        assert_eq!(warnings, vec![GuideWarning::GcSuboptimal]);
    }

    // --- Full design ---

    #[test]
    fn boundary_23bp_single_candidate_at_zero() {
        let t = target(b"ACGTACGTACGTACGTACGTTGG");
        let candidates = design_guides(&t).unwrap();
        assert_eq!(candidates.len(), 1);

        let c = &candidates[0];
        assert_eq!(c.position, 0);
        assert_eq!(c.guide, b"ACGTACGTACGTACGTACGT");
        assert_eq!(&c.pam, b"TGG");
        assert!((c.gc_content - 0.5).abs() < 1e-12);
        assert!(!c.has_homopolymer_risk);
        assert_eq!(c.score, MAX_SCORE);
        assert!(c.warnings.is_empty());
    }

    #[test]
    fn too_short_is_an_error() {
        let t = target(b"ACGTACGTACGTACGTACGTGG"); // 22 bp
        assert_eq!(
            design_guides(&t).unwrap_err(),
            PamscanError::SequenceTooShort {
                length: 22,
                required: 23,
            }
        );
    }

    #[test]
    fn all_a_yields_no_candidates() {
        // No G anywhere, so no PAM can form.
        let t = target(&vec![b'A'; 30]);
        assert!(design_guides(&t).unwrap().is_empty());
    }

    #[test]
    fn pam_without_upstream_window_skipped() {
        // GG early in the sequence: PAM sites exist but none has 20 bp upstream.
        let t = target(b"AGGTACGTACGTACGTACGTACT");
        assert!(design_guides(&t).unwrap().is_empty());
    }

    #[test]
    fn repeated_agct_example_has_no_pam() {
        // 35 bp, no adjacent GG anywhere: scanned, zero candidates.
        let t = target(b"ATGCTAGCTAGCTAGCTAGCTAGCTAGCTAGCTAG");
        assert!(design_guides(&t).unwrap().is_empty());
    }

    #[test]
    fn guides_verifiable_by_substring() {
        // Ideal guide + TGG, then 21 A's + GG: two candidates.
        let seq = b"ACGTACGTACGTACGTACGTTGGAAAAAAAAAAAAAAAAAAAAAGG";
        let t = target(seq);
        let candidates = design_guides(&t).unwrap();
        assert_eq!(candidates.len(), 2);

        for c in &candidates {
            assert_eq!(c.guide.len(), GUIDE_LEN);
            assert_eq!(c.guide, &seq[c.position..c.position + GUIDE_LEN]);
            assert_eq!(c.pam[1], b'G');
            assert_eq!(c.pam[2], b'G');
        }
    }

    #[test]
    fn sorted_by_score_descending() {
        // Candidate at 0 is ideal (score 5); candidate at 23 is all-A (score 0).
        let t = target(b"ACGTACGTACGTACGTACGTTGGAAAAAAAAAAAAAAAAAAAAAGG");
        let candidates = design_guides(&t).unwrap();
        assert_eq!(candidates[0].position, 0);
        assert_eq!(candidates[0].score, MAX_SCORE);
        assert_eq!(candidates[1].position, 23);
        assert_eq!(candidates[1].score, 0);
    }

    #[test]
    fn ties_broken_by_ascending_position() {
        // All-G target: every candidate scores identically.
        let t = target(&vec![b'G'; 43]);
        let candidates = design_guides(&t).unwrap();
        assert_eq!(candidates.len(), 21);
        for (i, c) in candidates.iter().enumerate() {
            assert_eq!(c.position, i);
            assert_eq!(c.score, candidates[0].score);
        }
    }

    #[test]
    fn scan_is_idempotent() {
        let t = target(b"ACGTACGTACGTACGTACGTTGGAAAAAAAAAAAAAAAAAAAAAGGGG");
        assert_eq!(design_guides(&t).unwrap(), design_guides(&t).unwrap());
    }

    #[test]
    fn candidate_summary_mentions_guide_and_score() {
        let t = target(b"ACGTACGTACGTACGTACGTTGG");
        let candidates = design_guides(&t).unwrap();
        let summary = candidates[0].summary();
        assert!(summary.contains("ACGTACGTACGTACGTACGT"));
        assert!(summary.contains("score 5/5"));
    }
}
