//! Primer construction from a target sequence plus flanking parameters.
//!
//! Two layouts are supported (see [`PrimerMode`]):
//! - **Codon-aware** (default): the forward primer anneals from the `ATG` start
//!   codon plus `nmer` bases; the reverse primer covers the `nmer` bases before
//!   and including the stop codon. Missing codons are rejected.
//! - **Windowed**: the first/last `nmer` bases, with no codon checks.
//!
//! Reverse tags are handled per layout: the codon-aware reverse primer
//! carries the reverse complement of the tag (the tag is given as it reads on
//! the product's top strand), the windowed reverse primer carries the tag
//! reversed only. All primers are returned 5'→3'.
//!
//! # Examples
//! ```
//! use primerkit::primer::construct_forward_primer;
//! assert_eq!(construct_forward_primer("ATGAAACCC", 3, "GAATTC", "").unwrap(), "GAATTCATGAAA");
//! ```
use crate::error::{PrimerError, Result};
use crate::seq::{self, CODON_LEN};

/// How much of the target is consumed by a primer's annealing region.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum PrimerMode {
    /// Start/stop codon plus `nmer` bases; codons are validated.
    #[default]
    Codon,
    /// Exactly `nmer` bases; no codon awareness.
    Windowed,
}

impl PrimerMode {
    /// Bases taken by the terminal codon on each end of the target (3 or 0).
    pub fn flank(self) -> usize {
        match self {
            PrimerMode::Codon => CODON_LEN,
            PrimerMode::Windowed => 0,
        }
    }
}

/// 5' additions for the forward and reverse primers.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PrimerEnds {
    pub forward_site: String,
    pub reverse_site: String,
    pub forward_tag: String,
    pub reverse_tag: String,
}

/// Second target and the sequence inserted between the two targets.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Bridge<'a> {
    pub seq_b: &'a str,
    pub mutation: &'a str,
}

/// Single-point mutation: 1-based codon position and replacement sequence.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MutationSpec {
    pub position: usize,
    pub replacement: String,
}

/// A mutation primer and its reverse complement.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MutationPair {
    /// Bridge primer reading along the top strand.
    pub forward: String,
    /// Reverse complement of [`MutationPair::forward`].
    pub reverse: String,
}

impl MutationPair {
    fn from_forward(forward: String) -> Self {
        let reverse = seq::reverse_complement(&forward);
        MutationPair { forward, reverse }
    }
}

/// Output of [`construct_primers`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PrimerSet {
    pub forward: String,
    /// Present only when two targets are bridged by a mutation.
    pub mutation: Option<MutationPair>,
    pub reverse: String,
}

/// Bases needed for a `flank + nmer` window, checked against `seq`.
///
/// Overflowing sums are reported as out of range rather than wrapping.
fn window(what: &'static str, seq: &str, flank: usize, nmer: usize) -> Result<usize> {
    flank
        .checked_add(nmer)
        .filter(|needed| *needed <= seq.len())
        .ok_or_else(|| PrimerError::out_of_range(what, flank.saturating_add(nmer), seq.len()))
}

fn slice<'a>(what: &'static str, seq: &'a str, start: usize, end: usize) -> Result<&'a str> {
    seq.get(start..end)
        .ok_or_else(|| PrimerError::out_of_range(what, end, seq.len()))
}

/// Forward primer from the first `nmer` bases of `sequence`.
pub fn construct_windowed_forward_primer(
    sequence: &str,
    nmer: usize,
    re_site: &str,
    tag: &str,
) -> Result<String> {
    let needed = window("forward primer window", sequence, 0, nmer)?;
    let anneal = slice("forward primer window", sequence, 0, needed)?;
    Ok(format!("{re_site}{tag}{anneal}"))
}

/// Reverse primer from the last `nmer` bases of `sequence`.
///
/// The tag is only reversed here, not complemented: it is supplied as it
/// reads 3'→5' on the bottom strand.
pub fn construct_windowed_reverse_primer(
    sequence: &str,
    nmer: usize,
    re_site: &str,
    tag: &str,
) -> Result<String> {
    let needed = window("reverse primer window", sequence, 0, nmer)?;
    let anneal = slice("reverse primer window", sequence, sequence.len() - needed, sequence.len())?;
    Ok(format!("{re_site}{}{}", seq::reverse(tag), seq::reverse_complement(anneal)))
}

/// Codon-aware forward primer: `re_site + tag + ATG + next nmer bases`.
///
/// Fails with [`PrimerError::Format`] unless `sequence` starts with `ATG`.
pub fn construct_forward_primer(
    sequence: &str,
    nmer: usize,
    re_site: &str,
    tag: &str,
) -> Result<String> {
    if !seq::has_start_codon(sequence) {
        return Err(PrimerError::Format {
            expected: "start codon ATG at the 5' end",
            found: sequence.chars().take(CODON_LEN).collect(),
        });
    }
    let needed = window("forward primer window", sequence, CODON_LEN, nmer)?;
    let anneal = slice("forward primer window", sequence, 0, needed)?;
    Ok(format!("{re_site}{tag}{anneal}"))
}

/// Codon-aware reverse primer: `re_site + revcomp(tag) + revcomp(nmer bases + stop codon)`.
///
/// Fails with [`PrimerError::Format`] unless `sequence` ends with TAA, TAG or TGA.
pub fn construct_reverse_primer(
    sequence: &str,
    nmer: usize,
    re_site: &str,
    tag: &str,
) -> Result<String> {
    if !seq::has_stop_codon(sequence) {
        let tail = sequence.len().saturating_sub(CODON_LEN);
        return Err(PrimerError::Format {
            expected: "stop codon TAA, TAG or TGA at the 3' end",
            found: sequence.get(tail..).unwrap_or(sequence).to_string(),
        });
    }
    let needed = window("reverse primer window", sequence, CODON_LEN, nmer)?;
    let anneal = slice("reverse primer window", sequence, sequence.len() - needed, sequence.len())?;
    Ok(format!("{re_site}{}{}", seq::reverse_complement(tag), seq::reverse_complement(anneal)))
}

/// Forward primer in the requested layout.
pub fn forward_primer(
    mode: PrimerMode,
    sequence: &str,
    nmer: usize,
    re_site: &str,
    tag: &str,
) -> Result<String> {
    match mode {
        PrimerMode::Codon => construct_forward_primer(sequence, nmer, re_site, tag),
        PrimerMode::Windowed => construct_windowed_forward_primer(sequence, nmer, re_site, tag),
    }
}

/// Reverse primer in the requested layout.
pub fn reverse_primer(
    mode: PrimerMode,
    sequence: &str,
    nmer: usize,
    re_site: &str,
    tag: &str,
) -> Result<String> {
    match mode {
        PrimerMode::Codon => construct_reverse_primer(sequence, nmer, re_site, tag),
        PrimerMode::Windowed => construct_windowed_reverse_primer(sequence, nmer, re_site, tag),
    }
}

/// Bridge primers joining the end of `seq_a` to the start of `seq_b` through `mutation`.
///
/// The last `flank` bases of `seq_a` and the first `flank` bases of `seq_b`
/// (the terminal codons in codon mode) are dropped; they are not checked.
pub fn construct_mutation_primers(
    seq_a: &str,
    seq_b: &str,
    nmer: usize,
    mutation: &str,
    mode: PrimerMode,
) -> Result<MutationPair> {
    let flank = mode.flank();
    let needed_a = window("mutation primer window on sequence A", seq_a, flank, nmer)?;
    let needed_b = window("mutation primer window on sequence B", seq_b, flank, nmer)?;
    let left = slice(
        "mutation primer window on sequence A",
        seq_a,
        seq_a.len() - needed_a,
        seq_a.len() - flank,
    )?;
    let right = slice("mutation primer window on sequence B", seq_b, flank, needed_b)?;
    Ok(MutationPair::from_forward(format!("{left}{mutation}{right}")))
}

/// Point-mutation primers: `left[-nmer:] + mutation + right[..nmer]` and its reverse complement.
pub fn construct_mutation_primers_single(
    left: &str,
    right: &str,
    nmer: usize,
    mutation: &str,
) -> Result<MutationPair> {
    let up_len = window("sequence upstream of the mutated codon", left, 0, nmer)?;
    let down_len = window("sequence downstream of the mutated codon", right, 0, nmer)?;
    let up = slice(
        "sequence upstream of the mutated codon",
        left,
        left.len() - up_len,
        left.len(),
    )?;
    let down = slice("sequence downstream of the mutated codon", right, 0, down_len)?;
    Ok(MutationPair::from_forward(format!("{up}{mutation}{down}")))
}

/// Split `sequence` around the codon at 1-based `position`, returning the bases before and
/// after it.
pub fn split_at_codon(sequence: &str, position: usize) -> Result<(&str, &str)> {
    if position == 0 {
        return Err(PrimerError::Validation(
            "mutation position is 1-based and must be at least 1".into(),
        ));
    }
    let start = (position - 1)
        .checked_mul(CODON_LEN)
        .ok_or_else(|| PrimerError::out_of_range("mutated codon", usize::MAX, sequence.len()))?;
    let end = window("mutated codon", sequence, start, CODON_LEN)?;
    let left = slice("mutated codon", sequence, 0, start)?;
    let right = slice("mutated codon", sequence, end, sequence.len())?;
    Ok((left, right))
}

/// Replace the codon named by `spec` and build the mutation primer pair around it.
pub fn construct_mutation_primers_at(
    sequence: &str,
    spec: &MutationSpec,
    nmer: usize,
) -> Result<MutationPair> {
    let (left, right) = split_at_codon(sequence, spec.position)?;
    log::debug!(
        "mutating codon {} ({} bases upstream, {} downstream)",
        spec.position,
        left.len(),
        right.len()
    );
    construct_mutation_primers_single(left, right, nmer, &spec.replacement)
}

/// Build the full primer set for one target, or for two targets joined by a bridge.
///
/// With a bridge, the forward primer comes from `sequence` (target A) and the
/// reverse primer from [`Bridge::seq_b`].
pub fn construct_primers(
    sequence: &str,
    bridge: Option<Bridge<'_>>,
    nmer: usize,
    ends: &PrimerEnds,
    mode: PrimerMode,
) -> Result<PrimerSet> {
    let forward = forward_primer(mode, sequence, nmer, &ends.forward_site, &ends.forward_tag)?;
    match bridge {
        None => {
            let reverse =
                reverse_primer(mode, sequence, nmer, &ends.reverse_site, &ends.reverse_tag)?;
            Ok(PrimerSet { forward, mutation: None, reverse })
        }
        Some(b) => {
            let reverse =
                reverse_primer(mode, b.seq_b, nmer, &ends.reverse_site, &ends.reverse_tag)?;
            let mutation = construct_mutation_primers(sequence, b.seq_b, nmer, b.mutation, mode)?;
            Ok(PrimerSet { forward, mutation: Some(mutation), reverse })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ends() -> PrimerEnds {
        PrimerEnds {
            forward_site: "GAATTC".into(),
            reverse_site: "CTCGAG".into(),
            forward_tag: String::new(),
            reverse_tag: String::new(),
        }
    }

    #[test]
    fn codon_forward_includes_start_codon_and_nmer() {
        assert_eq!(construct_forward_primer("ATGAAACCC", 3, "GAATTC", "").unwrap(), "GAATTCATGAAA");
        assert_eq!(construct_forward_primer("ATGAAACCC", 3, "GAATTC", "CAC").unwrap(), "GAATTCCACATGAAA");
    }

    #[test]
    fn codon_forward_requires_atg() {
        let err = construct_forward_primer("TTGAAACCC", 3, "GAATTC", "").unwrap_err();
        assert!(matches!(err, PrimerError::Format { ref found, .. } if found == "TTG"));
    }

    #[test]
    fn codon_reverse_covers_stop_codon() {
        // last 3 + stop = "CCCTAA" -> revcomp "TTAGGG"
        assert_eq!(construct_reverse_primer("ATGAAACCCTAA", 3, "CTCGAG", "").unwrap(), "CTCGAGTTAGGG");
    }

    #[test]
    fn codon_reverse_reverse_complements_tag() {
        let p = construct_reverse_primer("ATGAAACCCTGA", 3, "CTCGAG", "CATCAC").unwrap();
        assert_eq!(p, "CTCGAGGTGATGTCAGGG");
    }

    #[test]
    fn codon_reverse_requires_stop() {
        let err = construct_reverse_primer("ATGAAACCCTTT", 3, "CTCGAG", "").unwrap_err();
        assert!(matches!(err, PrimerError::Format { ref found, .. } if found == "TTT"));
    }

    #[test]
    fn nmer_longer_than_target_is_out_of_range() {
        let err = construct_forward_primer("ATGAAA", 4, "", "").unwrap_err();
        assert_eq!(err, PrimerError::OutOfRange { what: "forward primer window", requested: 7, available: 6 });
        assert!(matches!(construct_windowed_reverse_primer("ACG", 4, "", ""), Err(PrimerError::OutOfRange { .. })));
    }

    #[test]
    fn windowed_primers_ignore_codons() {
        assert_eq!(construct_windowed_forward_primer("CCCAAATTT", 3, "GG", "A").unwrap(), "GGACCC");
        assert_eq!(construct_windowed_reverse_primer("CCCAAAGTT", 3, "GG", "").unwrap(), "GGAAC");
    }

    #[test]
    fn windowed_reverse_reverses_tag_without_complementing() {
        let p = construct_windowed_reverse_primer("CCCAAAGTT", 3, "GG", "CAT").unwrap();
        assert_eq!(p, "GGTACAAC");
    }

    #[test]
    fn huge_nmer_is_out_of_range_not_overflow() {
        let err = construct_forward_primer("ATGAAACCCTAA", usize::MAX, "GAATTC", "").unwrap_err();
        assert_eq!(
            err,
            PrimerError::OutOfRange { what: "forward primer window", requested: usize::MAX, available: 12 }
        );
        assert!(matches!(
            construct_reverse_primer("ATGAAACCCTAA", usize::MAX, "", ""),
            Err(PrimerError::OutOfRange { .. })
        ));
        assert!(matches!(
            construct_windowed_reverse_primer("ACGT", usize::MAX, "", ""),
            Err(PrimerError::OutOfRange { .. })
        ));
        assert!(matches!(
            construct_mutation_primers("ATGAAATAA", "ATGAAATAA", usize::MAX, "CTT", PrimerMode::Codon),
            Err(PrimerError::OutOfRange { .. })
        ));
        assert!(matches!(
            construct_mutation_primers_single("ATG", "AAA", usize::MAX, "CTT"),
            Err(PrimerError::OutOfRange { .. })
        ));
    }

    #[test]
    fn huge_position_is_out_of_range_not_wrapped() {
        // (pos - 1) * 3 would wrap to 2 on a 64-bit target
        let pos = usize::MAX / 3 + 2;
        assert!(matches!(split_at_codon("ATGAAATTTCCC", pos), Err(PrimerError::OutOfRange { .. })));
        assert!(matches!(split_at_codon("ATGAAATTTCCC", usize::MAX), Err(PrimerError::OutOfRange { .. })));
        let spec = MutationSpec { position: pos, replacement: "CTT".into() };
        assert!(matches!(
            construct_mutation_primers_at("ATGAAATTTCCC", &spec, 1),
            Err(PrimerError::OutOfRange { .. })
        ));
    }

    #[test]
    fn bridge_trims_terminal_codons() {
        let seq_a = "ATGGGGCCCATG";
        let seq_b = "TAAGGGTTTCCC";
        let pair = construct_mutation_primers(seq_a, seq_b, 3, "CTT", PrimerMode::Codon).unwrap();
        assert_eq!(pair.forward, "CCCCTTGGG");
        assert_eq!(pair.reverse, seq::reverse_complement("CCCCTTGGG"));
    }

    #[test]
    fn bridge_in_windowed_mode_keeps_terminal_bases() {
        let pair = construct_mutation_primers("AAACCC", "GGGTTT", 3, "A", PrimerMode::Windowed).unwrap();
        assert_eq!(pair.forward, "CCCAGGG");
    }

    #[test]
    fn point_mutation_splits_on_codon() {
        let seq = "ATGAAATTTCCC";
        let (l, r) = split_at_codon(seq, 3).unwrap();
        assert_eq!((l, r), ("ATGAAA", "CCC"));
        let spec = MutationSpec { position: 3, replacement: "CTT".into() };
        let pair = construct_mutation_primers_at(seq, &spec, 3).unwrap();
        assert_eq!(pair.forward, "AAACTTCCC");
        assert_eq!(pair.reverse, "GGGAAGTTT");
    }

    #[test]
    fn point_mutation_position_bounds() {
        assert!(matches!(split_at_codon("ATGAAA", 0), Err(PrimerError::Validation(_))));
        assert!(matches!(split_at_codon("ATGAAA", 3), Err(PrimerError::OutOfRange { .. })));
        assert!(split_at_codon("ATGAAA", 2).is_ok());
        let spec = MutationSpec { position: 2, replacement: "GCT".into() };
        assert!(matches!(construct_mutation_primers_at("ATGAAACCC", &spec, 4), Err(PrimerError::OutOfRange { .. })));
    }

    #[test]
    fn single_target_primer_set() {
        let set = construct_primers("ATGAAACCCGGGTAA", None, 3, &ends(), PrimerMode::Codon).unwrap();
        assert_eq!(set.forward, "GAATTCATGAAA");
        assert_eq!(set.reverse, "CTCGAGTTACCC");
        assert!(set.mutation.is_none());
    }

    #[test]
    fn bridged_primer_set_uses_both_targets() {
        let bridge = Bridge { seq_b: "ATGTTTGGGTGA", mutation: "GCT" };
        let set = construct_primers("ATGAAACCCTAA", Some(bridge), 3, &ends(), PrimerMode::Codon).unwrap();
        assert_eq!(set.forward, "GAATTCATGAAA");
        assert_eq!(set.reverse, "CTCGAGTCACCC");
        let m = set.mutation.unwrap();
        assert_eq!(m.forward, "CCCGCTTTT");
        assert_eq!(m.reverse, "AAAAGCGGG");
    }
}
