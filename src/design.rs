//! Caller-side validation and the end-to-end `all` pipeline.
//!
//! Command-line flags are folded into [`PrimerDesign`] (or [`LengthQuery`]);
//! the argument combinations the primer functions do not check themselves are
//! validated here, before any sequence work happens.
use crate::error::{PrimerError, Result};
use crate::length;
use crate::primer::{self, Bridge, PrimerEnds, PrimerMode, PrimerSet};
use crate::scan::{self, SiteHit};
use crate::seq;
use crate::temp::TmEstimate;

/// Treat empty strings as absent, like unset flags.
fn present(s: &Option<String>) -> Option<&str> {
    s.as_deref().filter(|v| !v.is_empty())
}

/// Log a warning when `sequence` contains symbols outside the IUPAC DNA alphabet.
pub fn check_alphabet(label: &str, sequence: &str) {
    if !seq::is_dna(sequence) {
        log::warn!("{label} contains non-DNA symbols; they are kept as-is");
    }
}

/// Pair a second target with its mutation: both or neither must be given.
pub fn pair_bridge<'a>(
    seq_b: Option<&'a str>,
    mutation: Option<&'a str>,
) -> Result<Option<Bridge<'a>>> {
    match (seq_b, mutation) {
        (None, None) => Ok(None),
        (Some(seq_b), Some(mutation)) => Ok(Some(Bridge { seq_b, mutation })),
        (None, Some(_)) => Err(PrimerError::Validation(
            "for mutation primers, sequence B must be provided".into(),
        )),
        (Some(_), None) => Err(PrimerError::Validation(
            "a mutation sequence must be provided when sequence B is given".into(),
        )),
    }
}

/// Inputs of the `primer` and `all` commands, already normalised.
#[derive(Clone, Debug, Default)]
pub struct PrimerDesign {
    pub seq: String,
    pub seq_b: Option<String>,
    pub mutation: Option<String>,
    pub nmer: usize,
    pub ends: PrimerEnds,
    pub mode: PrimerMode,
}

/// Everything the `all` command prints.
#[derive(Clone, Debug, PartialEq)]
pub struct DesignReport {
    pub primers: PrimerSet,
    pub forward_tm: TmEstimate,
    pub reverse_tm: TmEstimate,
    pub product_len: usize,
}

impl PrimerDesign {
    /// The validated bridge, if this design joins two targets.
    pub fn bridge(&self) -> Result<Option<Bridge<'_>>> {
        pair_bridge(present(&self.seq_b), present(&self.mutation))
    }

    /// Forward/reverse primers (and the mutation pair when bridged).
    pub fn primers(&self) -> Result<PrimerSet> {
        let bridge = self.bridge()?;
        log::debug!(
            "designing {:?} primers: nmer={}, target={} bp, bridged={}",
            self.mode,
            self.nmer,
            self.seq.len(),
            bridge.is_some()
        );
        primer::construct_primers(&self.seq, bridge, self.nmer, &self.ends, self.mode)
    }

    /// Occurrences of either restriction site inside the target(s).
    pub fn internal_sites(&self) -> Result<Vec<(&'static str, SiteHit)>> {
        let sites = [self.ends.forward_site.as_str(), self.ends.reverse_site.as_str()];
        let mut out: Vec<(&'static str, SiteHit)> = scan::find_internal_sites(&self.seq, &sites)?
            .into_iter()
            .map(|h| ("sequence A", h))
            .collect();
        if let Some(b) = present(&self.seq_b) {
            let hits = scan::find_internal_sites(b, &sites)?;
            out.extend(hits.into_iter().map(|h| ("sequence B", h)));
        }
        Ok(out)
    }

    /// Primers, their Tm/Ta estimates and the predicted product length.
    pub fn run(&self) -> Result<DesignReport> {
        let primers = self.primers()?;
        let forward_tm = TmEstimate::for_primer(&primers.forward, self.nmer)?;
        let reverse_tm = TmEstimate::for_primer(&primers.reverse, self.nmer)?;
        let product_len = match (&primers.mutation, present(&self.seq_b)) {
            (Some(m), Some(seq_b)) => length::bridged_product_length(
                &self.seq,
                seq_b,
                &primers.forward,
                &m.forward,
                &primers.reverse,
                self.nmer,
                self.mode,
            )?,
            _ => length::product_length(
                &self.seq,
                &primers.forward,
                &primers.reverse,
                self.nmer,
                self.mode,
            )?,
        };
        Ok(DesignReport { primers, forward_tm, reverse_tm, product_len })
    }
}

/// Inputs of the `len` command, already normalised.
#[derive(Clone, Debug, Default)]
pub struct LengthQuery {
    pub seq: String,
    pub seq_b: Option<String>,
    pub mutation_primer: Option<String>,
    pub forward: String,
    pub reverse: String,
    pub nmer: usize,
    pub mode: PrimerMode,
}

impl LengthQuery {
    /// Predicted product length; a mutation primer is required iff sequence B is given.
    pub fn product_length(&self) -> Result<usize> {
        match (present(&self.seq_b), present(&self.mutation_primer)) {
            (None, None) => length::product_length(
                &self.seq,
                &self.forward,
                &self.reverse,
                self.nmer,
                self.mode,
            ),
            (Some(seq_b), Some(m)) => length::bridged_product_length(
                &self.seq,
                seq_b,
                &self.forward,
                m,
                &self.reverse,
                self.nmer,
                self.mode,
            ),
            (None, Some(_)) => Err(PrimerError::Validation(
                "a mutation primer should not be provided when only one sequence is given".into(),
            )),
            (Some(_), None) => Err(PrimerError::Validation(
                "a mutation primer must be provided when two sequences are given".into(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn design() -> PrimerDesign {
        PrimerDesign {
            seq: "ATGAAACCCGGGTTTTAA".into(),
            nmer: 3,
            ends: PrimerEnds {
                forward_site: "GAATTC".into(),
                reverse_site: "CTCGAG".into(),
                ..PrimerEnds::default()
            },
            ..PrimerDesign::default()
        }
    }

    #[test]
    fn mutation_without_second_sequence_is_rejected() {
        let d = PrimerDesign { mutation: Some("CTT".into()), ..design() };
        assert!(matches!(d.primers(), Err(PrimerError::Validation(_))));
    }

    #[test]
    fn second_sequence_without_mutation_is_rejected() {
        let d = PrimerDesign { seq_b: Some("ATGAAATAA".into()), ..design() };
        assert!(matches!(d.run(), Err(PrimerError::Validation(_))));
    }

    #[test]
    fn empty_flags_count_as_absent() {
        let d = PrimerDesign { seq_b: Some(String::new()), mutation: Some(String::new()), ..design() };
        assert!(d.bridge().unwrap().is_none());
    }

    #[test]
    fn run_chains_primers_tm_and_length() {
        let r = design().run().unwrap();
        assert_eq!(r.primers.forward, "GAATTCATGAAA");
        assert_eq!(r.primers.reverse, "CTCGAGTTAAAA");
        // ATG|AAA ... last 3 bases "AAA" -> 6; reverse "AAA" -> 6
        assert_eq!(r.forward_tm, TmEstimate { melting: 6.0, annealing: 1.0 });
        assert_eq!(r.reverse_tm.melting, 6.0);
        // 12 + (18 - 12) + 12
        assert_eq!(r.product_len, 30);
    }

    #[test]
    fn bridged_run_counts_mutation_primer() {
        let d = PrimerDesign {
            seq_b: Some("ATGCCCAAAGGGTGA".into()),
            mutation: Some("GCTGCT".into()),
            ..design()
        };
        let r = d.run().unwrap();
        let m = r.primers.mutation.as_ref().unwrap();
        assert_eq!(m.forward, "TTTGCTGCTCCC");
        // 12 + (18-12) + 12 + (15-12) + 12
        assert_eq!(r.product_len, 45);
    }

    #[test]
    fn internal_sites_are_reported_per_target() {
        let d = PrimerDesign {
            seq: "ATGGAATTCAAACCCTAA".into(),
            seq_b: Some("ATGCTCGAGTGA".into()),
            mutation: Some("A".into()),
            ..design()
        };
        let hits = d.internal_sites().unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].0, "sequence A");
        assert_eq!(hits[0].1.site, "GAATTC");
        assert_eq!(hits[1].0, "sequence B");
        assert_eq!(hits[1].1.site, "CTCGAG");
    }

    #[test]
    fn length_query_pairing() {
        let q = LengthQuery {
            seq: "ATGAAACCCTAA".into(),
            forward: "GAATTCATGAAA".into(),
            reverse: "CTCGAGTTAGGG".into(),
            nmer: 3,
            ..LengthQuery::default()
        };
        assert_eq!(q.product_length().unwrap(), 24);
        let lonely = LengthQuery { mutation_primer: Some("ACGT".into()), ..q.clone() };
        assert!(matches!(lonely.product_length(), Err(PrimerError::Validation(_))));
        let missing = LengthQuery { seq_b: Some("ATGAAACCCTAA".into()), ..q.clone() };
        assert!(matches!(missing.product_length(), Err(PrimerError::Validation(_))));
        let both = LengthQuery { seq_b: Some("ATGAAACCCTAA".into()), mutation_primer: Some("ACGT".into()), ..q };
        assert_eq!(both.product_length().unwrap(), 28);
    }
}
