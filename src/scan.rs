//! Scan a target for restriction sites that would also cut the insert.
//!
//! Each site is searched on both strands (the site itself and its reverse
//! complement) in a single Aho–Corasick pass with overlapping matches.
//!
//! # Examples
//! ```
//! use primerkit::scan::find_internal_sites;
//! let hits = find_internal_sites("ATGGAATTCAAATAA", &["GAATTC", "CTCGAG"]).unwrap();
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].start, 3);
//! ```
use aho_corasick::AhoCorasick;

use crate::error::{PrimerError, Result};
use crate::seq;

/// Strand on which a site occurrence was found.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Strand { Forward, Reverse }

/// One occurrence of a restriction site inside a target.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SiteHit {
    /// The site as supplied (top strand).
    pub site: String,
    /// 0-based start within the target.
    pub start: usize,
    /// End index (exclusive).
    pub end: usize,
    pub strand: Strand,
}

/// Find every occurrence of the given sites in `target`, sorted by position.
///
/// Palindromic sites (most type II sites) are reported once per occurrence.
/// Empty sites are ignored.
pub fn find_internal_sites(target: &str, sites: &[&str]) -> Result<Vec<SiteHit>> {
    let mut patterns: Vec<String> = Vec::new();
    let mut meta: Vec<(usize, Strand)> = Vec::new();
    for (i, s) in sites.iter().enumerate() {
        if s.is_empty() || patterns.iter().any(|p| p.eq_ignore_ascii_case(s)) {
            continue;
        }
        patterns.push(s.to_string());
        meta.push((i, Strand::Forward));
        let rc = seq::reverse_complement(s);
        if !patterns.iter().any(|p| p.eq_ignore_ascii_case(&rc)) {
            patterns.push(rc);
            meta.push((i, Strand::Reverse));
        }
    }
    if patterns.is_empty() {
        return Ok(Vec::new());
    }

    let ac = AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .build(&patterns)
        .map_err(|e| PrimerError::Validation(format!("cannot build site matcher: {e}")))?;

    let mut hits: Vec<SiteHit> = ac
        .find_overlapping_iter(target)
        .map(|m| {
            let (idx, strand) = meta[m.pattern().as_usize()];
            SiteHit { site: sites[idx].to_string(), start: m.start(), end: m.end(), strand }
        })
        .collect();
    hits.sort_by_key(|h| (h.start, h.end));
    Ok(hits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palindromic_site_reported_once() {
        let hits = find_internal_sites("AAGAATTCAAGAATTC", &["GAATTC"]).unwrap();
        assert_eq!(hits.iter().map(|h| h.start).collect::<Vec<_>>(), vec![2, 10]);
        assert!(hits.iter().all(|h| h.strand == Strand::Forward));
    }

    #[test]
    fn non_palindromic_site_found_on_both_strands() {
        // BsaI-like site GGTCTC, reverse complement GAGACC
        let hits = find_internal_sites("GGTCTCAAAGAGACC", &["GGTCTC"]).unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].strand, Strand::Forward);
        assert_eq!(hits[1].strand, Strand::Reverse);
        assert_eq!(hits[1].start, 9);
    }

    #[test]
    fn duplicate_and_empty_sites_are_skipped() {
        let hits = find_internal_sites("CTCGAG", &["", "CTCGAG", "ctcgag"]).unwrap();
        assert_eq!(hits.len(), 1);
        assert!(find_internal_sites("ACGT", &[""]).unwrap().is_empty());
    }

    #[test]
    fn clean_target_has_no_hits() {
        assert!(find_internal_sites("ATGAAACCCTAA", &["GAATTC", "AAGCTT"]).unwrap().is_empty());
    }
}
