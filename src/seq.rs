//! Nucleotide string transforms used by primer construction.
//!
//! Transforms are byte-wise over ASCII and never validate their input:
//! symbols other than `A`, `C`, `G`, `T` (either case) pass through unchanged.
//!
//! # Examples
//! ```
//! use primerkit::seq::{reverse_complement, normalize};
//! assert_eq!(reverse_complement("ATGC"), "GCAT");
//! assert_eq!(normalize(" atg ccc\n"), "ATGCCC");
//! ```
use bio::alphabets::dna;

/// Length of a codon in bases.
pub const CODON_LEN: usize = 3;

/// Canonical start codon.
pub const START_CODON: &str = "ATG";

/// Standard-code stop codons (ochre, amber, opal).
pub const STOP_CODONS: [&str; 3] = ["TAA", "TAG", "TGA"];

/// Return `seq` with its character order inverted.
pub fn reverse(seq: &str) -> String {
    seq.chars().rev().collect()
}

/// Watson–Crick complement of a single base, preserving case.
#[inline]
pub fn complement_base(b: u8) -> u8 {
    match b {
        b'A' => b'T',
        b'T' => b'A',
        b'C' => b'G',
        b'G' => b'C',
        b'a' => b't',
        b't' => b'a',
        b'c' => b'g',
        b'g' => b'c',
        other => other,
    }
}

/// Base-for-base complement (A↔T, C↔G); other symbols are left as-is.
pub fn complement(seq: &str) -> String {
    seq.chars()
        .map(|c| if c.is_ascii() { complement_base(c as u8) as char } else { c })
        .collect()
}

/// `reverse(complement(seq))`.
pub fn reverse_complement(seq: &str) -> String {
    reverse(&complement(seq))
}

/// Upper-case `raw` and drop all whitespace.
///
/// Every sequence-like command-line input goes through this before use.
pub fn normalize(raw: &str) -> String {
    raw.split_whitespace().map(|w| w.to_uppercase()).collect()
}

/// `true` if every symbol of `seq` belongs to the IUPAC DNA alphabet.
pub fn is_dna(seq: &str) -> bool {
    dna::iupac_alphabet().is_word(seq.as_bytes())
}

/// `true` if `seq` begins with [`START_CODON`].
pub fn has_start_codon(seq: &str) -> bool {
    seq.starts_with(START_CODON)
}

/// `true` if `seq` ends with one of [`STOP_CODONS`].
pub fn has_stop_codon(seq: &str) -> bool {
    STOP_CODONS.iter().any(|c| seq.ends_with(c))
}
