//! Wallace-rule melting temperature over a primer's 3' terminal window.
//!
//! `Tm = 2·(A+T) + 4·(G+C)` counted over the last `nmer` bases. Only the
//! annealing part of a primer is counted; 5' additions (restriction sites,
//! tags) are excluded by choosing `nmer` accordingly.
use crate::error::{PrimerError, Result};

/// Offset subtracted from Tm to give the annealing temperature (°C).
pub const ANNEALING_OFFSET: f64 = 5.0;

/// Melting temperature (°C) of the last `nmer` bases of `primer`.
///
/// Case-insensitive; symbols other than A/C/G/T contribute nothing.
///
/// # Examples
/// ```
/// assert_eq!(primerkit::temp::calculate_tm("AAAATTTTGGGGCCCC", 4).unwrap(), 16.0);
/// ```
pub fn calculate_tm(primer: &str, nmer: usize) -> Result<f64> {
    if nmer > primer.len() {
        return Err(PrimerError::out_of_range("Tm window", nmer, primer.len()));
    }
    let window = &primer.as_bytes()[primer.len() - nmer..];
    let tm: u32 = window
        .iter()
        .map(|b| match b.to_ascii_uppercase() {
            b'A' | b'T' => 2,
            b'G' | b'C' => 4,
            _ => 0,
        })
        .sum();
    Ok(f64::from(tm))
}

/// Melting and annealing temperature for one primer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TmEstimate {
    pub melting: f64,
    pub annealing: f64,
}

impl TmEstimate {
    pub fn from_melting(melting: f64) -> Self {
        TmEstimate { melting, annealing: melting - ANNEALING_OFFSET }
    }

    /// Estimate for `primer` using its last `nmer` bases.
    pub fn for_primer(primer: &str, nmer: usize) -> Result<Self> {
        calculate_tm(primer, nmer).map(Self::from_melting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wallace_rule_counts_terminal_window() {
        assert_eq!(calculate_tm("AAAATTTTGGGGCCCC", 4).unwrap(), 16.0);
        assert_eq!(calculate_tm("AAAATTTTGGGGCCCC", 8).unwrap(), 32.0);
        assert_eq!(calculate_tm("AAAATTTTGGGGCCCC", 16).unwrap(), 48.0);
        assert_eq!(calculate_tm("acgt", 4).unwrap(), 12.0);
        assert_eq!(calculate_tm("ACGT", 0).unwrap(), 0.0);
    }

    #[test]
    fn bases_outside_window_do_not_matter() {
        let tail = "GATTACAGC";
        let base = calculate_tm(tail, tail.len()).unwrap();
        for prefix in ["", "A", "GGGGGG", "NNNN", "GAATTCCATCAC"] {
            let primer = format!("{prefix}{tail}");
            assert_eq!(calculate_tm(&primer, tail.len()).unwrap(), base);
        }
    }

    #[test]
    fn unknown_symbols_weigh_nothing() {
        assert_eq!(calculate_tm("ANNG", 4).unwrap(), 6.0);
    }

    #[test]
    fn window_longer_than_primer_fails() {
        let err = calculate_tm("ACG", 4).unwrap_err();
        assert_eq!(err, PrimerError::OutOfRange { what: "Tm window", requested: 4, available: 3 });
    }

    #[test]
    fn annealing_is_fixed_offset() {
        let est = TmEstimate::for_primer("GAATTCATGAAA", 6).unwrap();
        assert_eq!(est.melting, 14.0);
        assert_eq!(est.annealing, 9.0);
    }
}
