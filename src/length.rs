//! PCR product length prediction.
//!
//! The product is never assembled: lengths of the primers and of the target
//! stretches between their annealing windows are summed instead.
use crate::error::{PrimerError, Result};
use crate::primer::PrimerMode;

/// Bases of `target` not covered by the primer windows at either end.
///
/// Each end consumes `flank + nmer` bases (start/stop codon plus the `nmer`
/// window in codon mode). Overlapping windows, or windows too large to
/// count, are an error.
pub fn interior_len(
    what: &'static str,
    target: &str,
    nmer: usize,
    mode: PrimerMode,
) -> Result<usize> {
    let covered = mode.flank().checked_add(nmer).and_then(|end| end.checked_mul(2));
    covered
        .and_then(|c| target.len().checked_sub(c))
        .ok_or_else(|| PrimerError::out_of_range(what, covered.unwrap_or(usize::MAX), target.len()))
}

/// Length of `forward + target interior + reverse` for a single target.
///
/// # Examples
/// ```
/// use primerkit::{length::product_length, primer::PrimerMode};
/// let n = product_length("ATGAAAGGGCCCTAA", "GAATTCATGAAA", "CTCGAGTTACCC", 3, PrimerMode::Codon).unwrap();
/// assert_eq!(n, 27);
/// ```
pub fn product_length(
    target: &str,
    forward: &str,
    reverse: &str,
    nmer: usize,
    mode: PrimerMode,
) -> Result<usize> {
    let interior = interior_len("target", target, nmer, mode)?;
    Ok(forward.len() + interior + reverse.len())
}

/// Length of `forward + A interior + mutation primer + B interior + reverse`.
pub fn bridged_product_length(
    seq_a: &str,
    seq_b: &str,
    forward: &str,
    mutation_primer: &str,
    reverse: &str,
    nmer: usize,
    mode: PrimerMode,
) -> Result<usize> {
    let a = interior_len("sequence A", seq_a, nmer, mode)?;
    let b = interior_len("sequence B", seq_b, nmer, mode)?;
    Ok(forward.len() + a + mutation_primer.len() + b + reverse.len())
}
