//! Error taxonomy shared by every primer operation.
//!
//! All errors are fatal to the current invocation: nothing is retried and no
//! partial result is returned.

/// Errors returned by primer construction, Tm estimation and length prediction.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PrimerError {
    /// Missing or mismatched argument combinations (e.g. a mutation without a second sequence).
    #[error("invalid arguments: {0}")]
    Validation(String),
    /// `nmer` (or a mutation position) reaches past the available sequence.
    #[error("{what}: requested {requested} bases but only {available} are available")]
    OutOfRange { what: &'static str, requested: usize, available: usize },
    /// A codon-aware primer was requested on a sequence without the expected start/stop codon.
    #[error("expected {expected}, found {found:?}")]
    Format { expected: &'static str, found: String },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PrimerError>;

impl PrimerError {
    pub(crate) fn out_of_range(what: &'static str, requested: usize, available: usize) -> Self {
        PrimerError::OutOfRange { what, requested, available }
    }
}
