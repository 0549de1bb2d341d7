//! Core types for the built-in **restriction site** and **tag** registry.
//!
//! Records are `&'static str` constants compiled into the binary so that
//! command-line flags can name a site (`EcoRI`) or tag (`His6`) instead of
//! spelling out its sequence.
//!
//! # Provenance
//! Every [`SiteRecord`] carries a [`Provenance`] entry naming where the
//! sequence was taken from.
use core::fmt;

/// Category of a registry record.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SiteKind {
    /// Type II restriction enzyme recognition sequence (top strand, 5'→3').
    RestrictionSite,
    /// Epitope or affinity tag coding sequence, in frame, without start/stop codons.
    Tag,
}

impl SiteKind {
    /// Stable lower-case label for tables.
    pub fn as_str(self) -> &'static str {
        match self {
            SiteKind::RestrictionSite => "restriction_site",
            SiteKind::Tag => "tag",
        }
    }
}

impl fmt::Display for SiteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

/// Where a sequence string came from.
#[derive(Clone, Debug)]
pub struct Provenance {
    /// Human-readable source.
    pub source: &'static str,
    /// Public URL for the source.
    pub url: &'static str,
}

/// A named sequence with its category and provenance.
#[derive(Clone, Debug)]
pub struct SiteRecord {
    /// Short stable name (e.g. `"EcoRI"`, `"FLAG"`).
    pub name: &'static str,
    pub kind: SiteKind,
    /// Uppercase DNA.
    pub sequence: &'static str,
    /// Free-text note (cut position, encoded peptide).
    pub note: &'static str,
    pub provenance: Provenance,
}
