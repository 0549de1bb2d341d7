//! Coding sequences for common epitope and affinity tags.
//!
//! Codons follow the widely distributed *E. coli* expression-vector
//! encodings; any synonymous encoding works equally well for primer design.

use crate::site::{Provenance, SiteKind, SiteRecord};

const ADDGENE: Provenance = Provenance {
    source: "Addgene molecular biology reference: protein tags",
    url: "https://www.addgene.org/mol-bio-reference/protein-tags/",
};

const fn tag(name: &'static str, sequence: &'static str, note: &'static str) -> SiteRecord {
    SiteRecord { name, kind: SiteKind::Tag, sequence, note, provenance: ADDGENE }
}

/// Hexahistidine, HHHHHH.
pub const HIS6: SiteRecord = tag("His6", "CATCACCATCACCATCAC", "HHHHHH");
/// FLAG epitope, DYKDDDDK.
pub const FLAG: SiteRecord = tag("FLAG", "GATTACAAGGATGACGACGATAAG", "DYKDDDDK");
/// Influenza hemagglutinin epitope, YPYDVPDYA.
pub const HA: SiteRecord = tag("HA", "TACCCATACGATGTTCCAGATTACGCT", "YPYDVPDYA");
/// c-Myc epitope, EQKLISEEDL.
pub const MYC: SiteRecord = tag("Myc", "GAACAAAAACTCATCTCAGAAGAGGATCTG", "EQKLISEEDL");
/// Strep-tag II, WSHPQFEK.
pub const STREP_II: SiteRecord = tag("StrepII", "TGGAGCCACCCGCAGTTCGAAAAA", "WSHPQFEK");

pub const TAGS: &[SiteRecord] = &[HIS6, FLAG, HA, MYC, STREP_II];
