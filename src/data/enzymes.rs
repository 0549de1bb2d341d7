//! Recognition sequences for restriction enzymes commonly used in
//! directional cloning.
//!
//! Source: REBASE enzyme pages. Sites are the top strand, 5'→3', with the cut
//! position marked by `^` in each note.

use crate::site::{Provenance, SiteKind, SiteRecord};

const REBASE: Provenance = Provenance {
    source: "REBASE, The Restriction Enzyme Database",
    url: "http://rebase.neb.com/rebase/rebase.html",
};

const fn site(name: &'static str, sequence: &'static str, note: &'static str) -> SiteRecord {
    SiteRecord { name, kind: SiteKind::RestrictionSite, sequence, note, provenance: REBASE }
}

pub const ECORI: SiteRecord = site("EcoRI", "GAATTC", "G^AATTC, 5' overhang");
pub const BAMHI: SiteRecord = site("BamHI", "GGATCC", "G^GATCC, 5' overhang");
pub const HINDIII: SiteRecord = site("HindIII", "AAGCTT", "A^AGCTT, 5' overhang");
pub const XHOI: SiteRecord = site("XhoI", "CTCGAG", "C^TCGAG, 5' overhang");
pub const NDEI: SiteRecord = site("NdeI", "CATATG", "CA^TATG; contains ATG");
pub const NCOI: SiteRecord = site("NcoI", "CCATGG", "C^CATGG; contains ATG");
pub const NOTI: SiteRecord = site("NotI", "GCGGCCGC", "GC^GGCCGC, 8-cutter");
pub const XBAI: SiteRecord = site("XbaI", "TCTAGA", "T^CTAGA, Dam-sensitive");
pub const SALI: SiteRecord = site("SalI", "GTCGAC", "G^TCGAC, 5' overhang");
pub const KPNI: SiteRecord = site("KpnI", "GGTACC", "GGTAC^C, 3' overhang");
pub const SACI: SiteRecord = site("SacI", "GAGCTC", "GAGCT^C, 3' overhang");
pub const PSTI: SiteRecord = site("PstI", "CTGCAG", "CTGCA^G, 3' overhang");
pub const BGLII: SiteRecord = site("BglII", "AGATCT", "A^GATCT, BamHI-compatible ends");
pub const NHEI: SiteRecord = site("NheI", "GCTAGC", "G^CTAGC, XbaI-compatible ends");
pub const SPEI: SiteRecord = site("SpeI", "ACTAGT", "A^CTAGT, XbaI-compatible ends");

pub const ENZYMES: &[SiteRecord] = &[
    ECORI, BAMHI, HINDIII, XHOI, NDEI, NCOI, NOTI, XBAI, SALI, KPNI, SACI, PSTI, BGLII, NHEI, SPEI,
];
