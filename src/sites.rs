//! Registry lookups over the built-in restriction sites and tags.
//!
//! Names are case-insensitive. Anything that is not a registry name is
//! treated as a literal sequence and normalised.
use crate::data::{enzymes::ENZYMES, tags::TAGS};
use crate::seq;
use crate::site::{SiteKind, SiteRecord};

/// All restriction-site records, in declaration order.
pub fn list_enzymes() -> &'static [SiteRecord] { ENZYMES }

/// All tag records, in declaration order.
pub fn list_tags() -> &'static [SiteRecord] { TAGS }

/// Look up a record of the given kind by name.
///
/// # Examples
/// ```
/// use primerkit::{sites::get_site, site::SiteKind};
/// assert_eq!(get_site("ecori", SiteKind::RestrictionSite).unwrap().sequence, "GAATTC");
/// assert!(get_site("EcoRI", SiteKind::Tag).is_none());
/// ```
pub fn get_site(name: &str, kind: SiteKind) -> Option<&'static SiteRecord> {
    let pool = match kind {
        SiteKind::RestrictionSite => ENZYMES,
        SiteKind::Tag => TAGS,
    };
    pool.iter().find(|r| r.name.eq_ignore_ascii_case(name.trim()))
}

/// Resolve a command-line value to a sequence: registry name or literal.
///
/// Registry names win over literals, so a value such as `HA` (also valid
/// IUPAC DNA) always resolves to the registry sequence; a notice is logged
/// when that happens.
pub fn resolve(raw: &str, kind: SiteKind) -> String {
    match get_site(raw, kind) {
        Some(r) => {
            if seq::is_dna(&seq::normalize(raw)) {
                log::warn!(
                    "{:?} is also a valid IUPAC sequence; using registry {} {} ({})",
                    raw.trim(),
                    kind,
                    r.name,
                    r.sequence
                );
            } else {
                log::debug!("resolved {} {:?} to {}", kind, raw.trim(), r.sequence);
            }
            r.sequence.to_string()
        }
        None => seq::normalize(raw),
    }
}

/// `(name, kind, sequence, note, source, url)` rows for every record (for CLI tables).
pub fn site_rows() -> Vec<(String, String, String, String, String, String)> {
    ENZYMES
        .iter()
        .chain(TAGS.iter())
        .map(|r| {
            (
                r.name.to_string(),
                r.kind.to_string(),
                r.sequence.to_string(),
                r.note.to_string(),
                r.provenance.source.to_string(),
                r.provenance.url.to_string(),
            )
        })
        .collect()
}
