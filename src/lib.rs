#![forbid(unsafe_code)]
//! # primerkit
//!
//! PCR **primer construction** for directional cloning, **Wallace-rule** melting
//! temperature estimates and **product-length** prediction, with a small
//! documented registry of restriction sites and epitope tags.
//!
//! ## Highlights
//! - Codon-aware primers: forward primers start at `ATG`, reverse primers end
//!   on a stop codon; both are checked.
//! - Mutation primers: bridge two targets through an inserted sequence, or
//!   replace one codon of a single target.
//! - Pure functions over `&str`; nothing is stored between calls.
//!
//! ## Examples
//! ```rust
//! use primerkit::{construct_forward_primer, calculate_tm};
//! let fwd = construct_forward_primer("ATGAAACCC", 3, "GAATTC", "").unwrap();
//! assert_eq!(fwd, "GAATTCATGAAA");
//! assert_eq!(calculate_tm(&fwd, 6).unwrap(), 14.0);
//! // Registry names work wherever a site or tag is expected:
//! assert_eq!(primerkit::resolve_site("EcoRI"), "GAATTC");
//! ```

pub mod error;
pub mod seq;
pub mod primer;
pub mod temp;
pub mod length;
pub mod scan;
pub mod design;
pub mod site;
pub mod sites;
pub mod data { pub mod enzymes; pub mod tags; }

pub use error::{PrimerError, Result};
pub use primer::{
    construct_forward_primer, construct_mutation_primers, construct_mutation_primers_at,
    construct_mutation_primers_single, construct_primers, construct_reverse_primer, PrimerMode,
    PrimerSet,
};
pub use seq::{complement, reverse, reverse_complement};
pub use temp::{calculate_tm, TmEstimate};

/// Resolve a restriction-site flag value (registry name or literal sequence).
pub fn resolve_site(raw: &str) -> String { sites::resolve(raw, site::SiteKind::RestrictionSite) }

/// Resolve a tag flag value (registry name or literal sequence).
pub fn resolve_tag(raw: &str) -> String { sites::resolve(raw, site::SiteKind::Tag) }

/// Crate version string (from `CARGO_PKG_VERSION`).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
