use anyhow::{bail, Context};
use clap::builder::RangedU64ValueParser;
use clap::{Args, Parser, Subcommand};
use polars::prelude::*;

use primerkit::design::{self, LengthQuery, PrimerDesign};
use primerkit::primer::{self, MutationSpec, PrimerEnds, PrimerMode, PrimerSet};
use primerkit::seq::normalize;
use primerkit::temp::TmEstimate;

const HIGHLIGHT: &str = "\x1b[94m\x1b[1m";
const WARN: &str = "\x1b[91m\x1b[1m";
const RESET: &str = "\x1b[0m";

/// primerkit CLI
#[derive(Parser)]
#[command(name = "primerkit")]
#[command(version)]
#[command(
    about = "Primer design utilities: primers, Tm/Ta estimates and PCR product length",
    long_about = None
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct DesignArgs {
    /// Full DNA sequence (5' to 3') of the target gene (gene A when bridging)
    #[arg(long)]
    seq: String,
    /// Full DNA sequence (5' to 3') of target gene B (for mutation primers)
    #[arg(long = "seq-b")]
    seq_b: Option<String>,
    /// Number of target bases added to the primers
    #[arg(long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    nmer: usize,
    /// Sequence inserted between gene A and gene B
    #[arg(long = "mut")]
    mutation: Option<String>,
    /// RE site (5' to 3') of the forward primer, or a registry name such as EcoRI.
    /// Registry names take precedence over literal sequences.
    #[arg(long = "forward-re")]
    forward_re: String,
    /// RE site (5' to 3') of the reverse primer, or a registry name such as XhoI
    /// (names take precedence).
    #[arg(long = "reverse-re")]
    reverse_re: String,
    /// Tag for the forward primer, or a registry name such as His6.
    /// Registry names take precedence, so `HA` means the HA tag, not the bases H and A.
    #[arg(long = "forward-tag")]
    forward_tag: Option<String>,
    /// Tag for the reverse primer, or a registry name (names take precedence).
    /// Reverse-complemented into codon-aware primers, reversed into --windowed ones
    #[arg(long = "reverse-tag")]
    reverse_tag: Option<String>,
    /// Use the first/last nmer bases without start/stop codon handling
    #[arg(long)]
    windowed: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Construct forward and reverse primer sequences
    Primer(DesignArgs),

    /// Construct a mutation primer pair for one codon of a single sequence
    MutPrimer {
        /// Full DNA sequence (5' to 3') of the target gene
        #[arg(long)]
        seq: String,
        /// Number of target bases on each side of the mutation
        #[arg(long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
        nmer: usize,
        /// 1-based codon position of the mutation, e.g. F64L -> 64
        #[arg(long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
        pos: usize,
        /// Replacement sequence for the codon
        #[arg(long = "mut")]
        mutation: String,
    },

    /// Melting (Tm) and annealing (Ta) temperature of a primer pair
    Temp {
        /// Forward primer (5' to 3')
        #[arg(long)]
        forward: String,
        /// Reverse primer (5' to 3')
        #[arg(long)]
        reverse: String,
        /// Bases from the 3' end counted for Tm
        #[arg(long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
        nmer: usize,
    },

    /// Length of the PCR product for given primers
    Len {
        /// Full DNA sequence (5' to 3') of the target gene
        #[arg(long)]
        seq: String,
        /// Full DNA sequence (5' to 3') of target gene B (for mutation primers)
        #[arg(long = "seq-b")]
        seq_b: Option<String>,
        /// Mutation primer (5' to 3'), required with --seq-b
        #[arg(long = "mut-primer")]
        mut_primer: Option<String>,
        /// Forward primer (5' to 3')
        #[arg(long)]
        forward: String,
        /// Reverse primer (5' to 3')
        #[arg(long)]
        reverse: String,
        /// Number of target bases included in the primers
        #[arg(long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
        nmer: usize,
        /// Primers were built without start/stop codon handling
        #[arg(long)]
        windowed: bool,
    },

    /// Primers, temperatures and product length in one go
    All(DesignArgs),

    /// List built-in restriction sites and tags
    Sites,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_target(false)
        .init();

    match cli.command {
        Commands::Primer(args) => {
            let design = design_from(args);
            warn_internal_sites(&design)?;
            let set = design.primers().context("constructing primers")?;
            print_primer_set(&set);
        }

        Commands::MutPrimer { seq, nmer, pos, mutation } => {
            let seq = normalize(&seq);
            design::check_alphabet("--seq", &seq);
            let spec = MutationSpec { position: pos, replacement: normalize(&mutation) };
            if spec.replacement.is_empty() {
                bail!("--mut must not be empty");
            }
            let pair = primer::construct_mutation_primers_at(&seq, &spec, nmer)
                .with_context(|| format!("constructing mutation primers at codon {pos}"))?;
            fmt_primer_print(&pair.forward, &pair.reverse);
        }

        Commands::Temp { forward, reverse, nmer } => {
            let forward = normalize(&forward);
            let reverse = normalize(&reverse);
            let fwd = TmEstimate::for_primer(&forward, nmer).context("forward primer")?;
            let rev = TmEstimate::for_primer(&reverse, nmer).context("reverse primer")?;
            fmt_tm_print(fwd, rev);
        }

        Commands::Len { seq, seq_b, mut_primer, forward, reverse, nmer, windowed } => {
            let query = LengthQuery {
                seq: normalize(&seq),
                seq_b: seq_b.as_deref().map(normalize),
                mutation_primer: mut_primer.as_deref().map(normalize),
                forward: normalize(&forward),
                reverse: normalize(&reverse),
                nmer,
                mode: mode_of(windowed),
            };
            let n = query.product_length().context("computing product length")?;
            fmt_len_print(n);
        }

        Commands::All(args) => {
            let design = design_from(args);
            warn_internal_sites(&design)?;
            let report = design.run().context("designing primers")?;
            print_primer_set(&report.primers);
            fmt_tm_print(report.forward_tm, report.reverse_tm);
            fmt_len_print(report.product_len);
        }

        Commands::Sites => {
            cmd_sites()?;
        }
    }

    Ok(())
}

fn mode_of(windowed: bool) -> PrimerMode {
    if windowed { PrimerMode::Windowed } else { PrimerMode::Codon }
}

fn design_from(args: DesignArgs) -> PrimerDesign {
    let design = PrimerDesign {
        seq: normalize(&args.seq),
        seq_b: args.seq_b.as_deref().map(normalize),
        mutation: args.mutation.as_deref().map(normalize),
        nmer: args.nmer,
        ends: PrimerEnds {
            forward_site: primerkit::resolve_site(&args.forward_re),
            reverse_site: primerkit::resolve_site(&args.reverse_re),
            forward_tag: args
                .forward_tag
                .as_deref()
                .map(primerkit::resolve_tag)
                .unwrap_or_default(),
            reverse_tag: args
                .reverse_tag
                .as_deref()
                .map(primerkit::resolve_tag)
                .unwrap_or_default(),
        },
        mode: mode_of(args.windowed),
    };
    design::check_alphabet("--seq", &design.seq);
    if let Some(b) = design.seq_b.as_deref() {
        design::check_alphabet("--seq-b", b);
    }
    log::info!(
        "forward site {}, reverse site {}, nmer {}",
        design.ends.forward_site,
        design.ends.reverse_site,
        design.nmer
    );
    design
}

fn warn_internal_sites(design: &PrimerDesign) -> anyhow::Result<()> {
    for (target, hit) in design.internal_sites()? {
        log::warn!(
            "{target} contains restriction site {} at {}..{} ({:?} strand)",
            hit.site,
            hit.start + 1,
            hit.end,
            hit.strand
        );
    }
    Ok(())
}

fn print_primer_set(set: &PrimerSet) {
    match &set.mutation {
        None => fmt_primer_print(&set.forward, &set.reverse),
        Some(m) => fmt_primer_mutation_print(&set.forward, &m.reverse, &m.forward, &set.reverse),
    }
}

fn rule(c: char) -> String { c.to_string().repeat(60) }

fn print_note(lines: &[&str]) {
    println!("{WARN}Note:");
    for l in lines {
        println!(" - {l}");
    }
    print!("{RESET}");
    println!();
    println!();
}

fn fmt_tm_print(forward: TmEstimate, reverse: TmEstimate) {
    println!();
    println!("{}", rule('='));
    println!(
        "Melting Temperature (Tm) of the forward primer: {HIGHLIGHT}{:.2} °C{RESET}",
        forward.melting
    );
    println!(
        "Annealing Temperature (Ta) of the forward primer: {HIGHLIGHT}{:.2} °C{RESET}",
        forward.annealing
    );
    println!("{}", rule('-'));
    println!(
        "Melting Temperature (Tm) of the reverse primer: {HIGHLIGHT}{:.2} °C{RESET}",
        reverse.melting
    );
    println!(
        "Annealing Temperature (Ta) of the reverse primer: {HIGHLIGHT}{:.2} °C{RESET}",
        reverse.annealing
    );
    println!("{}", rule('='));
    println!();
    print_note(&["These temperature values are estimates and should be experimentally validated"]);
}

fn fmt_len_print(len: usize) {
    println!();
    println!("{}", rule('='));
    println!("Length of PCR product: {HIGHLIGHT}{len} bp{RESET}");
    println!("{}", rule('='));
    println!();
    print_note(&[
        "The length does not include additional bases required for efficient restriction enzyme cutting",
        "Primers and sequences are assumed to match each other",
        "Capitalization and spaces do not matter",
    ]);
}

fn primer_header() {
    println!();
    println!("{}", rule('='));
    println!("Generated Primer Sequences");
    println!("{}", rule('='));
    println!();
}

fn fmt_primer_print(forward: &str, reverse: &str) {
    primer_header();
    println!("Forward Primer:\n{forward}");
    println!();
    println!("Reverse Primer:\n{reverse}");
    println!();
    print_note(&[
        "Primers are shown in 5' to 3' direction",
        "Primer sequences do not include the additional bases required for efficient restriction enzyme cutting",
        "For mutation primers, please ensure that the position and mutation sequences are correct",
    ]);
}

fn fmt_primer_mutation_print(forward: &str, mut_reverse: &str, mut_forward: &str, reverse: &str) {
    primer_header();
    println!("Forward Primer:\n{forward}");
    println!();
    println!("Mutation Reverse Primer:\n{mut_reverse}");
    println!();
    println!("Mutation Forward Primer:\n{mut_forward}");
    println!();
    println!("Reverse Primer:\n{reverse}");
    println!();
    print_note(&[
        "Primers are shown in 5' to 3' direction",
        "Primer sequences do not include the additional bases required for efficient restriction enzyme cutting",
    ]);
}

fn cmd_sites() -> PolarsResult<()> {
    let rows = primerkit::sites::site_rows();

    let df = df!(
        "name" => rows.iter().map(|r| r.0.clone()).collect::<Vec<_>>(),
        "kind" => rows.iter().map(|r| r.1.clone()).collect::<Vec<_>>(),
        "sequence" => rows.iter().map(|r| r.2.clone()).collect::<Vec<_>>(),
        "note" => rows.iter().map(|r| r.3.clone()).collect::<Vec<_>>(),
        "source" => rows.iter().map(|r| r.4.clone()).collect::<Vec<_>>(),
        "url" => rows.iter().map(|r| r.5.clone()).collect::<Vec<_>>(),
    )?;

    // Read by the polars pretty-printer; show every row and untruncated cells.
    std::env::set_var("POLARS_FMT_TABLE_FORMATTING", "UTF8_FULL");
    std::env::set_var("POLARS_FMT_MAX_COLS", "100");
    std::env::set_var("POLARS_FMT_MAX_ROWS", "1000");
    std::env::set_var("POLARS_FMT_STR_LEN", "1000");

    println!("{}", df);
    Ok(())
}
