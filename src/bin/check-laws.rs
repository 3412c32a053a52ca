//! A binary to comprehensively test that the `genomeloc` algebra obeys its
//! laws on realistic inputs.
//!
//! ```shell
//! cargo run --release --bin=check-laws --features=binaries -- -n 1000000
//! ```
//!
//! It achieves this by carrying out the following:
//!
//! * Randomly generating `n` pairs of locations across a genome (the GRCh38
//!   primary assembly unless contigs are provided), where contigs are chosen
//!   weighted by their length and the second location of a pair is usually
//!   placed close to the first.
//! * Checking each pair against the laws of the algebra (identities,
//!   symmetries, ordering consistency, split/merge round trips, and
//!   subtraction reconstruction), reporting any violations.

use std::collections::BTreeMap;
use std::str::FromStr;

use anyhow::bail;
use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use genomeloc::merge_sorted;
use genomeloc::GenomeLoc;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;
use tracing::debug;
use tracing::info;
use tracing::warn;
use tracing_log::AsTrace as _;
use tracing_subscriber::EnvFilter;
use weighted_rand::builder::NewBuilder;
use weighted_rand::builder::WalkerTableBuilder;
use weighted_rand::table::WalkerTable;

////////////////////////////////////////////////////////////////////////////////////////
// Contigs
////////////////////////////////////////////////////////////////////////////////////////

/// The primary assembly chromosomes of GRCh38.
const GRCH38_PRIMARY: &[(&str, u32)] = &[
    ("chr1", 248_956_422),
    ("chr2", 242_193_529),
    ("chr3", 198_295_559),
    ("chr4", 190_214_555),
    ("chr5", 181_538_259),
    ("chr6", 170_805_979),
    ("chr7", 159_345_973),
    ("chr8", 145_138_636),
    ("chr9", 138_394_717),
    ("chr10", 133_797_422),
    ("chr11", 135_086_622),
    ("chr12", 133_275_309),
    ("chr13", 114_364_328),
    ("chr14", 107_043_718),
    ("chr15", 101_991_189),
    ("chr16", 90_338_345),
    ("chr17", 83_257_441),
    ("chr18", 80_373_285),
    ("chr19", 58_617_616),
    ("chr20", 64_444_167),
    ("chr21", 46_709_983),
    ("chr22", 50_818_468),
    ("chrX", 156_040_895),
    ("chrY", 57_227_415),
    ("chrM", 16_569),
];

/// A contig provided on the command line as `<name>:<length>`.
#[derive(Clone, Debug, Eq, PartialEq)]
struct ContigSpec {
    /// The contig name.
    name: String,

    /// The contig length.
    length: u32,
}

impl FromStr for ContigSpec {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (name, length) = s
            .split_once(':')
            .ok_or_else(|| format!("expected `<name>:<length>`, found `{s}`"))?;

        if name.is_empty() {
            return Err(format!("missing contig name in `{s}`"));
        }

        let length = length
            .parse::<u32>()
            .map_err(|err| format!("invalid length for contig `{name}`: {err}"))?;

        if length == 0 {
            return Err(format!("contig `{name}` must have a non-zero length"));
        }

        Ok(Self {
            name: name.to_owned(),
            length,
        })
    }
}

/// Gets the default set of contigs.
fn default_contigs() -> Vec<ContigSpec> {
    GRCH38_PRIMARY
        .iter()
        .map(|(name, length)| ContigSpec {
            name: (*name).to_owned(),
            length: *length,
        })
        .collect()
}


////////////////////////////////////////////////////////////////////////////////////////
// Choosing random locations
////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug)]
struct Genome {
    /// The inner contigs. A contig's index is its position in this list.
    contigs: Box<[ContigSpec]>,

    /// The longest span of a generated location.
    max_span: i32,

    /// The weighted distribution.
    weights: WalkerTable,

    /// The random number generator.
    rng: StdRng,
}

impl Genome {
    /// Creates a new [`Genome`].
    fn new(contigs: Vec<ContigSpec>, max_span: i32, seed: u64) -> Result<Self> {
        if contigs.is_empty() {
            bail!("at least one contig is required");
        }

        if let Some(contig) = contigs
            .iter()
            .find(|contig| i32::try_from(contig.length).is_err())
        {
            bail!(
                "contig `{}` is too long to hold 32-bit positions ({} bases)",
                contig.name,
                contig.length
            );
        }

        let weights = contigs
            .iter()
            .map(|contig| contig.length)
            .collect::<Vec<_>>();

        Ok(Self {
            contigs: contigs.into_boxed_slice(),
            max_span,
            weights: WalkerTableBuilder::new(&weights).build(),
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// The contig lengths in index order.
    fn lengths(&self) -> Vec<u64> {
        self.contigs
            .iter()
            .map(|contig| u64::from(contig.length))
            .collect()
    }

    /// Builds a location of random span starting at `start`.
    fn location_at(&mut self, index: usize, start: i32) -> GenomeLoc {
        let span = self.rng.gen_range(0..self.max_span);
        GenomeLoc::new(
            self.contigs[index].name.clone(),
            index as i32,
            start,
            start.saturating_add(span),
        )
    }

    /// Picks a location on a contig chosen with weight proportional to the
    /// contig's length.
    fn random_location(&mut self) -> GenomeLoc {
        let index = self.weights.next_rng(&mut self.rng);

        // SAFETY: contig lengths were checked to fit into an `i32` when the
        // genome was created, so this will always unwrap.
        let length = i32::try_from(self.contigs[index].length)
            .expect("contig length to fit into an i32");
        let start = self.rng.gen_range(1..=length);

        self.location_at(index, start)
    }

    /// Picks a pair of locations. Most of the time, the second location is
    /// placed near the first so that overlapping and adjacent pairs are
    /// common.
    fn random_pair(&mut self) -> (GenomeLoc, GenomeLoc) {
        let a = self.random_location();

        let b = if self.rng.gen_bool(0.75) {
            let offset = self.rng.gen_range(-self.max_span..=self.max_span);
            let start = a.start().saturating_add(offset).max(1);
            self.location_at(a.contig_index() as usize, start)
        } else {
            self.random_location()
        };

        (a, b)
    }

    /// Picks a split point that leaves both halves non-empty, if there is one.
    fn split_point(&mut self, loc: &GenomeLoc) -> Option<i32> {
        match loc.size() > 1 {
            true => Some(self.rng.gen_range(loc.start() + 1..=loc.stop())),
            false => None,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////
// Laws
////////////////////////////////////////////////////////////////////////////////////////

/// A law of the algebra.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
enum Law {
    /// A location intersected or merged with itself is unchanged.
    Identity,

    /// Overlap, contiguity, and distances do not depend on operand order.
    Symmetry,

    /// Swapping the operands of a comparison reverses it.
    Antisymmetry,

    /// Being before (or past) another location implies sorting before (or
    /// after) it.
    OrderConsistency,

    /// Merging the halves of a split restores the original.
    SplitRoundTrip,

    /// The pieces left by subtraction avoid the subtrahend and, together with
    /// the intersection, cover exactly the original.
    SubtractReconstruction,

    /// Merging a sorted, contiguous pair matches the pairwise merge.
    MergeSorted,

    /// The distance across contigs is symmetric and matches the minimum
    /// distance on a shared contig.
    DistanceAcrossContigs,
}

impl std::fmt::Display for Law {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Law::Identity => write!(f, "identity"),
            Law::Symmetry => write!(f, "symmetry"),
            Law::Antisymmetry => write!(f, "antisymmetry"),
            Law::OrderConsistency => write!(f, "order consistency"),
            Law::SplitRoundTrip => write!(f, "split round trip"),
            Law::SubtractReconstruction => write!(f, "subtract reconstruction"),
            Law::MergeSorted => write!(f, "merge sorted"),
            Law::DistanceAcrossContigs => write!(f, "distance across contigs"),
        }
    }
}

/// Gets the laws violated by a pair of locations.
fn violations(a: &GenomeLoc, b: &GenomeLoc, split_at: Option<i32>, lengths: &[u64]) -> Vec<Law> {
    let mut violated = Vec::new();
    let mut check = |law: Law, holds: bool| {
        if !holds {
            violated.push(law);
        }
    };

    check(
        Law::Identity,
        a.intersect(a).ok().as_ref() == Some(a)
            && a.merge(a).ok().as_ref() == Some(a)
            && a.size() == i64::from(a.stop()) - i64::from(a.start()) + 1,
    );

    check(
        Law::Symmetry,
        a.overlaps(b) == b.overlaps(a)
            && a.disjoint(b) == b.disjoint(a)
            && a.contiguous(b) == b.contiguous(a)
            && a.distance(b) == b.distance(a)
            && a.min_distance(b) == b.min_distance(a)
            && a.reciprocal_overlap_fraction(b) == b.reciprocal_overlap_fraction(a),
    );

    check(Law::Antisymmetry, a.cmp(b) == b.cmp(a).reverse());

    check(
        Law::OrderConsistency,
        (!a.is_before(b) || a < b) && (!a.is_past(b) || a > b),
    );

    if let Some(at) = split_at {
        let restored = a.split(at).and_then(|(left, right)| left.merge(&right));
        check(Law::SplitRoundTrip, restored.ok().as_ref() == Some(a));
    }

    if a.overlaps(b) {
        let holds = match (a.subtract(b), a.intersect(b)) {
            (Ok(pieces), Ok(shared)) => {
                pieces
                    .iter()
                    .all(|piece| !piece.overlaps(b) && a.contains(piece))
                    && a.contains(&shared)
                    && pieces.iter().map(GenomeLoc::size).sum::<i64>() + shared.size() == a.size()
            }
            _ => false,
        };

        check(Law::SubtractReconstruction, holds);
    }

    if a.contiguous(b) {
        let mut sorted = [a.clone(), b.clone()];
        sorted.sort();

        let merged = merge_sorted(&sorted).ok().flatten();
        check(Law::MergeSorted, merged.is_some() && merged == a.merge(b).ok());
    }

    let forward = a.distance_across_contigs(b, lengths).ok();
    let backward = b.distance_across_contigs(a, lengths).ok();
    check(
        Law::DistanceAcrossContigs,
        forward.is_some()
            && forward == backward
            && (!a.same_contig(b) || forward == Some(a.min_distance(b))),
    );

    violated
}

#[cfg(test)]
mod law_tests {
    use super::*;

    #[test]
    fn lawful_pairs() {
        let lengths = [1000u64, 500, 250];

        let pairs = [
            (
                GenomeLoc::new("chr1", 0, 1, 100),
                GenomeLoc::new("chr1", 0, 50, 150),
            ),
            (
                GenomeLoc::new("chr1", 0, 1, 100),
                GenomeLoc::new("chr1", 0, 101, 150),
            ),
            (
                GenomeLoc::new("chr1", 0, 100, 200),
                GenomeLoc::new("chr3", 2, 1, 10),
            ),
            (
                GenomeLoc::new("chr2", 1, 10, 10),
                GenomeLoc::new("chr2", 1, 10, 10),
            ),
        ];

        for (a, b) in &pairs {
            assert!(violations(a, b, None, &lengths).is_empty(), "{a} and {b}");
            assert!(violations(b, a, None, &lengths).is_empty(), "{b} and {a}");
        }

        let a = GenomeLoc::new("chr1", 0, 1, 100);
        assert!(violations(&a, &a, Some(50), &lengths).is_empty());
    }

    #[test]
    fn unknown_contig_lengths_are_reported() {
        let a = GenomeLoc::new("chr1", 0, 1, 100);
        let b = GenomeLoc::new("chr9", 8, 1, 100);

        assert_eq!(
            violations(&a, &b, None, &[1000]),
            vec![Law::DistanceAcrossContigs]
        );
    }

    #[test]
    fn generated_locations_stay_on_their_contigs() -> Result<()> {
        let contigs = vec![
            "chr1:1000".parse::<ContigSpec>().unwrap(),
            "chr2:10".parse::<ContigSpec>().unwrap(),
        ];
        let mut genome = Genome::new(contigs, 20, 7)?;

        for _ in 0..1_000 {
            let (a, b) = genome.random_pair();

            for loc in [&a, &b] {
                assert!(loc.contig_index() == 0 || loc.contig_index() == 1);
                assert!(loc.start() >= 1);
                assert!(loc.size() >= 1 && loc.size() <= 20);
            }
        }

        Ok(())
    }

    #[test]
    fn oversized_contigs_are_rejected() {
        let contigs = vec!["chr1:4000000000".parse::<ContigSpec>().unwrap()];
        let err = Genome::new(contigs, 20, 7).unwrap_err();
        assert_eq!(
            err.to_string(),
            "contig `chr1` is too long to hold 32-bit positions (4000000000 bases)"
        );
    }
}

////////////////////////////////////////////////////////////////////////////////////////
// Main
////////////////////////////////////////////////////////////////////////////////////////

/// Throws randomly generated locations at the `genomeloc` algebra.
#[derive(Parser)]
struct Args {
    /// A contig to generate locations on, given as `<name>:<length>`. May be
    /// repeated. The GRCh38 primary assembly is used when none are provided.
    #[arg(short, long = "contig", value_name = "NAME:LENGTH")]
    contigs: Vec<ContigSpec>,

    /// The number of violations to report in detail.
    #[arg(short, long, default_value_t = 10)]
    explore_violations: usize,

    /// The longest span of a generated location.
    #[arg(long, default_value_t = 1_000, value_parser = clap::value_parser!(i32).range(1..))]
    max_span: i32,

    /// The number of pairs to generate.
    #[arg(short, default_value_t = 1_000_000)]
    n: usize,

    /// The seed for the random number generator.
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    #[command(flatten)]
    verbose: Verbosity,
}

fn throw(args: &Args) -> Result<()> {
    let contigs = match args.contigs.is_empty() {
        true => default_contigs(),
        false => args.contigs.clone(),
    };

    info!("genome: generating locations on {} contigs", contigs.len());

    let mut genome = Genome::new(contigs, args.max_span, args.seed).context("building genome")?;
    let lengths = genome.lengths();

    let mut counts = BTreeMap::<Law, usize>::new();
    let mut reported = 0;

    for i in 0..args.n {
        let (a, b) = genome.random_pair();
        let split_at = genome.split_point(&a);

        for law in violations(&a, &b, split_at, &lengths) {
            if reported < args.explore_violations {
                warn!("{law} violated by {a} and {b} (split at {split_at:?})");
                reported += 1;
            }

            *counts.entry(law).or_default() += 1;
        }

        if (i + 1) % 100_000 == 0 {
            debug!("checked {} pairs", i + 1);
        }
    }

    let total = counts.values().sum::<usize>();

    println!("checked {} pairs: {} violations", args.n, total);
    for (law, count) in &counts {
        println!("  {law}: {count}");
    }

    if total > 0 {
        std::process::exit(1);
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    assert!(args.n > 0, "`n` must be greater than 0!");

    match std::env::var("RUST_LOG") {
        Ok(_) => tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .init(),
        Err(_) => tracing_subscriber::fmt()
            .with_max_level(args.verbose.log_level_filter().as_trace())
            .init(),
    };

    throw(&args)
}
