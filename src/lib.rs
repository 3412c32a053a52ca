//! `genomeloc` is a crate for working with closed, 1-based genomic intervals.
//!
//! The crate is built around a single value type, [`GenomeLoc`], which
//! represents a contiguous span of bases on a contig (or one of two special
//! locations: [`UNMAPPED`] and [`WHOLE_GENOME`]). Higher-level facilities, such
//! as interval lists, pileups, or walkers over a genome, are expected to be
//! built on top of the pairwise algebra provided here.
//!
//! ## Coordinates
//!
//! Locations are 1-based and fully-closed: both the start and the stop
//! position are part of the location. Each location knows its contig by both a
//! display name and an index into an external list of contigs. Only the index
//! matters when comparing locations, so locations on `chr1` and `1` with the
//! same index are considered to be on the same contig.
//!
//! Positions are never checked against the reference. Validating a location
//! against a sequence dictionary, resolving contig names to indices, and
//! parsing locations from strings are all left to the caller.
//!
//! ## The algebra
//!
//! [`GenomeLoc`] provides
//!
//! - predicates such as [`GenomeLoc::overlaps()`],
//!   [`GenomeLoc::contiguous()`], and [`GenomeLoc::contains()`],
//! - set-like operations such as [`GenomeLoc::merge()`],
//!   [`GenomeLoc::intersect()`], [`GenomeLoc::subtract()`], and
//!   [`GenomeLoc::split()`], which return an [`Error`](loc::Error) when their
//!   preconditions are violated,
//! - distances such as [`GenomeLoc::min_distance()`] and
//!   [`GenomeLoc::distance_across_contigs()`], the latter of which requires a
//!   [`ContigLengths`] lookup, and
//! - a total order, where unmapped locations sort last.
//!
//! Below is a representative example.
//!
//! ```
//! use genomeloc::GenomeLoc;
//!
//! let gene = GenomeLoc::new("chr1", 0, 1_000, 2_000);
//! let exon = GenomeLoc::new("chr1", 0, 1_200, 1_300);
//!
//! assert!(gene.contains(&exon));
//! assert_eq!(gene.intersect(&exon)?, exon);
//!
//! let introns = gene.subtract(&exon)?;
//! assert_eq!(introns.len(), 2);
//! assert_eq!(introns[0].to_string(), "chr1:1000-1199");
//! assert_eq!(introns[1].to_string(), "chr1:1301-2000");
//!
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(rust_2021_compatibility)]
#![warn(missing_debug_implementations)]
#![warn(clippy::missing_docs_in_private_items)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod contig;
pub mod loc;
pub mod locatable;

pub use contig::Contig;
pub use contig::ContigLengths;
pub use loc::merge_sorted;
pub use loc::GenomeLoc;
pub use loc::END_OF_CONTIG;
pub use loc::INFINITE_DISTANCE;
pub use loc::UNMAPPED;
pub use loc::WHOLE_GENOME;
pub use locatable::HasGenomeLoc;
pub use locatable::Locatable;
