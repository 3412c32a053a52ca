//! A 1-based, fully-closed genomic location.
//!
//! ```text
//! ================ chr1 ===============
//!
//! | 1 | 2 | 3 | 4 | 5 | 6 | 7 | 8 | 9 |
//! -------------------------------------
//! |   |   | X | X | X | X | X |   |   |  <= chr1:3-7
//! |   |   |   |   |   |   | X |   |   |  <= chr1:7
//! ```
//!
//! Both the start and the stop position are included in a [`GenomeLoc`], so
//! `chr1:3-7` covers five bases and `chr1:7` covers one.
//!
//! Positions are not validated against the length of the contig, and the start
//! is not required to be less than or equal to the stop. Callers (for example,
//! code handling reads that hang off the end of a contig) may build transiently
//! invalid locations. Operations that would otherwise produce a location with
//! no bases, such as [`GenomeLoc::subtract()`], filter those results out.
//!
//! ## Sentinels
//!
//! Two special locations exist alongside the ordinary, mapped ones:
//!
//! - [`GenomeLoc::Unmapped`] (also [`UNMAPPED`]) represents the absence of any
//!   genomic location, such as the location of an unaligned read. It sorts
//!   after every other location and is only equal to itself.
//! - [`GenomeLoc::WholeGenome`] (also [`WHOLE_GENOME`]) represents a location
//!   spanning everything. It reports the contig name `all`.
//!
//! Both report a contig index of `-1` and a start and stop of `0`.

use std::cmp::Ordering;
use std::hash::Hash;
use std::hash::Hasher;

use crate::contig::SENTINEL_INDEX;
use crate::Contig;
use crate::ContigLengths;

pub mod error;

pub use error::Error;

/// A 1-based position upon a contig.
pub type Position = i32;

/// The stop position denoting that a location runs through the end of its
/// contig.
pub const END_OF_CONTIG: Position = Position::MAX;

/// The distance reported between locations on different contigs.
pub const INFINITE_DISTANCE: i64 = i64::MAX;

/// The location of things that are not placed on the genome.
pub const UNMAPPED: GenomeLoc = GenomeLoc::Unmapped;

/// The location spanning the whole genome.
pub const WHOLE_GENOME: GenomeLoc = GenomeLoc::WholeGenome;

/// The contig name reported by [`GenomeLoc::WholeGenome`].
const WHOLE_GENOME_CONTIG: &str = "all";

/// A [`Result`](std::result::Result) with an [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// A 1-based, fully-closed span on a contig.
///
/// Equality, hashing, and ordering only consider the contig index, the start,
/// and the stop. The contig name is for display purposes only.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GenomeLoc {
    /// A span placed upon a contig.
    Mapped {
        /// The contig.
        contig: Contig,
        /// The first base included in the span.
        start: Position,
        /// The last base included in the span.
        stop: Position,
    },
    /// The span covering the entire genome.
    WholeGenome,
    /// The absence of a location.
    Unmapped,
}

impl GenomeLoc {
    /// Creates a new mapped [`GenomeLoc`].
    ///
    /// No validation is performed: the start may exceed the stop and neither
    /// is checked against the length of the contig.
    ///
    /// # Examples
    ///
    /// ```
    /// use genomeloc::GenomeLoc;
    ///
    /// let loc = GenomeLoc::new("chr1", 0, 1, 10);
    /// assert_eq!(loc.contig(), Some("chr1"));
    /// assert_eq!(loc.contig_index(), 0);
    /// assert_eq!(loc.start(), 1);
    /// assert_eq!(loc.stop(), 10);
    /// assert_eq!(loc.size(), 10);
    /// ```
    pub fn new(
        contig: impl Into<String>,
        contig_index: i32,
        start: Position,
        stop: Position,
    ) -> Self {
        GenomeLoc::Mapped {
            contig: Contig::new(contig, contig_index),
            start,
            stop,
        }
    }

    /// Gets the contig name.
    ///
    /// Only [`GenomeLoc::Unmapped`] has no contig name.
    pub fn contig(&self) -> Option<&str> {
        match self {
            GenomeLoc::Mapped { contig, .. } => Some(contig.name()),
            GenomeLoc::WholeGenome => Some(WHOLE_GENOME_CONTIG),
            GenomeLoc::Unmapped => None,
        }
    }

    /// Gets the contig index. Both sentinels report `-1`.
    pub fn contig_index(&self) -> i32 {
        match self {
            GenomeLoc::Mapped { contig, .. } => contig.index(),
            _ => SENTINEL_INDEX,
        }
    }

    /// Gets the start position.
    pub fn start(&self) -> Position {
        match self {
            GenomeLoc::Mapped { start, .. } => *start,
            _ => 0,
        }
    }

    /// Gets the stop position.
    pub fn stop(&self) -> Position {
        match self {
            GenomeLoc::Mapped { stop, .. } => *stop,
            _ => 0,
        }
    }

    /// Gets the stop position. This is an alias of [`GenomeLoc::stop()`].
    pub fn end(&self) -> Position {
        self.stop()
    }

    /// Returns whether this is the [`GenomeLoc::Unmapped`] sentinel.
    ///
    /// A mapped location that happens to carry the same fields as the
    /// sentinel is not unmapped.
    ///
    /// # Examples
    ///
    /// ```
    /// use genomeloc::GenomeLoc;
    /// use genomeloc::UNMAPPED;
    ///
    /// assert!(UNMAPPED.is_unmapped());
    /// assert!(!GenomeLoc::new("chr1", -1, 0, 0).is_unmapped());
    /// ```
    pub fn is_unmapped(&self) -> bool {
        matches!(self, GenomeLoc::Unmapped)
    }

    /// Returns whether this is the [`GenomeLoc::WholeGenome`] sentinel.
    pub fn is_whole_genome(&self) -> bool {
        matches!(self, GenomeLoc::WholeGenome)
    }

    /// Gets the single-base location at the start of this location.
    ///
    /// # Examples
    ///
    /// ```
    /// use genomeloc::GenomeLoc;
    /// use genomeloc::UNMAPPED;
    ///
    /// let loc = GenomeLoc::new("chr1", 0, 5, 10);
    /// assert_eq!(loc.start_location(), GenomeLoc::new("chr1", 0, 5, 5));
    /// assert!(UNMAPPED.start_location().is_unmapped());
    /// ```
    pub fn start_location(&self) -> GenomeLoc {
        self.respan(self.start(), self.start(), "locate the start of")
            .unwrap_or(GenomeLoc::Unmapped)
    }

    /// Gets the single-base location at the stop of this location.
    ///
    /// # Examples
    ///
    /// ```
    /// use genomeloc::GenomeLoc;
    ///
    /// let loc = GenomeLoc::new("chr1", 0, 5, 10);
    /// assert_eq!(loc.stop_location(), GenomeLoc::new("chr1", 0, 10, 10));
    /// ```
    pub fn stop_location(&self) -> GenomeLoc {
        self.respan(self.stop(), self.stop(), "locate the stop of")
            .unwrap_or(GenomeLoc::Unmapped)
    }

    /// Gets the number of bases covered, which is `stop - start + 1`.
    pub fn size(&self) -> i64 {
        i64::from(self.stop()) - i64::from(self.start()) + 1
    }

    //////////////////////////////////////////////////////////////////////////
    // Predicates
    //////////////////////////////////////////////////////////////////////////

    /// Returns whether both locations are on the same contig.
    ///
    /// Only the contig indices are compared.
    pub fn same_contig(&self, other: &GenomeLoc) -> bool {
        self.contig_index() == other.contig_index()
    }

    /// Compares the contig indices of two locations.
    pub fn compare_contigs(&self, other: &GenomeLoc) -> Ordering {
        self.contig_index().cmp(&other.contig_index())
    }

    /// Returns whether the two locations share no bases.
    ///
    /// # Examples
    ///
    /// ```
    /// use genomeloc::GenomeLoc;
    ///
    /// let a = GenomeLoc::new("chr1", 0, 1, 10);
    ///
    /// assert!(a.disjoint(&GenomeLoc::new("chr1", 0, 11, 20)));
    /// assert!(a.disjoint(&GenomeLoc::new("chr2", 1, 1, 10)));
    /// assert!(!a.disjoint(&GenomeLoc::new("chr1", 0, 10, 20)));
    /// ```
    pub fn disjoint(&self, other: &GenomeLoc) -> bool {
        !self.same_contig(other) || self.start() > other.stop() || other.start() > self.stop()
    }

    /// Returns whether the two locations share at least one base.
    pub fn overlaps(&self, other: &GenomeLoc) -> bool {
        !self.disjoint(other)
    }

    /// Returns whether there is at least one base of separation between the
    /// two locations.
    ///
    /// Locations that merely touch (`a.stop() + 1 == b.start()`) are not
    /// discontinuous.
    ///
    /// # Examples
    ///
    /// ```
    /// use genomeloc::GenomeLoc;
    ///
    /// let a = GenomeLoc::new("chr1", 0, 1, 10);
    ///
    /// assert!(!a.discontinuous(&GenomeLoc::new("chr1", 0, 11, 20)));
    /// assert!(a.discontinuous(&GenomeLoc::new("chr1", 0, 12, 20)));
    /// ```
    pub fn discontinuous(&self, other: &GenomeLoc) -> bool {
        !self.same_contig(other)
            || i64::from(self.start()) - 1 > i64::from(other.stop())
            || i64::from(other.start()) - 1 > i64::from(self.stop())
    }

    /// Returns whether the two locations overlap or are adjacent.
    pub fn contiguous(&self, other: &GenomeLoc) -> bool {
        !self.discontinuous(other)
    }

    /// Returns whether `other` lies entirely within this location.
    pub fn contains(&self, other: &GenomeLoc) -> bool {
        self.same_contig(other) && self.start() <= other.start() && self.stop() >= other.stop()
    }

    //////////////////////////////////////////////////////////////////////////
    // Set-like operations
    //////////////////////////////////////////////////////////////////////////

    /// Merges two contiguous locations into the location spanning both.
    ///
    /// Merging two unmapped locations yields [`GenomeLoc::Unmapped`]. Mixing a
    /// mapped and an unmapped location is an error, as is merging locations
    /// that are neither overlapping nor adjacent.
    ///
    /// # Examples
    ///
    /// ```
    /// use genomeloc::loc::Error;
    /// use genomeloc::GenomeLoc;
    /// use genomeloc::UNMAPPED;
    ///
    /// let a = GenomeLoc::new("chr1", 0, 1, 10);
    /// let b = GenomeLoc::new("chr1", 0, 11, 20);
    /// assert_eq!(a.merge(&b)?, GenomeLoc::new("chr1", 0, 1, 20));
    ///
    /// let c = GenomeLoc::new("chr1", 0, 30, 40);
    /// assert!(matches!(a.merge(&c), Err(Error::NotContiguous(_, _))));
    /// assert!(matches!(a.merge(&UNMAPPED), Err(Error::MixedMapping)));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn merge(&self, other: &GenomeLoc) -> Result<GenomeLoc> {
        if self.is_unmapped() != other.is_unmapped() {
            return Err(Error::MixedMapping);
        }

        if self.is_unmapped() {
            return Ok(GenomeLoc::Unmapped);
        }

        if !self.contiguous(other) {
            return Err(Error::NotContiguous(self.clone(), other.clone()));
        }

        self.respan(
            self.start().min(other.start()),
            self.stop().max(other.stop()),
            "merge",
        )
    }

    /// An alias of [`GenomeLoc::merge()`].
    pub fn union(&self, other: &GenomeLoc) -> Result<GenomeLoc> {
        self.merge(other)
    }

    /// Gets the bases shared by two overlapping locations.
    ///
    /// Intersecting two unmapped locations yields [`GenomeLoc::Unmapped`].
    ///
    /// # Examples
    ///
    /// ```
    /// use genomeloc::loc::Error;
    /// use genomeloc::GenomeLoc;
    ///
    /// let a = GenomeLoc::new("chr1", 0, 1, 10);
    /// let b = GenomeLoc::new("chr1", 0, 5, 15);
    /// assert_eq!(a.intersect(&b)?, GenomeLoc::new("chr1", 0, 5, 10));
    ///
    /// let c = GenomeLoc::new("chr1", 0, 11, 15);
    /// assert!(matches!(a.intersect(&c), Err(Error::NoOverlap(_, _))));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn intersect(&self, other: &GenomeLoc) -> Result<GenomeLoc> {
        if self.is_unmapped() != other.is_unmapped() {
            return Err(Error::MixedMapping);
        }

        if self.is_unmapped() {
            return Ok(GenomeLoc::Unmapped);
        }

        if !self.overlaps(other) {
            return Err(Error::NoOverlap(self.clone(), other.clone()));
        }

        self.respan(
            self.start().max(other.start()),
            self.stop().min(other.stop()),
            "intersect",
        )
    }

    /// Removes the bases of `other` from this location.
    ///
    /// ```text
    /// |----------------- self ---------------|
    ///        |-------- other --------|
    ///
    /// yields
    ///
    /// |------|                       |-------|
    /// ```
    ///
    /// Between zero and two locations are returned, left before right. A side
    /// is omitted when `other` reaches or passes that end of this location.
    ///
    /// Subtracting an unmapped location from an unmapped location yields a
    /// single [`GenomeLoc::Unmapped`].
    ///
    /// # Examples
    ///
    /// ```
    /// use genomeloc::GenomeLoc;
    ///
    /// let a = GenomeLoc::new("chr1", 0, 1, 20);
    ///
    /// let pieces = a.subtract(&GenomeLoc::new("chr1", 0, 5, 10))?;
    /// assert_eq!(
    ///     pieces,
    ///     vec![GenomeLoc::new("chr1", 0, 1, 4), GenomeLoc::new("chr1", 0, 11, 20)]
    /// );
    ///
    /// let pieces = a.subtract(&GenomeLoc::new("chr1", 0, 1, 10))?;
    /// assert_eq!(pieces, vec![GenomeLoc::new("chr1", 0, 11, 20)]);
    ///
    /// assert!(a.subtract(&a)?.is_empty());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn subtract(&self, other: &GenomeLoc) -> Result<Vec<GenomeLoc>> {
        if self.is_unmapped() != other.is_unmapped() {
            return Err(Error::MixedMapping);
        }

        if self.is_unmapped() {
            return Ok(vec![GenomeLoc::Unmapped]);
        }

        if self == other {
            return Ok(Vec::new());
        }

        if !self.overlaps(other) {
            return Err(Error::NoOverlap(self.clone(), other.clone()));
        }

        let mut pieces = Vec::with_capacity(2);

        // A bound that cannot be stepped past leaves nothing on that side.
        if let Some(stop) = other.start().checked_sub(1) {
            pieces.push(self.respan(self.start(), stop, "subtract")?);
        }

        if let Some(start) = other.stop().checked_add(1) {
            pieces.push(self.respan(start, self.stop(), "subtract")?);
        }

        pieces.retain(|piece| piece.size() > 0);
        Ok(pieces)
    }

    /// Splits the location into `[start, at - 1]` and `[at, stop]`.
    ///
    /// The split point must be contained within the location. Splitting at
    /// the start produces an empty left half.
    ///
    /// # Examples
    ///
    /// ```
    /// use genomeloc::loc::Error;
    /// use genomeloc::GenomeLoc;
    ///
    /// let loc = GenomeLoc::new("chr1", 0, 1, 10);
    ///
    /// let (left, right) = loc.split(6)?;
    /// assert_eq!(left, GenomeLoc::new("chr1", 0, 1, 5));
    /// assert_eq!(right, GenomeLoc::new("chr1", 0, 6, 10));
    ///
    /// assert!(matches!(loc.split(11), Err(Error::SplitOutOfBounds(_, 11))));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn split(&self, at: Position) -> Result<(GenomeLoc, GenomeLoc)> {
        if self.is_unmapped() {
            return Err(Error::Unmapped("split"));
        }

        if at < self.start() || at > self.stop() {
            return Err(Error::SplitOutOfBounds(self.clone(), at));
        }

        let left_stop = at
            .checked_sub(1)
            .ok_or_else(|| Error::SplitOutOfBounds(self.clone(), at))?;

        Ok((
            self.respan(self.start(), left_stop, "split")?,
            self.respan(at, self.stop(), "split")?,
        ))
    }

    /// Gets the location running from the lowest start to the highest stop of
    /// two locations on the same contig.
    ///
    /// Unlike [`GenomeLoc::merge()`], the locations need not be contiguous;
    /// any gap between them is bridged. Contigs are compared by name.
    ///
    /// # Examples
    ///
    /// ```
    /// use genomeloc::loc::Error;
    /// use genomeloc::GenomeLoc;
    ///
    /// let a = GenomeLoc::new("chr1", 0, 1, 10);
    /// let b = GenomeLoc::new("chr1", 0, 50, 60);
    /// assert_eq!(a.endpoint_span(&b)?, GenomeLoc::new("chr1", 0, 1, 60));
    ///
    /// let c = GenomeLoc::new("chr2", 1, 50, 60);
    /// assert!(matches!(a.endpoint_span(&c), Err(Error::DifferentContigs(_, _))));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn endpoint_span(&self, other: &GenomeLoc) -> Result<GenomeLoc> {
        if self.is_unmapped() || other.is_unmapped() {
            return Err(Error::Unmapped("get the endpoint span of"));
        }

        if self.contig() != other.contig() {
            return Err(Error::DifferentContigs(self.clone(), other.clone()));
        }

        self.respan(
            self.start().min(other.start()),
            self.stop().max(other.stop()),
            "get the endpoint span of",
        )
    }

    /// Creates a copy of this location with the start replaced.
    ///
    /// The new start is not checked against the stop.
    ///
    /// # Examples
    ///
    /// ```
    /// use genomeloc::GenomeLoc;
    ///
    /// let loc = GenomeLoc::new("chr1", 0, 10, 20);
    /// assert_eq!(loc.with_start(25)?, GenomeLoc::new("chr1", 0, 25, 20));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn with_start(&self, start: Position) -> Result<GenomeLoc> {
        self.respan(start, self.stop(), "set the start of")
    }

    /// Creates a copy of this location with the stop replaced.
    ///
    /// The new stop is not checked against the start.
    pub fn with_stop(&self, stop: Position) -> Result<GenomeLoc> {
        self.respan(self.start(), stop, "set the stop of")
    }

    /// Builds a location on the same contig with new bounds.
    fn respan(
        &self,
        start: Position,
        stop: Position,
        operation: &'static str,
    ) -> Result<GenomeLoc> {
        match self.contig() {
            Some(name) => Ok(GenomeLoc::new(name, self.contig_index(), start, stop)),
            None => Err(Error::Unmapped(operation)),
        }
    }

    //////////////////////////////////////////////////////////////////////////
    // Distances
    //////////////////////////////////////////////////////////////////////////

    /// Gets the distance between the starts of two locations.
    ///
    /// Locations on different contigs are [`INFINITE_DISTANCE`] apart.
    pub fn distance(&self, other: &GenomeLoc) -> i64 {
        if !self.same_contig(other) {
            return INFINITE_DISTANCE;
        }

        (i64::from(self.start()) - i64::from(other.start())).abs()
    }

    /// Gets the gap between the closest bases of two locations.
    ///
    /// Overlapping locations are `0` apart. Otherwise, the result is the
    /// earlier location's stop subtracted from the later location's start, so
    /// adjacent locations are `1` apart. Locations on different contigs are
    /// [`INFINITE_DISTANCE`] apart.
    ///
    /// # Examples
    ///
    /// ```
    /// use genomeloc::GenomeLoc;
    /// use genomeloc::INFINITE_DISTANCE;
    ///
    /// let a = GenomeLoc::new("chr1", 0, 1, 10);
    ///
    /// assert_eq!(a.min_distance(&GenomeLoc::new("chr1", 0, 5, 15)), 0);
    /// assert_eq!(a.min_distance(&GenomeLoc::new("chr1", 0, 15, 20)), 5);
    /// assert_eq!(GenomeLoc::new("chr1", 0, 15, 20).min_distance(&a), 5);
    /// assert_eq!(a.min_distance(&GenomeLoc::new("chr2", 1, 1, 10)), INFINITE_DISTANCE);
    /// ```
    pub fn min_distance(&self, other: &GenomeLoc) -> i64 {
        if !self.same_contig(other) {
            INFINITE_DISTANCE
        } else if self.is_before(other) {
            i64::from(other.start()) - i64::from(self.stop())
        } else if other.is_before(self) {
            i64::from(self.start()) - i64::from(other.stop())
        } else {
            0
        }
    }

    /// Gets the smaller of the two fractions of each location covered by
    /// their intersection.
    ///
    /// ```text
    /// a: |----------|              a: |----------|
    /// b:      |----------|         b:      |--------------------|
    ///
    ///    50% of a, 50% of b           50% of a, 25% of b
    ///    => 0.5                       => 0.25
    /// ```
    ///
    /// Disjoint locations have no overlap.
    ///
    /// # Examples
    ///
    /// ```
    /// use genomeloc::GenomeLoc;
    ///
    /// let a = GenomeLoc::new("chr1", 0, 1, 10);
    /// let b = GenomeLoc::new("chr1", 0, 6, 25);
    /// assert_eq!(a.reciprocal_overlap_fraction(&b), 0.25);
    /// ```
    pub fn reciprocal_overlap_fraction(&self, other: &GenomeLoc) -> f64 {
        if self.disjoint(other) {
            return 0.0;
        }

        let shared = i64::from(self.stop().min(other.stop()))
            - i64::from(self.start().max(other.start()))
            + 1;

        let of_self = shared as f64 / self.size() as f64;
        let of_other = shared as f64 / other.size() as f64;

        of_self.min(of_other)
    }

    /// Gets the number of bases separating two locations, counting whole
    /// contigs that lie between them.
    ///
    /// For locations on the same contig, this is
    /// [`GenomeLoc::min_distance()`]. Otherwise, it is the sum of
    ///
    /// - the bases after the stop of the location on the earlier contig,
    /// - the start of the location on the later contig, and
    /// - the full length of every contig strictly between the two,
    ///
    /// where contig order is the order of the contig indices.
    ///
    /// An [`Error::MissingContigLength`] is returned when `lengths` has no
    /// entry for a contig that is needed, and an [`Error::DistanceOverflow`]
    /// when the distance does not fit into an `i64`.
    ///
    /// # Examples
    ///
    /// ```
    /// use genomeloc::GenomeLoc;
    ///
    /// let lengths = vec![100u64, 50, 200];
    ///
    /// let a = GenomeLoc::new("chr1", 0, 80, 90);
    /// let b = GenomeLoc::new("chr3", 2, 5, 10);
    ///
    /// assert_eq!(a.distance_across_contigs(&b, &lengths)?, 65);
    /// assert_eq!(b.distance_across_contigs(&a, &lengths)?, 65);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn distance_across_contigs<L>(&self, other: &GenomeLoc, lengths: &L) -> Result<i64>
    where
        L: ContigLengths + ?Sized,
    {
        if self.same_contig(other) {
            return Ok(self.min_distance(other));
        }

        let (earlier, later) = match self.compare_contigs(other) {
            Ordering::Less => (self, other),
            _ => (other, self),
        };

        let length_of = |index: i32| -> Result<i64> {
            let length = usize::try_from(index)
                .ok()
                .and_then(|index| lengths.contig_length(index))
                .ok_or(Error::MissingContigLength(index))?;

            i64::try_from(length).map_err(|_| Error::DistanceOverflow)
        };

        let mut distance = length_of(earlier.contig_index())?
            .checked_sub(i64::from(earlier.stop()))
            .and_then(|distance| distance.checked_add(i64::from(later.start())))
            .ok_or(Error::DistanceOverflow)?;

        for index in (earlier.contig_index() + 1)..later.contig_index() {
            distance = distance
                .checked_add(length_of(index)?)
                .ok_or(Error::DistanceOverflow)?;
        }

        Ok(distance)
    }

    //////////////////////////////////////////////////////////////////////////
    // Ordering
    //////////////////////////////////////////////////////////////////////////

    /// Returns the greater of two locations. Ties favor `self`.
    ///
    /// This differs from [`Ord::max()`], which favors the second argument on
    /// ties.
    ///
    /// # Examples
    ///
    /// ```
    /// use genomeloc::GenomeLoc;
    ///
    /// let a = GenomeLoc::new("chr1", 0, 1, 10);
    /// let b = GenomeLoc::new("1", 0, 1, 10);
    ///
    /// assert_eq!(a.max_loc(&b).contig(), Some("chr1"));
    /// assert_eq!(b.max_loc(&a).contig(), Some("1"));
    /// ```
    pub fn max_loc<'a>(&'a self, other: &'a GenomeLoc) -> &'a GenomeLoc {
        match self.cmp(other) {
            Ordering::Less => other,
            _ => self,
        }
    }

    /// Returns whether this location ends before `other` begins, either by
    /// being on an earlier contig or by stopping before `other` starts.
    pub fn is_before(&self, other: &GenomeLoc) -> bool {
        match self.compare_contigs(other) {
            Ordering::Less => true,
            Ordering::Equal => self.stop() < other.start(),
            Ordering::Greater => false,
        }
    }

    /// Returns whether this location begins after `other` ends, either by
    /// being on a later contig or by starting after `other` stops.
    pub fn is_past(&self, other: &GenomeLoc) -> bool {
        match self.compare_contigs(other) {
            Ordering::Greater => true,
            Ordering::Equal => self.start() > other.stop(),
            Ordering::Less => false,
        }
    }

    /// Returns whether this location sorts between `left` and `right`,
    /// inclusive of both.
    pub fn is_between(&self, left: &GenomeLoc, right: &GenomeLoc) -> bool {
        self >= left && self <= right
    }

    /// The fields that equality, hashing, and ordering are based on.
    fn key(&self) -> (i32, Position, Position) {
        (self.contig_index(), self.start(), self.stop())
    }
}

/// Merges locations that are sorted and contiguous into a single location.
///
/// The locations must be provided in ascending order (see the [`Ord`]
/// implementation for [`GenomeLoc`]) and each must be contiguous with the
/// running merge of those before it. No location may be unmapped. An empty
/// input yields [`None`].
///
/// # Examples
///
/// ```
/// use genomeloc::loc::Error;
/// use genomeloc::merge_sorted;
/// use genomeloc::GenomeLoc;
///
/// let locs = vec![
///     GenomeLoc::new("chr1", 0, 1, 10),
///     GenomeLoc::new("chr1", 0, 5, 15),
///     GenomeLoc::new("chr1", 0, 16, 20),
/// ];
/// assert_eq!(merge_sorted(&locs)?, Some(GenomeLoc::new("chr1", 0, 1, 20)));
///
/// assert_eq!(merge_sorted(&Vec::<GenomeLoc>::new())?, None);
///
/// let gapped = vec![GenomeLoc::new("chr1", 0, 1, 10), GenomeLoc::new("chr1", 0, 12, 20)];
/// assert!(matches!(merge_sorted(&gapped), Err(Error::NotContiguous(_, _))));
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn merge_sorted<'a, I>(locs: I) -> Result<Option<GenomeLoc>>
where
    I: IntoIterator<Item = &'a GenomeLoc>,
{
    let locs = locs.into_iter().collect::<Vec<_>>();

    if locs.iter().any(|loc| loc.is_unmapped()) {
        return Err(Error::Unmapped("merge"));
    }

    let mut locs = locs.into_iter();

    let first = match locs.next() {
        Some(loc) => loc.clone(),
        None => return Ok(None),
    };

    locs.try_fold(first, |merged, loc| merged.merge(loc))
        .map(Some)
}

impl PartialEq for GenomeLoc {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for GenomeLoc {}

impl Hash for GenomeLoc {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.is_unmapped().hash(state);

        if !self.is_unmapped() {
            self.key().hash(state);
        }
    }
}

impl PartialOrd for GenomeLoc {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GenomeLoc {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_unmapped(), other.is_unmapped()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => self.key().cmp(&other.key()),
        }
    }
}

impl std::fmt::Display for GenomeLoc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let contig = match self.contig() {
            Some(contig) => contig,
            None => return write!(f, "unmapped"),
        };

        let through_end = self.stop() == END_OF_CONTIG;

        if through_end && self.start() == 1 {
            write!(f, "{contig}")
        } else if through_end || self.start() == self.stop() {
            write!(f, "{contig}:{}", self.start())
        } else {
            write!(f, "{contig}:{}-{}", self.start(), self.stop())
        }
    }
}
