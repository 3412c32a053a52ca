//! Traits for things that have a place on the genome.

use crate::loc::Position;
use crate::GenomeLoc;

/// Something with a contig, a start, and an end.
///
/// This allows generic code to consume a location without depending on its
/// concrete type. Positions are 1-based and fully-closed.
///
/// # Examples
///
/// ```
/// use genomeloc::GenomeLoc;
/// use genomeloc::Locatable;
///
/// fn describe(locatable: &impl Locatable) -> String {
///     format!(
///         "{} bases on {}",
///         locatable.length_on_reference(),
///         locatable.contig().unwrap_or("nothing")
///     )
/// }
///
/// assert_eq!(describe(&GenomeLoc::new("chr1", 0, 1, 10)), "10 bases on chr1");
/// ```
pub trait Locatable {
    /// Gets the contig name, if there is one.
    fn contig(&self) -> Option<&str>;

    /// Gets the first position covered.
    fn start(&self) -> Position;

    /// Gets the last position covered.
    fn end(&self) -> Position;

    /// Gets the number of bases between the start and end, inclusive.
    fn length_on_reference(&self) -> i64 {
        i64::from(self.end()) - i64::from(self.start()) + 1
    }

    /// Returns whether both are on a contig with the same name.
    fn contigs_match(&self, other: &impl Locatable) -> bool
    where
        Self: Sized,
    {
        matches!((self.contig(), other.contig()), (Some(a), Some(b)) if a == b)
    }
}

impl Locatable for GenomeLoc {
    fn contig(&self) -> Option<&str> {
        GenomeLoc::contig(self)
    }

    fn start(&self) -> Position {
        GenomeLoc::start(self)
    }

    fn end(&self) -> Position {
        GenomeLoc::end(self)
    }
}

/// Something that carries a [`GenomeLoc`].
pub trait HasGenomeLoc {
    /// Gets the location by reference.
    fn genome_loc(&self) -> &GenomeLoc;
}

impl HasGenomeLoc for GenomeLoc {
    fn genome_loc(&self) -> &GenomeLoc {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UNMAPPED;

    #[test]
    fn test_locatable_genome_loc() {
        let loc = GenomeLoc::new("chr1", 0, 5, 10);

        assert_eq!(Locatable::contig(&loc), Some("chr1"));
        assert_eq!(Locatable::start(&loc), 5);
        assert_eq!(Locatable::end(&loc), 10);
        assert_eq!(loc.length_on_reference(), 6);
    }

    #[test]
    fn test_contigs_match() {
        let a = GenomeLoc::new("chr1", 0, 5, 10);
        let b = GenomeLoc::new("chr1", 3, 50, 100);
        let c = GenomeLoc::new("chr2", 0, 5, 10);

        assert!(a.contigs_match(&b));
        assert!(!a.contigs_match(&c));
        assert!(!a.contigs_match(&UNMAPPED));
        assert!(!UNMAPPED.contigs_match(&UNMAPPED));
    }

    #[test]
    fn test_has_genome_loc() {
        let loc = GenomeLoc::new("chr1", 0, 5, 10);
        assert!(std::ptr::eq(loc.genome_loc(), &loc));
    }
}
