//! Contigs and the lookup of their lengths.
//!
//! A [`Contig`] pairs the display name of a reference sequence with its index
//! in an externally-owned, ordered list of sequences (typically a sequence
//! dictionary). Only the index carries meaning for comparisons: two locations
//! are on the same contig if and only if their indices are equal.
//!
//! Resolving names to indices and validating that a contig exists are not the
//! responsibility of this crate. The single place where the crate needs to know
//! anything about the reference itself is
//! [`GenomeLoc::distance_across_contigs()`](crate::GenomeLoc::distance_across_contigs),
//! which asks a [`ContigLengths`] implementation for sequence lengths.

use std::collections::HashMap;

/// The index reserved for locations that are not placed on any real contig.
pub const SENTINEL_INDEX: i32 = -1;

/// A named, indexed reference sequence.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Contig {
    /// The display name.
    name: String,
    /// The index into the reference sequence list.
    index: i32,
}

impl Contig {
    /// Creates a new [`Contig`].
    ///
    /// # Examples
    ///
    /// ```
    /// use genomeloc::Contig;
    ///
    /// let contig = Contig::new("chr1", 0);
    /// assert_eq!(contig.name(), "chr1");
    /// assert_eq!(contig.index(), 0);
    /// ```
    pub fn new(name: impl Into<String>, index: i32) -> Self {
        Self {
            name: name.into(),
            index,
        }
    }

    /// Gets the display name of the contig.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gets the index of the contig.
    pub fn index(&self) -> i32 {
        self.index
    }

    /// Consumes `self` and returns the name and index.
    ///
    /// # Examples
    ///
    /// ```
    /// use genomeloc::Contig;
    ///
    /// let (name, index) = Contig::new("chrX", 22).into_parts();
    /// assert_eq!(name, "chrX");
    /// assert_eq!(index, 22);
    /// ```
    pub fn into_parts(self) -> (String, i32) {
        (self.name, self.index)
    }
}

impl std::fmt::Display for Contig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A read-only lookup of contig lengths by contig index.
///
/// This is the only view of a reference sequence dictionary that the crate
/// requires. Implementations return [`None`] for indices they know nothing
/// about.
///
/// # Examples
///
/// ```
/// use genomeloc::ContigLengths;
///
/// let lengths = vec![100u64, 50, 200];
/// assert_eq!(lengths.contig_length(1), Some(50));
/// assert_eq!(lengths.contig_length(3), None);
/// ```
pub trait ContigLengths {
    /// Gets the length of the contig at `index`.
    fn contig_length(&self, index: usize) -> Option<u64>;
}

impl ContigLengths for [u64] {
    fn contig_length(&self, index: usize) -> Option<u64> {
        self.get(index).copied()
    }
}

impl ContigLengths for Vec<u64> {
    fn contig_length(&self, index: usize) -> Option<u64> {
        self.as_slice().contig_length(index)
    }
}

impl ContigLengths for HashMap<usize, u64> {
    fn contig_length(&self, index: usize) -> Option<u64> {
        self.get(&index).copied()
    }
}

impl<T> ContigLengths for &T
where
    T: ContigLengths + ?Sized,
{
    fn contig_length(&self, index: usize) -> Option<u64> {
        (**self).contig_length(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contig_display() {
        assert_eq!(Contig::new("chr1", 0).to_string(), "chr1");
    }

    #[test]
    fn test_slice_lookup() {
        let lengths: &[u64] = &[10, 20, 30];
        assert_eq!(lengths.contig_length(0), Some(10));
        assert_eq!(lengths.contig_length(2), Some(30));
        assert_eq!(lengths.contig_length(3), None);
    }

    #[test]
    fn test_map_lookup() {
        let lengths = HashMap::from([(0usize, 1000u64), (5, 2000)]);
        assert_eq!(lengths.contig_length(5), Some(2000));
        assert_eq!(lengths.contig_length(1), None);

        // Lookups through a reference.
        let borrowed = &lengths;
        assert_eq!(borrowed.contig_length(0), Some(1000));
    }
}
