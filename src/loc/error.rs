//! Errors raised when the preconditions of a [`GenomeLoc`] operation are
//! violated.

use crate::GenomeLoc;

/// An error related to a [`GenomeLoc`] operation.
///
/// Every variant signals misuse by the caller: the operation was given
/// operands that it is not defined for. None of them are transient.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// A mapped and an unmapped location were combined.
    MixedMapping,
    /// An unmapped location was given to an operation that requires mapped
    /// locations. The operation's name is included.
    Unmapped(&'static str),
    /// Two locations were merged, but they are neither overlapping nor
    /// adjacent.
    NotContiguous(GenomeLoc, GenomeLoc),
    /// Two locations were intersected or subtracted, but they do not overlap.
    NoOverlap(GenomeLoc, GenomeLoc),
    /// A location was split at a position it does not contain.
    SplitOutOfBounds(GenomeLoc, i32),
    /// The endpoint span of two locations on different contigs was requested.
    DifferentContigs(GenomeLoc, GenomeLoc),
    /// The contig length lookup has no length for the contig index.
    MissingContigLength(i32),
    /// A distance across contigs does not fit into an `i64`.
    DistanceOverflow,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::MixedMapping => write!(f, "tried to combine a mapped and an unmapped genome loc"),
            Error::Unmapped(operation) => {
                write!(f, "cannot {operation} an unmapped genome loc")
            }
            Error::NotContiguous(a, b) => {
                write!(f, "the two genome locs need to be contiguous: {a} and {b}")
            }
            Error::NoOverlap(a, b) => {
                write!(f, "the two genome locs need to overlap: {a} and {b}")
            }
            Error::SplitOutOfBounds(loc, at) => write!(
                f,
                "unable to split {loc} at split point {at}; split point is not contained in \
                 region"
            ),
            Error::DifferentContigs(a, b) => write!(
                f,
                "cannot get endpoint span for genome locs on different contigs: {a} and {b}"
            ),
            Error::MissingContigLength(index) => {
                write!(f, "no contig length is known for contig index {index}")
            }
            Error::DistanceOverflow => write!(f, "distance across contigs overflowed"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let a = GenomeLoc::new("chr1", 0, 1, 10);
        let b = GenomeLoc::new("chr1", 0, 20, 30);

        assert_eq!(
            Error::NotContiguous(a.clone(), b.clone()).to_string(),
            "the two genome locs need to be contiguous: chr1:1-10 and chr1:20-30"
        );
        assert_eq!(
            Error::NoOverlap(a.clone(), b).to_string(),
            "the two genome locs need to overlap: chr1:1-10 and chr1:20-30"
        );
        assert_eq!(
            Error::SplitOutOfBounds(a, 11).to_string(),
            "unable to split chr1:1-10 at split point 11; split point is not contained in region"
        );
        assert_eq!(
            Error::Unmapped("split").to_string(),
            "cannot split an unmapped genome loc"
        );
        assert_eq!(
            Error::MissingContigLength(-1).to_string(),
            "no contig length is known for contig index -1"
        );
        assert_eq!(
            Error::DistanceOverflow.to_string(),
            "distance across contigs overflowed"
        );
    }
}
