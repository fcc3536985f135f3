//! Sources that can be diffed
//!
//! A diff never looks at the compared values directly. It only needs the
//! lengths of the two sequences and a way to ask whether the entry at an A
//! index equals the entry at a B index. The `Comparable` trait is that
//! contract; the adapters in this module implement it for the common shapes:
//!
//! - `slice`: two slices of any `PartialEq` value, or of any value with a
//!   custom equality function
//! - `text`: the characters or raw bytes of two strings
//!
//! Implementations must be deterministic and free of side effects for the
//! duration of a diff. Indices are always in range; an out-of-range index is
//! a bug in the caller and panics.

pub mod slice;
pub mod text;

pub use slice::{CustomComparable, SliceComparable};
pub use text::{ByteComparable, CharComparable};

/// Two indexable sequences, A and B, which can be compared entry by entry.
pub trait Comparable {
    /// The length of the first (A) sequence.
    fn a_length(&self) -> usize;

    /// The length of the second (B) sequence.
    fn b_length(&self) -> usize;

    /// Determines if the A entry at `a_index` equals the B entry at `b_index`.
    fn equals(&self, a_index: usize, b_index: usize) -> bool;
}

impl<C: Comparable + ?Sized> Comparable for &C {
    fn a_length(&self) -> usize {
        (**self).a_length()
    }

    fn b_length(&self) -> usize {
        (**self).b_length()
    }

    fn equals(&self, a_index: usize, b_index: usize) -> bool {
        (**self).equals(a_index, b_index)
    }
}
