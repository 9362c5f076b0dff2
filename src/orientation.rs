//! Growth direction of a sequence.
//!
//! An orientation maps the logical layout of a sequence (a live run of `len`
//! elements plus a spare region next to its growing edge) onto slot indices of a
//! buffer with `cap` slots. Every mutating operation in this crate is written once
//! against these two mappings, so [`Back`] and [`Front`] are exact mirrors.

use core::ops::Range;

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Back {}
    impl Sealed for super::Front {}
}

/// Where a sequence is anchored and in which direction it grows.
///
/// Sealed: the only implementors are [`Back`] and [`Front`].
pub trait Orientation: sealed::Sealed {
    /// Short name used in log records.
    const NAME: &'static str;

    /// Slots holding the `len` live elements, in logical order.
    fn live(len: usize, cap: usize) -> Range<usize>;

    /// The `n` slots directly beyond the growing edge of a run of `len`, in the
    /// logical order they take once they join the run.
    fn spare(len: usize, n: usize, cap: usize) -> Range<usize>;
}

/// Anchored at the start of the buffer; grows toward the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Back {}

/// Anchored at the end of the buffer; grows toward the start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Front {}

impl Orientation for Back {
    const NAME: &'static str = "back";

    #[inline(always)]
    fn live(len: usize, _cap: usize) -> Range<usize> {
        0..len
    }

    #[inline(always)]
    fn spare(len: usize, n: usize, _cap: usize) -> Range<usize> {
        len..len + n
    }
}

impl Orientation for Front {
    const NAME: &'static str = "front";

    #[inline(always)]
    fn live(len: usize, cap: usize) -> Range<usize> {
        cap - len..cap
    }

    #[inline(always)]
    fn spare(len: usize, n: usize, cap: usize) -> Range<usize> {
        let start = cap - len;
        start - n..start
    }
}
