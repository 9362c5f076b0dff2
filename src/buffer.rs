//! Backing storage for the manual sequences.
//!
//! A [`Buffer`] is a fixed run of `MaybeUninit<T>` slots. The sequence types never
//! store pointers into it, only a length, so inline arrays may move together with
//! the handle that owns them.

use core::mem::MaybeUninit;

/// A fixed-size region of uninitialised slots a sequence can be anchored in.
///
/// # Safety
///
/// Both accessors must return the same region, with the same length, for as long
/// as the value lives. Sequences treat a prefix or suffix of that region as
/// initialised `T` values based only on their stored length, so a buffer that
/// changes size or hands out a different region breaks memory safety.
pub unsafe trait Buffer<T> {
    /// The slots as a shared slice.
    fn slots(&self) -> &[MaybeUninit<T>];

    /// The slots as an exclusive slice.
    fn slots_mut(&mut self) -> &mut [MaybeUninit<T>];

    /// Number of slots.
    #[inline(always)]
    fn capacity(&self) -> usize {
        self.slots().len()
    }
}

unsafe impl<T> Buffer<T> for &mut [MaybeUninit<T>] {
    #[inline(always)]
    fn slots(&self) -> &[MaybeUninit<T>] {
        self
    }

    #[inline(always)]
    fn slots_mut(&mut self) -> &mut [MaybeUninit<T>] {
        self
    }
}

unsafe impl<T> Buffer<T> for Box<[MaybeUninit<T>]> {
    #[inline(always)]
    fn slots(&self) -> &[MaybeUninit<T>] {
        self
    }

    #[inline(always)]
    fn slots_mut(&mut self) -> &mut [MaybeUninit<T>] {
        self
    }
}

// Inline storage moves with the handle; only offsets are recorded.
unsafe impl<T, const N: usize> Buffer<T> for [MaybeUninit<T>; N] {
    #[inline(always)]
    fn slots(&self) -> &[MaybeUninit<T>] {
        self
    }

    #[inline(always)]
    fn slots_mut(&mut self) -> &mut [MaybeUninit<T>] {
        self
    }
}

/// Creates an uninitialised inline buffer of `N` slots.
#[inline]
pub const fn uninit_array<T, const N: usize>() -> [MaybeUninit<T>; N] {
    [const { MaybeUninit::uninit() }; N]
}

/// Creates an uninitialised boxed buffer of `capacity` slots.
pub fn uninit_boxed<T>(capacity: usize) -> Box<[MaybeUninit<T>]> {
    Box::new_uninit_slice(capacity)
}
