//! Bulk allocation of element buffers.
//!
//! [`RawAlloc`] is the seam between the growing layer and wherever memory comes
//! from. Two implementations ship with the crate:
//!
//! * [`Global`]: the process allocator; any failure terminates the process.
//! * [`Fallible`]: the process allocator; failures come back as [`AllocError`].

use core::alloc::Layout;
use core::mem::{self, MaybeUninit};
use core::ptr::NonNull;
use core::slice;
use std::alloc::{alloc, dealloc, handle_alloc_error};

use crate::buffer::Buffer;
use crate::error::AllocError;

/// Allocates and releases arrays of `T`.
///
/// # Safety
///
/// A pointer returned by [`allocate`](Self::allocate) for `len` elements must be
/// non-null, aligned for `T` and valid for reads and writes of `len` elements
/// until it is passed back to [`release`](Self::release) with the same `len`.
/// When `len * size_of::<T>()` is zero the pointer need not refer to any memory.
pub unsafe trait RawAlloc {
    fn allocate<T>(&self, len: usize) -> Result<NonNull<T>, AllocError>;

    /// # Safety
    /// `ptr` must come from [`allocate`](Self::allocate) on this allocator with
    /// the same `len`, and must not be used afterwards.
    unsafe fn release<T>(&self, ptr: NonNull<T>, len: usize);
}

/// Layout of `len` consecutive `T`s.
///
/// The byte size is computed with an explicit overflow check; sizes past
/// `isize::MAX` are rejected as well, matching what the platform allocator accepts.
pub fn array_layout<T>(len: usize) -> Result<Layout, AllocError> {
    let size = mem::size_of::<T>();
    let total = size.checked_mul(len).ok_or(AllocError::CapacityOverflow)?;
    Layout::from_size_align(total, mem::align_of::<T>()).map_err(|_| AllocError::CapacityOverflow)
}

/// Logs `err` and aborts the process.
#[cold]
#[inline(never)]
pub(crate) fn fatal(err: AllocError) -> ! {
    log::error!("aborting on unrecoverable allocation failure: {err}");
    std::process::abort()
}

fn allocate_with<T>(
    len: usize,
    on_null: impl FnOnce(Layout) -> AllocError,
) -> Result<NonNull<T>, AllocError> {
    let layout = array_layout::<T>(len)?;
    if layout.size() == 0 {
        return Ok(NonNull::dangling());
    }
    // Non-zero size checked above.
    let raw = unsafe { alloc(layout) };
    NonNull::new(raw.cast::<T>()).ok_or_else(|| on_null(layout))
}

unsafe fn release_array<T>(ptr: NonNull<T>, len: usize) {
    let size = mem::size_of::<T>() * len;
    if size == 0 {
        return;
    }
    // Same size and alignment that produced the allocation.
    unsafe {
        let layout = Layout::from_size_align_unchecked(size, mem::align_of::<T>());
        dealloc(ptr.as_ptr().cast::<u8>(), layout);
    }
}

/// The process allocator, aborting on any failure.
///
/// Overflowing size computations are logged and abort through
/// [`std::process::abort`]; a null result from the allocator goes to
/// [`std::alloc::handle_alloc_error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Global;

unsafe impl RawAlloc for Global {
    #[inline]
    fn allocate<T>(&self, len: usize) -> Result<NonNull<T>, AllocError> {
        match allocate_with::<T>(len, |layout| handle_alloc_error(layout)) {
            Ok(ptr) => Ok(ptr),
            Err(err) => fatal(err),
        }
    }

    #[inline]
    unsafe fn release<T>(&self, ptr: NonNull<T>, len: usize) {
        unsafe { release_array(ptr, len) }
    }
}

/// The process allocator, reporting failures instead of aborting.
///
/// Pair it with the `try_*` operations of [`AnchoredVec`](crate::AnchoredVec)
/// when running out of memory has to be survivable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Fallible;

unsafe impl RawAlloc for Fallible {
    #[inline]
    fn allocate<T>(&self, len: usize) -> Result<NonNull<T>, AllocError> {
        allocate_with::<T>(len, |layout| AllocError::OutOfMemory {
            bytes: layout.size(),
        })
    }

    #[inline]
    unsafe fn release<T>(&self, ptr: NonNull<T>, len: usize) {
        unsafe { release_array(ptr, len) }
    }
}

/// A block obtained from a [`RawAlloc`], viewed as a buffer of `cap` slots.
///
/// It does not free itself; whoever holds the allocator releases it.
pub(crate) struct Allocation<T> {
    ptr: NonNull<T>,
    cap: usize,
}

impl<T> Allocation<T> {
    /// A zero-slot block that needs no release.
    pub(crate) const fn empty() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
        }
    }

    /// Zero slots are served without asking the allocator.
    pub(crate) fn new_in<A: RawAlloc>(alloc: &A, cap: usize) -> Result<Self, AllocError> {
        if cap == 0 {
            return Ok(Self::empty());
        }
        Ok(Self {
            ptr: alloc.allocate::<T>(cap)?,
            cap,
        })
    }

    /// # Safety
    /// `self` must have come from [`new_in`](Self::new_in) with the same allocator,
    /// or from [`empty`](Self::empty), and must not be used afterwards.
    pub(crate) unsafe fn release_in<A: RawAlloc>(self, alloc: &A) {
        if self.cap != 0 {
            unsafe { alloc.release(self.ptr, self.cap) };
        }
    }
}

unsafe impl<T> Buffer<T> for Allocation<T> {
    #[inline(always)]
    fn slots(&self) -> &[MaybeUninit<T>] {
        unsafe { slice::from_raw_parts(self.ptr.as_ptr().cast::<MaybeUninit<T>>(), self.cap) }
    }

    #[inline(always)]
    fn slots_mut(&mut self) -> &mut [MaybeUninit<T>] {
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr().cast::<MaybeUninit<T>>(), self.cap) }
    }

    #[inline(always)]
    fn capacity(&self) -> usize {
        self.cap
    }
}
