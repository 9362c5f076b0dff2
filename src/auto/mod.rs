//! Allocating sequences: a manual sequence plus an allocator and a growth policy.
//!
//! [`AnchoredVec`] owns its buffer outright. All index bookkeeping is delegated to
//! the wrapped [`Anchored`]; this layer only decides when to reallocate and to
//! what size, then hands the superseded block back to the allocator.
//!
//! Every growing operation comes in two forms. The `try_*` form reports
//! [`AllocError`]; the plain form treats the same error as fatal, logs it and
//! aborts the process. With the default [`Global`] allocator the allocation
//! itself never returns an error, so only policy failures reach the `try_*` path.

mod back;
mod front;

use core::fmt;
use core::mem::MaybeUninit;
use core::ops::{Deref, DerefMut};

use crate::anchored::Anchored;
use crate::error::AllocError;
use crate::growth::{Growth, ThreeHalves};
use crate::memory::{fatal, Allocation, Global, RawAlloc};
use crate::orientation::{Back, Front, Orientation};

/// Growable sequence appending at the back, with the default allocator and policy.
pub type BackVec<T, A = Global, G = ThreeHalves> = AnchoredVec<T, Back, A, G>;

/// Growable sequence prepending at the front, with the default allocator and policy.
pub type FrontVec<T, A = Global, G = ThreeHalves> = AnchoredVec<T, Front, A, G>;

/// A sequence that allocates, grows and releases its own buffer.
///
/// # Generic parameters
/// | Parameter | Meaning |
/// |-----------|---------|
/// | `T` | Element type |
/// | `O` | [`Back`] or [`Front`] |
/// | `A` | [`RawAlloc`] providing the buffer; [`Global`] by default |
/// | `G` | [`Growth`] policy consulted when the buffer is full; [`ThreeHalves`] by default |
///
/// # Growth
/// A single push into a full sequence reallocates to `G::next_capacity(cap)`.
/// Bulk requests (`grow_*`, `resize_*`, `extend_*`) that need more than that get
/// exactly what they need. A policy step that overflows or fails to increase the
/// capacity is an [`AllocError`].
///
/// # Examples
///
/// ```rust
/// use anchor_vec::BackVec;
///
/// let mut v: BackVec<i32> = BackVec::with_capacity(2);
/// v.push_back(10);
/// v.push_back(20);
/// // Full: the third push reallocates to the next policy capacity.
/// v.push_back(30);
///
/// assert_eq!(v.as_slice(), &[10, 20, 30]);
/// assert_eq!(v.capacity(), 3);
/// ```
///
/// Recoverable allocation:
///
/// ```rust
/// use anchor_vec::{AllocError, AnchoredVec, Fallible, FrontVec, ThreeHalves};
///
/// let mut v: FrontVec<u64, Fallible> = AnchoredVec::new_in(Fallible, ThreeHalves);
/// assert_eq!(v.try_push_front(1), Ok(()));
/// assert_eq!(v.try_reserve_front(usize::MAX), Err(AllocError::CapacityOverflow));
/// assert_eq!(v.as_slice(), &[1]);
/// ```
pub struct AnchoredVec<T, O: Orientation, A: RawAlloc = Global, G = ThreeHalves> {
    seq: Anchored<T, O, Allocation<T>>,
    alloc: A,
    growth: G,
}

// The raw block is owned exclusively; thread-safety follows the contents.
unsafe impl<T, O, A, G> Send for AnchoredVec<T, O, A, G>
where
    T: Send,
    O: Orientation,
    A: RawAlloc + Send,
    G: Send,
{
}

unsafe impl<T, O, A, G> Sync for AnchoredVec<T, O, A, G>
where
    T: Sync,
    O: Orientation,
    A: RawAlloc + Sync,
    G: Sync,
{
}

impl<T, O: Orientation> AnchoredVec<T, O> {
    /// An empty sequence with no buffer yet.
    #[inline]
    pub fn new() -> Self {
        Self::new_in(Global, ThreeHalves)
    }

    /// A sequence with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_in(capacity, Global, ThreeHalves)
    }
}

impl<T, O: Orientation, A: RawAlloc, G: Growth> AnchoredVec<T, O, A, G> {
    /// An empty sequence with no buffer yet. Nothing is allocated.
    #[inline]
    pub fn new_in(alloc: A, growth: G) -> Self {
        Self {
            seq: Anchored::new(Allocation::empty()),
            alloc,
            growth,
        }
    }

    /// Allocates `capacity` slots from `alloc`; aborts on failure.
    pub fn with_capacity_in(capacity: usize, alloc: A, growth: G) -> Self {
        Self::try_with_capacity_in(capacity, alloc, growth).unwrap_or_else(|err| fatal(err))
    }

    /// Like [`with_capacity_in`](Self::with_capacity_in), returning the error.
    pub fn try_with_capacity_in(capacity: usize, alloc: A, growth: G) -> Result<Self, AllocError> {
        let block = Allocation::new_in(&alloc, capacity)?;
        Ok(Self {
            seq: Anchored::new(block),
            alloc,
            growth,
        })
    }

    /// Number of live elements.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.seq.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    /// Number of slots in the current buffer; `0` before the first allocation.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.seq.capacity()
    }

    /// `true` when the next push has to reallocate.
    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.seq.is_full()
    }

    /// Free slots on the growing edge.
    #[inline(always)]
    pub fn spare_len(&self) -> usize {
        self.seq.spare_len()
    }

    /// The live elements in logical front-to-back order.
    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        self.seq.as_slice()
    }

    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.seq.as_mut_slice()
    }

    /// The allocator every buffer of this sequence comes from.
    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    /// The policy consulted when a push finds the buffer full.
    pub fn growth(&self) -> &G {
        &self.growth
    }

    /// Drops every element and keeps the buffer for reuse.
    pub fn clear(&mut self) {
        self.seq.clear();
    }

    /// Drops every element and gives the buffer back to the allocator.
    ///
    /// Capacity drops to zero; the next push allocates afresh.
    pub fn clear_and_release(&mut self) {
        let capacity = self.capacity();
        self.release_buffer();
        log::debug!("released {} sequence buffer of {capacity} slots", O::NAME);
    }

    /// Moves the elements into a fresh block of exactly `capacity` slots.
    fn try_reallocate(&mut self, capacity: usize) -> Result<(), AllocError> {
        let len = self.len();
        assert!(
            capacity >= len,
            "capacity {capacity} cannot hold {len} live elements"
        );
        let block = Allocation::new_in(&self.alloc, capacity)?;
        let old_capacity = self.capacity();
        let old = self.seq.reserve(block);
        unsafe { old.release_in(&self.alloc) };
        log::trace!(
            "reallocated {} sequence: capacity {old_capacity} -> {capacity}, {len} live",
            O::NAME
        );
        Ok(())
    }

    /// The capacity a growing operation needing `required` slots moves to.
    fn next_capacity(&self, required: usize) -> Result<usize, AllocError> {
        let capacity = self.capacity();
        let next = self
            .growth
            .next_capacity(capacity)
            .ok_or(AllocError::CapacityOverflow)?;
        if next <= capacity {
            return Err(AllocError::GrowthStalled { capacity });
        }
        Ok(next.max(required))
    }

    fn try_make_room(&mut self, required: usize) -> Result<(), AllocError> {
        if required <= self.capacity() {
            return Ok(());
        }
        let capacity = self.next_capacity(required)?;
        self.try_reallocate(capacity)
    }

    fn required(&self, additional: usize) -> Result<usize, AllocError> {
        self.len()
            .checked_add(additional)
            .ok_or(AllocError::CapacityOverflow)
    }

    fn try_push(&mut self, value: T) -> Result<(), AllocError> {
        let required = self.required(1)?;
        self.try_make_room(required)?;
        self.seq.push(value);
        Ok(())
    }

    fn push(&mut self, value: T) {
        if let Err(err) = self.try_push(value) {
            fatal(err);
        }
    }

    /// # Safety
    /// See [`Anchored::grow`].
    unsafe fn try_grow(&mut self, n: usize) -> Result<&mut [MaybeUninit<T>], AllocError> {
        let required = self.required(n)?;
        self.try_make_room(required)?;
        Ok(unsafe { self.seq.grow(n) })
    }

    /// # Safety
    /// See [`Anchored::resize`].
    unsafe fn try_resize(&mut self, new_len: usize) -> Result<(), AllocError> {
        self.try_make_room(new_len)?;
        unsafe { self.seq.resize(new_len) };
        Ok(())
    }

    fn try_extend_from_slice(&mut self, items: &[T]) -> Result<(), AllocError>
    where
        T: Clone,
    {
        let required = self.required(items.len())?;
        self.try_make_room(required)?;
        self.seq.extend_from_slice(items);
        Ok(())
    }
}

impl<T, O: Orientation, A: RawAlloc, G> AnchoredVec<T, O, A, G> {
    fn release_buffer(&mut self) {
        self.seq.clear();
        let block = self.seq.reserve(Allocation::empty());
        // The block came from `self.alloc` (or is the empty block) and is gone from `seq`.
        unsafe { block.release_in(&self.alloc) };
    }
}

impl<T, O: Orientation, A: RawAlloc, G> Drop for AnchoredVec<T, O, A, G> {
    fn drop(&mut self) {
        self.release_buffer();
    }
}

impl<T, O, A, G> Default for AnchoredVec<T, O, A, G>
where
    O: Orientation,
    A: RawAlloc + Default,
    G: Growth + Default,
{
    fn default() -> Self {
        Self::new_in(A::default(), G::default())
    }
}

impl<T, O, A, G> Clone for AnchoredVec<T, O, A, G>
where
    T: Clone,
    O: Orientation,
    A: RawAlloc + Clone,
    G: Growth + Clone,
{
    fn clone(&self) -> Self {
        let mut out =
            Self::with_capacity_in(self.capacity(), self.alloc.clone(), self.growth.clone());
        out.seq.extend_from_slice(self.as_slice());
        out
    }
}

/// Pushes each item on the growing edge. For [`FrontVec`] the items end up in
/// reverse iteration order.
impl<T, O: Orientation, A: RawAlloc, G: Growth> Extend<T> for AnchoredVec<T, O, A, G> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T, O: Orientation, A: RawAlloc, G> Deref for AnchoredVec<T, O, A, G> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.seq.as_slice()
    }
}

impl<T, O: Orientation, A: RawAlloc, G> DerefMut for AnchoredVec<T, O, A, G> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.seq.as_mut_slice()
    }
}

impl<T, O: Orientation, A: RawAlloc, G> AsRef<[T]> for AnchoredVec<T, O, A, G> {
    fn as_ref(&self) -> &[T] {
        self.seq.as_slice()
    }
}

impl<T: fmt::Debug, O: Orientation, A: RawAlloc, G> fmt::Debug for AnchoredVec<T, O, A, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.seq.as_slice(), f)
    }
}

impl<T, O, A, A2, G, G2> PartialEq<AnchoredVec<T, O, A2, G2>> for AnchoredVec<T, O, A, G>
where
    T: PartialEq,
    O: Orientation,
    A: RawAlloc,
    A2: RawAlloc,
{
    fn eq(&self, other: &AnchoredVec<T, O, A2, G2>) -> bool {
        self.seq.as_slice() == other.seq.as_slice()
    }
}

impl<T: PartialEq, O: Orientation, A: RawAlloc, G> PartialEq<[T]> for AnchoredVec<T, O, A, G> {
    fn eq(&self, other: &[T]) -> bool {
        self.seq.as_slice() == other
    }
}

impl<T: Eq, O: Orientation, A: RawAlloc, G> Eq for AnchoredVec<T, O, A, G> {}
