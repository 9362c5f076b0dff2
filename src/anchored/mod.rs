//! Manual sequences: the caller supplies and owns the buffer.
//!
//! [`Anchored`] keeps a buffer and a logical length and never allocates. The live
//! elements form one contiguous run adjacent to the anchor chosen by the
//! orientation; see [`BackBuf`] and [`FrontBuf`] for the per-direction API.
//!
//! Capacity preconditions are checked and panic, for example pushing into a full
//! sequence. The two operations that hand uninitialised slots to the caller as
//! live elements are `unsafe`.

mod back;
mod front;

use core::fmt;
use core::marker::PhantomData;
use core::mem::{self, ManuallyDrop, MaybeUninit};
use core::ops::{Deref, DerefMut};
use core::ptr;
use core::slice;

use crate::buffer::Buffer;
use crate::orientation::{Back, Front, Orientation};

/// Sequence growing away from the start of a caller-supplied buffer.
pub type BackBuf<T, B> = Anchored<T, Back, B>;

/// Sequence growing away from the end of a caller-supplied buffer.
pub type FrontBuf<T, B> = Anchored<T, Front, B>;

/// A growable run of `T` inside a fixed buffer `B`, anchored per orientation `O`.
///
/// # Representation
/// Only the length is stored. The capacity is the buffer's slot count, and the
/// anchor is implied by `O`: slot `0` for [`Back`], slot `capacity` for [`Front`].
/// Because no pointer into the buffer is kept, inline buffers may be moved along
/// with the handle.
///
/// # Ownership
/// The handle owns both the buffer and the live elements. Dropping it drops the
/// elements and then the buffer. [`into_buffer`](Self::into_buffer),
/// [`into_raw_parts`](Self::into_raw_parts) and `reserve_*` hand a buffer back.
///
/// # Layout
/// Slice access (`Deref<Target = [T]>`, [`as_slice`](Self::as_slice)) always
/// yields elements in logical front-to-back order, whatever the orientation.
pub struct Anchored<T, O: Orientation, B: Buffer<T>> {
    buf: B,
    len: usize,
    _marker: PhantomData<(T, fn() -> O)>,
}

impl<T, O: Orientation, B: Buffer<T>> Anchored<T, O, B> {
    /// Starts an empty sequence in `buffer`. Zero-capacity buffers are fine.
    #[inline]
    pub fn new(buffer: B) -> Self {
        Self {
            buf: buffer,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Rebuilds a sequence from parts produced by [`into_raw_parts`](Self::into_raw_parts).
    ///
    /// # Safety
    /// The `len` slots of `buffer` that the orientation `O` treats as live must hold
    /// initialised values of `T` that nothing else owns.
    ///
    /// # Panics
    /// Panics if `len` exceeds the buffer's capacity.
    pub unsafe fn from_raw_parts(buffer: B, len: usize) -> Self {
        assert!(
            len <= buffer.capacity(),
            "length {len} exceeds buffer capacity {}",
            buffer.capacity()
        );
        Self {
            buf: buffer,
            len,
            _marker: PhantomData,
        }
    }

    /// Ends the sequence: drops the live elements and returns the buffer.
    pub fn into_buffer(mut self) -> B {
        self.clear();
        self.into_raw_parts().0
    }

    /// Ends the sequence without dropping anything, returning the buffer and length.
    ///
    /// The live elements stay where the orientation put them. They are leaked
    /// unless passed back through [`from_raw_parts`](Self::from_raw_parts).
    pub fn into_raw_parts(self) -> (B, usize) {
        let this = ManuallyDrop::new(self);
        let len = this.len;
        // `this` is never dropped, so the buffer is moved out exactly once.
        let buf = unsafe { ptr::read(&this.buf) };
        (buf, len)
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// `true` when every slot is live.
    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Number of free slots on the growing edge.
    #[inline(always)]
    pub fn spare_len(&self) -> usize {
        self.capacity() - self.len
    }

    /// Drops every live element. The buffer and capacity are kept.
    pub fn clear(&mut self) {
        self.cut(self.len);
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        let live = &self.buf.slots()[O::live(self.len, self.capacity())];
        unsafe { slice::from_raw_parts(live.as_ptr().cast::<T>(), live.len()) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let cap = self.capacity();
        let live = &mut self.buf.slots_mut()[O::live(self.len, cap)];
        unsafe { slice::from_raw_parts_mut(live.as_mut_ptr().cast::<T>(), live.len()) }
    }

    pub(crate) fn push(&mut self, value: T) {
        assert!(
            !self.is_full(),
            "push into a full {} sequence (capacity {})",
            O::NAME,
            self.capacity()
        );
        let slot = O::spare(self.len, 1, self.capacity()).start;
        self.buf.slots_mut()[slot].write(value);
        self.len += 1;
    }

    /// # Safety
    /// The returned slots count as live; they must be written before the sequence
    /// reads or drops them.
    pub(crate) unsafe fn grow(&mut self, n: usize) -> &mut [MaybeUninit<T>] {
        assert!(
            n <= self.spare_len(),
            "cannot grow {} sequence by {n}: {} free slots",
            O::NAME,
            self.spare_len()
        );
        let region = O::spare(self.len, n, self.capacity());
        self.len += n;
        &mut self.buf.slots_mut()[region]
    }

    pub(crate) fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        let slot = O::spare(self.len, 1, self.capacity()).start;
        Some(unsafe { self.buf.slots()[slot].assume_init_read() })
    }

    pub(crate) fn cut(&mut self, n: usize) {
        assert!(
            n <= self.len,
            "cannot cut {n} elements from a {} sequence of length {}",
            O::NAME,
            self.len
        );
        let cap = self.capacity();
        // Shorten first so a panicking destructor cannot cause a double drop.
        self.len -= n;
        let dead = O::spare(self.len, n, cap);
        unsafe { drop_slots(&mut self.buf.slots_mut()[dead]) };
    }

    /// # Safety
    /// Every slot the new length makes live must already hold an initialised `T`.
    /// Shrinking never drops: elements that fall out of the run are forgotten.
    pub(crate) unsafe fn resize(&mut self, new_len: usize) {
        assert!(
            new_len <= self.capacity(),
            "length {new_len} exceeds {} sequence capacity {}",
            O::NAME,
            self.capacity()
        );
        self.len = new_len;
    }

    /// The element on the growing edge: last for `Back`, first for `Front`.
    pub(crate) fn edge(&self) -> Option<&T> {
        let slot = O::spare(self.len.checked_sub(1)?, 1, self.capacity()).start;
        Some(unsafe { self.buf.slots()[slot].assume_init_ref() })
    }

    pub(crate) fn edge_mut(&mut self) -> Option<&mut T> {
        let slot = O::spare(self.len.checked_sub(1)?, 1, self.capacity()).start;
        Some(unsafe { self.buf.slots_mut()[slot].assume_init_mut() })
    }

    /// Moves the live run into `buffer`, anchored the same way, and returns the
    /// superseded buffer.
    pub(crate) fn reserve(&mut self, mut buffer: B) -> B {
        let len = self.len;
        let new_cap = buffer.capacity();
        assert!(
            new_cap >= len,
            "buffer of {new_cap} slots cannot hold {len} live elements"
        );
        let from = O::live(len, self.capacity());
        let to = O::live(len, new_cap);
        // Two distinct owned buffers: the regions never overlap.
        unsafe {
            ptr::copy_nonoverlapping(
                self.buf.slots()[from].as_ptr(),
                buffer.slots_mut()[to].as_mut_ptr(),
                len,
            );
        }
        mem::replace(&mut self.buf, buffer)
    }

    /// Clones `items` into the spare region so that they appear, in order, on the
    /// growing side of the run.
    pub(crate) fn extend_from_slice(&mut self, items: &[T])
    where
        T: Clone,
    {
        let n = items.len();
        assert!(
            n <= self.spare_len(),
            "cannot extend {} sequence by {n}: {} free slots",
            O::NAME,
            self.spare_len()
        );
        let region = O::spare(self.len, n, self.capacity());
        let mut fill = PartialFill {
            slots: &mut self.buf.slots_mut()[region],
            written: 0,
        };
        for item in items {
            fill.slots[fill.written].write(item.clone());
            fill.written += 1;
        }
        mem::forget(fill);
        self.len += n;
    }
}

/// Drops the first `written` slots if a clone panics part way through a fill.
struct PartialFill<'a, T> {
    slots: &'a mut [MaybeUninit<T>],
    written: usize,
}

impl<T> Drop for PartialFill<'_, T> {
    fn drop(&mut self) {
        unsafe { drop_slots(&mut self.slots[..self.written]) };
    }
}

/// # Safety
/// Every slot in `slots` must hold an initialised `T` that is not used afterwards.
unsafe fn drop_slots<T>(slots: &mut [MaybeUninit<T>]) {
    let run = ptr::slice_from_raw_parts_mut(slots.as_mut_ptr().cast::<T>(), slots.len());
    unsafe { ptr::drop_in_place(run) };
}

impl<T, O: Orientation, B: Buffer<T>> Drop for Anchored<T, O, B> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T, O: Orientation, B: Buffer<T>> Deref for Anchored<T, O, B> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T, O: Orientation, B: Buffer<T>> DerefMut for Anchored<T, O, B> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T, O: Orientation, B: Buffer<T>> AsRef<[T]> for Anchored<T, O, B> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, O: Orientation, B: Buffer<T>> AsMut<[T]> for Anchored<T, O, B> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: fmt::Debug, O: Orientation, B: Buffer<T>> fmt::Debug for Anchored<T, O, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_slice(), f)
    }
}

impl<T, O, B, B2> PartialEq<Anchored<T, O, B2>> for Anchored<T, O, B>
where
    T: PartialEq,
    O: Orientation,
    B: Buffer<T>,
    B2: Buffer<T>,
{
    fn eq(&self, other: &Anchored<T, O, B2>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq, O: Orientation, B: Buffer<T>> PartialEq<[T]> for Anchored<T, O, B> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: Eq, O: Orientation, B: Buffer<T>> Eq for Anchored<T, O, B> {}
