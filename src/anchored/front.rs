use core::mem::MaybeUninit;

use super::FrontBuf;
use crate::buffer::Buffer;

impl<T, B: Buffer<T>> FrontBuf<T, B> {
    /// Prepends `value` before the first element.
    ///
    /// # Panics
    /// Panics if the sequence is full.
    #[inline]
    pub fn push_front(&mut self, value: T) {
        self.push(value);
    }

    /// Extends the run by `n` slots at the front and returns them, in logical
    /// order, for the caller to fill in place.
    ///
    /// # Safety
    /// Same contract as [`BackBuf::grow_back`](crate::BackBuf::grow_back): all `n`
    /// slots must be written before anything reads or drops them.
    ///
    /// # Panics
    /// Panics if fewer than `n` slots are free.
    #[inline]
    pub unsafe fn grow_front(&mut self, n: usize) -> &mut [MaybeUninit<T>] {
        unsafe { self.grow(n) }
    }

    /// Removes and returns the first element.
    #[inline]
    pub fn pop_front(&mut self) -> Option<T> {
        self.pop()
    }

    /// Drops the first `n` elements.
    ///
    /// # Panics
    /// Panics if `n > len`.
    #[inline]
    pub fn cut_front(&mut self, n: usize) {
        self.cut(n);
    }

    /// Sets the length directly, keeping the run anchored at the buffer's end.
    ///
    /// # Safety
    /// The last `new_len` slots of the buffer must all hold initialised values.
    /// Shrinking forgets the elements that leave the front of the run.
    ///
    /// # Panics
    /// Panics if `new_len` exceeds the capacity.
    #[inline]
    pub unsafe fn resize_front(&mut self, new_len: usize) {
        unsafe { self.resize(new_len) }
    }

    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.edge()
    }

    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.edge_mut()
    }

    /// The element at logical index `n`, counted from the front.
    #[inline]
    pub fn at(&self, n: usize) -> Option<&T> {
        self.as_slice().get(n)
    }

    #[inline]
    pub fn at_mut(&mut self, n: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(n)
    }

    /// Moves the elements to the end of `buffer` and returns the old buffer.
    ///
    /// # Panics
    /// Panics if `buffer` has fewer slots than there are live elements.
    #[inline]
    pub fn reserve_front(&mut self, buffer: B) -> B {
        self.reserve(buffer)
    }

    /// Prepends clones of `items` so the sequence reads `items` followed by the
    /// previous contents.
    ///
    /// # Panics
    /// Panics if `items` does not fit in the free slots.
    pub fn extend_front_from_slice(&mut self, items: &[T])
    where
        T: Clone,
    {
        self.extend_from_slice(items);
    }
}
