use core::mem::MaybeUninit;

use super::BackBuf;
use crate::buffer::Buffer;

impl<T, B: Buffer<T>> BackBuf<T, B> {
    /// Appends `value` after the last element.
    ///
    /// # Panics
    /// Panics if the sequence is full. The manual layer never grows its buffer.
    #[inline]
    pub fn push_back(&mut self, value: T) {
        self.push(value);
    }

    /// Extends the run by `n` slots at the end and returns them for the caller to
    /// fill in place.
    ///
    /// # Safety
    /// The returned slots are counted as live as soon as this returns. Every one of
    /// them must be initialised before the sequence is read, popped, cut, cleared or
    /// dropped. Use [`resize_back`](Self::resize_back) to give back slots that were
    /// not filled.
    ///
    /// # Panics
    /// Panics if fewer than `n` slots are free.
    #[inline]
    pub unsafe fn grow_back(&mut self, n: usize) -> &mut [MaybeUninit<T>] {
        unsafe { self.grow(n) }
    }

    /// Removes and returns the last element.
    #[inline]
    pub fn pop_back(&mut self) -> Option<T> {
        self.pop()
    }

    /// Drops the last `n` elements.
    ///
    /// # Panics
    /// Panics if `n > len`.
    #[inline]
    pub fn cut_back(&mut self, n: usize) {
        self.cut(n);
    }

    /// Sets the length directly, keeping the run anchored at slot 0.
    ///
    /// Nothing is dropped: elements beyond `new_len` are forgotten.
    ///
    /// # Safety
    /// Slots `0..new_len` must all hold initialised values.
    ///
    /// # Panics
    /// Panics if `new_len` exceeds the capacity.
    #[inline]
    pub unsafe fn resize_back(&mut self, new_len: usize) {
        unsafe { self.resize(new_len) }
    }

    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.edge()
    }

    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.edge_mut()
    }

    /// The element `n` positions before the end: `neg(1)` is the last element.
    ///
    /// Returns `None` for `n == 0` and for `n > len`.
    #[inline]
    pub fn neg(&self, n: usize) -> Option<&T> {
        let index = self.len().checked_sub(n)?;
        if n == 0 {
            return None;
        }
        self.as_slice().get(index)
    }

    #[inline]
    pub fn neg_mut(&mut self, n: usize) -> Option<&mut T> {
        let index = self.len().checked_sub(n)?;
        if n == 0 {
            return None;
        }
        self.as_mut_slice().get_mut(index)
    }

    /// Moves the elements to the start of `buffer` and returns the old buffer.
    ///
    /// # Panics
    /// Panics if `buffer` has fewer slots than there are live elements.
    #[inline]
    pub fn reserve_back(&mut self, buffer: B) -> B {
        self.reserve(buffer)
    }

    /// Appends clones of `items` in order.
    ///
    /// If a clone panics, the clones made so far are dropped and the sequence is
    /// left as it was.
    ///
    /// # Panics
    /// Panics if `items` does not fit in the free slots.
    pub fn extend_back_from_slice(&mut self, items: &[T])
    where
        T: Clone,
    {
        self.extend_from_slice(items);
    }
}
