use core::mem::MaybeUninit;

use super::FrontVec;
use crate::error::AllocError;
use crate::growth::Growth;
use crate::memory::{fatal, RawAlloc};

impl<T, A: RawAlloc, G: Growth> FrontVec<T, A, G> {
    /// Prepends `value`, growing the buffer by one policy step if it is full.
    #[inline]
    pub fn push_front(&mut self, value: T) {
        self.push(value);
    }

    /// Like [`push_front`](Self::push_front), reporting allocation failure.
    pub fn try_push_front(&mut self, value: T) -> Result<(), AllocError> {
        self.try_push(value)
    }

    /// Extends the run by `n` slots at the front, reallocating to at least
    /// `len + n` if needed. The slots come back in logical order.
    ///
    /// # Safety
    /// Same contract as [`FrontBuf::grow_front`](crate::FrontBuf::grow_front).
    pub unsafe fn grow_front(&mut self, n: usize) -> &mut [MaybeUninit<T>] {
        match unsafe { self.try_grow(n) } {
            Ok(region) => region,
            Err(err) => fatal(err),
        }
    }

    /// # Safety
    /// Same contract as [`FrontBuf::grow_front`](crate::FrontBuf::grow_front).
    pub unsafe fn try_grow_front(&mut self, n: usize) -> Result<&mut [MaybeUninit<T>], AllocError> {
        unsafe { self.try_grow(n) }
    }

    /// Sets the length directly, reallocating first if `new_len` exceeds the
    /// capacity. The run stays anchored at the end of the buffer.
    ///
    /// # Safety
    /// Same contract as [`FrontBuf::resize_front`](crate::FrontBuf::resize_front).
    pub unsafe fn resize_front(&mut self, new_len: usize) {
        if let Err(err) = unsafe { self.try_resize(new_len) } {
            fatal(err);
        }
    }

    /// # Safety
    /// Same contract as [`FrontBuf::resize_front`](crate::FrontBuf::resize_front).
    pub unsafe fn try_resize_front(&mut self, new_len: usize) -> Result<(), AllocError> {
        unsafe { self.try_resize(new_len) }
    }

    /// Moves the elements to the end of a new buffer of exactly `capacity`
    /// slots and releases the old one.
    ///
    /// # Panics
    /// Panics if `capacity < len`.
    pub fn reserve_front(&mut self, capacity: usize) {
        if let Err(err) = self.try_reallocate(capacity) {
            fatal(err);
        }
    }

    /// Like [`reserve_front`](Self::reserve_front), reporting allocation failure.
    /// On error the sequence keeps its old buffer.
    pub fn try_reserve_front(&mut self, capacity: usize) -> Result<(), AllocError> {
        self.try_reallocate(capacity)
    }

    /// Prepends clones of `items`, keeping their order.
    pub fn extend_front_from_slice(&mut self, items: &[T])
    where
        T: Clone,
    {
        if let Err(err) = self.try_extend_from_slice(items) {
            fatal(err);
        }
    }

    /// Like [`extend_front_from_slice`](Self::extend_front_from_slice), reporting
    /// allocation failure before anything is cloned.
    pub fn try_extend_front_from_slice(&mut self, items: &[T]) -> Result<(), AllocError>
    where
        T: Clone,
    {
        self.try_extend_from_slice(items)
    }

    /// Removes and returns the first element. The buffer is kept.
    #[inline]
    pub fn pop_front(&mut self) -> Option<T> {
        self.seq.pop_front()
    }

    /// Drops the first `n` elements. The buffer is kept.
    ///
    /// # Panics
    /// Panics if `n > len`.
    #[inline]
    pub fn cut_front(&mut self, n: usize) {
        self.seq.cut_front(n);
    }

    /// The first element.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.seq.front()
    }

    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.seq.front_mut()
    }

    /// The element at logical index `n`, counted from the front.
    #[inline]
    pub fn at(&self, n: usize) -> Option<&T> {
        self.seq.at(n)
    }

    #[inline]
    pub fn at_mut(&mut self, n: usize) -> Option<&mut T> {
        self.seq.at_mut(n)
    }
}
