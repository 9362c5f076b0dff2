use core::mem::MaybeUninit;

use super::BackVec;
use crate::error::AllocError;
use crate::growth::Growth;
use crate::memory::{fatal, RawAlloc};

impl<T, A: RawAlloc, G: Growth> BackVec<T, A, G> {
    /// Appends `value`, growing the buffer by one policy step if it is full.
    #[inline]
    pub fn push_back(&mut self, value: T) {
        self.push(value);
    }

    /// Like [`push_back`](Self::push_back), reporting allocation failure.
    ///
    /// On error `value` is dropped and the sequence is unchanged.
    pub fn try_push_back(&mut self, value: T) -> Result<(), AllocError> {
        self.try_push(value)
    }

    /// Extends the run by `n` slots at the end, reallocating to at least
    /// `len + n` if needed, and returns them for the caller to fill.
    ///
    /// # Safety
    /// Same contract as [`BackBuf::grow_back`](crate::BackBuf::grow_back).
    pub unsafe fn grow_back(&mut self, n: usize) -> &mut [MaybeUninit<T>] {
        match unsafe { self.try_grow(n) } {
            Ok(region) => region,
            Err(err) => fatal(err),
        }
    }

    /// # Safety
    /// Same contract as [`BackBuf::grow_back`](crate::BackBuf::grow_back).
    pub unsafe fn try_grow_back(&mut self, n: usize) -> Result<&mut [MaybeUninit<T>], AllocError> {
        unsafe { self.try_grow(n) }
    }

    /// Sets the length directly, reallocating first if `new_len` exceeds the capacity.
    ///
    /// # Safety
    /// Same contract as [`BackBuf::resize_back`](crate::BackBuf::resize_back).
    pub unsafe fn resize_back(&mut self, new_len: usize) {
        if let Err(err) = unsafe { self.try_resize(new_len) } {
            fatal(err);
        }
    }

    /// # Safety
    /// Same contract as [`BackBuf::resize_back`](crate::BackBuf::resize_back).
    pub unsafe fn try_resize_back(&mut self, new_len: usize) -> Result<(), AllocError> {
        unsafe { self.try_resize(new_len) }
    }

    /// Moves the elements into a new buffer of exactly `capacity` slots and
    /// releases the old one. Shrinking is allowed down to `len`.
    ///
    /// # Panics
    /// Panics if `capacity < len`.
    pub fn reserve_back(&mut self, capacity: usize) {
        if let Err(err) = self.try_reallocate(capacity) {
            fatal(err);
        }
    }

    /// Like [`reserve_back`](Self::reserve_back), reporting allocation failure.
    /// On error the sequence keeps its old buffer.
    pub fn try_reserve_back(&mut self, capacity: usize) -> Result<(), AllocError> {
        self.try_reallocate(capacity)
    }

    /// Appends clones of `items` in order, growing as needed.
    pub fn extend_back_from_slice(&mut self, items: &[T])
    where
        T: Clone,
    {
        if let Err(err) = self.try_extend_from_slice(items) {
            fatal(err);
        }
    }

    /// Like [`extend_back_from_slice`](Self::extend_back_from_slice), reporting
    /// allocation failure before anything is cloned.
    pub fn try_extend_back_from_slice(&mut self, items: &[T]) -> Result<(), AllocError>
    where
        T: Clone,
    {
        self.try_extend_from_slice(items)
    }

    /// Removes and returns the last element. The buffer is kept.
    #[inline]
    pub fn pop_back(&mut self) -> Option<T> {
        self.seq.pop_back()
    }

    /// Drops the last `n` elements. The buffer is kept.
    ///
    /// # Panics
    /// Panics if `n > len`.
    #[inline]
    pub fn cut_back(&mut self, n: usize) {
        self.seq.cut_back(n);
    }

    /// The last element.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.seq.back()
    }

    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.seq.back_mut()
    }

    /// The element `n` positions before the end; see [`BackBuf::neg`](crate::BackBuf::neg).
    #[inline]
    pub fn neg(&self, n: usize) -> Option<&T> {
        self.seq.neg(n)
    }

    #[inline]
    pub fn neg_mut(&mut self, n: usize) -> Option<&mut T> {
        self.seq.neg_mut(n)
    }
}

#[cfg(test)]
mod tests {
    use core::mem::MaybeUninit;
    use std::cell::Cell;
    use std::rc::Rc;

    use crate::anchored::tests::Dropper;
    use crate::auto::tests::Counting;
    use crate::{AllocError, AnchoredVec, BackVec, Fallible, ThreeHalves};

    #[test]
    fn test_back_vec_push_three_into_two() {
        let counting = Counting::default();
        let mut v: BackVec<i32, Counting> =
            AnchoredVec::with_capacity_in(2, counting.clone(), ThreeHalves);
        assert_eq!(counting.allocs.get(), 1);
        v.push_back(10);
        v.push_back(20);
        assert!(v.is_full());
        assert_eq!(counting.allocs.get(), 1);
        v.push_back(30);
        assert_eq!(v.len(), 3);
        assert_eq!(v.capacity(), 3);
        assert_eq!(v.as_slice(), &[10, 20, 30]);
        // Exactly one reallocation, and the old block went back.
        assert_eq!(counting.allocs.get(), 2);
        assert_eq!(counting.releases.get(), 1);
    }

    #[test]
    fn test_back_vec_full_after_k_pushes() {
        for k in 0..6 {
            let mut v: BackVec<usize> = BackVec::with_capacity(k);
            assert_eq!(v.is_full(), k == 0);
            for i in 0..k {
                v.push_back(i);
            }
            assert!(v.is_full());
            assert_eq!(v.capacity(), k);
        }
    }

    #[test]
    fn test_back_vec_grows_from_zero() {
        let mut v: BackVec<u8> = BackVec::new();
        let mut capacities = Vec::new();
        for i in 0..10 {
            v.push_back(i);
            if capacities.last() != Some(&v.capacity()) {
                capacities.push(v.capacity());
            }
        }
        assert_eq!(capacities, vec![1, 2, 3, 4, 6, 9, 13]);
        assert_eq!(v.as_slice(), &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_back_vec_grow_takes_max_of_policy_and_request() {
        let mut v: BackVec<u32> = BackVec::with_capacity(4);
        v.push_back(1);
        unsafe {
            let region = v.grow_back(10);
            for (i, slot) in region.iter_mut().enumerate() {
                slot.write(i as u32 + 2);
            }
        }
        // Policy step from 4 would be 6; the request needs 11.
        assert_eq!(v.capacity(), 11);
        assert_eq!(v.len(), 11);
        assert_eq!(v.back(), Some(&11));

        unsafe {
            let region = v.grow_back(1);
            region[0].write(12);
        }
        // Small overflow follows the policy: 11 -> 16.
        assert_eq!(v.capacity(), 16);
        assert_eq!(v.neg(1), Some(&12));
    }

    #[test]
    fn test_back_vec_resize() {
        let mut v: BackVec<u32> = BackVec::with_capacity(2);
        v.extend_back_from_slice(&[1, 2]);
        unsafe {
            v.resize_back(1);
            assert_eq!(v.as_slice(), &[1]);
            // Slot 1 still holds 2.
            v.resize_back(2);
        }
        assert_eq!(v.as_slice(), &[1, 2]);
        assert_eq!(v.capacity(), 2);

        // Uninitialised elements make any length valid.
        let mut raw: BackVec<MaybeUninit<u32>> = BackVec::with_capacity(2);
        unsafe { raw.resize_back(5) };
        assert_eq!(raw.len(), 5);
        assert_eq!(raw.capacity(), 5);
        unsafe { raw.resize_back(6) };
        assert_eq!(raw.capacity(), 7);
    }

    #[test]
    fn test_back_vec_reserve_and_shrink() {
        let mut v: BackVec<i32> = BackVec::new();
        v.extend_back_from_slice(&[1, 2, 3]);
        v.reserve_back(100);
        assert_eq!(v.capacity(), 100);
        assert_eq!(v.as_slice(), &[1, 2, 3]);
        v.reserve_back(3);
        assert_eq!(v.capacity(), 3);
        assert!(v.is_full());
        assert_eq!(v.as_slice(), &[1, 2, 3]);
    }

    #[test]
    #[should_panic(expected = "cannot hold 2 live elements")]
    fn test_back_vec_reserve_below_len_panics() {
        let mut v: BackVec<i32> = BackVec::new();
        v.extend_back_from_slice(&[1, 2]);
        v.reserve_back(1);
    }

    #[test]
    fn test_back_vec_clear_keeps_buffer_release_frees_it() {
        let mut v: BackVec<i32> = BackVec::with_capacity(8);
        v.extend_back_from_slice(&[1, 2, 3]);
        v.clear();
        v.clear();
        assert!(v.is_empty());
        assert_eq!(v.capacity(), 8);

        v.push_back(4);
        v.clear_and_release();
        assert!(v.is_empty());
        assert_eq!(v.capacity(), 0);
        v.push_back(5);
        assert_eq!(v.as_slice(), &[5]);
    }

    #[test]
    fn test_back_vec_pop_cut() {
        let mut v: BackVec<i32> = BackVec::new();
        v.extend([1, 2, 3, 4]);
        assert_eq!(v.pop_back(), Some(4));
        v.cut_back(2);
        assert_eq!(v.as_slice(), &[1]);
        *v.back_mut().unwrap() = 7;
        assert_eq!(v.neg(1), Some(&7));
        assert_eq!(v.neg(0), None);
    }

    #[test]
    fn test_back_vec_try_errors() {
        let mut v: BackVec<u64, Fallible> = AnchoredVec::new_in(Fallible, ThreeHalves);
        assert_eq!(v.try_reserve_back(usize::MAX / 4), Err(AllocError::CapacityOverflow));
        assert_eq!(v.try_push_back(1), Ok(()));
        assert_eq!(
            unsafe { v.try_grow_back(usize::MAX).map(|r| r.len()) },
            Err(AllocError::CapacityOverflow)
        );
        assert_eq!(v.as_slice(), &[1]);

        let err =
            BackVec::<u64, Fallible>::try_with_capacity_in(usize::MAX, Fallible, ThreeHalves).err();
        assert_eq!(err, Some(AllocError::CapacityOverflow));
    }

    #[test]
    fn test_back_vec_policy_failures_are_reported() {
        let stalled: fn(usize) -> Option<usize> = |cap| Some(cap);
        let mut v: BackVec<u8, Fallible, _> = AnchoredVec::new_in(Fallible, stalled);
        assert_eq!(v.try_push_back(1), Err(AllocError::GrowthStalled { capacity: 0 }));

        let exhausted: fn(usize) -> Option<usize> = |_| None;
        let mut v: BackVec<u8, Fallible, _> = AnchoredVec::with_capacity_in(1, Fallible, exhausted);
        assert_eq!(v.try_push_back(1), Ok(()));
        assert_eq!(v.try_push_back(2), Err(AllocError::CapacityOverflow));
        assert_eq!(v.as_slice(), &[1]);
    }

    #[test]
    fn test_back_vec_drop_behavior() {
        let counter = Rc::new(Cell::new(0));
        {
            let mut v: BackVec<Dropper> = BackVec::with_capacity(1);
            for _ in 0..10 {
                v.push_back(Dropper(counter.clone()));
            }
            // Reallocations move elements without dropping them.
            assert_eq!(counter.get(), 0);
            v.cut_back(3);
            assert_eq!(counter.get(), 3);
            v.clear_and_release();
            assert_eq!(counter.get(), 10);
            v.push_back(Dropper(counter.clone()));
        }
        assert_eq!(counter.get(), 11);
    }
}
