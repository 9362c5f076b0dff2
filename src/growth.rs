//! Capacity growth policies for the allocating layer.
//!
//! A policy maps the current capacity to the next one. It reports overflow by
//! returning `None`; it never wraps. The growing layer additionally rejects any
//! step that does not strictly increase the capacity, whatever the policy.

use core::num::NonZeroUsize;

/// Computes the capacity to reallocate to once a sequence runs out of room.
pub trait Growth {
    /// The capacity that follows `capacity`, or `None` if it cannot be represented.
    fn next_capacity(&self, capacity: usize) -> Option<usize>;
}

/// `+1` up to a capacity of 3, then `×1.5`.
///
/// The factor stays below the golden ratio, so that in principle the blocks
/// released by earlier steps can add up to the size of a later request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThreeHalves;

impl ThreeHalves {
    /// Capacities up to this value grow by one slot at a time.
    pub const SMALL: usize = 3;
}

impl Growth for ThreeHalves {
    #[inline]
    fn next_capacity(&self, capacity: usize) -> Option<usize> {
        if capacity <= Self::SMALL {
            Some(capacity + 1)
        } else {
            capacity.checked_add(capacity >> 1)
        }
    }
}

/// `×2`, starting from one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Doubling;

impl Growth for Doubling {
    #[inline]
    fn next_capacity(&self, capacity: usize) -> Option<usize> {
        if capacity == 0 {
            Some(1)
        } else {
            capacity.checked_mul(2)
        }
    }
}

/// Fixed `+step` slots per reallocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Linear {
    /// Slots added per step.
    pub step: NonZeroUsize,
}

impl Linear {
    /// A policy adding `step` slots each time.
    pub const fn new(step: NonZeroUsize) -> Self {
        Self { step }
    }
}

impl Growth for Linear {
    #[inline]
    fn next_capacity(&self, capacity: usize) -> Option<usize> {
        capacity.checked_add(self.step.get())
    }
}

impl<F> Growth for F
where
    F: Fn(usize) -> Option<usize>,
{
    #[inline]
    fn next_capacity(&self, capacity: usize) -> Option<usize> {
        self(capacity)
    }
}
