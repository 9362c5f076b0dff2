//! Allocation error type shared by the allocators and the growing layer.

use thiserror::Error;

/// Failure of a capacity computation or of a buffer allocation.
///
/// The default `Global` allocator never hands these out: it aborts instead. They
/// surface from the `Fallible` allocator and from the `try_*` operations of the
/// growing layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum AllocError {
    /// `len * size_of::<T>()` or a capacity step does not fit the address space.
    #[error("capacity overflow")]
    CapacityOverflow,
    /// A growth policy returned a capacity that is not larger than its input.
    #[error("growth policy did not increase capacity {capacity}")]
    GrowthStalled {
        /// Capacity handed to the policy.
        capacity: usize,
    },
    /// The allocator could not provide a non-empty block.
    #[error("memory allocation of {bytes} bytes failed")]
    OutOfMemory {
        /// Size of the failed request.
        bytes: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        assert_eq!(AllocError::CapacityOverflow.to_string(), "capacity overflow");
        assert_eq!(
            AllocError::GrowthStalled { capacity: 7 }.to_string(),
            "growth policy did not increase capacity 7"
        );
        assert_eq!(
            AllocError::OutOfMemory { bytes: 64 }.to_string(),
            "memory allocation of 64 bytes failed"
        );
    }

    #[test]
    fn test_error_is_std_error() {
        fn takes_error(e: &dyn std::error::Error) -> String {
            e.to_string()
        }
        assert!(takes_error(&AllocError::CapacityOverflow).contains("overflow"));
    }
}
