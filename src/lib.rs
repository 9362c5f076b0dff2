//! # Anchor Vec
//!
//! Growable sequences whose elements occupy one contiguous run of a buffer,
//! pinned to one end of it:
//!
//! * **Back-anchored** sequences start at slot `0` and grow towards the end,
//!   like `Vec`. Pushes and pops happen at the back.
//! * **Front-anchored** sequences end at the last slot and grow towards the
//!   start. Pushes and pops happen at the front, and the run still reads
//!   front-to-back as an ordinary slice.
//!
//! ## Layers
//!
//! * [`Anchored`] (with the aliases [`BackBuf`] and [`FrontBuf`]) is the manual
//!   core. It never allocates: the caller supplies any [`Buffer`] (an array, a
//!   boxed slice, a borrowed slice) and swaps in a bigger one with
//!   `reserve_back`/`reserve_front` when it fills up.
//! * `AnchoredVec` (with the aliases `BackVec` and `FrontVec`) owns its buffer,
//!   obtains memory from a `RawAlloc` and reallocates according to a `Growth`
//!   policy. It requires the `auto` feature, which is on by default; its
//!   examples live on the type itself.
//!
//! ## Failure model
//!
//! Misuse of the manual core (pushing into a full buffer, cutting more elements
//! than exist, reserving a buffer that is too small) panics. In the allocating
//! layer, capacity overflow and allocator failure are fatal by default: the
//! plain operations log the error and abort. Every growing operation also has a
//! `try_*` form returning [`AllocError`], and the `Fallible` allocator reports
//! out-of-memory through it instead of aborting.
//!
//! ## Example
//!
//! ```rust
//! use anchor_vec::{uninit_array, Anchored, FrontBuf};
//!
//! let mut v: FrontBuf<i32, _> = Anchored::new(uninit_array::<i32, 4>());
//! v.push_front(10);
//! v.push_front(20);
//! v.push_front(30);
//!
//! assert_eq!(v.as_slice(), &[30, 20, 10]);
//! assert_eq!(v.spare_len(), 1);
//! ```

// --- Module Declarations ---

mod anchored;
pub mod buffer;
mod error;
pub mod orientation;

#[cfg(feature = "auto")]
mod auto;
#[cfg(feature = "auto")]
pub mod growth;
#[cfg(feature = "auto")]
pub mod memory;

// --- Re-exports ---

pub use anchored::{Anchored, BackBuf, FrontBuf};
pub use buffer::{uninit_array, uninit_boxed, Buffer};
pub use error::AllocError;
pub use orientation::{Back, Front, Orientation};

#[cfg(feature = "auto")]
pub use auto::{AnchoredVec, BackVec, FrontVec};
#[cfg(feature = "auto")]
pub use growth::{Doubling, Growth, Linear, ThreeHalves};
#[cfg(feature = "auto")]
pub use memory::{array_layout, Fallible, Global, RawAlloc};
