//! A contiguous, growable array container with explicit, caller-visible
//! capacity management, built on a move-only owning buffer.
//!
//! [`DenseVec`] keeps its logical length separate from the slot count of its
//! [`SlotBuffer`], and changes capacity by building a fresh buffer and
//! swapping it in, so the array is never observed partially rebuilt.

pub mod buffer;
pub mod vector;

pub use buffer::SlotBuffer;
pub use vector::{DenseVec, Reserve};
