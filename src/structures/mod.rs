//! Bounded containers backing the layer stores and history trackers
//!
//! - [`BoundedCircularBuffer`]: fixed-capacity FIFO with wraparound and in-place reversal
//! - [`FixedUniverseBitSet`]: 1-indexed bitset over a universe fixed at construction
//! - [`SortedList`]: list kept ordered by key, used for median-by-name selection
//! - [`BoundedStack`]: LIFO with a hard capacity
//!
//! Every container reports contract violations through [`StructureError`].
//! Stores and trackers absorb these into boolean results; they never reach
//! library callers.

mod bitset;
mod circular;
mod sorted;
mod stack;

use thiserror::Error;

pub use bitset::FixedUniverseBitSet;
pub use circular::BoundedCircularBuffer;
pub use sorted::SortedList;
pub use stack::BoundedStack;

/// Contract violations raised by the bounded containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StructureError {
    /// Insert into a container already holding `capacity` items
    #[error("capacity of {capacity} exceeded")]
    CapacityExceeded { capacity: usize },
    /// Remove from an empty container
    #[error("container is empty")]
    Underflow,
    /// Positional access outside `[0, len)`
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    /// Bitset value outside `[1, universe]`
    #[error("value {value} outside universe 1..={universe}")]
    OutOfUniverse { value: usize, universe: usize },
}
