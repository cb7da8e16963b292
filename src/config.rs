//! Construction settings for [`DaryHeap`](crate::dary::DaryHeap)

use crate::index::check_branching_factor;
use crate::traits::HeapError;

/// Branching factor used when none is given.
pub const DEFAULT_BRANCHING_FACTOR: usize = 2;

/// Slots reserved by an empty heap built with default settings.
pub const DEFAULT_CAPACITY: usize = 10;

/// Shape and initial size of a heap
///
/// ```rust
/// use rust_dary_heap::{DaryHeap, HeapConfig};
///
/// let config = HeapConfig::default()
///     .with_branching_factor(4)
///     .with_initial_capacity(64);
/// let heap: DaryHeap<u32> = DaryHeap::with_config(config).unwrap();
/// assert_eq!(heap.branching_factor(), 4);
/// assert_eq!(heap.capacity(), 64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapConfig {
    /// Maximum number of children per node; at least 2
    pub branching_factor: usize,
    /// Slots reserved before the first growth
    pub initial_capacity: usize,
}

impl HeapConfig {
    /// Sets the maximum number of children per node
    pub fn with_branching_factor(mut self, d: usize) -> Self {
        self.branching_factor = d;
        self
    }

    /// Sets the number of slots reserved up front
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Checks that the configuration describes a valid heap.
    ///
    /// The capacity depends on the element type, so it is checked when the
    /// heap allocates in [`DaryHeap::with_config`](crate::dary::DaryHeap::with_config).
    ///
    /// # Errors
    /// [`HeapError::InvalidBranchingFactor`] if the branching factor is below 2.
    pub fn validate(&self) -> Result<(), HeapError> {
        check_branching_factor(self.branching_factor)
    }
}

impl Default for HeapConfig {
    fn default() -> Self {
        Self {
            branching_factor: DEFAULT_BRANCHING_FACTOR,
            initial_capacity: DEFAULT_CAPACITY,
        }
    }
}
