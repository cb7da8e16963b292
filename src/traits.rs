//! Common traits and error type for the heap
//!
//! - [`HeapError`]: every failure a heap operation can report
//! - [`Heap`]: the priority-queue interface implemented by
//!   [`DaryHeap`](crate::dary::DaryHeap) and consumed by
//!   [`StdHeap`](crate::stdlib_compat::StdHeap)
//!
//! Unlike `std::collections::BinaryHeap`, querying an empty heap through this
//! trait is an error rather than `None`. Use
//! [`StdHeap`](crate::stdlib_compat::StdHeap) for the `Option` flavor.

use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// `find_min` or `delete_min` was called on an empty heap
    Underflow,
    /// A heap was configured with fewer than two children per node
    InvalidBranchingFactor(usize),
    /// An index helper was given an index outside its domain
    InvalidIndex {
        /// The rejected index
        index: usize,
        /// The smallest index the helper accepts
        minimum: usize,
    },
    /// An index helper's result does not fit in `usize`
    IndexOverflow(usize),
    /// The requested capacity cannot be allocated for this element type
    CapacityOverflow(usize),
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::Underflow => write!(f, "heap underflow: the heap is empty"),
            HeapError::InvalidBranchingFactor(d) => {
                write!(f, "branching factor must be at least 2, got {}", d)
            }
            HeapError::InvalidIndex { index, minimum } => {
                write!(f, "index {} is out of domain (minimum is {})", index, minimum)
            }
            HeapError::IndexOverflow(index) => {
                write!(f, "children of index {} lie beyond usize::MAX", index)
            }
            HeapError::CapacityOverflow(capacity) => {
                write!(f, "cannot reserve {} slots", capacity)
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// Min-priority queue over a totally ordered element type
///
/// The element is its own priority; the smallest element under `Ord` is
/// always the one returned by [`find_min`](Heap::find_min) and
/// [`delete_min`](Heap::delete_min). Equal elements are allowed.
///
/// # Example
///
/// ```rust
/// use rust_dary_heap::{DaryHeap, Heap, HeapError};
///
/// let mut heap: DaryHeap<i32> = Heap::new();
/// heap.insert(3);
/// heap.insert(1);
/// heap.insert(2);
///
/// assert_eq!(heap.find_min(), Ok(&1));
/// assert_eq!(heap.delete_min(), Ok(1));
/// assert_eq!(heap.delete_min(), Ok(2));
/// assert_eq!(heap.delete_min(), Ok(3));
/// assert_eq!(heap.delete_min(), Err(HeapError::Underflow));
/// ```
pub trait Heap<T: Ord> {
    /// Creates a new empty heap with default settings
    fn new() -> Self;

    /// Returns true if the heap holds no elements
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element, maintaining heap order
    ///
    /// # Time Complexity
    /// O(log n) comparisons, plus amortized O(1) for buffer growth.
    fn insert(&mut self, item: T);

    /// Returns the smallest element without removing it
    ///
    /// # Errors
    /// Returns [`HeapError::Underflow`] if the heap is empty.
    fn find_min(&self) -> Result<&T, HeapError>;

    /// Removes and returns the smallest element
    ///
    /// # Errors
    /// Returns [`HeapError::Underflow`] if the heap is empty.
    fn delete_min(&mut self) -> Result<T, HeapError>;

    /// Drops every element, leaving the heap logically empty
    fn make_empty(&mut self);
}
