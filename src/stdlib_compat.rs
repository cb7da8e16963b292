//! Standard library compatibility layer
//!
//! Provides a `std::collections::BinaryHeap`-shaped facade over any [`Heap`].
//!
//! # Differences from BinaryHeap
//!
//! - **Min-heap vs Max-heap**: This is a min-heap, while `BinaryHeap` is a max-heap.
//!   Use `std::cmp::Reverse<T>` to get max-heap behavior.
//! - **Errors become `None`**: [`Heap::find_min`] and [`Heap::delete_min`] report
//!   [`HeapError::Underflow`](crate::HeapError::Underflow); here an empty heap
//!   yields `None`.
//!
//! # Example
//!
//! ```rust
//! use rust_dary_heap::stdlib_compat::StdHeap;
//! use rust_dary_heap::DaryHeap;
//!
//! // Use like std::collections::BinaryHeap
//! let mut heap: StdHeap<i32, DaryHeap<i32>> = StdHeap::new();
//! heap.push(5);
//! heap.push(3);
//! heap.push(7);
//! assert_eq!(heap.peek(), Some(&3)); // min-heap, unlike BinaryHeap's max-heap
//! assert_eq!(heap.pop(), Some(3));
//! ```

use std::marker::PhantomData;

use crate::traits::Heap;

/// A `BinaryHeap`-style wrapper around a [`Heap`]
///
/// # Type Parameters
/// - `T`: The item type, must implement `Ord`
/// - `H`: The underlying heap implementation (e.g., [`DaryHeap<T>`](crate::DaryHeap))
#[derive(Debug, Clone)]
pub struct StdHeap<T: Ord, H: Heap<T>> {
    heap: H,
    _phantom: PhantomData<T>,
}

impl<T: Ord, H: Heap<T>> StdHeap<T, H> {
    /// Creates a new empty heap
    pub fn new() -> Self {
        Self::from(H::new())
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes an item onto the heap
    pub fn push(&mut self, item: T) {
        self.heap.insert(item)
    }

    /// Returns a reference to the smallest item without removing it
    ///
    /// This is equivalent to `BinaryHeap::peek`, but returns the minimum (not maximum).
    pub fn peek(&self) -> Option<&T> {
        self.heap.find_min().ok()
    }

    /// Removes and returns the smallest item
    ///
    /// This is equivalent to `BinaryHeap::pop`, but returns the minimum (not maximum).
    pub fn pop(&mut self) -> Option<T> {
        self.heap.delete_min().ok()
    }

    /// Drops all items
    pub fn clear(&mut self) {
        self.heap.make_empty()
    }

    /// Returns the wrapped heap
    pub fn into_inner(self) -> H {
        self.heap
    }
}

impl<T: Ord, H: Heap<T>> From<H> for StdHeap<T, H> {
    fn from(heap: H) -> Self {
        Self {
            heap,
            _phantom: PhantomData,
        }
    }
}

impl<T: Ord, H: Heap<T>> Default for StdHeap<T, H> {
    fn default() -> Self {
        Self::new()
    }
}
