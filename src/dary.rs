//! D-ary min-heap
//!
//! An array-backed min-heap in which every node has up to `d` children,
//! `d >= 2` fixed at construction. `d = 2` is the classic binary heap; larger
//! factors give shallower trees, trading cheaper inserts for more comparisons
//! per level on removal.
//!
//! Positions are 1-indexed: slot 1 is the root, and the children of slot `i`
//! are `d * (i - 1) + 2 ..= d * i + 1`. All index math goes through
//! [`crate::index`].
//!
//! # Time Complexity
//!
//! | Operation     | Complexity          |
//! |---------------|---------------------|
//! | `insert`      | O(log_d n)          |
//! | `delete_min`  | O(d log_d n)        |
//! | `find_min`    | O(1)                |
//! | bulk build    | O(n)                |
//! | growth        | O(1) amortized      |
//!
//! # Example
//!
//! ```rust
//! use rust_dary_heap::{DaryHeap, HeapError};
//!
//! let mut heap = DaryHeap::with_branching_factor(3)?;
//! for x in [10, 4, 7, 1] {
//!     heap.insert(x);
//! }
//!
//! assert_eq!(heap.find_min(), Ok(&1));
//! assert_eq!(heap.delete_min(), Ok(1));
//! assert_eq!(heap.delete_min(), Ok(4));
//! assert_eq!(heap.len(), 2);
//! # Ok::<(), HeapError>(())
//! ```

use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::config::{HeapConfig, DEFAULT_BRANCHING_FACTOR, DEFAULT_CAPACITY};
use crate::index::{self, check_branching_factor, ROOT};
use crate::traits::{Heap, HeapError};

/// A d-ary min-heap
///
/// Stores elements directly and orders them with `Ord`; the smallest element
/// is always at the root. Duplicates are kept.
///
/// The heap tracks a logical capacity separately from its length. When an
/// insert finds the heap full, the capacity grows from `c` to `2c + 1` and the
/// buffer is reallocated once. [`make_empty`](DaryHeap::make_empty) keeps the
/// capacity.
#[derive(Debug, Clone)]
pub struct DaryHeap<T> {
    /// Slot `i` lives at `data[i - 1]`; `data.len()` is the heap size
    data: Vec<T>,
    capacity: usize,
    d: usize,
}

/// Capacity reserved by the bulk constructors: roughly 10% headroom, and
/// always strictly more than `n` so the next insert does not reallocate.
fn bulk_capacity(n: usize) -> usize {
    (n.saturating_add(2).saturating_mul(11) / 10 - 1).max(n.saturating_add(1))
}

impl<T> DaryHeap<T> {
    fn empty(d: usize, capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            capacity,
            d,
        }
    }

    /// Returns true if the heap holds no elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns the number of slots reserved before the next growth
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the maximum number of children per node
    pub fn branching_factor(&self) -> usize {
        self.d
    }

    /// Returns the element at 1-indexed slot `index`, if it is live
    ///
    /// This exposes the internal layout and is meant for diagnostics and
    /// tests. Only slot 1 has a guaranteed meaning (the minimum).
    pub fn get(&self, index: usize) -> Option<&T> {
        index.checked_sub(1).and_then(|i| self.data.get(i))
    }

    /// Parent slot of `i` under this heap's branching factor
    ///
    /// # Errors
    /// [`HeapError::InvalidIndex`] if `i <= 1`.
    pub fn parent_index(&self, i: usize) -> Result<usize, HeapError> {
        index::checked_parent(i, self.d)
    }

    /// First child slot of `i` under this heap's branching factor
    ///
    /// # Errors
    /// [`HeapError::InvalidIndex`] if `i == 0`.
    pub fn first_child_index(&self, i: usize) -> Result<usize, HeapError> {
        index::checked_first_child(i, self.d)
    }

    /// Drops every element; the reserved capacity is kept
    pub fn make_empty(&mut self) {
        debug!(len = self.data.len(), capacity = self.capacity, "emptying heap");
        self.data.clear();
    }

    /// Iterates over the elements in storage order, which is arbitrary
    /// apart from the first element being the minimum
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consumes the heap, returning its elements in storage order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    fn slot(&self, i: usize) -> &T {
        &self.data[i - 1]
    }

    fn swap_slots(&mut self, a: usize, b: usize) {
        self.data.swap(a - 1, b - 1);
    }

    fn grow_to(&mut self, new_capacity: usize) {
        trace!(
            old_capacity = self.capacity,
            new_capacity,
            len = self.data.len(),
            "growing heap storage"
        );
        self.data.reserve_exact(new_capacity - self.data.len());
        self.capacity = new_capacity;
    }
}

impl<T: Ord> DaryHeap<T> {
    /// Creates an empty binary heap with the default capacity
    pub fn new() -> Self {
        Self::empty(DEFAULT_BRANCHING_FACTOR, DEFAULT_CAPACITY)
    }

    /// Creates an empty binary heap with room for `capacity` elements
    ///
    /// # Panics
    /// If `capacity` elements cannot be allocated. Use
    /// [`with_config`](Self::with_config) to get an error instead.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::empty(DEFAULT_BRANCHING_FACTOR, capacity)
    }

    /// Creates an empty heap whose nodes have up to `d` children
    ///
    /// # Errors
    /// [`HeapError::InvalidBranchingFactor`] if `d < 2`.
    pub fn with_branching_factor(d: usize) -> Result<Self, HeapError> {
        Self::with_config(HeapConfig::default().with_branching_factor(d))
    }

    /// Creates an empty heap from explicit settings
    ///
    /// # Errors
    /// [`HeapError::InvalidBranchingFactor`] if the configured factor is below 2,
    /// [`HeapError::CapacityOverflow`] if the initial capacity cannot be
    /// allocated.
    pub fn with_config(config: HeapConfig) -> Result<Self, HeapError> {
        config.validate()?;
        let capacity = config.initial_capacity;
        let mut data = Vec::new();
        data.try_reserve_exact(capacity)
            .map_err(|_| HeapError::CapacityOverflow(capacity))?;
        Ok(Self {
            data,
            capacity,
            d: config.branching_factor,
        })
    }

    /// Builds a binary heap from unordered items in O(n)
    pub fn from_vec(items: Vec<T>) -> Self {
        Self::heapify(items, DEFAULT_BRANCHING_FACTOR)
    }

    /// Builds a heap with `d` children per node from unordered items in O(n)
    ///
    /// # Errors
    /// [`HeapError::InvalidBranchingFactor`] if `d < 2`.
    pub fn from_vec_with_branching_factor(items: Vec<T>, d: usize) -> Result<Self, HeapError> {
        check_branching_factor(d)?;
        Ok(Self::heapify(items, d))
    }

    fn heapify(mut items: Vec<T>, d: usize) -> Self {
        let capacity = bulk_capacity(items.len());
        items.reserve_exact(capacity - items.len());
        let mut heap = Self {
            data: items,
            capacity,
            d,
        };
        heap.build();
        heap
    }

    /// Establishes heap order over arbitrarily placed elements.
    ///
    /// Every internal slot is sifted down, deepest first, so each subtree is
    /// already a heap when its root is fixed.
    fn build(&mut self) {
        let last = index::last_internal(self.data.len(), self.d);
        trace!(len = self.data.len(), d = self.d, last, "building heap");
        for i in (ROOT..=last).rev() {
            self.percolate_down(i);
        }
    }

    /// Inserts an element, growing the buffer first if it is full
    pub fn insert(&mut self, item: T) {
        if self.data.len() == self.capacity {
            self.grow_to(self.capacity * 2 + 1);
        }
        self.data.push(item);
        self.percolate_up(self.data.len());
    }

    /// Returns the smallest element
    ///
    /// # Errors
    /// [`HeapError::Underflow`] if the heap is empty.
    pub fn find_min(&self) -> Result<&T, HeapError> {
        self.data.first().ok_or(HeapError::Underflow)
    }

    /// Removes and returns the smallest element
    ///
    /// The last element takes the root's place and sinks until no child is
    /// smaller.
    ///
    /// # Errors
    /// [`HeapError::Underflow`] if the heap is empty.
    pub fn delete_min(&mut self) -> Result<T, HeapError> {
        if self.data.is_empty() {
            return Err(HeapError::Underflow);
        }
        let min = self.data.swap_remove(ROOT - 1);
        if !self.data.is_empty() {
            self.percolate_down(ROOT);
        }
        Ok(min)
    }

    /// Returns the smallest element, or `None` if the heap is empty
    pub fn peek(&self) -> Option<&T> {
        self.find_min().ok()
    }

    /// Removes and returns the smallest element, or `None` if the heap is empty
    pub fn pop(&mut self) -> Option<T> {
        self.delete_min().ok()
    }

    /// Consumes the heap, returning its elements in ascending order
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.into_iter_sorted().collect()
    }

    /// Consumes the heap into an iterator yielding elements in ascending order
    pub fn into_iter_sorted(self) -> IntoIterSorted<T> {
        IntoIterSorted { heap: self }
    }

    /// Checks the heap-order invariant over every live parent/child pair
    pub fn verify_heap_order(&self) -> bool {
        (ROOT + 1..=self.data.len()).all(|c| self.slot(index::parent(c, self.d)) <= self.slot(c))
    }

    fn percolate_up(&mut self, mut hole: usize) {
        while hole > ROOT {
            let parent = index::parent(hole, self.d);
            if self.slot(hole) < self.slot(parent) {
                self.swap_slots(hole, parent);
                hole = parent;
            } else {
                break;
            }
        }
    }

    /// Leftmost smallest child of `i`, or `None` if `i` is a leaf
    fn min_child(&self, i: usize) -> Option<usize> {
        let len = self.data.len();
        let first = index::try_first_child(i, self.d).filter(|&first| first <= len)?;
        let last = first.saturating_add(self.d - 1).min(len);
        let mut min = first;
        for c in first + 1..=last {
            if self.slot(c) < self.slot(min) {
                min = c;
            }
        }
        Some(min)
    }

    fn percolate_down(&mut self, mut hole: usize) {
        while let Some(child) = self.min_child(hole) {
            if self.slot(child) < self.slot(hole) {
                self.swap_slots(hole, child);
                hole = child;
            } else {
                break;
            }
        }
    }
}

impl<T: Ord> Heap<T> for DaryHeap<T> {
    fn new() -> Self {
        DaryHeap::new()
    }

    fn is_empty(&self) -> bool {
        DaryHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        DaryHeap::len(self)
    }

    fn insert(&mut self, item: T) {
        DaryHeap::insert(self, item)
    }

    fn find_min(&self) -> Result<&T, HeapError> {
        DaryHeap::find_min(self)
    }

    fn delete_min(&mut self) -> Result<T, HeapError> {
        DaryHeap::delete_min(self)
    }

    fn make_empty(&mut self) {
        DaryHeap::make_empty(self)
    }
}

impl<T: Ord> Default for DaryHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> From<Vec<T>> for DaryHeap<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_vec(items)
    }
}

impl<T: Ord> FromIterator<T> for DaryHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T: Ord> Extend<T> for DaryHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let needed = self.data.len().saturating_add(iter.size_hint().0);
        if needed > self.capacity {
            let mut new_capacity = self.capacity;
            while new_capacity < needed {
                new_capacity = new_capacity * 2 + 1;
            }
            self.grow_to(new_capacity);
        }
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T> IntoIterator for DaryHeap<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    /// Yields the elements in storage order; see
    /// [`into_iter_sorted`](DaryHeap::into_iter_sorted) for ascending order.
    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a DaryHeap<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

/// Draining iterator returned by [`DaryHeap::into_iter_sorted`]
#[derive(Debug, Clone)]
pub struct IntoIterSorted<T> {
    heap: DaryHeap<T>,
}

impl<T: Ord> Iterator for IntoIterSorted<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<T: Ord> ExactSizeIterator for IntoIterSorted<T> {}

impl<T: Ord> FusedIterator for IntoIterSorted<T> {}
