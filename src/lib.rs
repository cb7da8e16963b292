//! D-ary Heap for Rust
//!
//! This crate provides an array-backed min-heap generalized to an arbitrary
//! branching factor `d >= 2`, with guaranteed bounds on every operation.
//!
//! # Features
//!
//! - **Configurable arity**: every node has up to `d` children, fixed at construction
//! - **Insert**: O(log_d n) comparisons, amortized O(1) buffer growth
//! - **Delete-min**: O(d log_d n) comparisons
//! - **Bulk build**: O(n) construction from an unordered collection
//! - **Explicit errors**: querying an empty heap returns [`HeapError::Underflow`]
//!   instead of a sentinel
//!
//! # Example
//!
//! ```rust
//! use rust_dary_heap::{DaryHeap, HeapError};
//!
//! let mut heap = DaryHeap::from_vec_with_branching_factor(vec![9, 3, 7, 1, 5], 4)?;
//! heap.insert(2);
//!
//! assert_eq!(heap.find_min(), Ok(&1));
//! assert_eq!(heap.into_sorted_vec(), vec![1, 2, 3, 5, 7, 9]);
//! # Ok::<(), HeapError>(())
//! ```

pub mod config;
pub mod dary;
pub mod index;
pub mod stdlib_compat;
pub mod traits;

// Re-export the main types for convenience
pub use config::HeapConfig;
pub use dary::DaryHeap;
pub use traits::{Heap, HeapError};
