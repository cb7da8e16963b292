//! Kani verification proofs for heap operations
//!
//! Kani is AWS's model checker for Rust. It can verify properties of Rust code
//! by checking all possible executions up to certain bounds. The harnesses
//! below use small heaps with symbolic contents and a symbolic branching
//! factor so that every layout up to the unwind bound is covered.
//!
//! To run these proofs:
//!   cargo kani --tests

#[cfg(kani)]
use rust_dary_heap::index;
#[cfg(kani)]
use rust_dary_heap::{DaryHeap, HeapError};

/// Proof that insert always increments the length
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(8)]
fn verify_insert_increments_len() {
    let d: usize = kani::any();
    kani::assume(d >= 2 && d <= 4);
    let mut heap: DaryHeap<u8> = DaryHeap::with_branching_factor(d).unwrap();

    heap.insert(kani::any());
    heap.insert(kani::any());
    let initial_len = heap.len();

    heap.insert(kani::any());

    assert!(heap.len() == initial_len + 1);
    assert!(heap.verify_heap_order());
}

/// Proof that delete_min returns an element no larger than any other
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(8)]
fn verify_delete_min_returns_min() {
    let d: usize = kani::any();
    kani::assume(d >= 2 && d <= 4);
    let mut heap: DaryHeap<u8> = DaryHeap::with_branching_factor(d).unwrap();

    let a: u8 = kani::any();
    let b: u8 = kani::any();
    let c: u8 = kani::any();
    heap.insert(a);
    heap.insert(b);
    heap.insert(c);

    let min = heap.delete_min().unwrap();
    assert!(min <= a && min <= b && min <= c);
    assert!(heap.len() == 2);
    assert!(heap.verify_heap_order());
}

/// Proof that an empty heap always underflows
#[cfg(kani)]
#[kani::proof]
fn verify_empty_heap_underflows() {
    let d: usize = kani::any();
    kani::assume(d >= 2);
    let mut heap: DaryHeap<u8> = DaryHeap::with_branching_factor(d).unwrap();

    assert!(heap.find_min() == Err(HeapError::Underflow));
    assert!(heap.delete_min() == Err(HeapError::Underflow));
}

/// Proof that bulk build establishes heap order for any four elements
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(8)]
fn verify_build_establishes_order() {
    let d: usize = kani::any();
    kani::assume(d >= 2 && d <= 3);
    let items: Vec<u8> = vec![kani::any(), kani::any(), kani::any(), kani::any(), kani::any()];

    let heap = DaryHeap::from_vec_with_branching_factor(items, d).unwrap();
    assert!(heap.verify_heap_order());
}

/// Proof that every child index maps back to its parent
#[cfg(kani)]
#[kani::proof]
fn verify_parent_of_child_round_trip() {
    let d: usize = kani::any();
    let i: usize = kani::any();
    let k: usize = kani::any();
    kani::assume(d >= 2 && d <= 16);
    kani::assume(i >= 1 && i <= 1 << 20);
    kani::assume(k < d);

    let child = index::first_child(i, d) + k;
    assert!(index::parent(child, d) == i);
}
