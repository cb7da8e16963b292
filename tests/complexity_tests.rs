//! Comparison-count checks for the heap's complexity bounds
//!
//! Wall-clock timing is noisy, so these tests count calls to `Ord::cmp`
//! through an instrumented element type instead:
//!
//! - bulk build: O(n) comparisons for a fixed branching factor
//! - insert: at most one comparison per level, O(log_d n)
//! - delete_min: at most `d` comparisons per level, O(d log_d n)

use rust_dary_heap::DaryHeap;

use std::cell::Cell;
use std::cmp::Ordering;
use std::rc::Rc;

const BRANCHING_FACTORS: [usize; 4] = [2, 3, 5, 10];

/// An integer that counts every comparison it takes part in
#[derive(Debug, Clone)]
struct Counted {
    value: u64,
    comparisons: Rc<Cell<usize>>,
}

impl PartialEq for Counted {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Counted {}

impl PartialOrd for Counted {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Counted {
    fn cmp(&self, other: &Self) -> Ordering {
        self.comparisons.set(self.comparisons.get() + 1);
        self.value.cmp(&other.value)
    }
}

fn counted(values: impl IntoIterator<Item = u64>, counter: &Rc<Cell<usize>>) -> Vec<Counted> {
    values
        .into_iter()
        .map(|value| Counted {
            value,
            comparisons: Rc::clone(counter),
        })
        .collect()
}

/// Depth of a complete d-ary tree holding `n` nodes
fn depth(n: usize, d: usize) -> usize {
    let mut levels = 0;
    let mut covered = 0;
    let mut width = 1;
    while covered < n {
        covered += width;
        width *= d;
        levels += 1;
    }
    levels
}

/// Comparisons made by a bulk build of `values`
fn build_comparisons(values: Vec<u64>, d: usize) -> usize {
    let counter = Rc::new(Cell::new(0));
    let heap = DaryHeap::from_vec_with_branching_factor(counted(values, &counter), d).unwrap();
    let used = counter.get();
    assert!(heap.verify_heap_order());
    used
}

fn scrambled(n: u64) -> Vec<u64> {
    // 7919 is prime and does not divide any n used here
    (0..n).map(|i| (i * 7919) % n).collect()
}

#[test]
fn bulk_build_is_linear() {
    for d in BRANCHING_FACTORS {
        for n in [1_000u64, 8_000, 64_000] {
            for values in [(0..n).rev().collect::<Vec<_>>(), scrambled(n)] {
                let comparisons = build_comparisons(values, d);
                assert!(
                    comparisons <= 3 * n as usize,
                    "d={} n={} made {} comparisons",
                    d,
                    n,
                    comparisons
                );
            }
        }
    }
}

#[test]
fn bulk_build_beats_repeated_insert() {
    let n = 20_000u64;
    for d in BRANCHING_FACTORS {
        let build = build_comparisons((0..n).rev().collect(), d);

        let counter = Rc::new(Cell::new(0));
        let mut heap = DaryHeap::with_branching_factor(d).unwrap();
        for item in counted((0..n).rev(), &counter) {
            heap.insert(item);
        }
        let inserts = counter.get();

        assert!(
            build < inserts,
            "d={}: build {} vs inserts {}",
            d,
            build,
            inserts
        );
    }
}

#[test]
fn insert_compares_once_per_level() {
    let n = 10_000u64;
    for d in BRANCHING_FACTORS {
        let counter = Rc::new(Cell::new(0));
        let mut heap = DaryHeap::with_branching_factor(d).unwrap();

        // Descending input makes every insert climb to the root
        for item in counted((0..n).rev(), &counter) {
            let before = counter.get();
            heap.insert(item);
            let used = counter.get() - before;
            let levels = depth(heap.len(), d);
            assert!(
                used < levels.max(1),
                "d={} len={} insert made {} comparisons",
                d,
                heap.len(),
                used
            );
        }
    }
}

#[test]
fn delete_min_compares_at_most_d_per_level() {
    let n = 10_000u64;
    for d in BRANCHING_FACTORS {
        let counter = Rc::new(Cell::new(0));
        let mut heap = DaryHeap::from_vec_with_branching_factor(counted(scrambled(n), &counter), d)
            .unwrap();

        let mut expected = 0;
        while !heap.is_empty() {
            let levels = depth(heap.len(), d);
            let before = counter.get();
            let min = heap.delete_min().unwrap();
            let used = counter.get() - before;
            assert!(
                used <= d * levels,
                "d={} delete_min made {} comparisons over {} levels",
                d,
                used,
                levels
            );
            assert_eq!(min.value, expected);
            expected += 1;
        }
    }
}
