//! Index arithmetic for 1-indexed d-ary heaps.
//!
//! Slot 1 is the root. For a node at slot `i` in a heap with branching
//! factor `d`, its children occupy the contiguous range
//! `first_child(i, d) ..= last_child(i, d)`:
//!
//! ```text
//! d = 3
//!                      1
//!         2            3            4
//!      5  6  7      8  9  10    11 12 13
//! ```
//!
//! These functions are the only place where the branching factor enters the
//! layout; the heap's percolation code never derives indices on its own.
//!
//! The unchecked forms ([`parent`], [`first_child`], [`last_child`]) are for
//! callers that already know the index is in domain. The `checked_*` forms
//! validate both the index and the branching factor.

use crate::traits::HeapError;

/// Smallest supported branching factor.
pub const MIN_BRANCHING_FACTOR: usize = 2;

/// Slot index of the root.
pub const ROOT: usize = 1;

/// Parent of slot `i`. Requires `i > 1`.
///
/// ```rust
/// use rust_dary_heap::index::parent;
/// assert_eq!(parent(2, 3), 1);
/// assert_eq!(parent(4, 3), 1);
/// assert_eq!(parent(5, 3), 2);
/// assert_eq!(parent(13, 3), 4);
/// ```
#[inline]
pub fn parent(i: usize, d: usize) -> usize {
    debug_assert!(i > ROOT, "the root has no parent");
    (i - 2) / d + 1
}

/// First child of slot `i`. Requires `i >= 1` and a result that fits in
/// `usize`; see [`try_first_child`] otherwise.
///
/// ```rust
/// use rust_dary_heap::index::first_child;
/// assert_eq!(first_child(1, 2), 2);
/// assert_eq!(first_child(2, 2), 4);
/// assert_eq!(first_child(2, 3), 5);
/// ```
#[inline]
pub fn first_child(i: usize, d: usize) -> usize {
    debug_assert!(i >= ROOT, "slot 0 is not part of the heap");
    d * (i - 1) + 2
}

/// Last possible child of slot `i`; it may lie beyond the live size.
/// Saturates at `usize::MAX`.
#[inline]
pub fn last_child(i: usize, d: usize) -> usize {
    first_child(i, d).saturating_add(d - 1)
}

/// First child of slot `i`, or `None` if it does not fit in `usize`.
///
/// ```rust
/// use rust_dary_heap::index::try_first_child;
/// assert_eq!(try_first_child(2, 3), Some(5));
/// assert_eq!(try_first_child(usize::MAX, 2), None);
/// ```
#[inline]
pub fn try_first_child(i: usize, d: usize) -> Option<usize> {
    debug_assert!(i >= ROOT, "slot 0 is not part of the heap");
    d.checked_mul(i - 1)?.checked_add(2)
}

/// Highest slot that has at least one child in a heap of `size` elements,
/// or 0 when no slot has children.
#[inline]
pub fn last_internal(size: usize, d: usize) -> usize {
    if size < 2 {
        0
    } else {
        parent(size, d)
    }
}

/// Checked [`parent`].
///
/// # Errors
/// [`HeapError::InvalidIndex`] if `i <= 1`, [`HeapError::InvalidBranchingFactor`]
/// if `d < 2`.
pub fn checked_parent(i: usize, d: usize) -> Result<usize, HeapError> {
    check_branching_factor(d)?;
    if i <= ROOT {
        return Err(HeapError::InvalidIndex {
            index: i,
            minimum: ROOT + 1,
        });
    }
    Ok(parent(i, d))
}

/// Checked [`first_child`].
///
/// # Errors
/// [`HeapError::InvalidIndex`] if `i == 0`, [`HeapError::InvalidBranchingFactor`]
/// if `d < 2`, [`HeapError::IndexOverflow`] if the child index exceeds
/// `usize::MAX`.
pub fn checked_first_child(i: usize, d: usize) -> Result<usize, HeapError> {
    check_branching_factor(d)?;
    if i < ROOT {
        return Err(HeapError::InvalidIndex {
            index: i,
            minimum: ROOT,
        });
    }
    try_first_child(i, d).ok_or(HeapError::IndexOverflow(i))
}

/// Rejects branching factors below [`MIN_BRANCHING_FACTOR`].
pub fn check_branching_factor(d: usize) -> Result<(), HeapError> {
    if d < MIN_BRANCHING_FACTOR {
        Err(HeapError::InvalidBranchingFactor(d))
    } else {
        Ok(())
    }
}
