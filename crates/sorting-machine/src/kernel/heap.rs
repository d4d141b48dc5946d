//! Binary heap algorithms over a slice and an order.
//!
//! ## Purpose
//!
//! This module implements the array-backed min-heap kernel the sorting
//! machine is built on: establishing the heap property over an arbitrary
//! slice, restoring it locally after a root replacement, and extracting the
//! minimum.
//!
//! ## Design notes
//!
//! * **Layout**: 0-indexed implicit binary tree; the children of node `i`
//!   live at `2i + 1` and `2i + 2`.
//! * **Build cost**: Bottom-up construction (sift-down from the last parent
//!   to the root) is O(n), not O(n log n), by the standard amortized
//!   analysis.
//! * **Tie-breaking**: When both children compare equal, the left child is
//!   preferred; the right child is taken only when strictly smaller than the
//!   left. Deterministic, but no stability promise follows from it.
//! * **Strictness**: A parent is only swapped with a child that compares
//!   strictly smaller, so sift-down terminates on slices of equal elements
//!   without busywork.
//!
//! ## Invariants
//!
//! * After [`build_heap`], and after every [`extract_root`], every node
//!   compares less than or equal to both of its children under the supplied
//!   order.
//!
//! ## Non-goals
//!
//! * No sift-up / incremental push: the machine heapifies exactly once, at
//!   the mode transition, so only downward sifting is ever needed.
//! * No key updates or interior removal.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering;

// Internal dependencies
use crate::primitives::order::Order;

// ============================================================================
// Sift-Down
// ============================================================================

/// Restore the heap property below `start`, assuming both subtrees of
/// `start` are already heaps.
///
/// Repeatedly swaps the entry at `start` with its smaller child (left
/// preferred on ties) until no child compares strictly smaller, or a leaf is
/// reached. O(log n).
pub fn sift_down<T, R: Order<T>>(entries: &mut [T], order: &R, start: usize) {
    let n = entries.len();
    let mut parent = start;

    loop {
        let left = 2 * parent + 1;
        if left >= n {
            // Leaf reached.
            break;
        }

        // Pick the smaller child; keep the left one on ties.
        let right = left + 1;
        let mut child = left;
        if right < n && order.compare(&entries[right], &entries[left]) == Ordering::Less {
            child = right;
        }

        if order.compare(&entries[child], &entries[parent]) != Ordering::Less {
            // Neither child is strictly smaller; the property holds here.
            break;
        }

        entries.swap(parent, child);
        parent = child;
    }
}

// ============================================================================
// Build-Heap
// ============================================================================

/// Establish the heap property over an arbitrary slice, in place.
///
/// Classic bottom-up construction: sift down every internal node, from the
/// last parent (`n / 2 - 1`) back to the root. O(n) total.
pub fn build_heap<T, R: Order<T>>(entries: &mut [T], order: &R) {
    let n = entries.len();
    for root in (0..n / 2).rev() {
        sift_down(entries, order, root);
    }
}

// ============================================================================
// Extraction
// ============================================================================

/// Remove and return the root (minimum) of a heap-ordered vector.
///
/// Swaps the root with the last entry, pops it off, then sifts the new root
/// down to restore the heap property. Returns `None` on an empty vector.
/// O(log n).
pub fn extract_root<T, R: Order<T>>(entries: &mut Vec<T>, order: &R) -> Option<T> {
    if entries.is_empty() {
        return None;
    }

    let last = entries.len() - 1;
    entries.swap(0, last);
    let first = entries.pop();

    if !entries.is_empty() {
        sift_down(entries, order, 0);
    }

    first
}

// ============================================================================
// Verification
// ============================================================================

/// Whether `entries` satisfies the heap property under `order`.
///
/// Checks every parent/child edge; O(n). Used by tests and debug assertions,
/// never on the hot path.
pub fn is_heap<T, R: Order<T>>(entries: &[T], order: &R) -> bool {
    (1..entries.len()).all(|child| {
        let parent = (child - 1) / 2;
        order.compare(&entries[child], &entries[parent]) != Ordering::Less
    })
}
