//! The heap-backed sorting machine.
//!
//! ## Purpose
//!
//! This module provides [`HeapSortingMachine`], the one concrete
//! implementation of the [`SortingMachine`] contract: an in-memory multiset
//! that accumulates entries in insertion mode, heapifies once on the mode
//! transition, and drains entries in non-decreasing order in extraction mode.
//!
//! ## Design notes
//!
//! * **Lazy ordering**: Insertion is a plain O(1) amortized vector push; all
//!   ordering work is deferred to the single O(n) build-heap at the
//!   transition and the O(log n) sift-down per extraction. Sorting the whole
//!   accumulation this way is O(n + k log n) for k extractions, which beats
//!   eager per-insert ordering when not everything is drained.
//! * **Mode checks first**: Every mutating operation validates the mode
//!   before touching the store, so a precondition violation can never leave
//!   a half-updated heap behind.
//! * **Single-threaded**: All operations are direct, bounded computations
//!   with no suspension points. `&mut self` gives exclusive mutation within
//!   one thread; sharing a machine across threads requires external
//!   synchronization and is the caller's obligation.
//!
//! ## Invariants
//!
//! * In insertion mode the backing vector is in arbitrary order.
//! * In extraction mode the backing vector always satisfies the min-heap
//!   property under the machine's order.
//! * The multiset of entries changes only through `add`, `remove_first`, and
//!   `clear`; the mode transition permutes but never adds or drops entries.
//!
//! ## Non-goals
//!
//! * Not a priority queue: inserts and extractions cannot interleave.
//! * No stability among equal-comparing entries.
//! * No persistence and no internal locking.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::slice;

// Internal dependencies
use crate::api::SortingMachine;
use crate::kernel::heap;
use crate::primitives::errors::SortingMachineError;
use crate::primitives::mode::Mode;
use crate::primitives::order::Order;

// ============================================================================
// HeapSortingMachine
// ============================================================================

/// A two-phase sorting container backed by a binary heap.
///
/// Entries of type `T` are accumulated under a total preorder `R`, then
/// drained in non-decreasing order. See the [`SortingMachine`] trait for the
/// full operation contract.
#[derive(Debug, Clone)]
pub struct HeapSortingMachine<T, R> {
    /// Current lifecycle mode.
    mode: Mode,

    /// The total preorder fixed at construction.
    order: R,

    /// Backing store: unordered in insertion mode, heap-ordered in
    /// extraction mode.
    entries: Vec<T>,
}

impl<T, R: Order<T>> HeapSortingMachine<T, R> {
    /// Create an empty machine in insertion mode with the given order.
    ///
    /// The order must be a total preorder; this is a caller obligation, not
    /// checked at runtime.
    pub fn new(order: R) -> Self {
        Self {
            mode: Mode::Insertion,
            order,
            entries: Vec::new(),
        }
    }

    /// Like [`new`](Self::new), but pre-allocates room for `capacity`
    /// entries.
    pub fn with_capacity(order: R, capacity: usize) -> Self {
        Self {
            mode: Mode::Insertion,
            order,
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Iterate over the remaining entries in unspecified order.
    ///
    /// Valid in both modes. The iteration order is an implementation detail
    /// (the raw store order); callers must not rely on it.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.entries.iter()
    }

    /// Consume the machine and return every remaining entry in
    /// non-decreasing order.
    ///
    /// Finishes the transition to extraction mode first if the machine is
    /// still inserting, then drains the heap. O(n log n) overall.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        if self.mode.is_insertion() {
            heap::build_heap(&mut self.entries, &self.order);
            self.mode = Mode::Extraction;
        }

        let mut sorted = Vec::with_capacity(self.entries.len());
        while let Some(entry) = heap::extract_root(&mut self.entries, &self.order) {
            sorted.push(entry);
        }
        sorted
    }

    /// Fail with [`SortingMachineError::WrongMode`] unless the machine is in
    /// `required` mode.
    fn require_mode(&self, required: Mode) -> Result<(), SortingMachineError> {
        if self.mode == required {
            Ok(())
        } else {
            Err(SortingMachineError::WrongMode {
                required,
                current: self.mode,
            })
        }
    }
}

// ============================================================================
// SortingMachine Contract
// ============================================================================

impl<T, R: Order<T>> SortingMachine<T> for HeapSortingMachine<T, R> {
    type Order = R;

    fn add(&mut self, entry: T) -> Result<(), SortingMachineError> {
        self.require_mode(Mode::Insertion)?;
        self.entries.push(entry);
        Ok(())
    }

    fn change_to_extraction_mode(&mut self) -> Result<(), SortingMachineError> {
        self.require_mode(Mode::Insertion)?;
        heap::build_heap(&mut self.entries, &self.order);
        self.mode = Mode::Extraction;
        Ok(())
    }

    fn remove_first(&mut self) -> Result<T, SortingMachineError> {
        self.require_mode(Mode::Extraction)?;
        heap::extract_root(&mut self.entries, &self.order).ok_or(SortingMachineError::EmptyMachine)
    }

    fn mode(&self) -> Mode {
        self.mode
    }

    fn order(&self) -> &R {
        &self.order
    }

    fn size(&self) -> usize {
        self.entries.len()
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.mode = Mode::Insertion;
    }
}

impl<'a, T, R: Order<T>> IntoIterator for &'a HeapSortingMachine<T, R> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
