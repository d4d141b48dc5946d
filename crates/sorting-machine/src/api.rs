//! Public contract for sorting machines.
//!
//! ## Purpose
//!
//! This module defines the [`SortingMachine`] trait, the public contract a
//! sorting machine implementation satisfies, and re-exports the concrete
//! heap kernel and its supporting types.
//!
//! ## Design notes
//!
//! * **Contract/kernel split**: The trait is the abstract contract; the heap
//!   kernel ([`HeapSortingMachine`]) is its single concrete implementation.
//!   No dynamic dispatch is required beyond this split, and no plugin
//!   machinery exists.
//! * **Fallible by value**: Precondition violations surface as
//!   `Err(SortingMachineError)` rather than panics, so callers can route
//!   them with `?`.
//!
//! ## Key concepts
//!
//! * **Two-phase lifecycle**: `add` while inserting, transition once, then
//!   `remove_first` until empty.
//! * **Observable state**: mode, order, and the multiset of entries; the
//!   internal heap layout is never observable.
//!
//! ## Invariants
//!
//! * For any sequence of `add`s followed by the transition, the multiset of
//!   entries is preserved exactly; only the mode and internal layout change.
//! * Repeated `remove_first` yields a non-decreasing sequence under the
//!   machine's order, and that sequence is a permutation of the adds.
//!
//! ## Non-goals
//!
//! * No interleaved insert/extract, no key updates, no interior removal.

// Publicly re-exported types
pub use crate::kernel::machine::HeapSortingMachine;
pub use crate::primitives::errors::SortingMachineError;
pub use crate::primitives::mode::Mode;
pub use crate::primitives::order::{FloatOrder, FnOrder, NaturalOrder, Order, order_by};

// ============================================================================
// SortingMachine Trait
// ============================================================================

/// A two-phase sorting container over elements of type `T`.
///
/// A machine is created empty, in insertion mode, with a total preorder fixed
/// for its whole life. It accumulates entries via [`add`](Self::add),
/// transitions exactly once via
/// [`change_to_extraction_mode`](Self::change_to_extraction_mode), and then
/// yields entries one at a time in non-decreasing order via
/// [`remove_first`](Self::remove_first). The transition is one-way: an
/// extraction-mode machine can never accept entries again.
pub trait SortingMachine<T> {
    /// The total preorder this machine sorts under.
    type Order: Order<T>;

    /// Append an entry to the machine.
    ///
    /// O(1) amortized. Fails with [`SortingMachineError::WrongMode`] in
    /// extraction mode.
    fn add(&mut self, entry: T) -> Result<(), SortingMachineError>;

    /// Transition permanently from insertion to extraction mode.
    ///
    /// Heapifies the accumulated entries in place; O(n). Fails with
    /// [`SortingMachineError::WrongMode`] if extraction has already begun
    /// (calling it twice is an error, not a no-op).
    fn change_to_extraction_mode(&mut self) -> Result<(), SortingMachineError>;

    /// Remove and return a minimal entry under the machine's order.
    ///
    /// O(log n). When several entries compare equal, any one of them may be
    /// returned. Fails with [`SortingMachineError::WrongMode`] in insertion
    /// mode and [`SortingMachineError::EmptyMachine`] when no entries
    /// remain.
    fn remove_first(&mut self) -> Result<T, SortingMachineError>;

    /// The machine's current lifecycle mode. Valid in both modes.
    fn mode(&self) -> Mode;

    /// Whether the machine is still accepting entries. Valid in both modes.
    fn is_in_insertion_mode(&self) -> bool {
        self.mode().is_insertion()
    }

    /// The order fixed at construction. Valid in both modes.
    ///
    /// The machine retains ownership; callers must treat the returned order
    /// as read-only.
    fn order(&self) -> &Self::Order;

    /// Number of entries currently held. O(1), valid in both modes.
    fn size(&self) -> usize;

    /// Whether the machine currently holds no entries.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Discard every entry and return to insertion mode.
    ///
    /// The order is kept; the result is indistinguishable from a freshly
    /// constructed machine with the same order.
    fn clear(&mut self);
}
