//! # sorting-machine: a two-phase, heap-backed sorting container
//!
//! A **sorting machine** accumulates entries in an unordered multiset, then
//! transitions, irreversibly and exactly once, into a mode where entries are
//! extracted one at a time in non-decreasing order under a caller-supplied
//! total preorder.
//!
//! ## Why a sorting machine?
//!
//! Unlike a priority queue, a sorting machine forbids interleaving inserts
//! and extractions, and that restriction buys a better cost profile:
//! insertion is a plain O(1) amortized append, the single mode transition
//! heapifies everything in O(n) with the classic bottom-up build-heap, and
//! each extraction is O(log n). Sorting n entries and draining k of them
//! costs O(n + k log n); you never pay for ordering entries you do not
//! extract.
//!
//! ## Quick Start
//!
//! ```rust
//! use sorting_machine::prelude::*;
//!
//! let mut machine = HeapSortingMachine::new(NaturalOrder);
//!
//! machine.add(3)?;
//! machine.add(1)?;
//! machine.add(2)?;
//!
//! machine.change_to_extraction_mode()?;
//!
//! assert_eq!(machine.remove_first()?, 1);
//! assert_eq!(machine.remove_first()?, 2);
//! assert_eq!(machine.remove_first()?, 3);
//! assert!(machine.is_empty());
//! # Result::<(), SortingMachineError>::Ok(())
//! ```
//!
//! ## Custom Orders
//!
//! An order is any type implementing the [`Order`](prelude::Order) trait; a
//! comparison closure becomes one via [`order_by`](prelude::order_by). The
//! order must be a total preorder (reflexive, transitive, total); distinct
//! entries may compare equal, and no stability is promised among them.
//!
//! ```rust
//! use sorting_machine::prelude::*;
//!
//! // Case-insensitive lexicographic order over strings.
//! let mut machine = HeapSortingMachine::new(order_by(|a: &String, b: &String| {
//!     a.to_lowercase().cmp(&b.to_lowercase())
//! }));
//!
//! machine.add("Green".to_string())?;
//! machine.add("blue".to_string())?;
//!
//! machine.change_to_extraction_mode()?;
//!
//! assert_eq!(machine.remove_first()?, "blue");
//! assert_eq!(machine.remove_first()?, "Green");
//! # Result::<(), SortingMachineError>::Ok(())
//! ```
//!
//! For floating-point data, [`FloatOrder`](prelude::FloatOrder) provides a
//! total preorder that sorts numeric values ascending with NaNs at the end.
//!
//! ## Result and Error Handling
//!
//! Mode-sensitive operations return `Result<_, SortingMachineError>`.
//! Calling `add` after the transition, transitioning twice, or calling
//! `remove_first` before the transition all fail fast with
//! [`SortingMachineError::WrongMode`](prelude::SortingMachineError);
//! extracting from an empty machine fails with
//! [`SortingMachineError::EmptyMachine`](prelude::SortingMachineError).
//! These are precondition violations (logic errors, not transient
//! conditions), so there is nothing to retry.
//!
//! ```rust
//! use sorting_machine::prelude::*;
//!
//! let mut machine = HeapSortingMachine::new(NaturalOrder);
//! machine.add(7)?;
//! machine.change_to_extraction_mode()?;
//!
//! // The machine can never accept entries again.
//! assert!(machine.add(8).is_err());
//! # Result::<(), SortingMachineError>::Ok(())
//! ```
//!
//! ## Concurrency
//!
//! All operations are direct, synchronous, bounded computations. The machine
//! performs no internal locking; sharing one across threads requires
//! external synchronization and is the caller's obligation.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments (with `alloc`). Disable default
//! features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! sorting-machine = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - mode, order, and error types.
mod primitives;

// Layer 2: Kernel - heap algorithms and the machine container.
mod kernel;

// Public contract and re-exports.
mod api;

// Standard sorting-machine prelude.
pub mod prelude {
    pub use crate::api::{
        FloatOrder, FnOrder, HeapSortingMachine, Mode, NaturalOrder, Order, SortingMachine,
        SortingMachineError, order_by,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod kernel {
        pub use crate::kernel::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
