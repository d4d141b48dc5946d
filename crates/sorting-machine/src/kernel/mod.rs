//! Layer 2: Kernel
//!
//! # Purpose
//!
//! This layer holds the non-trivial logic of the crate: the binary heap
//! algorithms (sift-down, bottom-up build-heap, root extraction) and the
//! [`HeapSortingMachine`](machine::HeapSortingMachine) container built on
//! them.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: API
//!   ↓
//! Layer 2: Kernel ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Binary heap algorithms.
pub mod heap;

/// The heap-backed sorting machine container.
pub mod machine;
