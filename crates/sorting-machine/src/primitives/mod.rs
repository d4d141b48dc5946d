//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the primitive abstractions used throughout the crate:
//! the machine mode, the ordering strategy, and the shared error type. It has
//! zero dependencies on higher layers.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: API
//!   ↓
//! Layer 2: Kernel
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Machine lifecycle modes.
pub mod mode;

/// Ordering strategies (total preorders).
pub mod order;

/// Shared error types.
pub mod errors;
