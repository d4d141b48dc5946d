//! Error types for sorting machine operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions a sorting machine can report:
//! invoking an operation in the wrong mode, and extracting from an empty
//! machine.
//!
//! ## Design notes
//!
//! * **Contextual**: The wrong-mode variant carries both the mode an
//!   operation required and the mode the machine was actually in.
//! * **Fail-fast**: These are precondition violations (logic errors), surfaced
//!   immediately as `Err` values rather than silently absorbed; silently
//!   continuing would corrupt the heap invariant.
//! * **No-std**: Supports `no_std` environments; `std::error::Error` is
//!   implemented only when the `std` feature is enabled.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the mode checks itself.
//! * No retry or recovery strategy: these are programmer errors, not
//!   transient failures.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// Internal dependencies
use crate::primitives::mode::Mode;

// ============================================================================
// Error Type
// ============================================================================

/// Error type for sorting machine operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortingMachineError {
    /// An operation was invoked in a mode it is not valid in: `add` or
    /// `change_to_extraction_mode` after extraction began, or `remove_first`
    /// before it did.
    WrongMode {
        /// Mode the operation requires.
        required: Mode,
        /// Mode the machine was in.
        current: Mode,
    },

    /// `remove_first` was called with no entries remaining.
    EmptyMachine,
}

impl Display for SortingMachineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            SortingMachineError::WrongMode { required, current } => write!(
                f,
                "operation requires {} mode, but the machine is in {} mode",
                required, current
            ),
            SortingMachineError::EmptyMachine => {
                write!(f, "cannot remove from an empty sorting machine")
            }
        }
    }
}

#[cfg(feature = "std")]
impl Error for SortingMachineError {}
