//! Machine lifecycle modes.
//!
//! ## Purpose
//!
//! This module defines the two-state lifecycle of a sorting machine: entries
//! are accumulated while in insertion mode, and drained in sorted order while
//! in extraction mode.
//!
//! ## Design notes
//!
//! * **One-way**: The transition from insertion to extraction happens exactly
//!   once; there is no path back.
//! * **Cheap**: `Mode` is a `Copy` enum and mode checks are branch-only.
//!
//! ## Invariants
//!
//! * A machine is in exactly one mode at any time.
//! * Extraction mode is terminal (only `clear` re-creates an insertion-mode
//!   machine, by resetting contents as well).
//!
//! ## Non-goals
//!
//! * This module does not enforce which operations are legal in which mode;
//!   that is the kernel's job.

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Mode
// ============================================================================

/// The lifecycle mode of a sorting machine.
///
/// A machine starts in [`Mode::Insertion`], transitions exactly once to
/// [`Mode::Extraction`], and stays there for the rest of its life.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Entries may be added; none may be removed.
    Insertion,

    /// Entries may be removed in non-decreasing order; none may be added.
    Extraction,
}

impl Mode {
    /// Human-readable name of the mode.
    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            Mode::Insertion => "insertion",
            Mode::Extraction => "extraction",
        }
    }

    /// Whether this is [`Mode::Insertion`].
    #[inline]
    pub fn is_insertion(self) -> bool {
        matches!(self, Mode::Insertion)
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.name())
    }
}
