//! Ordering strategies for sorting machines.
//!
//! ## Purpose
//!
//! This module defines the comparison strategy a sorting machine is built
//! around: a total preorder over the element type, fixed at construction and
//! immutable for the life of the machine.
//!
//! ## Design notes
//!
//! * **Strategy object**: The order is an injected capability, never global
//!   state. Implement [`Order`] for a custom type, or wrap a closure with
//!   [`order_by`].
//! * **Preorder, not order**: Distinct elements may compare equal; the machine
//!   makes no stability promise among them.
//! * **Unchecked**: Totality and transitivity are caller obligations.
//!   Verifying them would cost O(n²) comparisons, so they are assumed.
//!
//! ## Key concepts
//!
//! * **Total preorder**: reflexive, transitive, and total, without requiring
//!   antisymmetry.
//! * **[`NaturalOrder`]**: delegates to `Ord::cmp` for types with a natural
//!   total order.
//! * **[`FloatOrder`]**: a total preorder over IEEE floats: finite values
//!   ascending, NaN after every non-NaN value, NaNs mutually equal.
//! * **[`order_by`]**: adapts any `Fn(&T, &T) -> Ordering` closure into an
//!   [`Order`].
//!
//! ## Invariants
//!
//! * `compare` is deterministic and side-effect free for a well-behaved order.
//!
//! ## Non-goals
//!
//! * This module does not validate that a supplied relation really is a total
//!   preorder; a violating order yields incorrect output order, never memory
//!   unsafety.

// External dependencies
use core::cmp::Ordering;
use num_traits::float::FloatCore;

// ============================================================================
// Order Trait
// ============================================================================

/// A total preorder over `T`.
///
/// Implementors compare two elements and report which should be extracted
/// first; [`Ordering::Less`] means `a` comes before `b`.
///
/// The relation must be reflexive, transitive, and total. This is a
/// precondition on the implementor, not checked at runtime.
pub trait Order<T> {
    /// Compare two elements under this order.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

// ============================================================================
// Ready-Made Orders
// ============================================================================

/// The natural order of a type implementing [`Ord`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord> Order<T> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// A total preorder over IEEE floating-point values.
///
/// Finite values and infinities compare by their numeric value; NaN compares
/// greater than every non-NaN value, and NaNs compare equal to each other.
/// Draining a machine built with this order therefore yields numeric values
/// ascending with all NaNs at the end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FloatOrder;

impl<T: FloatCore> Order<T> for FloatOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        match (a.is_nan(), b.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            // Neither side is NaN, so partial_cmp cannot fail.
            (false, false) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
        }
    }
}

// ============================================================================
// Closure Adapter
// ============================================================================

/// An [`Order`] backed by a comparison closure. Built with [`order_by`].
#[derive(Debug, Clone, Copy)]
pub struct FnOrder<F>(F);

impl<T, F> Order<T> for FnOrder<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a, b)
    }
}

/// Adapt a comparison closure into an [`Order`].
///
/// The closure must compute a total preorder, like every order.
///
/// ```rust
/// use sorting_machine::prelude::*;
///
/// let by_length = order_by(|a: &&str, b: &&str| a.len().cmp(&b.len()));
/// let machine = HeapSortingMachine::new(by_length);
/// # let _ = machine;
/// ```
#[inline]
pub fn order_by<T, F>(compare: F) -> FnOrder<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    FnOrder(compare)
}
