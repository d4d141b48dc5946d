#![cfg(feature = "dev")]
//! Tests for the binary heap kernel.
//!
//! These tests verify the heap algorithms underneath the sorting machine:
//! - Bottom-up build-heap over arbitrary slices
//! - Sift-down termination and tie-breaking
//! - Root extraction and invariant restoration
//!
//! ## Test Organization
//!
//! 1. **Build-Heap** - Establishing the heap property
//! 2. **Sift-Down** - Local restoration, tie-breaking, equal keys
//! 3. **Extraction** - Sorted removal, empty and single-element cases
//! 4. **Randomized Invariants** - Heap property across random extractions

use core::cmp::Ordering;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use sorting_machine::internals::kernel::heap::{build_heap, extract_root, is_heap, sift_down};
use sorting_machine::internals::primitives::order::{NaturalOrder, Order};

// ============================================================================
// Build-Heap Tests
// ============================================================================

/// Test build-heap on slices that need the most rearrangement.
///
/// A descending slice violates the heap property at every internal node.
#[test]
fn test_build_heap_descending() {
    let mut entries: Vec<i32> = (0..64).rev().collect();

    build_heap(&mut entries, &NaturalOrder);

    assert!(is_heap(&entries, &NaturalOrder), "Heap property should hold");
    assert_eq!(entries[0], 0, "Root should be the minimum");
    assert_eq!(entries.len(), 64, "No entry should be lost");
}

/// Test build-heap on degenerate slices: empty, single, and pair.
#[test]
fn test_build_heap_small_slices() {
    let mut empty: Vec<i32> = vec![];
    build_heap(&mut empty, &NaturalOrder);
    assert!(is_heap(&empty, &NaturalOrder));

    let mut single = vec![7];
    build_heap(&mut single, &NaturalOrder);
    assert_eq!(single, vec![7]);

    let mut pair = vec![9, 4];
    build_heap(&mut pair, &NaturalOrder);
    assert!(is_heap(&pair, &NaturalOrder));
    assert_eq!(pair[0], 4, "Root of a pair should be the smaller entry");
}

/// Test build-heap on a slice of all-equal keys.
///
/// With strict-less swapping, equal keys require no movement at all.
#[test]
fn test_build_heap_equal_keys() {
    let mut entries = vec![5; 17];
    build_heap(&mut entries, &NaturalOrder);
    assert!(is_heap(&entries, &NaturalOrder));
    assert_eq!(entries, vec![5; 17], "Equal keys should not move");
}

// ============================================================================
// Sift-Down Tests
// ============================================================================

/// Order over `(key, tag)` pairs that only looks at the key, so ties between
/// distinct entries are observable via the tag.
struct KeyOnly;

impl Order<(u32, char)> for KeyOnly {
    fn compare(&self, a: &(u32, char), b: &(u32, char)) -> Ordering {
        a.0.cmp(&b.0)
    }
}

/// Test that sift-down prefers the left child when both children tie.
#[test]
fn test_sift_down_prefers_left_child_on_tie() {
    // Both children compare equal and strictly below the root.
    let mut entries = vec![(2, 'r'), (1, 'l'), (1, 'x')];

    sift_down(&mut entries, &KeyOnly, 0);

    assert_eq!(entries[0], (1, 'l'), "Left child should win the tie");
    assert!(is_heap(&entries, &KeyOnly));
}

/// Test that sift-down takes the right child only when strictly smaller.
#[test]
fn test_sift_down_takes_strictly_smaller_right_child() {
    let mut entries = vec![(3, 'r'), (2, 'l'), (1, 'x')];

    sift_down(&mut entries, &KeyOnly, 0);

    assert_eq!(entries[0], (1, 'x'), "Strictly smaller right child should win");
    assert!(is_heap(&entries, &KeyOnly));
}

/// Test that sift-down does nothing when the property already holds locally.
#[test]
fn test_sift_down_noop_when_heap() {
    let mut entries = vec![1, 2, 3, 4, 5, 6, 7];
    let snapshot = entries.clone();

    sift_down(&mut entries, &NaturalOrder, 0);

    assert_eq!(entries, snapshot, "A valid heap should be left untouched");
}

/// Test sifting a large entry all the way down to a leaf.
#[test]
fn test_sift_down_to_leaf() {
    // A heap except for the oversized root.
    let mut entries = vec![99, 1, 2, 3, 4, 5, 6];

    sift_down(&mut entries, &NaturalOrder, 0);

    assert!(is_heap(&entries, &NaturalOrder));
    assert_eq!(entries[0], 1, "Smallest child chain should rise");
    let leaf_pos = entries.iter().position(|&v| v == 99).unwrap();
    assert!(leaf_pos >= entries.len() / 2, "Oversized entry should end at a leaf");
}

// ============================================================================
// Extraction Tests
// ============================================================================

/// Test that extraction from an empty vector returns `None`.
#[test]
fn test_extract_root_empty() {
    let mut entries: Vec<i32> = vec![];
    assert_eq!(extract_root(&mut entries, &NaturalOrder), None);
}

/// Test extraction from a single-element heap.
#[test]
fn test_extract_root_single() {
    let mut entries = vec![42];

    assert_eq!(extract_root(&mut entries, &NaturalOrder), Some(42));
    assert!(entries.is_empty());
    assert_eq!(extract_root(&mut entries, &NaturalOrder), None);
}

/// Test that repeated extraction fully sorts a heap.
#[test]
fn test_extract_root_drains_sorted() {
    let mut entries = vec![5, 3, 8, 1, 9, 2, 7, 4, 6, 0];
    build_heap(&mut entries, &NaturalOrder);

    let mut drained = Vec::new();
    while let Some(v) = extract_root(&mut entries, &NaturalOrder) {
        drained.push(v);
    }

    assert_eq!(drained, (0..10).collect::<Vec<i32>>());
}

// ============================================================================
// Randomized Invariant Tests
// ============================================================================

/// Test that the heap property holds after build-heap and after every
/// extraction, on random inputs with duplicates.
#[test]
fn test_heap_invariant_randomized() {
    let mut rng = StdRng::seed_from_u64(0xBEEF);

    for _ in 0..20 {
        let n = rng.random_range(1..128);
        let mut entries: Vec<u32> = (0..n).map(|_| rng.random_range(0..32)).collect();

        build_heap(&mut entries, &NaturalOrder);
        assert!(is_heap(&entries, &NaturalOrder), "build_heap should establish the invariant");

        let mut previous = None;
        while let Some(v) = extract_root(&mut entries, &NaturalOrder) {
            assert!(
                is_heap(&entries, &NaturalOrder),
                "extract_root should restore the invariant"
            );
            if let Some(p) = previous {
                assert!(p <= v, "extraction sequence should be non-decreasing");
            }
            previous = Some(v);
        }
    }
}
