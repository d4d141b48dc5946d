//! Sorting Machine Examples
//!
//! This example demonstrates the two-phase sorting machine lifecycle:
//! - Natural-order sorting of integers
//! - Custom orders (case-insensitive strings)
//! - Float data with NaN handling via `FloatOrder`
//! - Fail-fast mode errors
//! - One-shot draining with `into_sorted_vec`

use sorting_machine::prelude::*;

fn main() -> Result<(), SortingMachineError> {
    println!("{}", "=".repeat(80));
    println!("Sorting Machine Examples");
    println!("{}", "=".repeat(80));
    println!();

    example_1_natural_order()?;
    example_2_custom_order()?;
    example_3_float_order()?;
    example_4_mode_errors()?;
    example_5_one_shot_drain()?;

    Ok(())
}

/// Example 1: Natural Order
/// Accumulate integers, then drain them ascending.
fn example_1_natural_order() -> Result<(), SortingMachineError> {
    println!("Example 1: Natural Order");
    println!("{}", "-".repeat(80));

    let mut machine = HeapSortingMachine::with_capacity(NaturalOrder, 8);
    for value in [42, 7, 19, 3, 23, 11, 2, 30] {
        machine.add(value)?;
    }
    println!("Accumulated {} entries (unordered)", machine.size());

    machine.change_to_extraction_mode()?;
    print!("Drained:");
    while !machine.is_empty() {
        print!(" {}", machine.remove_first()?);
    }
    println!("\n");

    Ok(())
}

/// Example 2: Custom Order
/// A closure gives a case-insensitive lexicographic order over words.
fn example_2_custom_order() -> Result<(), SortingMachineError> {
    println!("Example 2: Custom Order (case-insensitive)");
    println!("{}", "-".repeat(80));

    let mut machine = HeapSortingMachine::new(order_by(|a: &&str, b: &&str| {
        a.to_lowercase().cmp(&b.to_lowercase())
    }));
    for word in ["There", "hello", "Professor"] {
        machine.add(word)?;
    }

    machine.change_to_extraction_mode()?;
    print!("Drained:");
    while !machine.is_empty() {
        print!(" {}", machine.remove_first()?);
    }
    println!("\n");

    Ok(())
}

/// Example 3: Float Order
/// `FloatOrder` is a total preorder over IEEE floats: numeric values
/// ascending, NaNs at the end.
fn example_3_float_order() -> Result<(), SortingMachineError> {
    println!("Example 3: Float Order (NaNs last)");
    println!("{}", "-".repeat(80));

    let mut machine = HeapSortingMachine::new(FloatOrder);
    for reading in [2.5_f64, f64::NAN, 0.3, -1.2, f64::INFINITY, 1.0] {
        machine.add(reading)?;
    }

    machine.change_to_extraction_mode()?;
    print!("Drained:");
    while !machine.is_empty() {
        print!(" {}", machine.remove_first()?);
    }
    println!("\n");

    Ok(())
}

/// Example 4: Mode Errors
/// Precondition violations fail fast with descriptive errors.
fn example_4_mode_errors() -> Result<(), SortingMachineError> {
    println!("Example 4: Mode Errors");
    println!("{}", "-".repeat(80));

    let mut machine = HeapSortingMachine::new(NaturalOrder);
    machine.add(1)?;

    // remove_first before the transition is a wrong-mode error.
    if let Err(e) = machine.remove_first() {
        println!("remove_first while inserting: {}", e);
    }

    machine.change_to_extraction_mode()?;

    // The transition is one-way; adding again is a wrong-mode error.
    if let Err(e) = machine.add(2) {
        println!("add while extracting:        {}", e);
    }

    machine.remove_first()?;

    // Draining past empty is an empty-machine error.
    if let Err(e) = machine.remove_first() {
        println!("remove_first when empty:     {}", e);
    }
    println!();

    Ok(())
}

/// Example 5: One-Shot Drain
/// `into_sorted_vec` consumes the machine and finishes the lifecycle.
fn example_5_one_shot_drain() -> Result<(), SortingMachineError> {
    println!("Example 5: One-Shot Drain");
    println!("{}", "-".repeat(80));

    let mut machine = HeapSortingMachine::new(NaturalOrder);
    for value in [5_u32, 1, 4, 1, 5, 9, 2, 6] {
        machine.add(value)?;
    }

    let sorted = machine.into_sorted_vec();
    println!("Sorted: {:?}", sorted);

    Ok(())
}
