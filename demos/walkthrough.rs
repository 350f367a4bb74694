//! Walks through the search family on small, fixed inputs.
//!
//! Run with: cargo run --example walkthrough
//! Set RUST_LOG=sorted_search=trace to see the nearest-element decisions.

use sorted_search::{
    SearchError, SortedSlice, TieBreak, binary_search, binary_search_by_key,
    binary_search_recursive, first_occurrence, last_occurrence, nearest_with, to_sentinel,
};
use tracing_subscriber::EnvFilter;

fn show(label: &str, result: Option<usize>) {
    match result {
        Some(index) => println!("  {label:<34} index {index}"),
        None => println!("  {label:<34} not found ({})", to_sentinel(result)),
    }
}

fn main() -> Result<(), SearchError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let odds = [1, 3, 5, 7, 9, 11, 13, 15];
    println!("sequence: {odds:?}");
    show("iterative search for 7", binary_search(&odds, &7));
    show("recursive search for 7", binary_search_recursive(&odds, &7));
    show("iterative search for 6", binary_search(&odds, &6));
    show(
        "nearest to 6 (prefer higher)",
        nearest_with(&odds, &6, TieBreak::PreferHigher),
    );
    show(
        "nearest to 6 (prefer lower)",
        nearest_with(&odds, &6, TieBreak::PreferLower),
    );

    println!();
    let runs = [1, 2, 2, 2, 3, 4, 5, 5, 5, 6];
    let view = SortedSlice::new(&runs)?;
    println!("sequence: {runs:?}");
    show("first occurrence of 2", first_occurrence(&runs, &2));
    show("last occurrence of 5", last_occurrence(&runs, &5));
    println!("  {:<34} {}", "count of 5", view.count(&5));

    println!();
    let directory = [("ada", 1815), ("alan", 1912), ("grace", 1906)];
    println!("sequence sorted by name: {directory:?}");
    show(
        "lookup by name \"alan\"",
        binary_search_by_key(&directory, &"alan", |&(name, _)| name),
    );

    println!();
    let empty: [i32; 0] = [];
    println!("sequence: []");
    show("iterative search for 1", binary_search(&empty, &1));
    show("first occurrence of 1", first_occurrence(&empty, &1));

    println!();
    let scrambled = [4, 8, 2];
    match SortedSlice::new(&scrambled) {
        Ok(_) => println!("unexpectedly accepted {scrambled:?}"),
        Err(err) => println!("rejected {scrambled:?}: {err}"),
    }

    Ok(())
}
