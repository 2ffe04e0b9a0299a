//! Example 02: Search and natural sort
//!
//! This example shows the derived view (case-insensitive filtering with
//! exact position remapping) and the natural-order sort.
//!
//! Run with: cargo run --example 02_search_and_sort

use checklist::{ListStore, ListView};
use eyre::Result;

fn main() -> Result<()> {
    println!("Checklist Search and Sort Example");
    println!("=================================\n");

    let mut store = ListStore::new();
    store.add("item10");
    store.add("item2");
    store.add("Item1");
    store.add("Milk");
    store.add("milkshake");

    // Natural sort: case-insensitive, digit runs compared by value
    store.sort();
    println!("Sorted:");
    for entry in store.entries() {
        println!("  {}", entry.text);
    }

    // Filter is a read-only projection; positions refer to the full list
    store.set_search("milk");
    println!("\nFiltered by \"milk\":");
    for (position, entry) in store.filtered() {
        println!("  row -> list position {}: {}", position, entry.text);
    }

    // Mutations through a filtered rendering use the carried position
    let view = ListView::project(&store);
    let first_hit = view.rows[0].position;
    store.toggle_complete(first_hit)?;
    println!(
        "\nCompleted \"{}\" via its filtered row (list position {})",
        store.entries()[first_hit].text,
        first_hit
    );

    // A term that matches nothing raises the no-matches signal
    store.set_search("caviar");
    let view = ListView::project(&store);
    println!("\nSearch \"caviar\": no_matches = {}", view.no_matches);

    Ok(())
}
