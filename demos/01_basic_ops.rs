//! Example 01: Basic list operations
//!
//! This example walks through the core mutations: add, toggle complete,
//! edit-in-place, delete, and delete-all.
//!
//! Run with: cargo run --example 01_basic_ops

use checklist::ListStore;
use eyre::Result;

fn main() -> Result<()> {
    println!("Checklist Basic Operations Example");
    println!("==================================\n");

    let mut store = ListStore::new();

    // Add a few items; input is trimmed, blank input is ignored
    store.add("  Milk ");
    store.add("Bread");
    store.add("Eggs");
    store.add("   "); // no-op
    println!("After adding 3 items (blank input ignored):");
    print_list(&store);

    // Mark the first item as bought
    store.toggle_complete(0)?;
    println!("\nAfter completing item 1:");
    print_list(&store);

    // Edit the second item: open a session, type new text, save
    store.start_edit(1)?;
    store.set_edit_scratch("Rye bread")?;
    store.save_edit()?;
    println!("\nAfter editing item 2:");
    print_list(&store);

    // An empty save is refused and the session stays open
    store.start_edit(2)?;
    store.set_edit_scratch("")?;
    let saved = store.save_edit()?;
    println!("\nEmpty save applied: {} (session still open: {})", saved, store.is_editing());
    store.cancel_edit();

    // Delete one, then everything
    let removed = store.delete(0)?;
    println!("\nRemoved: {}", removed.text);
    store.delete_all();
    println!("After delete-all the list is empty: {}", store.is_empty());

    Ok(())
}

fn print_list(store: &ListStore) {
    for entry in store.entries() {
        let marker = if entry.completed { "[x]" } else { "[ ]" };
        println!("  {} {}", marker, entry.text);
    }
}
