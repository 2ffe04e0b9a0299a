// Checklist - in-memory grocery list state with edit-in-place, natural sort, and search

pub mod collate;
pub mod command;
pub mod entry;
pub mod store;
pub mod view;

// Re-export main types for convenience
pub use collate::natural_cmp;
pub use command::Command;
pub use entry::{Entry, EntryId};
pub use store::{EditSession, ListStore};
pub use view::{ListView, ViewRow};
