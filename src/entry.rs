// Checklist entry and its stable identifier

use serde::Serialize;
use uuid::Uuid;

/// Opaque stable identifier for an entry, assigned once at creation.
///
/// Positions in the list shift under delete and sort, so selection state
/// (which entry is being edited) is tracked by id and resolved to a position
/// only at the point of mutation. UUIDv7 ids are time-ordered, so creation
/// order is recoverable from the ids alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct EntryId(Uuid);

impl EntryId {
    pub(crate) fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One checklist line item.
///
/// `text` is always non-empty and trimmed; both are enforced by the store at
/// creation and on edit-save, never re-checked here.
#[derive(Debug, Clone, Serialize)]
pub struct Entry {
    pub id: EntryId,
    pub text: String,
    pub completed: bool,
}

impl Entry {
    pub(crate) fn new(text: String) -> Self {
        Self {
            id: EntryId::new(),
            text,
            completed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry_is_incomplete() {
        let entry = Entry::new("Milk".to_string());
        assert_eq!(entry.text, "Milk");
        assert!(!entry.completed);
    }

    #[test]
    fn test_entry_ids_are_unique_and_ordered() {
        let a = Entry::new("a".to_string());
        let b = Entry::new("b".to_string());
        assert_ne!(a.id, b.id);
        // UUIDv7: later creation sorts later
        assert!(a.id < b.id);
    }

    #[test]
    fn test_entry_serializes_to_json() {
        let entry = Entry::new("Bread".to_string());
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"text\":\"Bread\""));
        assert!(json.contains("\"completed\":false"));
    }
}
