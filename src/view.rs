// Derived view: the filtered projection the presentation layer renders

use crate::store::ListStore;

/// Case-insensitive substring match used by the search filter.
///
/// An empty term matches everything.
pub(crate) fn matches(text: &str, term: &str) -> bool {
    term.is_empty() || text.to_lowercase().contains(&term.to_lowercase())
}

/// One rendered line: an entry snapshot plus the position it occupies in the
/// underlying list.
///
/// `position` is carried from the store's filtered iterator, never recomputed
/// by value lookup, so dispatching a mutation for this row is exact even when
/// several entries share the same text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRow {
    /// Position in the underlying list; what mutation operations take.
    pub position: usize,
    pub text: String,
    pub completed: bool,
    /// True when this row's entry has the open edit session.
    pub editing: bool,
}

/// Snapshot of the list as it should be rendered right now.
///
/// Recomputed eagerly from the store on every read; it owns copies of the row
/// data and has no identity of its own.
#[derive(Debug, Clone)]
pub struct ListView {
    pub rows: Vec<ViewRow>,
    /// True exactly when a non-empty search term matched nothing. An empty
    /// term never sets this, even on an empty list.
    pub no_matches: bool,
}

impl ListView {
    pub fn project(store: &ListStore) -> Self {
        let editing = store.editing_position();

        let rows: Vec<ViewRow> = store
            .filtered()
            .map(|(position, entry)| ViewRow {
                position,
                text: entry.text.clone(),
                completed: entry.completed,
                editing: editing == Some(position),
            })
            .collect();

        let no_matches = rows.is_empty() && !store.search_term().is_empty();
        Self { rows, no_matches }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_is_case_insensitive_substring() {
        assert!(matches("Milk", "milk"));
        assert!(matches("milkshake", "MILK"));
        assert!(matches("Bread", ""));
        assert!(!matches("Bread", "milk"));
    }

    #[test]
    fn test_project_unfiltered_keeps_order_and_positions() {
        let mut store = ListStore::new();
        store.add("Milk");
        store.add("Bread");

        let view = ListView::project(&store);
        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.rows[0].position, 0);
        assert_eq!(view.rows[0].text, "Milk");
        assert_eq!(view.rows[1].position, 1);
        assert_eq!(view.rows[1].text, "Bread");
        assert!(!view.no_matches);
    }

    #[test]
    fn test_project_filtered_keeps_underlying_positions() {
        let mut store = ListStore::new();
        store.add("Milk");
        store.add("Bread");
        store.add("milkshake");
        store.set_search("milk");

        let view = ListView::project(&store);
        let positions: Vec<usize> = view.rows.iter().map(|r| r.position).collect();
        assert_eq!(positions, vec![0, 2]);
    }

    #[test]
    fn test_no_matches_requires_a_term() {
        let mut store = ListStore::new();

        // Empty list, no term: nothing to signal
        assert!(!ListView::project(&store).no_matches);

        // Empty list, term set: signal fires
        store.set_search("milk");
        assert!(ListView::project(&store).no_matches);

        // Term matching nothing on a populated list
        store.set_search("zzz");
        store.add("Milk");
        let view = ListView::project(&store);
        assert!(view.rows.is_empty());
        assert!(view.no_matches);
    }

    #[test]
    fn test_editing_flag_follows_the_entry_through_the_filter() {
        let mut store = ListStore::new();
        store.add("Milk");
        store.add("Bread");
        store.add("milkshake");

        store.start_edit(2).unwrap();
        store.set_search("milk");

        let view = ListView::project(&store);
        assert_eq!(view.rows.len(), 2);
        assert!(!view.rows[0].editing);
        assert!(view.rows[1].editing);
        assert_eq!(view.rows[1].position, 2);
    }

    #[test]
    fn test_completed_flag_is_projected() {
        let mut store = ListStore::new();
        store.add("Milk");
        store.toggle_complete(0).unwrap();

        let view = ListView::project(&store);
        assert!(view.rows[0].completed);
    }
}
