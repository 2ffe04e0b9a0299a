// List store: the single owned entry list plus transient edit/search state

use crate::collate::natural_cmp;
use crate::entry::{Entry, EntryId};
use crate::view;
use eyre::{Result, eyre};
use tracing::debug;

/// The in-progress edit of one entry.
///
/// Keyed by entry id rather than position, so deletes and reorders elsewhere
/// in the list cannot silently retarget the edit. The scratch buffer holds the
/// text being typed; the entry itself is untouched until the edit is saved.
#[derive(Debug, Clone)]
pub struct EditSession {
    id: EntryId,
    scratch: String,
}

impl EditSession {
    pub fn entry_id(&self) -> EntryId {
        self.id
    }

    pub fn scratch(&self) -> &str {
        &self.scratch
    }
}

/// Owner of the checklist: all mutation goes through the methods here.
///
/// Everything is in process memory; the list resets on restart. The store is
/// single-threaded by construction: every operation runs to completion before
/// the caller dispatches the next one.
#[derive(Debug, Default)]
pub struct ListStore {
    entries: Vec<Entry>,
    edit: Option<EditSession>,
    search: String,
}

impl ListStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Read API
    // ========================================================================

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, position: usize) -> Option<&Entry> {
        self.entries.get(position)
    }

    pub fn edit_session(&self) -> Option<&EditSession> {
        self.edit.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.edit.is_some()
    }

    /// Current position of the entry under edit, if any.
    pub fn editing_position(&self) -> Option<usize> {
        self.edit.as_ref().and_then(|s| self.position_of(s.id))
    }

    pub fn search_term(&self) -> &str {
        &self.search
    }

    /// Entries whose text contains the search term, case-insensitively, paired
    /// with their position in the underlying list.
    ///
    /// An empty term yields every entry. The iterator never reorders,
    /// duplicates, or drops entries relative to the list; carrying the
    /// position explicitly is what keeps mutations addressed through a
    /// filtered rendering exact even when two entries share the same text.
    pub fn filtered(&self) -> impl Iterator<Item = (usize, &Entry)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| view::matches(&entry.text, &self.search))
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Append a new entry with the trimmed text.
    ///
    /// Whitespace-only input is silently ignored and returns `None`; this is
    /// input-validation policy, not an error.
    pub fn add(&mut self, text: &str) -> Option<EntryId> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }

        let entry = Entry::new(trimmed.to_string());
        let id = entry.id;
        debug!(%id, text = trimmed, "adding entry");
        self.entries.push(entry);
        Some(id)
    }

    /// Remove and return the entry at `position`.
    ///
    /// If the removed entry was under edit, the edit session is closed in the
    /// same call, so selection state can never dangle across a delete.
    pub fn delete(&mut self, position: usize) -> Result<Entry> {
        self.check_position(position)?;
        let entry = self.entries.remove(position);

        if self.edit.as_ref().is_some_and(|s| s.id == entry.id) {
            debug!(id = %entry.id, "deleted entry was under edit, closing session");
            self.edit = None;
        }

        Ok(entry)
    }

    /// Flip the completed flag at `position`; returns the new value.
    pub fn toggle_complete(&mut self, position: usize) -> Result<bool> {
        self.check_position(position)?;
        let entry = &mut self.entries[position];
        entry.completed = !entry.completed;
        Ok(entry.completed)
    }

    /// Open an edit session for the entry at `position`, preloading the
    /// scratch buffer with its current text. Any prior session is discarded.
    pub fn start_edit(&mut self, position: usize) -> Result<()> {
        self.check_position(position)?;
        let entry = &self.entries[position];
        self.edit = Some(EditSession {
            id: entry.id,
            scratch: entry.text.clone(),
        });
        Ok(())
    }

    /// Replace the scratch buffer of the open edit session.
    pub fn set_edit_scratch(&mut self, text: &str) -> Result<()> {
        let session = self
            .edit
            .as_mut()
            .ok_or_else(|| eyre!("no edit session is active"))?;
        session.scratch = text.to_string();
        Ok(())
    }

    /// Commit the open edit session.
    ///
    /// A scratch buffer that trims to empty is refused: the method returns
    /// `false` and the session stays open, so the caller can re-prompt or
    /// cancel. Otherwise the entry's text becomes the trimmed scratch, the
    /// session closes, and the method returns `true`.
    pub fn save_edit(&mut self) -> Result<bool> {
        let session = self
            .edit
            .as_ref()
            .ok_or_else(|| eyre!("no edit session is active"))?;

        let trimmed = session.scratch.trim();
        if trimmed.is_empty() {
            debug!("refusing empty edit save, session stays open");
            return Ok(false);
        }

        let id = session.id;
        let text = trimmed.to_string();
        // delete() closes the session when its entry goes away, so the id
        // always resolves here
        let position = self
            .position_of(id)
            .ok_or_else(|| eyre!("edit session points at a missing entry"))?;

        debug!(%id, text = %text, "saving edit");
        self.entries[position].text = text;
        self.edit = None;
        Ok(true)
    }

    /// Close the open edit session without touching the entry. No-op when no
    /// session is active.
    pub fn cancel_edit(&mut self) {
        if self.edit.take().is_some() {
            debug!("edit cancelled");
        }
    }

    /// Clear the whole list, closing any open edit session with it.
    pub fn delete_all(&mut self) {
        debug!(count = self.entries.len(), "deleting all entries");
        self.entries.clear();
        self.edit = None;
    }

    /// Sort entries ascending by text, case-insensitive and numeric-aware.
    ///
    /// Refused (returns `false`, list untouched) while an edit session is
    /// open; reordering under an edit would move the edited line out from
    /// under the user. The sort is stable, so entries whose texts collate
    /// equal keep their insertion order.
    pub fn sort(&mut self) -> bool {
        if self.edit.is_some() {
            debug!("sort refused while editing");
            return false;
        }

        self.entries.sort_by(|a, b| natural_cmp(&a.text, &b.text));
        true
    }

    /// Set the search term consumed by [`ListStore::filtered`]. Never mutates
    /// the list itself.
    pub fn set_search(&mut self, term: &str) {
        self.search = term.to_string();
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn position_of(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    /// Positions come from our own derived view, so an out-of-range one is an
    /// internal bug, not a user-facing condition. Fail loudly.
    fn check_position(&self, position: usize) -> Result<()> {
        if position >= self.entries.len() {
            return Err(eyre!(
                "position {} out of range for list of {} entries",
                position,
                self.entries.len()
            ));
        }
        Ok(())
    }
}
