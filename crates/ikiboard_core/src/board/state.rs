//! Board state and command set.
//!
//! # Responsibility
//! - Hold the four-column board plus selection/edit focus and board identity.
//! - Apply add/update/delete/move/copy/reset/load commands with identical
//!   semantics whether driven by pointer drag, keyboard or programmatic load.
//!
//! # Invariants
//! - Positions within a column stay a contiguous `0..count` permutation.
//! - A column never exceeds `COLUMN_CAPACITY` entries.
//! - Entry IDs are unique across the whole board.
//! - Commands are silent no-ops on unknown IDs or capacity violations; they
//!   report via `bool` whether state changed so callers can decide when a
//!   snapshot write is due.

use crate::model::entry::{BoardId, ColumnKey, ColumnMap, Entry, EntryId};

/// Hard cap on entries per column.
pub const COLUMN_CAPACITY: usize = 25;

/// Blank entries seeded per column on a fresh board.
pub const SEED_ENTRIES_PER_COLUMN: usize = 5;

/// Authoritative in-memory board state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    pub columns: ColumnMap,
    pub selected_entry_id: Option<EntryId>,
    pub editing_entry_id: Option<EntryId>,
    pub board_id: Option<BoardId>,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::seeded()
    }
}

impl BoardState {
    /// Fresh board with five blank entries per column and no focus.
    pub fn seeded() -> Self {
        let mut columns = ColumnMap::default();
        for key in ColumnKey::ALL {
            let entries = columns.column_mut(key);
            for position in 0..SEED_ENTRIES_PER_COLUMN {
                entries.push(Entry::blank(key, position));
            }
        }
        Self {
            columns,
            selected_entry_id: None,
            editing_entry_id: None,
            board_id: None,
        }
    }

    /// Board rebuilt from an externally supplied flat entry list.
    ///
    /// Buckets by each entry's `column` and stable-sorts each bucket by its
    /// `position`. Positions are trusted, not renumbered; focus and board
    /// identity are untouched.
    pub fn load_board(&mut self, entries: Vec<Entry>) -> bool {
        let mut columns = ColumnMap::default();
        for entry in entries {
            columns.column_mut(entry.column).push(entry);
        }
        for key in ColumnKey::ALL {
            columns
                .column_mut(key)
                .sort_by_key(|entry| entry.position);
        }
        self.columns = columns;
        true
    }

    /// Appends a new entry at the end of `column`.
    ///
    /// No-op when the column already holds `COLUMN_CAPACITY` entries.
    pub fn add_entry(&mut self, column: ColumnKey, text: impl Into<String>) -> bool {
        let entries = self.columns.column_mut(column);
        let position = entries.len();
        if position >= COLUMN_CAPACITY {
            return false;
        }
        entries.push(Entry::new(column, position, text));
        true
    }

    /// Replaces the text of the entry with `id`, wherever it lives.
    pub fn update_entry(&mut self, id: EntryId, text: impl Into<String>) -> bool {
        let Some((column, index)) = self.columns.locate(id) else {
            return false;
        };
        self.columns.column_mut(column)[index].text = text.into();
        true
    }

    /// Removes the entry with `id` and reindexes the survivors.
    ///
    /// Clears selection/edit focus if they referenced this entry.
    pub fn delete_entry(&mut self, id: EntryId) -> bool {
        let Some((column, index)) = self.columns.locate(id) else {
            return false;
        };
        let entries = self.columns.column_mut(column);
        entries.remove(index);
        reindex(entries);
        if self.selected_entry_id == Some(id) {
            self.selected_entry_id = None;
        }
        if self.editing_entry_id == Some(id) {
            self.editing_entry_id = None;
        }
        true
    }

    /// Relocates the entry with `id` to `target_column` at `target_position`.
    ///
    /// Same column is a pure reorder. Cross column removes from the origin
    /// and inserts into the destination, reindexing both; a full destination
    /// is a no-op. Positions past the end clamp to append.
    pub fn move_entry(
        &mut self,
        id: EntryId,
        target_column: ColumnKey,
        target_position: usize,
    ) -> bool {
        let Some((source_column, source_index)) = self.columns.locate(id) else {
            return false;
        };
        if source_column != target_column
            && self.columns.column(target_column).len() >= COLUMN_CAPACITY
        {
            return false;
        }

        let source_entries = self.columns.column_mut(source_column);
        let mut entry = source_entries.remove(source_index);
        reindex(source_entries);

        entry.column = target_column;
        let target_entries = self.columns.column_mut(target_column);
        let index = target_position.min(target_entries.len());
        target_entries.insert(index, entry);
        reindex(target_entries);
        true
    }

    /// Inserts a new entry with the same text as `id` into `target_column`.
    ///
    /// The source entry and its column are untouched; the destination is
    /// reindexed. No-op when the source is unknown or the destination full.
    pub fn copy_entry(
        &mut self,
        id: EntryId,
        target_column: ColumnKey,
        target_position: usize,
    ) -> bool {
        let Some(source) = self.columns.find(id) else {
            return false;
        };
        if self.columns.column(target_column).len() >= COLUMN_CAPACITY {
            return false;
        }
        let text = source.text.clone();

        let target_entries = self.columns.column_mut(target_column);
        let index = target_position.min(target_entries.len());
        target_entries.insert(index, Entry::new(target_column, index, text));
        reindex(target_entries);
        true
    }

    /// Marks one entry as selected, or clears the selection.
    pub fn set_selected_entry(&mut self, id: Option<EntryId>) -> bool {
        if self.selected_entry_id == id {
            return false;
        }
        self.selected_entry_id = id;
        true
    }

    /// Marks one entry as being edited, or clears the edit focus.
    pub fn set_editing_entry(&mut self, id: Option<EntryId>) -> bool {
        if self.editing_entry_id == id {
            return false;
        }
        self.editing_entry_id = id;
        true
    }

    /// Records the identifier assigned by the external durable save.
    pub fn set_board_id(&mut self, id: Option<BoardId>) -> bool {
        if self.board_id == id {
            return false;
        }
        self.board_id = id;
        true
    }

    /// Discards all entries and returns to the seeded state.
    ///
    /// Clears selection, edit focus and the board identifier.
    pub fn reset_board(&mut self) -> bool {
        *self = Self::seeded();
        true
    }

    /// Flat list of all non-blank entries in display order, the input the
    /// grouping engine is invoked with on confirm.
    pub fn non_blank_entries(&self) -> Vec<Entry> {
        self.columns
            .entries()
            .filter(|entry| !entry.is_blank())
            .cloned()
            .collect()
    }
}

fn reindex(entries: &mut [Entry]) {
    for (index, entry) in entries.iter_mut().enumerate() {
        entry.position = index;
    }
}
