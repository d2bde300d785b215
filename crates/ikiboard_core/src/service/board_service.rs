//! Board use-case service.
//!
//! # Responsibility
//! - Wrap board state commands with write-through snapshot persistence.
//! - Restore the persisted snapshot at startup.
//! - Run the grouping engine on confirm.
//!
//! # Invariants
//! - A snapshot is written after every command that changed persistable
//!   state; invariant no-ops return `Ok(false)` without touching storage.
//! - Focus setters mutate transient state only and never write.
//! - `confirm_board` output is advisory and is never fed back into the
//!   store.

use crate::board::state::BoardState;
use crate::grouping::engine::{normalize_board, NormalizedBoard, SimilarityScorer};
use crate::model::entry::{BoardId, BoardSnapshot, ColumnKey, ColumnMap, Entry, EntryId};
use crate::repo::board_repo::{BoardSnapshotRepository, RepoResult};
use log::info;

/// Use-case facade over the board state machine and its snapshot store.
pub struct BoardService<R: BoardSnapshotRepository> {
    repo: R,
    state: BoardState,
}

impl<R: BoardSnapshotRepository> BoardService<R> {
    /// Creates a service, restoring the persisted snapshot when present.
    ///
    /// Selection and edit focus always start cleared; they are never part
    /// of a snapshot.
    pub fn new(repo: R) -> RepoResult<Self> {
        let state = match repo.load_snapshot()? {
            Some(snapshot) => {
                info!(
                    "event=board_restore module=board status=ok entries={}",
                    snapshot.columns.total_len()
                );
                BoardState {
                    columns: snapshot.columns,
                    selected_entry_id: None,
                    editing_entry_id: None,
                    board_id: snapshot.board_id,
                }
            }
            None => BoardState::seeded(),
        };
        Ok(Self { repo, state })
    }

    /// Appends a new entry at the end of `column`.
    pub fn add_entry(&mut self, column: ColumnKey, text: impl Into<String>) -> RepoResult<bool> {
        let changed = self.state.add_entry(column, text);
        self.persist_if(changed)
    }

    /// Replaces the text of the entry with `id`.
    pub fn update_entry(&mut self, id: EntryId, text: impl Into<String>) -> RepoResult<bool> {
        let changed = self.state.update_entry(id, text);
        self.persist_if(changed)
    }

    /// Removes the entry with `id`.
    pub fn delete_entry(&mut self, id: EntryId) -> RepoResult<bool> {
        let changed = self.state.delete_entry(id);
        self.persist_if(changed)
    }

    /// Relocates the entry with `id`.
    pub fn move_entry(
        &mut self,
        id: EntryId,
        target_column: ColumnKey,
        target_position: usize,
    ) -> RepoResult<bool> {
        let changed = self.state.move_entry(id, target_column, target_position);
        self.persist_if(changed)
    }

    /// Duplicates the entry with `id` into `target_column`.
    pub fn copy_entry(
        &mut self,
        id: EntryId,
        target_column: ColumnKey,
        target_position: usize,
    ) -> RepoResult<bool> {
        let changed = self.state.copy_entry(id, target_column, target_position);
        self.persist_if(changed)
    }

    /// Marks one entry as selected, or clears the selection. Transient.
    pub fn set_selected_entry(&mut self, id: Option<EntryId>) -> bool {
        self.state.set_selected_entry(id)
    }

    /// Marks one entry as being edited, or clears the edit focus. Transient.
    pub fn set_editing_entry(&mut self, id: Option<EntryId>) -> bool {
        self.state.set_editing_entry(id)
    }

    /// Records the identifier assigned by the external durable save.
    pub fn set_board_id(&mut self, id: Option<BoardId>) -> RepoResult<bool> {
        let changed = self.state.set_board_id(id);
        self.persist_if(changed)
    }

    /// Discards all entries and returns to the seeded state.
    pub fn reset_board(&mut self) -> RepoResult<bool> {
        let changed = self.state.reset_board();
        self.persist_if(changed)
    }

    /// Replaces the board wholesale from an externally supplied flat list.
    pub fn load_board(&mut self, entries: Vec<Entry>) -> RepoResult<bool> {
        let changed = self.state.load_board(entries);
        self.persist_if(changed)
    }

    /// Runs the grouping engine over the current non-blank entries.
    ///
    /// The returned view is advisory input for duplicate-aware reporting;
    /// it is not applied back to the board.
    pub fn confirm_board(&self, scorer: &dyn SimilarityScorer) -> NormalizedBoard {
        let entries = self.state.non_blank_entries();
        let normalized = normalize_board(&entries, scorer);
        info!(
            "event=board_confirm module=board status=ok entries={} groups={}",
            entries.len(),
            normalized.grouped_items.len()
        );
        normalized
    }

    /// Current per-column entry lists.
    pub fn columns(&self) -> &ColumnMap {
        &self.state.columns
    }

    /// Currently selected entry, if any.
    pub fn selected_entry_id(&self) -> Option<EntryId> {
        self.state.selected_entry_id
    }

    /// Entry currently being edited, if any.
    pub fn editing_entry_id(&self) -> Option<EntryId> {
        self.state.editing_entry_id
    }

    /// Identifier of the durably saved board, if any.
    pub fn board_id(&self) -> Option<BoardId> {
        self.state.board_id
    }

    /// Full board state, for callers that need focus alongside columns.
    pub fn state(&self) -> &BoardState {
        &self.state
    }

    fn persist_if(&self, changed: bool) -> RepoResult<bool> {
        if changed {
            self.repo.save_snapshot(&BoardSnapshot {
                columns: self.state.columns.clone(),
                board_id: self.state.board_id,
            })?;
        }
        Ok(changed)
    }
}
