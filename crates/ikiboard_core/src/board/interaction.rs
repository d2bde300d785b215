//! Drag and keyboard gestures reduced to board commands.
//!
//! # Responsibility
//! - Decide, from a completed drag, whether the board should move or copy.
//! - Map board-level key presses to commands.
//!
//! # Invariants
//! - The only signal distinguishing move from copy is whether the drop
//!   column equals the source column. Cross-column drops are never
//!   destructive.
//! - The entry being edited is not draggable.

use crate::model::entry::{ColumnKey, Entry, EntryId};

/// Where a drag ended: a column and the insertion rank within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropTarget {
    pub column: ColumnKey,
    pub position: usize,
}

/// Board command produced by a completed drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropCommand {
    /// Reorder within the source column.
    Move {
        id: EntryId,
        column: ColumnKey,
        position: usize,
    },
    /// Duplicate into another column, leaving the source in place.
    Copy {
        id: EntryId,
        column: ColumnKey,
        position: usize,
    },
}

/// Decides the command for a drag of `source` ending on `target`.
pub fn plan_drop(source: &Entry, target: DropTarget) -> DropCommand {
    if target.column == source.column {
        DropCommand::Move {
            id: source.id,
            column: target.column,
            position: target.position,
        }
    } else {
        DropCommand::Copy {
            id: source.id,
            column: target.column,
            position: target.position,
        }
    }
}

/// Returns whether a drag may start on `id`.
pub fn can_drag(id: EntryId, editing_entry_id: Option<EntryId>) -> bool {
    editing_entry_id != Some(id)
}

/// Board-level keys with command semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardKey {
    Enter,
    Escape,
    Delete,
}

/// Command resolved from a board-level key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    /// Begin editing the selected entry.
    BeginEdit(EntryId),
    /// Clear selection and edit focus.
    ClearFocus,
    /// Delete the selected entry.
    DeleteEntry(EntryId),
}

/// Maps a key press to a command given the current focus.
///
/// While an entry is being edited, board-level keys are inert; the editor
/// owns the keyboard.
pub fn key_command(
    key: BoardKey,
    selected_entry_id: Option<EntryId>,
    editing_entry_id: Option<EntryId>,
) -> Option<KeyCommand> {
    if editing_entry_id.is_some() {
        return None;
    }
    match key {
        BoardKey::Escape => Some(KeyCommand::ClearFocus),
        BoardKey::Enter => selected_entry_id.map(KeyCommand::BeginEdit),
        BoardKey::Delete => selected_entry_id.map(KeyCommand::DeleteEntry),
    }
}
