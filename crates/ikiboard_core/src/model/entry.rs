//! Entry and column domain model.
//!
//! # Responsibility
//! - Define the board entry record and the fixed four-column map.
//! - Provide constructor helpers for blank and text-bearing entries.
//!
//! # Invariants
//! - `id` is stable and never reused for another entry.
//! - `normalized_text` is populated only by the grouping engine; the board
//!   state machine leaves it `None`.
//! - Column iteration order is fixed: love, good_at, paid_for, world_needs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a board entry.
pub type EntryId = Uuid;

/// Identifier assigned once a board has been durably saved externally.
pub type BoardId = Uuid;

/// The four fixed board categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKey {
    /// What you love.
    Love,
    /// What you are good at.
    GoodAt,
    /// What you can be paid for.
    PaidFor,
    /// What the world needs.
    WorldNeeds,
}

impl ColumnKey {
    /// All columns in display order.
    pub const ALL: [ColumnKey; 4] = [
        ColumnKey::Love,
        ColumnKey::GoodAt,
        ColumnKey::PaidFor,
        ColumnKey::WorldNeeds,
    ];

    /// Stable storage/wire name for this column.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Love => "love",
            Self::GoodAt => "good_at",
            Self::PaidFor => "paid_for",
            Self::WorldNeeds => "world_needs",
        }
    }

    /// Parses a storage/wire name back into a column key.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "love" => Some(Self::Love),
            "good_at" => Some(Self::GoodAt),
            "paid_for" => Some(Self::PaidFor),
            "world_needs" => Some(Self::WorldNeeds),
            _ => None,
        }
    }
}

/// A single board item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Stable global ID assigned at creation.
    pub id: EntryId,
    /// Free-form user text. Length bounds are enforced by the caller-side
    /// validator, not here.
    pub text: String,
    /// Column this entry currently belongs to.
    pub column: ColumnKey,
    /// Zero-based rank within the column.
    pub position: usize,
    /// Present only after the entry has passed through the grouping engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normalized_text: Option<String>,
}

impl Entry {
    /// Creates an entry with a generated stable ID and the given text.
    pub fn new(column: ColumnKey, position: usize, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            column,
            position,
            normalized_text: None,
        }
    }

    /// Creates a blank entry, used for the seeded board.
    pub fn blank(column: ColumnKey, position: usize) -> Self {
        Self::new(column, position, "")
    }

    /// Returns whether this entry holds no user text.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Ordered entry lists for each of the four columns.
///
/// The typed rendition of a `column -> entries` record; field names are the
/// stable column names so the serialized layout matches the persisted one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMap {
    pub love: Vec<Entry>,
    pub good_at: Vec<Entry>,
    pub paid_for: Vec<Entry>,
    pub world_needs: Vec<Entry>,
}

impl ColumnMap {
    /// Borrows one column's entry list.
    pub fn column(&self, key: ColumnKey) -> &Vec<Entry> {
        match key {
            ColumnKey::Love => &self.love,
            ColumnKey::GoodAt => &self.good_at,
            ColumnKey::PaidFor => &self.paid_for,
            ColumnKey::WorldNeeds => &self.world_needs,
        }
    }

    /// Mutably borrows one column's entry list.
    pub fn column_mut(&mut self, key: ColumnKey) -> &mut Vec<Entry> {
        match key {
            ColumnKey::Love => &mut self.love,
            ColumnKey::GoodAt => &mut self.good_at,
            ColumnKey::PaidFor => &mut self.paid_for,
            ColumnKey::WorldNeeds => &mut self.world_needs,
        }
    }

    /// Iterates columns in display order.
    pub fn iter(&self) -> impl Iterator<Item = (ColumnKey, &Vec<Entry>)> {
        ColumnKey::ALL.into_iter().map(move |key| (key, self.column(key)))
    }

    /// Iterates every entry in flat display order (column order, then rank).
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.iter().flat_map(|(_, entries)| entries.iter())
    }

    /// Total entry count across all columns.
    pub fn total_len(&self) -> usize {
        self.iter().map(|(_, entries)| entries.len()).sum()
    }

    /// Finds an entry by ID, wherever it lives.
    pub fn find(&self, id: EntryId) -> Option<&Entry> {
        self.entries().find(|entry| entry.id == id)
    }

    /// Locates an entry by ID, returning its column and index in that column.
    pub fn locate(&self, id: EntryId) -> Option<(ColumnKey, usize)> {
        for (key, entries) in self.iter() {
            if let Some(index) = entries.iter().position(|entry| entry.id == id) {
                return Some((key, index));
            }
        }
        None
    }
}

/// The persisted subset of board state: columns and the durable-save ID.
///
/// Selection and edit focus are transient and never part of a snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub columns: ColumnMap,
    pub board_id: Option<BoardId>,
}

#[cfg(test)]
mod tests {
    use super::{ColumnKey, Entry};

    #[test]
    fn column_keys_roundtrip_through_storage_names() {
        for key in ColumnKey::ALL {
            assert_eq!(ColumnKey::parse(key.as_str()), Some(key));
        }
        assert_eq!(ColumnKey::parse("earn"), None);
    }

    #[test]
    fn blank_entries_are_blank_even_with_whitespace() {
        let mut entry = Entry::blank(ColumnKey::Love, 0);
        assert!(entry.is_blank());
        entry.text = "   ".to_string();
        assert!(entry.is_blank());
        entry.text = "surfing".to_string();
        assert!(!entry.is_blank());
    }
}
