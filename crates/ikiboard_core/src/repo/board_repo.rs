//! Board snapshot store contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist the `{columns, board_id}` subset of board state write-through.
//! - Restore the snapshot at startup when one exists.
//! - Compute the storage-side normalized text column.
//!
//! # Invariants
//! - Each save replaces all entry rows and the meta row in one transaction.
//! - Selection/edit focus never reach storage.
//! - The storage normalization is independent of and simpler than the
//!   grouping engine's (no whitespace collapsing); the two must not be
//!   treated as equivalent.

use crate::db::DbError;
use crate::model::entry::{BoardSnapshot, ColumnKey, ColumnMap, Entry};
use once_cell::sync::Lazy;
use regex::Regex;
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

static STORAGE_NON_WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s]+").expect("valid storage non-word regex"));

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for snapshot persistence and restore operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted board data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Normalized text computed by the storage layer for indexing.
///
/// Lowercase, trim, strip non-word characters. Deliberately simpler than
/// the grouping engine's normalization: internal whitespace runs survive.
pub fn storage_normalized_text(text: &str) -> String {
    let lowered = text.to_lowercase();
    STORAGE_NON_WORD_RE
        .replace_all(lowered.trim(), "")
        .into_owned()
}

/// Snapshot store the board service writes through to after every mutation.
pub trait BoardSnapshotRepository {
    fn save_snapshot(&self, snapshot: &BoardSnapshot) -> RepoResult<()>;
    fn load_snapshot(&self) -> RepoResult<Option<BoardSnapshot>>;
}

/// SQLite-backed snapshot store.
pub struct SqliteBoardRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteBoardRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl BoardSnapshotRepository for SqliteBoardRepository<'_> {
    fn save_snapshot(&self, snapshot: &BoardSnapshot) -> RepoResult<()> {
        let tx = self.conn.unchecked_transaction()?;

        tx.execute("DELETE FROM entries;", [])?;
        {
            let mut insert = tx.prepare(
                "INSERT INTO entries (uuid, column_name, position, text, normalized_text)
                 VALUES (?1, ?2, ?3, ?4, ?5);",
            )?;
            for entry in snapshot.columns.entries() {
                insert.execute(params![
                    entry.id.to_string(),
                    entry.column.as_str(),
                    entry.position as i64,
                    entry.text.as_str(),
                    storage_normalized_text(&entry.text),
                ])?;
            }
        }

        tx.execute(
            "INSERT INTO board_meta (id, board_id) VALUES (1, ?1)
             ON CONFLICT (id) DO UPDATE SET
                board_id = excluded.board_id,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![snapshot.board_id.map(|id| id.to_string())],
        )?;

        tx.commit()?;
        Ok(())
    }

    fn load_snapshot(&self) -> RepoResult<Option<BoardSnapshot>> {
        let mut meta_stmt = self
            .conn
            .prepare("SELECT board_id FROM board_meta WHERE id = 1;")?;
        let mut meta_rows = meta_stmt.query([])?;
        let Some(meta_row) = meta_rows.next()? else {
            return Ok(None);
        };
        let board_id = match meta_row.get::<_, Option<String>>("board_id")? {
            Some(text) => Some(Uuid::parse_str(&text).map_err(|_| {
                RepoError::InvalidData(format!(
                    "invalid uuid value `{text}` in board_meta.board_id"
                ))
            })?),
            None => None,
        };

        let mut stmt = self
            .conn
            .prepare("SELECT uuid, column_name, position, text FROM entries;")?;
        let mut rows = stmt.query([])?;

        let mut columns = ColumnMap::default();
        while let Some(row) = rows.next()? {
            let entry = parse_entry_row(row)?;
            columns.column_mut(entry.column).push(entry);
        }
        for key in ColumnKey::ALL {
            columns.column_mut(key).sort_by_key(|entry| entry.position);
        }

        Ok(Some(BoardSnapshot { columns, board_id }))
    }
}

fn parse_entry_row(row: &Row<'_>) -> RepoResult<Entry> {
    let uuid_text: String = row.get("uuid")?;
    let id = Uuid::parse_str(&uuid_text).map_err(|_| {
        RepoError::InvalidData(format!("invalid uuid value `{uuid_text}` in entries.uuid"))
    })?;

    let column_text: String = row.get("column_name")?;
    let column = ColumnKey::parse(&column_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid column name `{column_text}` in entries.column_name"
        ))
    })?;

    let position: i64 = row.get("position")?;
    let position = usize::try_from(position).map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid position value `{position}` in entries.position"
        ))
    })?;

    Ok(Entry {
        id,
        text: row.get("text")?,
        column,
        position,
        normalized_text: None,
    })
}
