//! Core domain logic for IkiBoard.
//! This crate is the single source of truth for board invariants.

pub mod board;
pub mod db;
pub mod grouping;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use board::interaction::{
    can_drag, key_command, plan_drop, BoardKey, DropCommand, DropTarget, KeyCommand,
};
pub use board::state::{BoardState, COLUMN_CAPACITY, SEED_ENTRIES_PER_COLUMN};
pub use grouping::engine::{
    normalize_board, DiceScorer, GroupOccurrence, NormalizedBoard, NormalizedGroup,
    SimilarityScorer, FUZZY_DISSIMILARITY_THRESHOLD,
};
pub use grouping::normalize::normalize_text;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::entry::{BoardId, BoardSnapshot, ColumnKey, ColumnMap, Entry, EntryId};
pub use repo::board_repo::{
    storage_normalized_text, BoardSnapshotRepository, RepoError, RepoResult,
    SqliteBoardRepository,
};
pub use service::board_service::BoardService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
