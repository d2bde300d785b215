//! Domain model for the four-category board.
//!
//! # Responsibility
//! - Define the canonical data structures shared by the board state machine,
//!   the grouping engine and the persistence layer.
//!
//! # Invariants
//! - Every entry is identified by a stable `EntryId` assigned at creation.
//! - Column membership is expressed through the closed `ColumnKey` set.

pub mod entry;
