//! Board state machine and interaction decisions.
//!
//! # Responsibility
//! - Own the authoritative in-memory board and its command set.
//! - Reduce drag/keyboard gestures to board commands.
//!
//! # Invariants
//! - Per column, positions are a contiguous `0..count` permutation after
//!   every command.
//! - No column exceeds [`state::COLUMN_CAPACITY`] entries.

pub mod interaction;
pub mod state;
