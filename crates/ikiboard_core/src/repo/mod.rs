//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the snapshot store contract the board service writes through to.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - A snapshot save replaces the stored board atomically.
//! - Read paths reject invalid persisted state instead of masking it.

pub mod board_repo;
