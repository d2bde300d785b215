//! Duplicate detection over board entries.
//!
//! # Responsibility
//! - Normalize entry text for comparison.
//! - Cluster near-duplicate entries within and across columns and surface
//!   clustered entries ahead of singles.
//!
//! # Invariants
//! - The engine is a pure batch function: it reads its input snapshot and
//!   allocates new output, never touching board state.

pub mod engine;
pub mod normalize;
