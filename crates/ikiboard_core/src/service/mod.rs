//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate board commands with write-through snapshot persistence.
//! - Keep callers decoupled from storage details.

pub mod board_service;
