//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `ikiboard_core` linkage.
//! - Walk a seed -> fill -> confirm workflow with deterministic output.

use ikiboard_core::db::open_db_in_memory;
use ikiboard_core::{BoardService, ColumnKey, DiceScorer, SqliteBoardRepository};

fn main() {
    println!("ikiboard_core version={}", ikiboard_core::core_version());

    let conn = match open_db_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("failed to open in-memory store: {err}");
            std::process::exit(1);
        }
    };
    let mut service = match BoardService::new(SqliteBoardRepository::new(&conn)) {
        Ok(service) => service,
        Err(err) => {
            eprintln!("failed to start board service: {err}");
            std::process::exit(1);
        }
    };

    let sample = [
        (ColumnKey::Love, "I love coding"),
        (ColumnKey::GoodAt, "i love Coding!"),
        (ColumnKey::Love, "cooking"),
        (ColumnKey::WorldNeeds, "teaching"),
    ];
    for (column, text) in sample {
        if let Err(err) = service.add_entry(column, text) {
            eprintln!("failed to add entry: {err}");
            std::process::exit(1);
        }
    }

    let normalized = service.confirm_board(&DiceScorer);
    println!("groups={}", normalized.grouped_items.len());
    for group in &normalized.grouped_items {
        let columns: Vec<&str> = group
            .occurrences
            .iter()
            .map(|occurrence| occurrence.column.as_str())
            .collect();
        println!(
            "canonical={:?} occurrences={} columns={}",
            group.canonical,
            group.occurrences.len(),
            columns.join(",")
        );
    }
}
