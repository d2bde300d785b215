use ikiboard_core::{
    normalize_board, normalize_text, ColumnKey, DiceScorer, Entry, NormalizedBoard,
};
use std::collections::HashSet;

fn entry(column: ColumnKey, position: usize, text: &str) -> Entry {
    Entry::new(column, position, text)
}

fn placed_ids(board: &NormalizedBoard) -> Vec<uuid::Uuid> {
    board.columns.entries().map(|entry| entry.id).collect()
}

#[test]
fn normalize_is_idempotent_on_user_text() {
    for text in ["I love coding", "i love Coding!", "  COOKING!!  ", "déjà vu"] {
        let once = normalize_text(text);
        assert_eq!(normalize_text(&once), once);
    }
}

#[test]
fn case_and_punctuation_variants_form_one_group_across_columns() {
    let entries = vec![
        entry(ColumnKey::Love, 0, "I love coding"),
        entry(ColumnKey::Love, 1, "cooking"),
        entry(ColumnKey::GoodAt, 0, "i love Coding!"),
    ];

    let board = normalize_board(&entries, &DiceScorer);

    let multi: Vec<_> = board
        .grouped_items
        .iter()
        .filter(|group| group.occurrences.len() > 1)
        .collect();
    assert_eq!(multi.len(), 1);
    let group = multi[0];
    assert_eq!(group.canonical, "i love coding");
    assert_eq!(group.occurrences.len(), 2);
    let columns: HashSet<_> = group
        .occurrences
        .iter()
        .map(|occurrence| occurrence.column)
        .collect();
    assert_eq!(
        columns,
        HashSet::from([ColumnKey::Love, ColumnKey::GoodAt]),
        "the cluster must span both columns"
    );
    // Original user text is preserved on occurrences.
    let originals: HashSet<_> = group
        .occurrences
        .iter()
        .map(|occurrence| occurrence.original.as_str())
        .collect();
    assert_eq!(originals, HashSet::from(["I love coding", "i love Coding!"]));

    // "cooking" stays a singleton.
    let singles: Vec<_> = board
        .grouped_items
        .iter()
        .filter(|group| group.occurrences.len() == 1)
        .collect();
    assert_eq!(singles.len(), 1);
    assert_eq!(singles[0].canonical, "cooking");

    // Reassembled love column: the grouped entry ahead of the singleton.
    let love = board.columns.column(ColumnKey::Love);
    assert_eq!(love[0].text, "I love coding");
    assert_eq!(love[1].text, "cooking");
}

#[test]
fn occurrence_totals_cover_every_input_entry() {
    let entries = vec![
        entry(ColumnKey::Love, 0, "hiking"),
        entry(ColumnKey::Love, 1, "hikingg"),
        entry(ColumnKey::GoodAt, 0, "carpentry"),
        entry(ColumnKey::PaidFor, 0, "carpentry!"),
        entry(ColumnKey::WorldNeeds, 0, "clean water"),
    ];

    let board = normalize_board(&entries, &DiceScorer);

    let total_occurrences: usize = board
        .grouped_items
        .iter()
        .map(|group| group.occurrences.len())
        .sum();
    assert_eq!(total_occurrences, entries.len());
}

#[test]
fn every_entry_is_placed_exactly_once_with_normalized_text() {
    let entries = vec![
        entry(ColumnKey::Love, 0, "reading"),
        entry(ColumnKey::GoodAt, 0, "reading!"),
        entry(ColumnKey::GoodAt, 1, "welding"),
        entry(ColumnKey::PaidFor, 0, "plumbing"),
    ];

    let board = normalize_board(&entries, &DiceScorer);

    let placed = placed_ids(&board);
    let unique: HashSet<_> = placed.iter().copied().collect();
    assert_eq!(placed.len(), entries.len());
    assert_eq!(unique.len(), entries.len());
    for output in board.columns.entries() {
        assert_eq!(
            output.normalized_text.as_deref(),
            Some(normalize_text(&output.text).as_str())
        );
    }
}

#[test]
fn reassembled_columns_are_sorted_by_original_position() {
    // "guitar" is clustered (echoed across columns), "archery" is not; both
    // keep their original ranks in the output column.
    let entries = vec![
        entry(ColumnKey::Love, 0, "archery"),
        entry(ColumnKey::Love, 1, "guitar"),
        entry(ColumnKey::GoodAt, 0, "guitar!"),
    ];

    let board = normalize_board(&entries, &DiceScorer);

    let love = board.columns.column(ColumnKey::Love);
    let positions: Vec<_> = love.iter().map(|entry| entry.position).collect();
    assert_eq!(positions, [0, 1]);
    assert_eq!(love[0].text, "archery");
    assert_eq!(love[1].text, "guitar");
}

#[test]
fn grouped_entries_win_position_ties_against_singles() {
    // Two love entries share position 0 (the engine trusts input positions).
    // The clustered one is appended first, so the stable position sort keeps
    // it ahead of the singleton.
    let clustered = entry(ColumnKey::Love, 0, "reading");
    let single = entry(ColumnKey::Love, 0, "gardening");
    let echo = entry(ColumnKey::GoodAt, 0, "reading");
    let entries = vec![single.clone(), clustered.clone(), echo];

    let board = normalize_board(&entries, &DiceScorer);

    let love = board.columns.column(ColumnKey::Love);
    assert_eq!(love.len(), 2);
    assert_eq!(love[0].id, clustered.id);
    assert_eq!(love[1].id, single.id);
}

#[test]
fn typo_variants_cluster_in_the_same_column() {
    let entries = vec![
        entry(ColumnKey::GoodAt, 0, "swimming"),
        entry(ColumnKey::GoodAt, 1, "swiming"),
    ];

    let board = normalize_board(&entries, &DiceScorer);

    assert_eq!(board.grouped_items.len(), 1);
    assert_eq!(board.grouped_items[0].occurrences.len(), 2);
}

#[test]
fn unrelated_text_stays_in_separate_groups() {
    let entries = vec![
        entry(ColumnKey::Love, 0, "cooking"),
        entry(ColumnKey::Love, 1, "i love coding"),
    ];

    let board = normalize_board(&entries, &DiceScorer);

    assert_eq!(board.grouped_items.len(), 2);
    assert!(board
        .grouped_items
        .iter()
        .all(|group| group.occurrences.len() == 1));
}

// Two entries whose text normalizes to the empty string each form their own
// singleton (an empty query matches nothing), and both resolve to the same
// ledger key: the later one overwrites the earlier slot. The reassembled
// columns still hold both entries.
#[test]
fn anchor_collision_overwrites_ledger_slot() {
    let first = entry(ColumnKey::Love, 0, "!!!");
    let second = entry(ColumnKey::GoodAt, 0, "???");
    let entries = vec![first.clone(), second.clone()];

    let board = normalize_board(&entries, &DiceScorer);

    assert_eq!(board.grouped_items.len(), 1);
    let group = &board.grouped_items[0];
    assert_eq!(group.canonical, "");
    assert_eq!(group.occurrences.len(), 1);
    assert_eq!(group.occurrences[0].id, second.id);

    // Column placement is unaffected by the ledger overwrite.
    let placed = placed_ids(&board);
    assert_eq!(placed.len(), 2);
    assert!(board.columns.column(ColumnKey::Love).iter().any(|e| e.id == first.id));
    assert!(board
        .columns
        .column(ColumnKey::GoodAt)
        .iter()
        .any(|e| e.id == second.id));
}

#[test]
fn empty_input_produces_an_empty_board() {
    let board = normalize_board(&[], &DiceScorer);
    assert!(board.grouped_items.is_empty());
    assert_eq!(board.columns.total_len(), 0);
}

#[test]
fn same_column_duplicates_count_as_a_multi_group() {
    // A duplicate inside one column is promoted just like a cross-column
    // echo, even though it spans a single column.
    let entries = vec![
        entry(ColumnKey::PaidFor, 0, "illustration"),
        entry(ColumnKey::PaidFor, 1, "Illustration"),
    ];

    let board = normalize_board(&entries, &DiceScorer);

    assert_eq!(board.grouped_items.len(), 1);
    assert_eq!(board.grouped_items[0].occurrences.len(), 2);
    assert_eq!(board.columns.column(ColumnKey::PaidFor).len(), 2);
}
