//! Fuzzy clustering and board reassembly.
//!
//! # Responsibility
//! - Cluster entries whose normalized text is near-duplicate, within and
//!   across columns.
//! - Reassemble per-column views with clustered entries promoted ahead of
//!   singles.
//!
//! # Invariants
//! - Clusters are disjoint and cover every input entry, so every entry
//!   appears exactly once in the reassembled columns.
//! - The group ledger is keyed by the anchor's normalized text; a later
//!   identical key overwrites the earlier ledger slot in place. Column
//!   reassembly works from the formed clusters and is unaffected.
//! - Within any output column, entries are ordered by original `position`.

use crate::grouping::normalize::normalize_text;
use crate::model::entry::{ColumnKey, ColumnMap, Entry, EntryId};
use std::collections::{HashMap, HashSet};

/// Maximum dissimilarity for two entries to share a cluster
/// (0 = identical, 1 = unrelated).
pub const FUZZY_DISSIMILARITY_THRESHOLD: f64 = 0.3;

/// Narrow seam for the approximate string match, so the algorithm behind
/// clustering is swappable.
pub trait SimilarityScorer {
    /// Dissimilarity of two normalized strings in `[0, 1]`.
    ///
    /// Identical strings must score 0 and unrelated strings must approach 1;
    /// small edits must land under [`FUZZY_DISSIMILARITY_THRESHOLD`].
    fn dissimilarity(&self, a: &str, b: &str) -> f64;
}

/// Bigram-set (Sørensen–Dice) scorer.
///
/// Whitespace-insensitive and token-aware: transposed or slightly misspelled
/// words keep most bigrams in common. Empty text matches nothing, mirroring
/// the behavior of an index queried with an empty pattern.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiceScorer;

impl SimilarityScorer for DiceScorer {
    fn dissimilarity(&self, a: &str, b: &str) -> f64 {
        if a.trim().is_empty() || b.trim().is_empty() {
            return 1.0;
        }
        1.0 - strsim::sorensen_dice(a, b)
    }
}

/// One entry folded into a cluster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupOccurrence {
    pub id: EntryId,
    pub column: ColumnKey,
    /// The entry text as the user wrote it.
    pub original: String,
}

/// A cluster of near-duplicate entries, represented by one normalized
/// anchor string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedGroup {
    pub canonical: String,
    pub occurrences: Vec<GroupOccurrence>,
}

/// Output of one grouping run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedBoard {
    /// Group ledger keyed by anchor normalized text (later identical anchors
    /// overwrite earlier slots).
    pub grouped_items: Vec<NormalizedGroup>,
    /// Every input entry exactly once, annotated with its normalized text,
    /// clustered entries promoted, each column sorted by original position.
    pub columns: ColumnMap,
}

/// Clusters `entries` by fuzzy-matched normalized text and reassembles the
/// per-column view.
///
/// Entries are processed in input order. Each not-yet-processed entry
/// anchors a query for all not-yet-processed entries (itself included)
/// within [`FUZZY_DISSIMILARITY_THRESHOLD`] of its normalized text; more
/// than one match forms a multi group, otherwise the anchor forms a
/// singleton. The input is assumed well-formed and non-blank; blank-entry
/// filtering is the caller's concern.
pub fn normalize_board(entries: &[Entry], scorer: &dyn SimilarityScorer) -> NormalizedBoard {
    let annotated: Vec<Entry> = entries
        .iter()
        .map(|entry| {
            let mut entry = entry.clone();
            entry.normalized_text = Some(normalize_text(&entry.text));
            entry
        })
        .collect();
    let norms: Vec<&str> = annotated
        .iter()
        .map(|entry| entry.normalized_text.as_deref().unwrap_or(""))
        .collect();

    let mut processed: HashSet<EntryId> = HashSet::new();
    let mut clusters: Vec<Vec<usize>> = Vec::new();
    let mut grouped_items: Vec<NormalizedGroup> = Vec::new();
    let mut ledger_index: HashMap<String, usize> = HashMap::new();

    for (anchor, entry) in annotated.iter().enumerate() {
        if processed.contains(&entry.id) {
            continue;
        }

        let mut members: Vec<usize> = (0..annotated.len())
            .filter(|&candidate| {
                !processed.contains(&annotated[candidate].id)
                    && scorer.dissimilarity(norms[anchor], norms[candidate])
                        < FUZZY_DISSIMILARITY_THRESHOLD
            })
            .collect();
        if members.len() <= 1 {
            members = vec![anchor];
        }
        for &member in &members {
            processed.insert(annotated[member].id);
        }

        let group = NormalizedGroup {
            canonical: norms[anchor].to_string(),
            occurrences: members
                .iter()
                .map(|&member| GroupOccurrence {
                    id: annotated[member].id,
                    column: annotated[member].column,
                    original: annotated[member].text.clone(),
                })
                .collect(),
        };
        match ledger_index.get(&group.canonical).copied() {
            Some(slot) => grouped_items[slot] = group,
            None => {
                ledger_index.insert(group.canonical.clone(), grouped_items.len());
                grouped_items.push(group);
            }
        }
        clusters.push(members);
    }

    let mut columns = ColumnMap::default();
    let is_multi = |cluster: &[usize]| {
        cluster.len() > 1
            || cluster
                .iter()
                .map(|&member| annotated[member].column)
                .collect::<HashSet<_>>()
                .len()
                > 1
    };
    for cluster in clusters.iter().filter(|cluster| is_multi(cluster)) {
        for &member in cluster {
            let entry = &annotated[member];
            columns.column_mut(entry.column).push(entry.clone());
        }
    }
    for cluster in clusters.iter().filter(|cluster| !is_multi(cluster)) {
        for &member in cluster {
            let entry = &annotated[member];
            columns.column_mut(entry.column).push(entry.clone());
        }
    }
    for key in ColumnKey::ALL {
        columns.column_mut(key).sort_by_key(|entry| entry.position);
    }

    NormalizedBoard {
        grouped_items,
        columns,
    }
}

#[cfg(test)]
mod tests {
    use super::{DiceScorer, SimilarityScorer, FUZZY_DISSIMILARITY_THRESHOLD};

    #[test]
    fn identical_text_scores_zero() {
        assert_eq!(DiceScorer.dissimilarity("i love coding", "i love coding"), 0.0);
    }

    #[test]
    fn unrelated_text_scores_near_one() {
        assert!(DiceScorer.dissimilarity("xyz", "quartet") > 0.9);
    }

    #[test]
    fn small_typos_land_under_threshold() {
        assert!(DiceScorer.dissimilarity("cooking", "coooking") < FUZZY_DISSIMILARITY_THRESHOLD);
        assert!(DiceScorer.dissimilarity("swimming", "swiming") < FUZZY_DISSIMILARITY_THRESHOLD);
    }

    #[test]
    fn empty_text_matches_nothing() {
        assert_eq!(DiceScorer.dissimilarity("", ""), 1.0);
        assert_eq!(DiceScorer.dissimilarity("", "cooking"), 1.0);
    }
}
