//! Comparison normalization for entry text.
//!
//! # Responsibility
//! - Derive the canonical lowercase/stripped/collapsed form of entry text
//!   used as the basis for duplicate detection.
//!
//! # Invariants
//! - `normalize_text` is pure and idempotent.
//! - Only letters, digits and single internal spaces survive.

use once_cell::sync::Lazy;
use regex::Regex;

static NON_WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\p{L}\p{N}\s]+").expect("valid non-word regex"));
static WHITESPACE_RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Normalizes text for fuzzy comparison.
///
/// Lowercases, deletes every character that is not a letter, digit or
/// whitespace, collapses whitespace runs to a single space and trims. The
/// trailing trim keeps the function idempotent when stripping punctuation
/// exposes leading or trailing whitespace.
pub fn normalize_text(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = NON_WORD_RE.replace_all(&lowered, "");
    WHITESPACE_RUN_RE
        .replace_all(&stripped, " ")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::normalize_text;

    #[test]
    fn lowercases_strips_and_collapses() {
        assert_eq!(normalize_text("i love Coding!"), "i love coding");
        assert_eq!(normalize_text("  Hello,   World!  "), "hello world");
        assert_eq!(normalize_text("cooking"), "cooking");
    }

    #[test]
    fn punctuation_only_text_normalizes_to_empty() {
        assert_eq!(normalize_text("!!!"), "");
        assert_eq!(normalize_text(" ?! . "), "");
    }

    #[test]
    fn is_idempotent() {
        for text in [
            "I love coding",
            "!! hi",
            "  spaced   out  ",
            "déjà-vu, encore!",
            "",
            "already normal",
        ] {
            let once = normalize_text(text);
            assert_eq!(normalize_text(&once), once, "not idempotent for {text:?}");
        }
    }
}
