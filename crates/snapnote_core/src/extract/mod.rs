//! Per-type field extractors.
//!
//! # Responsibility
//! - Turn classifier-stripped note text into typed structured models.
//! - Keep every extractor pure, total and line-oriented: unmatched lines
//!   degrade into the free-form remainder, never into an error.
//!
//! # Invariants
//! - Each extractor recognizes its serializer's `Label: value` lines before
//!   applying heuristics, which is what makes extract∘serialize∘extract
//!   idempotent.
//! - Heuristic priority is expressed as ordered rule lists, first match wins.

pub mod contact;
pub mod email;
pub mod event;
pub mod expense;
pub mod recipe;
pub mod reminder;
pub mod tasks;

/// Returns the value of the first matching `label:` prefix, or `None`.
///
/// Labels must carry their trailing colon and are matched case-insensitively
/// at the start of the trimmed line, in the order given (first match wins).
pub(crate) fn label_value<'a>(line: &'a str, labels: &[&str]) -> Option<&'a str> {
    let trimmed = line.trim_start();
    for label in labels {
        let matches = trimmed
            .get(..label.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(label));
        if matches {
            return Some(trimmed[label.len()..].trim());
        }
    }
    None
}

/// Case-insensitive prefix strip; returns the tail when `prefix` matches.
pub(crate) fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let matches = text
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix));
    matches.then(|| &text[prefix.len()..])
}

/// Majority-span rule: whether a match covers more than `threshold` of its
/// line. Used to decide if a detector may consume the whole line or must
/// leave it in the free-form remainder.
pub(crate) fn match_dominates(match_len: usize, line_len: usize, threshold: f64) -> bool {
    line_len > 0 && (match_len as f64) > (line_len as f64) * threshold
}

/// Joins remainder lines back into a notes/body blob.
pub(crate) fn join_remainder(lines: &[&str]) -> String {
    lines.join("\n")
}
