//! Checkbox list extraction for to-do and shopping notes.
//!
//! # Responsibility
//! - Strip list markers and checkbox state off each line.
//! - Share one grammar between to-do and shopping items.
//!
//! # Invariants
//! - Marker stripping is longest/most-specific first.
//! - Lines that are empty after stripping are dropped, not kept as empty
//!   items.

use crate::extract::strip_prefix_ignore_case;
use crate::model::structured::ParsedTask;
use once_cell::sync::Lazy;
use regex::Regex;

/// Markers that flag a line as completed, most specific first.
const CHECKED_MARKERS: &[&str] = &["[x]", "(x)", "✓", "✔", "☑"];

/// Plain list markers, longest first. The bullet forms require a trailing
/// space so "-5 degrees" is not mistaken for a list item.
const BULLET_MARKERS: &[&str] = &["[ ]", "[]", "( )", "()", "- ", "• ", "* "];

static NUMBERED_MARKER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,3}[.)]\s+").expect("valid numbered marker regex"));

/// Parses checkbox/list lines into tasks.
///
/// Every non-empty line yields at most one task; blank lines and lines that
/// are empty after marker stripping are dropped.
pub fn extract_tasks(content: &str) -> Vec<ParsedTask> {
    content
        .lines()
        .filter_map(|line| {
            let (is_completed, text) = strip_markers(line.trim());
            if text.is_empty() {
                return None;
            }
            Some(ParsedTask::new(text, is_completed))
        })
        .collect()
}

/// Strips leading markers repeatedly and reports checked state.
///
/// A checked marker anywhere in the leading marker run ("- [x] milk") marks
/// the task completed.
fn strip_markers(line: &str) -> (bool, &str) {
    let mut rest = line;
    let mut is_completed = false;

    loop {
        let mut advanced = false;

        for marker in CHECKED_MARKERS {
            if let Some(tail) = strip_prefix_ignore_case(rest, marker) {
                is_completed = true;
                rest = tail.trim_start();
                advanced = true;
                break;
            }
        }

        if !advanced {
            for marker in BULLET_MARKERS {
                if let Some(tail) = rest.strip_prefix(marker) {
                    rest = tail.trim_start();
                    advanced = true;
                    break;
                }
            }
        }

        if !advanced {
            if let Some(found) = NUMBERED_MARKER_RE.find(rest) {
                rest = &rest[found.end()..];
                advanced = true;
            }
        }

        if !advanced {
            return (is_completed, rest);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::extract_tasks;

    #[test]
    fn checkbox_state_and_label_are_recovered() {
        let tasks = extract_tasks("[x] Buy milk\n- Buy eggs");
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].text, "Buy milk");
        assert!(tasks[0].is_completed);
        assert_eq!(tasks[1].text, "Buy eggs");
        assert!(!tasks[1].is_completed);
    }

    #[test]
    fn checked_markers_are_case_insensitive_and_combine_with_bullets() {
        let tasks = extract_tasks("[X] shout\n- [x] nested\n✓ glyph done");
        assert!(tasks.iter().all(|task| task.is_completed));
        assert_eq!(tasks[1].text, "nested");
        assert_eq!(tasks[2].text, "glyph done");
    }

    #[test]
    fn numbered_and_starred_markers_are_stripped() {
        let tasks = extract_tasks("1. first\n2) second\n* third");
        let labels: Vec<&str> = tasks.iter().map(|task| task.text.as_str()).collect();
        assert_eq!(labels, vec!["first", "second", "third"]);
    }

    #[test]
    fn empty_and_marker_only_lines_are_dropped() {
        let tasks = extract_tasks("[ ]\n\n   \n- \nreal item");
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].text, "real item");
    }

    #[test]
    fn negative_number_is_not_a_bullet() {
        let tasks = extract_tasks("-5 degrees outside");
        assert_eq!(tasks[0].text, "-5 degrees outside");
        assert!(!tasks[0].is_completed);
    }
}
