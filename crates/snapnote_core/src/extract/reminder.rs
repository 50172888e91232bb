//! Reminder extraction.
//!
//! # Responsibility
//! - Recover the reminder text plus an optional date and time.
//! - Reuse the shared date/time grammar for "tomorrow at 5pm" phrases.
//!
//! # Invariants
//! - The lead line, stripped of "remind me to"-style prefixes and of the
//!   matched when-phrase, is the reminder text.
//! - Date and time are stored canonically, like events.
//! - Lines after a blank separator are notes; they never become the lead
//!   text, even when the lead line reduced to nothing.

use crate::extract::{join_remainder, label_value, strip_prefix_ignore_case};
use crate::format::datetime::{find_date, find_time};
use crate::model::structured::ReminderDetails;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

/// Lead-line prefixes, most specific first.
const LEAD_PREFIXES: &[&str] = &[
    "remind me to",
    "remind me",
    "remember to",
    "reminder:",
    "reminder",
];

static CONNECTOR_TAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\s*\b(?:on|at|by)\s*$").expect("valid connector tail regex"));
static WHITESPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s{2,}").expect("valid whitespace regex"));

/// Extracts reminder fields from note content.
///
/// `reference` is the note's creation date. Pure and total.
pub fn extract_reminder(content: &str, reference: NaiveDate) -> ReminderDetails {
    let mut details = ReminderDetails::default();
    let mut notes_lines: Vec<&str> = Vec::new();
    let mut saw_text = false;
    let mut past_separator = false;
    let mut saw_content = false;

    for raw in content.lines() {
        let line = raw.trim();
        if line.is_empty() {
            if saw_content {
                past_separator = true;
            }
            continue;
        }
        saw_content = true;

        if let Some(value) = label_value(line, &["date:", "on:"]) {
            if details.date.is_empty() {
                if let Some(found) = find_date(value, reference) {
                    details.date = found.date.format("%Y-%m-%d").to_string();
                } else {
                    details.date = value.to_string();
                }
            }
            continue;
        }
        if let Some(value) = label_value(line, &["time:", "at:"]) {
            if details.time.is_empty() {
                if let Some(found) = find_time(value) {
                    details.time = found.canonical();
                }
            }
            continue;
        }

        if !saw_text && !past_separator {
            details.text = lead_text(&mut details, line, reference);
            saw_text = true;
            continue;
        }

        notes_lines.push(line);
    }

    details.notes = join_remainder(&notes_lines);
    details
}

/// Strips reminder prefixes and in-line when-phrases off the lead line,
/// filling empty date/time fields from what was removed.
fn lead_text(details: &mut ReminderDetails, line: &str, reference: NaiveDate) -> String {
    let mut text = line.to_string();

    for prefix in LEAD_PREFIXES {
        if let Some(tail) = strip_prefix_ignore_case(&text, prefix) {
            text = tail.trim_start().to_string();
            break;
        }
    }

    if let Some(found) = find_time(&text) {
        if details.time.is_empty() {
            details.time = found.canonical();
        }
        text.replace_range(found.start..found.end, " ");
    }
    if let Some(found) = find_date(&text, reference) {
        if details.date.is_empty() {
            details.date = found.date.format("%Y-%m-%d").to_string();
        }
        text.replace_range(found.start..found.end, " ");
    }

    let collapsed = WHITESPACE_RE.replace_all(text.trim(), " ").to_string();
    CONNECTOR_TAIL_RE.replace(&collapsed, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::extract_reminder;
    use chrono::NaiveDate;

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).expect("valid reference date")
    }

    #[test]
    fn lead_line_prefix_and_when_phrase_are_stripped() {
        let details = extract_reminder("Remind me to call mom tomorrow at 5pm", reference());
        assert_eq!(details.text, "call mom");
        assert_eq!(details.date, "2024-03-16");
        assert_eq!(details.time, "17:00");
    }

    #[test]
    fn labeled_date_and_time_lines_fill_fields() {
        let details = extract_reminder(
            "water the plants\nDate: 2024-03-20\nTime: 08:30\nback porch first",
            reference(),
        );
        assert_eq!(details.text, "water the plants");
        assert_eq!(details.date, "2024-03-20");
        assert_eq!(details.time, "08:30");
        assert_eq!(details.notes, "back porch first");
    }

    #[test]
    fn plain_text_reminder_keeps_everything_as_text() {
        let details = extract_reminder("renew passport", reference());
        assert_eq!(details.text, "renew passport");
        assert!(details.date.is_empty());
        assert!(details.time.is_empty());
    }

    #[test]
    fn notes_after_a_blank_separator_never_become_the_text() {
        let details = extract_reminder("Date: 2024-03-16\nTime: 17:00\n\nbuy cake", reference());
        assert_eq!(details.text, "");
        assert_eq!(details.date, "2024-03-16");
        assert_eq!(details.time, "17:00");
        assert_eq!(details.notes, "buy cake");
    }

    #[test]
    fn unresolvable_labeled_date_is_kept_raw() {
        let details = extract_reminder("pay rent\nOn: the first of the month", reference());
        assert_eq!(details.date, "the first of the month");
    }
}
