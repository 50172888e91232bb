//! Event/meeting extraction.
//!
//! # Responsibility
//! - Recover subject, location, date, time and attendees from labeled lines
//!   or loose phrases.
//! - Resolve natural-language dates against the note's creation date.
//!
//! # Invariants
//! - Labeled prefixes win; absent those, the first non-empty line is the
//!   subject.
//! - Date and time are stored canonically (`YYYY-MM-DD`, 24-hour `HH:MM`) so
//!   a serialized note re-extracts to the same state.

use crate::extract::{join_remainder, label_value};
use crate::format::datetime::{find_date, find_time};
use crate::model::structured::MeetingDetails;
use chrono::NaiveDate;

/// Marker the serializer uses in `When:` lines for events without a time.
pub(crate) const ALL_DAY_MARKER: &str = "(all day)";

/// Lines at most this long that are purely date/time phrases are consumed
/// instead of being kept in the notes.
const CONSUMABLE_WHEN_LINE_LEN: usize = 25;

/// Extracts meeting details from note content.
///
/// `reference` is the note's creation date; "tomorrow" and friends resolve
/// against it. Pure and total.
pub fn extract_event(content: &str, reference: NaiveDate) -> MeetingDetails {
    let mut details = MeetingDetails::default();
    let mut notes_lines: Vec<&str> = Vec::new();
    let mut saw_subject = false;

    for raw in content.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(value) = label_value(line, &["what:", "title:"]) {
            // A label with an empty value claims nothing; the next unlabeled
            // line can still become the subject.
            if !value.is_empty() && details.subject.is_empty() {
                details.subject = value.to_string();
                saw_subject = true;
            }
            continue;
        }
        if let Some(value) = label_value(line, &["where:", "location:", "at:"]) {
            if details.location.is_empty() {
                details.location = value.to_string();
            }
            continue;
        }
        if let Some(value) = label_value(line, &["when:", "date:"]) {
            claim_date_time(&mut details, value, reference, true);
            continue;
        }
        if let Some(value) = label_value(line, &["time:"]) {
            if details.time.is_empty() {
                if let Some(time) = find_time(value) {
                    details.time = time.canonical();
                }
            }
            continue;
        }
        if let Some(value) = label_value(line, &["attendees:", "with:", "who:"]) {
            if details.attendees.is_empty() {
                details.attendees = split_attendees(value);
            }
            continue;
        }

        if !saw_subject && details.subject.is_empty() {
            details.subject = line.to_string();
            saw_subject = true;
            continue;
        }

        // Loose date/time phrases still fill empty slots; short lines that
        // are nothing but a when-phrase are consumed outright.
        let claimed = claim_date_time(&mut details, line, reference, false);
        if claimed && line.len() <= CONSUMABLE_WHEN_LINE_LEN {
            continue;
        }

        notes_lines.push(line);
    }

    details.notes = join_remainder(&notes_lines);
    details
}

/// Fills empty date/time fields from `text`. Returns whether anything in the
/// text looked like a when-phrase at all.
fn claim_date_time(
    details: &mut MeetingDetails,
    text: &str,
    reference: NaiveDate,
    from_label: bool,
) -> bool {
    let cleaned = text.replace(ALL_DAY_MARKER, " ");
    let mut claimed = false;

    if let Some(found) = find_date(&cleaned, reference) {
        if details.date.is_empty() {
            details.date = found.date.format("%Y-%m-%d").to_string();
        }
        claimed = true;
    }
    if let Some(found) = find_time(&cleaned) {
        if details.time.is_empty() {
            details.time = found.canonical();
        }
        claimed = true;
    }

    // A labeled `When:` with content that resolved to nothing keeps the raw
    // value as the date so user text is never dropped.
    if from_label && !claimed && details.date.is_empty() {
        let leftover = cleaned.trim();
        if !leftover.is_empty() {
            details.date = leftover.to_string();
            claimed = true;
        }
    }

    claimed
}

/// Splits an attendee list on commas and "and".
pub(crate) fn split_attendees(value: &str) -> Vec<String> {
    value
        .split(',')
        .flat_map(|chunk| chunk.split(" and "))
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{extract_event, split_attendees};
    use chrono::NaiveDate;

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).expect("valid reference date")
    }

    #[test]
    fn labeled_lines_take_priority() {
        let details = extract_event(
            "What: Design review\nWhere: Room 4\nWhen: tomorrow 2:30pm\nBring mockups",
            reference(),
        );
        assert_eq!(details.subject, "Design review");
        assert_eq!(details.location, "Room 4");
        assert_eq!(details.date, "2024-03-16");
        assert_eq!(details.time, "14:30");
        assert_eq!(details.notes, "Bring mockups");
    }

    #[test]
    fn first_line_becomes_subject_without_labels() {
        let details = extract_event("Dentist appointment\ntomorrow at 9am", reference());
        assert_eq!(details.subject, "Dentist appointment");
        assert_eq!(details.date, "2024-03-16");
        assert_eq!(details.time, "09:00");
        assert!(details.notes.is_empty());
    }

    #[test]
    fn long_when_phrase_lines_stay_in_notes() {
        let details = extract_event(
            "Standup\nWe moved the recurring sync to 9am until further notice",
            reference(),
        );
        assert_eq!(details.time, "09:00");
        assert!(details.notes.contains("further notice"));
    }

    #[test]
    fn attendees_split_on_comma_and_and() {
        assert_eq!(split_attendees("Alice, Bob and Carol"), vec!["Alice", "Bob", "Carol"]);
        let details = extract_event("Sync\nWith: Alice, Bob", reference());
        assert_eq!(details.attendees, vec!["Alice", "Bob"]);
    }

    #[test]
    fn all_day_marker_is_not_a_date() {
        let details = extract_event("Offsite\nWhen: 2024-04-01 (all day)", reference());
        assert_eq!(details.date, "2024-04-01");
        assert!(details.time.is_empty());
        let empty = extract_event("Offsite\nWhen: (all day)", reference());
        assert!(empty.date.is_empty());
        assert!(empty.time.is_empty());
    }

    #[test]
    fn empty_what_label_does_not_block_the_subject() {
        let details = extract_event("What:\nBring snacks", reference());
        assert_eq!(details.subject, "Bring snacks");
        assert!(details.notes.is_empty());
    }

    #[test]
    fn unresolvable_when_value_is_kept_raw() {
        let details = extract_event("Party\nWhen: whenever Steve lands", reference());
        assert_eq!(details.date, "whenever Steve lands");
    }
}
