//! Natural-language date and 12-hour clock grammar.
//!
//! # Responsibility
//! - Resolve date words ("today", "tomorrow", "next week", weekday names)
//!   and explicit date formats against a caller-supplied reference date.
//! - Extract a time of day and convert it to 24-hour form.
//!
//! # Invariants
//! - "12am" maps to hour 0 and "12pm" stays hour 12; the conversion is the
//!   explicit 12-hour rule, not modulo arithmetic.
//! - Canonical output forms are ISO `YYYY-MM-DD` and 24-hour `HH:MM`.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use once_cell::sync::Lazy;
use regex::Regex;

static ISO_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{4})-(\d{2})-(\d{2})\b").expect("valid iso date regex"));
static SLASH_DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(\d{1,2})/(\d{1,2})(?:/(\d{2,4}))?\b").expect("valid slash date regex")
});
static CLOCK_TIME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(\d{1,2}):(\d{2})\s*(am|pm)?\b").expect("valid clock time regex")
});
static HOUR_TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(\d{1,2})\s*(am|pm)\b").expect("valid hour time regex"));
static DATE_WORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(today|tonight|tomorrow|next week|monday|tuesday|wednesday|thursday|friday|saturday|sunday)\b",
    )
    .expect("valid date word regex")
});

/// A date match found inside free text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateMatch {
    pub date: NaiveDate,
    /// Byte span of the matched phrase in the input.
    pub start: usize,
    pub end: usize,
}

/// A time-of-day match found inside free text, already in 24-hour form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeMatch {
    pub hour: u32,
    pub minute: u32,
    pub start: usize,
    pub end: usize,
}

impl TimeMatch {
    /// Canonical 24-hour `HH:MM` form.
    pub fn canonical(&self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }
}

/// Finds the first resolvable date in `text`, relative to `reference`.
///
/// Explicit forms (ISO, `M/D` and `M/D/Y`) are tried before natural-language
/// words so a serialized canonical date never re-resolves differently.
pub fn find_date(text: &str, reference: NaiveDate) -> Option<DateMatch> {
    if let Some(captures) = ISO_DATE_RE.captures(text) {
        let matched = captures.get(0)?;
        let year = captures.get(1)?.as_str().parse().ok()?;
        let month = captures.get(2)?.as_str().parse().ok()?;
        let day = captures.get(3)?.as_str().parse().ok()?;
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            return Some(DateMatch {
                date,
                start: matched.start(),
                end: matched.end(),
            });
        }
    }

    if let Some(captures) = SLASH_DATE_RE.captures(text) {
        let matched = captures.get(0)?;
        let month: u32 = captures.get(1)?.as_str().parse().ok()?;
        let day: u32 = captures.get(2)?.as_str().parse().ok()?;
        let year = match captures.get(3) {
            Some(capture) => {
                let raw: i32 = capture.as_str().parse().ok()?;
                if raw < 100 {
                    raw + 2000
                } else {
                    raw
                }
            }
            None => reference.year(),
        };
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            return Some(DateMatch {
                date,
                start: matched.start(),
                end: matched.end(),
            });
        }
    }

    let captures = DATE_WORD_RE.captures(text)?;
    let matched = captures.get(0)?;
    let word = matched.as_str().to_ascii_lowercase();
    let date = match word.as_str() {
        "today" | "tonight" => reference,
        "tomorrow" => reference + Duration::days(1),
        "next week" => reference + Duration::days(7),
        weekday => next_weekday(reference, parse_weekday(weekday)?),
    };
    Some(DateMatch {
        date,
        start: matched.start(),
        end: matched.end(),
    })
}

/// Finds the first time of day in `text`.
///
/// Tries `H:MM am/pm` before bare `H am/pm`; a bare `H:MM` with no marker is
/// taken as already 24-hour, which is the canonical serialized form.
pub fn find_time(text: &str) -> Option<TimeMatch> {
    if let Some(captures) = CLOCK_TIME_RE.captures(text) {
        let matched = captures.get(0)?;
        let hour: u32 = captures.get(1)?.as_str().parse().ok()?;
        let minute: u32 = captures.get(2)?.as_str().parse().ok()?;
        let marker = captures.get(3).map(|m| m.as_str());
        let hour = to_24_hour(hour, marker);
        if hour <= 23 && minute <= 59 {
            return Some(TimeMatch {
                hour,
                minute,
                start: matched.start(),
                end: matched.end(),
            });
        }
    }

    let captures = HOUR_TIME_RE.captures(text)?;
    let matched = captures.get(0)?;
    let hour: u32 = captures.get(1)?.as_str().parse().ok()?;
    let hour = to_24_hour(hour, captures.get(2).map(|m| m.as_str()));
    if hour > 23 {
        return None;
    }
    Some(TimeMatch {
        hour,
        minute: 0,
        start: matched.start(),
        end: matched.end(),
    })
}

/// 12-hour to 24-hour conversion.
///
/// "pm" promotes hours 1-11 by twelve and "am" maps 12 to 0; every other
/// combination passes through unchanged. 12am/12pm are not off-by-twelve
/// mirrors of each other, so this stays a pair of explicit rules.
fn to_24_hour(hour: u32, marker: Option<&str>) -> u32 {
    match marker.map(str::to_ascii_lowercase).as_deref() {
        Some("pm") if (1..=11).contains(&hour) => hour + 12,
        Some("am") if hour == 12 => 0,
        _ => hour,
    }
}

fn parse_weekday(word: &str) -> Option<Weekday> {
    match word {
        "monday" => Some(Weekday::Mon),
        "tuesday" => Some(Weekday::Tue),
        "wednesday" => Some(Weekday::Wed),
        "thursday" => Some(Weekday::Thu),
        "friday" => Some(Weekday::Fri),
        "saturday" => Some(Weekday::Sat),
        "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}

/// Next occurrence of `weekday` strictly after `reference`.
fn next_weekday(reference: NaiveDate, weekday: Weekday) -> NaiveDate {
    let mut date = reference + Duration::days(1);
    while date.weekday() != weekday {
        date += Duration::days(1);
    }
    date
}

#[cfg(test)]
mod tests {
    use super::{find_date, find_time};
    use chrono::NaiveDate;

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).expect("valid reference date")
    }

    #[test]
    fn twelve_hour_edge_cases() {
        assert_eq!(find_time("12am").map(|t| t.hour), Some(0));
        assert_eq!(find_time("12pm").map(|t| t.hour), Some(12));
        assert_eq!(find_time("9am").map(|t| t.hour), Some(9));
        assert_eq!(find_time("9pm").map(|t| t.hour), Some(21));
    }

    #[test]
    fn clock_time_beats_bare_hour_and_keeps_minutes() {
        let hit = find_time("meet at 3:45 pm sharp").expect("time should match");
        assert_eq!((hit.hour, hit.minute), (15, 45));
        assert_eq!(hit.canonical(), "15:45");
    }

    #[test]
    fn bare_24_hour_clock_passes_through() {
        let hit = find_time("15:00").expect("canonical form should match");
        assert_eq!((hit.hour, hit.minute), (15, 0));
    }

    #[test]
    fn natural_words_resolve_against_reference() {
        let base = reference();
        assert_eq!(find_date("today", base).map(|d| d.date), Some(base));
        assert_eq!(
            find_date("see you tomorrow", base).map(|d| d.date.to_string()),
            Some("2024-03-16".to_string())
        );
        assert_eq!(
            find_date("next week", base).map(|d| d.date.to_string()),
            Some("2024-03-22".to_string())
        );
        // 2024-03-15 is a Friday; the next Friday is a week out.
        assert_eq!(
            find_date("friday", base).map(|d| d.date.to_string()),
            Some("2024-03-22".to_string())
        );
    }

    #[test]
    fn explicit_dates_win_over_words() {
        let hit = find_date("tomorrow or 2024-05-01", reference()).expect("date should match");
        assert_eq!(hit.date.to_string(), "2024-05-01");
        let slash = find_date("on 4/2 maybe", reference()).expect("date should match");
        assert_eq!(slash.date.to_string(), "2024-04-02");
    }

    #[test]
    fn garbage_yields_none() {
        assert_eq!(find_date("no date here", reference()), None);
        assert_eq!(find_time("no time here"), None);
    }
}
