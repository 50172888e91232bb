//! Expense extraction.
//!
//! # Responsibility
//! - Recover amount, vendor, category and date from labeled lines or a
//!   scanned dollar amount.
//!
//! # Invariants
//! - An explicit `amount:` field always beats a scanned dollar match.
//! - A short line that is mostly a bare amount is excluded from the notes
//!   even when no field claimed it.

use crate::extract::{join_remainder, label_value, match_dominates};
use crate::model::structured::ExpenseDetails;
use once_cell::sync::Lazy;
use regex::Regex;

/// Majority-span cutoff for the bare-amount exclusion rule.
const AMOUNT_SPAN_THRESHOLD: f64 = 0.5;

/// Bare-amount lines are only dropped when shorter than this.
const BARE_AMOUNT_MAX_LINE_LEN: usize = 15;

static DOLLAR_AMOUNT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$\s*(\d+(?:[.,]\d{1,2})?)|\b(\d+\.\d{2})\b").expect("valid dollar amount regex")
});

/// Extracts expense fields from note content. Pure and total.
pub fn extract_expense(content: &str) -> ExpenseDetails {
    let mut details = ExpenseDetails::default();
    let mut notes_lines: Vec<&str> = Vec::new();
    let mut scanned_amount: Option<String> = None;

    for raw in content.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(value) = label_value(line, &["amount:"]) {
            if details.amount.is_empty() {
                details.amount = normalize_amount(value);
            }
            continue;
        }
        if let Some(value) = label_value(line, &["vendor:", "store:", "from:"]) {
            if details.vendor.is_empty() {
                details.vendor = value.to_string();
            }
            continue;
        }
        if let Some(value) = label_value(line, &["category:", "cat:"]) {
            if details.category.is_empty() {
                details.category = value.to_string();
            }
            continue;
        }
        if let Some(value) = label_value(line, &["date:"]) {
            if details.date.is_empty() {
                details.date = value.to_string();
            }
            continue;
        }

        if let Some(found) = DOLLAR_AMOUNT_RE.captures(line) {
            let matched = found.get(0).map(|m| (m.as_str(), m.len()));
            if let Some((text, span)) = matched {
                if scanned_amount.is_none() {
                    scanned_amount = Some(normalize_amount(text));
                }
                // Mostly-a-bare-amount lines never leak into the notes.
                if match_dominates(span, line.len(), AMOUNT_SPAN_THRESHOLD)
                    && line.len() < BARE_AMOUNT_MAX_LINE_LEN
                {
                    continue;
                }
            }
        }

        notes_lines.push(line);
    }

    if details.amount.is_empty() {
        if let Some(amount) = scanned_amount {
            details.amount = amount;
        }
    }

    details.notes = join_remainder(&notes_lines);
    details
}

/// Strips the currency symbol and surrounding whitespace from an amount.
///
/// A value that still fails to parse as a number is kept verbatim; amount
/// validation is the caller's concern.
fn normalize_amount(value: &str) -> String {
    value.trim().trim_start_matches('$').trim().to_string()
}
