//! Contact extraction from free-form text.
//!
//! # Responsibility
//! - Detect phone, email, website and address material per line.
//! - Assign name/company/title from the remaining unmatched lines.
//!
//! # Invariants
//! - A detector consumes its line only when the match spans more than
//!   `DETECTOR_SPAN_THRESHOLD` of it; a phone number buried in a sentence
//!   stays in the notes.
//! - Labeled lines win over detectors, detectors win over positional rules.
//! - Lines after a blank separator go straight to the notes; positional
//!   name/company/title claiming only applies to the leading block.

use crate::extract::{join_remainder, label_value, match_dominates};
use crate::model::structured::ParsedContact;
use once_cell::sync::Lazy;
use regex::Regex;

/// Majority-span cutoff shared by the phone/email/website detectors.
const DETECTOR_SPAN_THRESHOLD: f64 = 0.5;

static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\+?\d{1,2}[\s.-]?)?\(?\d{3}\)?[\s.-]?\d{3}[\s.-]?\d{4}")
        .expect("valid phone regex")
});
static MAILTO_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)mailto:([A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,})")
        .expect("valid mailto regex")
});
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").expect("valid email regex")
});
static WEBSITE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:https?://|www\.)\S+").expect("valid website regex")
});
static CITY_STATE_ZIP_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z][A-Za-z .'-]*?),\s*([A-Za-z]{2})\s+(\d{5}(?:-\d{4})?)$")
        .expect("valid city/state/zip regex")
});
static STREET_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^\d+\s+\S.*\b(street|st|avenue|ave|road|rd|boulevard|blvd|lane|ln|drive|dr|court|ct|place|pl|way|terrace|circle)\b\.?$",
    )
    .expect("valid street regex")
});

const ORG_KEYWORDS: &[&str] = &[
    "inc", "llc", "corp", "corporation", "ltd", "co", "company", "group", "studio", "agency",
    "associates", "partners", "consulting",
];

const TITLE_KEYWORDS: &[&str] = &[
    "manager", "director", "engineer", "designer", "developer", "president", "ceo", "cto", "cfo",
    "founder", "consultant", "analyst", "specialist", "coordinator", "lead",
];

/// Extracts contact fields from note content.
///
/// Pure and total: anything the rules cannot claim ends up in `notes`.
pub fn extract_contact(content: &str) -> ParsedContact {
    let mut contact = ParsedContact::default();
    let mut leading: Vec<&str> = Vec::new();
    let mut trailing: Vec<&str> = Vec::new();
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
        if claim_labeled_line(&mut contact, line) {
            continue;
        }
        if claim_detected_line(&mut contact, line) {
            continue;
        }
        if past_separator {
            trailing.push(line);
        } else {
            leading.push(line);
        }
    }

    assign_positional_fields(&mut contact, &leading, &trailing);
    contact
}

fn claim_labeled_line(contact: &mut ParsedContact, line: &str) -> bool {
    if let Some(value) = label_value(line, &["name:"]) {
        if contact.first_name.is_empty() {
            set_name(contact, value);
        }
        return true;
    }
    if let Some(value) = label_value(line, &["phone:", "tel:", "mobile:", "cell:"]) {
        assign_if_empty(&mut contact.phone, value);
        return true;
    }
    if let Some(value) = label_value(line, &["email:"]) {
        assign_if_empty(&mut contact.email, value);
        return true;
    }
    if let Some(value) = label_value(line, &["company:", "org:"]) {
        assign_if_empty(&mut contact.company, value);
        return true;
    }
    if let Some(value) = label_value(line, &["title:", "job:"]) {
        assign_if_empty(&mut contact.job_title, value);
        return true;
    }
    if let Some(value) = label_value(line, &["website:", "web:"]) {
        assign_if_empty(&mut contact.website, value);
        return true;
    }
    if let Some(value) = label_value(line, &["address:"]) {
        assign_if_empty(&mut contact.street_address, value);
        return true;
    }
    false
}

/// Runs the per-line detectors; returns whether the line was consumed.
///
/// Phone and email both run before any positional assignment, and each
/// consumes its line only under the majority-span rule.
fn claim_detected_line(contact: &mut ParsedContact, line: &str) -> bool {
    if contact.phone.is_empty() {
        if let Some(found) = PHONE_RE.find(line) {
            if match_dominates(found.len(), line.len(), DETECTOR_SPAN_THRESHOLD) {
                contact.phone = found.as_str().trim().to_string();
                return true;
            }
        }
    }

    if contact.email.is_empty() {
        // Address-link shape first, raw address regex as fallback.
        let hit = MAILTO_RE
            .captures(line)
            .and_then(|captures| captures.get(1).map(|m| (m.as_str(), captures.get(0))))
            .and_then(|(address, full)| full.map(|f| (address, f.len())))
            .or_else(|| EMAIL_RE.find(line).map(|m| (m.as_str(), m.len())));
        if let Some((address, span)) = hit {
            if match_dominates(span, line.len(), DETECTOR_SPAN_THRESHOLD) {
                contact.email = address.to_string();
                return true;
            }
        }
    }

    if contact.website.is_empty() {
        if let Some(found) = WEBSITE_RE.find(line) {
            if match_dominates(found.len(), line.len(), DETECTOR_SPAN_THRESHOLD) {
                contact.website = found.as_str().to_string();
                return true;
            }
        }
    }

    if contact.city.is_empty() {
        if let Some(captures) = CITY_STATE_ZIP_RE.captures(line) {
            contact.city = captures[1].trim().to_string();
            contact.state = captures[2].to_ascii_uppercase();
            contact.zip_code = captures[3].to_string();
            return true;
        }
    }

    if contact.street_address.is_empty() && STREET_RE.is_match(line) {
        contact.street_address = line.to_string();
        return true;
    }

    false
}

/// Assigns name, company and job title from the leftover leading lines.
///
/// The first leading line is the name; the line right after it becomes the
/// company when it carries an organizational keyword or is clean of digits
/// and `@`; a line carrying a job-title keyword claims the title slot.
/// `trailing` lines sat past the blank separator and are notes verbatim.
fn assign_positional_fields(contact: &mut ParsedContact, leading: &[&str], trailing: &[&str]) {
    let mut notes_lines: Vec<&str> = Vec::new();
    let mut name_index = None;

    for (index, line) in leading.iter().enumerate() {
        // A name or bare company line carries no digits or address material.
        let clean_of_contact_data =
            !line.contains(|c: char| c.is_ascii_digit()) && !line.contains('@');

        if contact.first_name.is_empty() && name_index.is_none() && clean_of_contact_data {
            set_name(contact, line);
            name_index = Some(index);
            continue;
        }

        let follows_name = name_index.map(|n| index == n + 1).unwrap_or(index == 0);
        if contact.job_title.is_empty() && contains_keyword(line, TITLE_KEYWORDS) {
            contact.job_title = line.to_string();
            continue;
        }
        if contact.company.is_empty()
            && (contains_keyword(line, ORG_KEYWORDS) || (follows_name && clean_of_contact_data))
        {
            contact.company = line.to_string();
            continue;
        }

        notes_lines.push(line);
    }

    notes_lines.extend_from_slice(trailing);
    contact.notes = join_remainder(&notes_lines);
}

fn set_name(contact: &mut ParsedContact, value: &str) {
    match value.split_once(char::is_whitespace) {
        Some((first, last)) => {
            contact.first_name = first.to_string();
            contact.last_name = last.trim().to_string();
        }
        None => contact.first_name = value.to_string(),
    }
}

fn assign_if_empty(field: &mut String, value: &str) {
    if field.is_empty() && !value.is_empty() {
        *field = value.to_string();
    }
}

fn contains_keyword(line: &str, keywords: &[&str]) -> bool {
    line.split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .any(|word| {
            let lowered = word.to_ascii_lowercase();
            keywords.contains(&lowered.as_str())
        })
}
