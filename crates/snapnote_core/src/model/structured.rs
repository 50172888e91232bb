//! Per-type structured models.
//!
//! # Responsibility
//! - Hold the typed fields each extractor produces for one note type.
//! - Provide derived projections (`display_name`, `initials`, scaling).
//!
//! # Invariants
//! - Every model is a transient view over canonical note text; the text is
//!   the source of truth and models are rebuilt on each load.
//! - When `ParsedIngredient::quantity` is set, `display_quantity` is a
//!   non-empty string that parses back to within 0.05 of the quantity.

use crate::format::quantity::format_quantity;
use serde::{Deserialize, Serialize};

/// One checkbox line from a to-do or shopping note.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedTask {
    pub text: String,
    pub is_completed: bool,
}

impl ParsedTask {
    pub fn new(text: impl Into<String>, is_completed: bool) -> Self {
        Self {
            text: text.into(),
            is_completed,
        }
    }
}

/// Contact fields recovered from free-form text.
///
/// Absent fields stay empty strings rather than failing extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedContact {
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub job_title: String,
    pub phone: String,
    pub email: String,
    pub website: String,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub notes: String,
}

impl ParsedContact {
    /// First and last name joined by a space; empty parts dropped.
    pub fn display_name(&self) -> String {
        let mut parts = Vec::new();
        if !self.first_name.is_empty() {
            parts.push(self.first_name.as_str());
        }
        if !self.last_name.is_empty() {
            parts.push(self.last_name.as_str());
        }
        parts.join(" ")
    }

    /// Uppercase initials of first and last name.
    pub fn initials(&self) -> String {
        [&self.first_name, &self.last_name]
            .iter()
            .filter_map(|name| name.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// One ingredient line, decomposed into quantity and name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedIngredient {
    /// The ingredient line exactly as it appeared in the note.
    pub original_text: String,
    pub quantity: Option<f64>,
    /// Human-friendly quantity (fraction glyphs), set iff `quantity` is.
    pub display_quantity: Option<String>,
    pub name: String,
}

impl ParsedIngredient {
    /// Rescales the numeric quantity and re-derives the display string.
    ///
    /// The display string is never edited in place; it is always re-formatted
    /// from the scaled number so repeated scale/unscale stays stable.
    pub fn scale(&mut self, multiplier: f64) {
        if let Some(quantity) = self.quantity {
            let scaled = quantity * multiplier;
            self.quantity = Some(scaled);
            self.display_quantity = Some(format_quantity(scaled));
        }
    }
}

/// Recipe fields recovered by the section-scanning extractor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedRecipe {
    pub title: String,
    pub servings: String,
    pub prep_time: String,
    pub cook_time: String,
    pub ingredients: Vec<ParsedIngredient>,
    pub steps: Vec<String>,
}

impl ParsedRecipe {
    /// Scales every measurable ingredient by `multiplier`.
    pub fn scale(&mut self, multiplier: f64) {
        for ingredient in &mut self.ingredients {
            ingredient.scale(multiplier);
        }
    }
}

/// Calendar event / meeting fields.
///
/// `date` is canonical ISO (`YYYY-MM-DD`) when resolvable, `time` is
/// canonical 24-hour `HH:MM`; both stay empty when absent (all-day events
/// have a date and no time).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingDetails {
    pub subject: String,
    pub location: String,
    pub date: String,
    pub time: String,
    pub notes: String,
    pub attendees: Vec<String>,
}

/// Expense fields.
///
/// `amount` is a decimal string without currency symbol; a non-numeric value
/// is kept verbatim and surfaced to the caller rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseDetails {
    pub amount: String,
    pub vendor: String,
    pub category: String,
    pub date: String,
    pub notes: String,
}

/// Reminder fields; date/time reuse the event grammar's canonical forms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderDetails {
    pub text: String,
    pub date: String,
    pub time: String,
    pub notes: String,
}

/// Email draft header fields plus body.
///
/// Recipient lists are comma-joined strings, normalized to `a, b` spacing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailDraft {
    pub to: String,
    pub cc: String,
    pub bcc: String,
    pub subject: String,
    pub body: String,
}

/// The structured model for one note, tagged by extraction shape.
///
/// `Tasks` backs both to-do and shopping notes; `Plain` backs idea and
/// general notes, which carry no structured fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StructuredNote {
    Tasks { items: Vec<ParsedTask> },
    Contact(ParsedContact),
    Recipe(ParsedRecipe),
    Event(MeetingDetails),
    Expense(ExpenseDetails),
    Reminder(ReminderDetails),
    Email(EmailDraft),
    Plain { text: String },
}

#[cfg(test)]
mod tests {
    use super::{ParsedContact, ParsedIngredient};

    #[test]
    fn display_name_drops_empty_parts() {
        let mut contact = ParsedContact::default();
        contact.first_name = "Ada".to_string();
        assert_eq!(contact.display_name(), "Ada");
        contact.last_name = "Lovelace".to_string();
        assert_eq!(contact.display_name(), "Ada Lovelace");
        assert_eq!(contact.initials(), "AL");
    }

    #[test]
    fn scaling_rewrites_display_from_number_not_string() {
        let mut ingredient = ParsedIngredient {
            original_text: "1 cup milk".to_string(),
            quantity: Some(1.0),
            display_quantity: Some("1".to_string()),
            name: "cup milk".to_string(),
        };
        ingredient.scale(1.5);
        assert_eq!(ingredient.quantity, Some(1.5));
        assert_eq!(ingredient.display_quantity.as_deref(), Some("1½"));
        ingredient.scale(1.0 / 1.5);
        let back = ingredient.quantity.expect("quantity survives scaling");
        assert!((back - 1.0).abs() < 0.005);
        assert_eq!(ingredient.display_quantity.as_deref(), Some("1"));
    }
}
