//! Round-trip serialization of structured models back to canonical text.
//!
//! # Responsibility
//! - Re-emit the trigger tag, one canonical line per populated field in the
//!   extractor's priority order, then the free-form remainder verbatim.
//!
//! # Invariants
//! - Empty fields are omitted, except the event `When:` line which always
//!   appears (all-day events get an "(all day)" suffix instead of a time).
//! - Re-running the matching extractor on serialized output reproduces the
//!   structured state field-for-field.

use crate::extract::event::ALL_DAY_MARKER;
use crate::extract::recipe::parse_ingredient;
use crate::model::note::NoteType;
use crate::model::structured::{
    EmailDraft, ExpenseDetails, MeetingDetails, ParsedContact, ParsedIngredient, ParsedRecipe,
    ParsedTask, ReminderDetails, StructuredNote,
};

/// Serializes a structured model to canonical note text.
///
/// `note_type` decides the trigger tag; the model decides the field lines.
pub fn serialize_note(note_type: NoteType, model: &StructuredNote) -> String {
    let mut lines: Vec<String> = Vec::new();
    if let Some(tag) = note_type.tag() {
        lines.push(tag.to_string());
    }

    match model {
        StructuredNote::Tasks { items } => push_tasks(&mut lines, items),
        StructuredNote::Contact(contact) => push_contact(&mut lines, contact),
        StructuredNote::Recipe(recipe) => push_recipe(&mut lines, recipe),
        StructuredNote::Event(details) => push_event(&mut lines, details),
        StructuredNote::Expense(details) => push_expense(&mut lines, details),
        StructuredNote::Reminder(details) => push_reminder(&mut lines, details),
        StructuredNote::Email(draft) => push_email(&mut lines, draft),
        StructuredNote::Plain { text } => {
            if !text.is_empty() {
                lines.push(text.clone());
            }
        }
    }

    lines.join("\n")
}

fn push_tasks(lines: &mut Vec<String>, items: &[ParsedTask]) {
    for task in items {
        if task.text.is_empty() {
            continue;
        }
        let marker = if task.is_completed { "[x]" } else { "[ ]" };
        lines.push(format!("{marker} {}", task.text));
    }
}

fn push_contact(lines: &mut Vec<String>, contact: &ParsedContact) {
    let name = contact.display_name();
    if !name.is_empty() {
        lines.push(name);
    }
    push_field(lines, "Title", &contact.job_title);
    push_field(lines, "Company", &contact.company);
    push_field(lines, "Phone", &contact.phone);
    push_field(lines, "Email", &contact.email);
    push_field(lines, "Website", &contact.website);
    push_field(lines, "Address", &contact.street_address);
    if !contact.city.is_empty() && !contact.state.is_empty() && !contact.zip_code.is_empty() {
        lines.push(format!(
            "{}, {} {}",
            contact.city, contact.state, contact.zip_code
        ));
    }
    push_remainder(lines, &contact.notes);
}

fn push_recipe(lines: &mut Vec<String>, recipe: &ParsedRecipe) {
    if !recipe.title.is_empty() {
        lines.push(recipe.title.clone());
    }
    push_field(lines, "Servings", &recipe.servings);
    push_field(lines, "Prep time", &recipe.prep_time);
    push_field(lines, "Cook time", &recipe.cook_time);

    if !recipe.ingredients.is_empty() {
        lines.push(String::new());
        lines.push("Ingredients:".to_string());
        for ingredient in &recipe.ingredients {
            lines.push(ingredient_line(ingredient));
        }
    }

    if !recipe.steps.is_empty() {
        lines.push(String::new());
        lines.push("Instructions:".to_string());
        for (index, step) in recipe.steps.iter().enumerate() {
            lines.push(format!("{}. {step}", index + 1));
        }
    }
}

/// Canonical line for one ingredient.
///
/// An unedited ingredient re-emits its original line verbatim so repeated
/// load/save cycles never rewrite it; an edited one is rebuilt from the
/// display quantity and name, which becomes the new original on next load.
fn ingredient_line(ingredient: &ParsedIngredient) -> String {
    if parse_ingredient(&ingredient.original_text) == *ingredient {
        return ingredient.original_text.clone();
    }
    match (&ingredient.display_quantity, ingredient.name.is_empty()) {
        (Some(display), false) => format!("{display} {}", ingredient.name),
        (Some(display), true) => display.clone(),
        (None, _) => ingredient.name.clone(),
    }
}

fn push_event(lines: &mut Vec<String>, details: &MeetingDetails) {
    push_field(lines, "What", &details.subject);
    push_field(lines, "Where", &details.location);

    // When: is the one unconditional field; all-day events keep a marker in
    // place of the time.
    let when = match (details.date.is_empty(), details.time.is_empty()) {
        (false, false) => format!("{} {}", details.date, details.time),
        (false, true) => format!("{} {ALL_DAY_MARKER}", details.date),
        (true, false) => details.time.clone(),
        (true, true) => ALL_DAY_MARKER.to_string(),
    };
    lines.push(format!("When: {when}"));

    if !details.attendees.is_empty() {
        lines.push(format!("Attendees: {}", details.attendees.join(", ")));
    }
    push_remainder(lines, &details.notes);
}

fn push_expense(lines: &mut Vec<String>, details: &ExpenseDetails) {
    if !details.amount.is_empty() {
        lines.push(format!("Amount: ${}", details.amount));
    }
    push_field(lines, "Vendor", &details.vendor);
    push_field(lines, "Category", &details.category);
    push_field(lines, "Date", &details.date);
    push_remainder(lines, &details.notes);
}

fn push_reminder(lines: &mut Vec<String>, details: &ReminderDetails) {
    if !details.text.is_empty() {
        lines.push(details.text.clone());
    }
    push_field(lines, "Date", &details.date);
    push_field(lines, "Time", &details.time);
    push_remainder(lines, &details.notes);
}

fn push_email(lines: &mut Vec<String>, draft: &EmailDraft) {
    push_field(lines, "To", &draft.to);
    push_field(lines, "Cc", &draft.cc);
    push_field(lines, "Bcc", &draft.bcc);
    push_field(lines, "Subject", &draft.subject);
    push_remainder(lines, &draft.body);
}

fn push_field(lines: &mut Vec<String>, label: &str, value: &str) {
    if !value.is_empty() {
        lines.push(format!("{label}: {value}"));
    }
}

/// Appends the free-form remainder after a single blank separator line.
fn push_remainder(lines: &mut Vec<String>, remainder: &str) {
    if remainder.is_empty() {
        return;
    }
    if !lines.is_empty() {
        lines.push(String::new());
    }
    lines.push(remainder.to_string());
}
