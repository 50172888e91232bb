//! One note-open/edit/save cycle over canonical text.
//!
//! # Responsibility
//! - Resolve the effective note type (trigger tag > caller hint > general).
//! - Hold the freshly extracted structured model and its classification.
//! - Serialize edited state back to canonical text on commit.
//!
//! # Invariants
//! - The structured model is rebuilt from content on every `open`; nothing
//!   is cached across sessions and the canonical text stays the source of
//!   truth.
//! - A manual classification passed in by the caller wins over the trigger
//!   tag and is never reverted here.

use crate::classify::trigger::extract_trigger_tag;
use crate::extract::{contact, email, event, expense, recipe, reminder, tasks};
use crate::model::note::{Classification, NoteType};
use crate::model::structured::StructuredNote;
use crate::serialize::serialize_note;
use chrono::NaiveDate;
use log::debug;

/// A transient view over one note's canonical text.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteSession {
    classification: Classification,
    model: StructuredNote,
    cleaned_content: String,
    opened_on: NaiveDate,
}

impl NoteSession {
    /// Opens a session over `content`.
    ///
    /// `hint` is the classification the caller already holds for this note,
    /// if any; a manual hint is honored unconditionally, otherwise a trigger
    /// tag wins, then the hint, then `General`. `opened_on` anchors
    /// natural-language date resolution.
    pub fn open(content: &str, hint: Option<Classification>, opened_on: NaiveDate) -> Self {
        let tag = extract_trigger_tag(content);
        let cleaned_content = tag
            .as_ref()
            .map(|t| t.cleaned_content.clone())
            .unwrap_or_else(|| content.to_string());

        let classification = match (hint, &tag) {
            (Some(hint), _) if hint.is_manual() => hint,
            (_, Some(tag)) => Classification::automatic(tag.note_type, Some(1.0)),
            (Some(hint), None) => hint,
            (None, None) => Classification::automatic(NoteType::General, None),
        };

        let model = extract_for(classification.note_type, &cleaned_content, opened_on);
        debug!(
            "event=session_open type={} method={:?} tagged={}",
            classification.note_type.as_str(),
            classification.method,
            tag.is_some()
        );

        Self {
            classification,
            model,
            cleaned_content,
            opened_on,
        }
    }

    pub fn note_type(&self) -> NoteType {
        self.classification.note_type
    }

    pub fn classification(&self) -> &Classification {
        &self.classification
    }

    /// The extracted structured model, for display.
    pub fn model(&self) -> &StructuredNote {
        &self.model
    }

    /// Mutable access for field edits between open and commit.
    pub fn model_mut(&mut self) -> &mut StructuredNote {
        &mut self.model
    }

    /// Applies an automatic re-classification and re-extracts.
    ///
    /// Refused (returns `false`) when the current classification is manual.
    pub fn reclassify(&mut self, note_type: NoteType, confidence: Option<f32>) -> bool {
        if !self.classification.reclassify(note_type, confidence) {
            return false;
        }
        self.model = extract_for(note_type, &self.cleaned_content, self.opened_on);
        true
    }

    /// Records an explicit user type override and re-extracts.
    pub fn set_manual_type(&mut self, note_type: NoteType) {
        self.classification.set_manual_override(note_type);
        self.model = extract_for(note_type, &self.cleaned_content, self.opened_on);
        debug!("event=manual_override type={}", note_type.as_str());
    }

    /// Serializes the current structured state back to canonical text.
    pub fn commit(&self) -> String {
        serialize_note(self.classification.note_type, &self.model)
    }
}

/// Dispatches to the extractor matching `note_type`.
pub fn extract_for(note_type: NoteType, content: &str, reference: NaiveDate) -> StructuredNote {
    match note_type {
        NoteType::Todo | NoteType::Shopping => StructuredNote::Tasks {
            items: tasks::extract_tasks(content),
        },
        NoteType::Contact => StructuredNote::Contact(contact::extract_contact(content)),
        NoteType::Recipe => StructuredNote::Recipe(recipe::extract_recipe(content)),
        NoteType::Event => StructuredNote::Event(event::extract_event(content, reference)),
        NoteType::Expense => StructuredNote::Expense(expense::extract_expense(content)),
        NoteType::Reminder => {
            StructuredNote::Reminder(reminder::extract_reminder(content, reference))
        }
        NoteType::Email => StructuredNote::Email(email::extract_email(content)),
        NoteType::Idea | NoteType::General => StructuredNote::Plain {
            text: content.to_string(),
        },
    }
}
