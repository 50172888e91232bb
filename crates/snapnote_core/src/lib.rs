//! Classification-and-extraction core for SnapNote.
//!
//! Turns OCR/transcription-noisy note text into typed structured models
//! (to-do lists, contacts, recipes, events, expenses, reminders, email
//! drafts) and serializes edited models back to canonical text. The text is
//! always the source of truth; extraction and serialization round-trip.

pub mod classify;
pub mod extract;
pub mod format;
pub mod logging;
pub mod model;
pub mod serialize;
pub mod service;

pub use classify::trigger::{extract_trigger_tag, TriggerTag};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{Classification, ClassificationMethod, NoteType};
pub use model::structured::{
    EmailDraft, ExpenseDetails, MeetingDetails, ParsedContact, ParsedIngredient, ParsedRecipe,
    ParsedTask, ReminderDetails, StructuredNote,
};
pub use serialize::serialize_note;
pub use service::note_session::{extract_for, NoteSession};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
