//! Note-type vocabulary and classification metadata.
//!
//! # Responsibility
//! - Map between structured note types, trigger tags and wire strings.
//! - Track how the active type was chosen (automatic vs. manual override).
//!
//! # Invariants
//! - `ClassificationMethod::Manual` is sticky: once a user overrides the
//!   type, automatic re-classification is refused.
//! - Automatic confidence, when present, is clamped to `[0, 1]`.

use serde::{Deserialize, Serialize};

/// Structured note types supported by the extraction pipeline.
///
/// `Todo` and `Shopping` share the checkbox grammar; `Idea` and `General`
/// carry no structured fields beyond their free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteType {
    Todo,
    Shopping,
    Contact,
    Recipe,
    Event,
    Expense,
    Reminder,
    Email,
    Idea,
    General,
}

impl NoteType {
    /// Returns the canonical trigger tag for this type, or `None` for
    /// `General`, which is the untagged default.
    pub fn tag(self) -> Option<&'static str> {
        match self {
            Self::Todo => Some("#todo#"),
            Self::Shopping => Some("#shopping#"),
            Self::Contact => Some("#contact#"),
            Self::Recipe => Some("#recipe#"),
            Self::Event => Some("#event#"),
            Self::Expense => Some("#expense#"),
            Self::Reminder => Some("#reminder#"),
            Self::Email => Some("#email#"),
            Self::Idea => Some("#idea#"),
            Self::General => None,
        }
    }

    /// Resolves a trigger tag token to a note type.
    ///
    /// Matching is case-insensitive to tolerate OCR casing noise; `#meeting#`
    /// is accepted as an alias for `#event#`.
    pub fn from_tag(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "#todo#" | "#todos#" => Some(Self::Todo),
            "#shopping#" | "#grocery#" => Some(Self::Shopping),
            "#contact#" => Some(Self::Contact),
            "#recipe#" => Some(Self::Recipe),
            "#event#" | "#meeting#" => Some(Self::Event),
            "#expense#" => Some(Self::Expense),
            "#reminder#" => Some(Self::Reminder),
            "#email#" => Some(Self::Email),
            "#idea#" => Some(Self::Idea),
            _ => None,
        }
    }

    /// Stable lowercase name used at the UI/persistence boundary.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::Shopping => "shopping",
            Self::Contact => "contact",
            Self::Recipe => "recipe",
            Self::Event => "event",
            Self::Expense => "expense",
            Self::Reminder => "reminder",
            Self::Email => "email",
            Self::Idea => "idea",
            Self::General => "general",
        }
    }
}

/// How the active note type was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationMethod {
    /// Chosen by upstream heuristics or a trigger tag.
    Automatic,
    /// Explicitly chosen by the user; never reverted automatically.
    Manual,
}

/// Classification state carried alongside extracted data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub note_type: NoteType,
    pub method: ClassificationMethod,
    /// Automatic confidence in `[0, 1]`; `None` when the upstream classifier
    /// did not report one. Always `None` for manual classifications.
    pub confidence: Option<f32>,
}

impl Classification {
    /// Creates an automatic classification, clamping confidence to `[0, 1]`.
    pub fn automatic(note_type: NoteType, confidence: Option<f32>) -> Self {
        Self {
            note_type,
            method: ClassificationMethod::Automatic,
            confidence: confidence.map(|value| value.clamp(0.0, 1.0)),
        }
    }

    /// Creates a manual classification from an explicit user choice.
    pub fn manual(note_type: NoteType) -> Self {
        Self {
            note_type,
            method: ClassificationMethod::Manual,
            confidence: None,
        }
    }

    pub fn is_manual(&self) -> bool {
        self.method == ClassificationMethod::Manual
    }

    /// Applies an automatic re-classification.
    ///
    /// Returns `false` without changing anything when the current
    /// classification is manual: a user override is permanent.
    pub fn reclassify(&mut self, note_type: NoteType, confidence: Option<f32>) -> bool {
        if self.is_manual() {
            return false;
        }
        *self = Self::automatic(note_type, confidence);
        true
    }

    /// Records an explicit user override. Marks the classification manual
    /// from this point on.
    pub fn set_manual_override(&mut self, note_type: NoteType) {
        *self = Self::manual(note_type);
    }
}

#[cfg(test)]
mod tests {
    use super::{Classification, ClassificationMethod, NoteType};

    #[test]
    fn tag_mapping_round_trips_for_tagged_types() {
        for note_type in [
            NoteType::Todo,
            NoteType::Shopping,
            NoteType::Contact,
            NoteType::Recipe,
            NoteType::Event,
            NoteType::Expense,
            NoteType::Reminder,
            NoteType::Email,
            NoteType::Idea,
        ] {
            let tag = note_type.tag().expect("tagged type should have a tag");
            assert_eq!(NoteType::from_tag(tag), Some(note_type));
        }
        assert_eq!(NoteType::General.tag(), None);
    }

    #[test]
    fn from_tag_is_case_insensitive_and_rejects_unknown() {
        assert_eq!(NoteType::from_tag("#TODO#"), Some(NoteType::Todo));
        assert_eq!(NoteType::from_tag("#Meeting#"), Some(NoteType::Event));
        assert_eq!(NoteType::from_tag("#banana#"), None);
        assert_eq!(NoteType::from_tag("todo"), None);
    }

    #[test]
    fn manual_classification_refuses_reclassification() {
        let mut classification = Classification::manual(NoteType::Recipe);
        assert!(!classification.reclassify(NoteType::Expense, Some(0.9)));
        assert_eq!(classification.note_type, NoteType::Recipe);
        assert_eq!(classification.method, ClassificationMethod::Manual);
    }

    #[test]
    fn automatic_confidence_is_clamped() {
        let high = Classification::automatic(NoteType::Todo, Some(1.4));
        assert_eq!(high.confidence, Some(1.0));
        let low = Classification::automatic(NoteType::Todo, Some(-0.2));
        assert_eq!(low.confidence, Some(0.0));
    }
}
