//! Session-level classification behavior: tag priority, manual stickiness
//! and confidence handling.

use chrono::NaiveDate;
use snapnote_core::{
    Classification, ClassificationMethod, NoteSession, NoteType, StructuredNote,
};

fn opened_on() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).expect("valid date")
}

#[test]
fn trigger_tag_drives_automatic_classification() {
    let session = NoteSession::open(
        "#recipe#\nToast\nIngredients:\n2 slices bread",
        None,
        opened_on(),
    );
    assert_eq!(session.note_type(), NoteType::Recipe);
    assert_eq!(session.classification().method, ClassificationMethod::Automatic);
    assert!(matches!(session.model(), StructuredNote::Recipe(_)));
}

#[test]
fn automatic_hint_applies_when_no_tag_is_present() {
    let hint = Classification::automatic(NoteType::Shopping, Some(0.7));
    let session = NoteSession::open("milk\neggs", Some(hint), opened_on());
    assert_eq!(session.note_type(), NoteType::Shopping);
    assert_eq!(session.classification().confidence, Some(0.7));
}

#[test]
fn manual_hint_outranks_trigger_tag_and_survives_reclassification() {
    let hint = Classification::manual(NoteType::Todo);
    let mut session = NoteSession::open("#expense#\n[ ] pay rent", Some(hint), opened_on());
    assert_eq!(session.note_type(), NoteType::Todo);

    assert!(!session.reclassify(NoteType::Expense, Some(0.99)));
    assert_eq!(session.note_type(), NoteType::Todo);
    assert_eq!(session.classification().method, ClassificationMethod::Manual);
}

#[test]
fn reclassify_swaps_model_for_automatic_sessions() {
    let mut session = NoteSession::open("Amount: $9\nlunch", None, opened_on());
    assert_eq!(session.note_type(), NoteType::General);

    assert!(session.reclassify(NoteType::Expense, Some(0.8)));
    let StructuredNote::Expense(expense) = session.model() else {
        panic!("expected expense model");
    };
    assert_eq!(expense.amount, "9");
    assert_eq!(session.classification().confidence, Some(0.8));
}

#[test]
fn manual_override_reextracts_and_commit_switches_tag() {
    let mut session = NoteSession::open("#todo#\n[ ] milk\n[ ] eggs", None, opened_on());
    session.set_manual_type(NoteType::Shopping);

    let StructuredNote::Tasks { items } = session.model() else {
        panic!("expected tasks model");
    };
    assert_eq!(items.len(), 2);
    assert!(session.commit().starts_with("#shopping#\n"));
}

#[test]
fn confidence_out_of_range_is_clamped_at_the_boundary() {
    let classification = Classification::automatic(NoteType::Email, Some(7.5));
    assert_eq!(classification.confidence, Some(1.0));
}

#[test]
fn structured_models_cross_the_ui_boundary_as_tagged_json() {
    let session = NoteSession::open("#expense#\nAmount: $9.50\nVendor: Cafe", None, opened_on());
    let json = serde_json::to_value(session.model()).expect("model should encode");
    assert_eq!(json["kind"], "expense");
    assert_eq!(json["amount"], "9.50");
    assert_eq!(json["vendor"], "Cafe");

    let decoded: StructuredNote = serde_json::from_value(json).expect("model should decode");
    assert_eq!(&decoded, session.model());
}

#[test]
fn edits_between_open_and_commit_are_serialized() {
    let mut session = NoteSession::open("#todo#\n[ ] milk", None, opened_on());
    if let StructuredNote::Tasks { items } = session.model_mut() {
        items[0].is_completed = true;
        items.push(snapnote_core::ParsedTask::new("butter", false));
    }
    let committed = session.commit();
    assert!(committed.contains("[x] milk"));
    assert!(committed.contains("[ ] butter"));

    let reopened = NoteSession::open(&committed, None, opened_on());
    assert_eq!(reopened.model(), session.model());
}
