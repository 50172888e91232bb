//! CLI probe for the extraction core.
//!
//! # Responsibility
//! - Read note text from stdin, classify and extract it, and print the
//!   structured model plus the re-serialized canonical text.
//! - Keep output deterministic for quick local sanity checks.

use chrono::Local;
use snapnote_core::{Classification, NoteSession, NoteType};
use std::io::Read;

fn main() {
    let mut content = String::new();
    if let Err(err) = std::io::stdin().read_to_string(&mut content) {
        eprintln!("failed to read stdin: {err}");
        std::process::exit(1);
    }

    // Optional first argument forces a type, mimicking a manual override.
    let hint = std::env::args().nth(1).and_then(|arg| parse_type(&arg));

    let session = NoteSession::open(
        &content,
        hint.map(Classification::manual),
        Local::now().date_naive(),
    );

    println!("snapnote_core version={}", snapnote_core::core_version());
    println!(
        "type={} method={:?} confidence={:?}",
        session.note_type().as_str(),
        session.classification().method,
        session.classification().confidence
    );

    match serde_json::to_string_pretty(session.model()) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("failed to encode model: {err}"),
    }

    println!("--- canonical ---");
    println!("{}", session.commit());
}

fn parse_type(arg: &str) -> Option<NoteType> {
    match arg {
        "todo" => Some(NoteType::Todo),
        "shopping" => Some(NoteType::Shopping),
        "contact" => Some(NoteType::Contact),
        "recipe" => Some(NoteType::Recipe),
        "event" => Some(NoteType::Event),
        "expense" => Some(NoteType::Expense),
        "reminder" => Some(NoteType::Reminder),
        "email" => Some(NoteType::Email),
        "idea" => Some(NoteType::Idea),
        "general" => Some(NoteType::General),
        _ => None,
    }
}
