//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate classify → extract → edit → serialize for one note session.
//! - Keep UI layers decoupled from the individual extractor modules.

pub mod note_session;
