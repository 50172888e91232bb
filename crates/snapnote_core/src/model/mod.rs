//! Domain model for structured note extraction.
//!
//! # Responsibility
//! - Define the note-type vocabulary and classification metadata.
//! - Define the per-type structured models produced by the extractors.
//!
//! # Invariants
//! - Structured models are plain value types; they are rebuilt from canonical
//!   text on every load and never cached across sessions.
//! - A manual classification is never silently reverted.

pub mod note;
pub mod structured;
