//! Trigger-tag classification.
//!
//! # Responsibility
//! - Detect and strip the leading `#type#` marker from canonical note text.
//! - Keep the tag the single source of truth for the structured type, while
//!   leaving room for upstream heuristics when no tag is present.
//!
//! # Invariants
//! - Only the first non-whitespace token of the first line can be a tag;
//!   tag-shaped substrings mid-body never match.
//! - `TriggerTag::reattach` restores the canonical tagged content.

pub mod trigger;

pub use trigger::{extract_trigger_tag, TriggerTag};
