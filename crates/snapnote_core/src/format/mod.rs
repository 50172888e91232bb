//! Shared text grammars for quantities, dates and times of day.
//!
//! # Responsibility
//! - Convert decimal quantities to and from human-friendly fraction display.
//! - Resolve natural-language date words and 12-hour clock times into
//!   canonical forms shared by the event and reminder extractors.
//!
//! # Invariants
//! - Formatting and parsing are pure; no locale or clock access happens here.
//!   Relative dates resolve against a caller-supplied reference date.

pub mod datetime;
pub mod quantity;
