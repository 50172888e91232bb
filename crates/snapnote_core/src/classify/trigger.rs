//! Leading trigger-tag detection and stripping.

use crate::model::note::NoteType;

/// A recognized leading trigger tag and the content with it removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerTag {
    /// The literal tag token as it appeared, e.g. `#expense#`.
    pub tag: String,
    /// The note type the tag resolves to.
    pub note_type: NoteType,
    /// Content with the tag removed. Text that followed the tag on the same
    /// line survives as the first line of cleaned content.
    pub cleaned_content: String,
}

impl TriggerTag {
    /// Rebuilds canonical content by re-prepending the tag on its own line.
    ///
    /// For content that began with a tag on its own line this is
    /// byte-identical to the original.
    pub fn reattach(&self) -> String {
        if self.cleaned_content.is_empty() {
            return self.tag.clone();
        }
        format!("{}\n{}", self.tag, self.cleaned_content)
    }
}

/// Detects a trigger tag at the head of `content`.
///
/// The tag must be the first non-whitespace token of the first line and must
/// belong to the fixed vocabulary; anything else yields `None` and leaves
/// type inference to upstream heuristics. Pure function, no side effects.
pub fn extract_trigger_tag(content: &str) -> Option<TriggerTag> {
    let (first_line, rest) = match content.split_once('\n') {
        Some((line, rest)) => (line, Some(rest)),
        None => (content, None),
    };

    let trimmed = first_line.trim();
    let (token, same_line_tail) = match trimmed.split_once(char::is_whitespace) {
        Some((token, tail)) => (token, tail.trim_start()),
        None => (trimmed, ""),
    };

    let note_type = NoteType::from_tag(token)?;

    let cleaned_content = match (same_line_tail.is_empty(), rest) {
        (true, Some(rest)) => rest.to_string(),
        (true, None) => String::new(),
        (false, Some(rest)) => format!("{same_line_tail}\n{rest}"),
        (false, None) => same_line_tail.to_string(),
    };

    Some(TriggerTag {
        tag: token.to_string(),
        note_type,
        cleaned_content,
    })
}
