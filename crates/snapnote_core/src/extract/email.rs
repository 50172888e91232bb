//! Email draft header extraction.
//!
//! # Responsibility
//! - Parse the leading `To:/Cc:/Bcc:/Subject:` header block.
//! - Treat everything after the header block as body verbatim.
//!
//! # Invariants
//! - Header scanning ends at the first non-header line (or the blank
//!   separator once a header was seen); later header-lookalike lines are
//!   body, never re-parsed.
//! - Recipient lists are normalized to `a, b` comma spacing.

use crate::extract::label_value;
use crate::model::structured::EmailDraft;

/// Extracts email draft fields from note content. Pure and total.
pub fn extract_email(content: &str) -> EmailDraft {
    let mut draft = EmailDraft::default();
    let mut body_lines: Vec<&str> = Vec::new();
    let mut in_headers = true;
    let mut saw_header = false;

    for raw in content.lines() {
        if in_headers {
            let line = raw.trim();
            if line.is_empty() {
                if saw_header {
                    // Blank separator after the header block; body starts on
                    // the next line.
                    in_headers = false;
                }
                continue;
            }
            if claim_header_line(&mut draft, line) {
                saw_header = true;
                continue;
            }
            in_headers = false;
        }
        body_lines.push(raw);
    }

    draft.body = body_lines.join("\n");
    draft
}

fn claim_header_line(draft: &mut EmailDraft, line: &str) -> bool {
    if let Some(value) = label_value(line, &["to:"]) {
        if draft.to.is_empty() {
            draft.to = normalize_recipients(value);
        }
        return true;
    }
    if let Some(value) = label_value(line, &["cc:"]) {
        if draft.cc.is_empty() {
            draft.cc = normalize_recipients(value);
        }
        return true;
    }
    if let Some(value) = label_value(line, &["bcc:"]) {
        if draft.bcc.is_empty() {
            draft.bcc = normalize_recipients(value);
        }
        return true;
    }
    if let Some(value) = label_value(line, &["subject:", "subj:", "re:"]) {
        if draft.subject.is_empty() {
            draft.subject = value.to_string();
        }
        return true;
    }
    false
}

/// Comma-joins a recipient list with canonical `a, b` spacing.
fn normalize_recipients(value: &str) -> String {
    value
        .split(',')
        .map(str::trim)
        .filter(|recipient| !recipient.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::extract_email;

    #[test]
    fn header_block_then_body() {
        let draft = extract_email("To: a@b.com\nSubject: hello\n\nFirst paragraph\nSecond line");
        assert_eq!(draft.to, "a@b.com");
        assert_eq!(draft.subject, "hello");
        assert_eq!(draft.body, "First paragraph\nSecond line");
    }

    #[test]
    fn header_lookalikes_in_the_body_are_not_reparsed() {
        let draft = extract_email(
            "To: a@b.com\n\nPlease file this under subject: nothing\ncc: not a header",
        );
        assert_eq!(draft.to, "a@b.com");
        assert!(draft.subject.is_empty());
        assert!(draft.cc.is_empty());
        assert!(draft.body.contains("cc: not a header"));
    }

    #[test]
    fn first_non_header_line_ends_the_block() {
        let draft = extract_email("To: a@b.com\nhello there\nBcc: late@b.com");
        assert_eq!(draft.to, "a@b.com");
        assert!(draft.bcc.is_empty());
        assert_eq!(draft.body, "hello there\nBcc: late@b.com");
    }

    #[test]
    fn bare_re_line_is_a_subject() {
        let draft = extract_email("Re: quarterly numbers\nTo: cfo@corp.example\n\nSee attached");
        assert_eq!(draft.subject, "quarterly numbers");
        assert_eq!(draft.to, "cfo@corp.example");
        assert_eq!(draft.body, "See attached");
    }

    #[test]
    fn recipients_are_comma_normalized() {
        let draft = extract_email("To: a@b.com ,c@d.com,  e@f.com\n\nhi");
        assert_eq!(draft.to, "a@b.com, c@d.com, e@f.com");
    }

    #[test]
    fn headerless_content_is_all_body() {
        let draft = extract_email("just some text\nTo: too@late.example");
        assert!(draft.to.is_empty());
        assert_eq!(draft.body, "just some text\nTo: too@late.example");
    }
}
