//! `json:"..."` struct tags.

use std::fmt::Write as _;

use unicode_general_category::{GeneralCategory, get_general_category};

use super::ast::Tag;

/// Build the struct tag for a field serialized under `key`.
///
/// The key is kept verbatim, only escaped the way Go's `strconv.Quote`
/// would. Tags are raw string literals unless the content contains a
/// backtick, which a raw literal cannot hold.
pub fn build_tag(key: &str, omit_if_absent: bool) -> Tag {
    let suffix = if omit_if_absent { ",omitempty" } else { "" };
    let content = format!("json:\"{}{}\"", quote_body(key), suffix);

    if content.contains('`') {
        Tag(format!("\"{}\"", quote_body(&content)))
    } else {
        Tag(format!("`{content}`"))
    }
}

/// Body of a Go interpreted string literal holding `s`, without the quotes.
pub(crate) fn quote_body(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{07}' => out.push_str("\\a"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0b}' => out.push_str("\\v"),
            c if c.is_ascii_control() => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            c if !is_printable(c) => {
                if (c as u32) < 0x10000 {
                    let _ = write!(out, "\\u{:04x}", c as u32);
                } else {
                    let _ = write!(out, "\\U{:08x}", c as u32);
                }
            }
            c => out.push(c),
        }
    }
    out
}

// Go's strconv.IsPrint: letters, marks, numbers, punctuation and symbols,
// plus the ASCII space.
fn is_printable(c: char) -> bool {
    c == ' '
        || !matches!(
            get_general_category(c),
            GeneralCategory::Control
                | GeneralCategory::Format
                | GeneralCategory::Surrogate
                | GeneralCategory::PrivateUse
                | GeneralCategory::Unassigned
                | GeneralCategory::SpaceSeparator
                | GeneralCategory::LineSeparator
                | GeneralCategory::ParagraphSeparator
        )
}
