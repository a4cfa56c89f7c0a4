//! Escape handling for quoted KeyValues text.
//!
//! Parsed strings keep their escapes verbatim, so there are two forms of text:
//! stored text (what sits between the quotes) and plain text (what it means). A `\`
//! only protects the character after it; `\\` is a backslash that protects nothing.

use std::borrow::Cow;

/// Check whether stored text can be written between quotes unchanged.
///
/// False when the text has a `"` not protected by a backslash, or ends with a
/// backslash that would protect the closing quote.
pub fn is_quotable(raw: &str) -> bool {
    let mut escaped = false;
    for c in raw.chars() {
        match c {
            '"' if !escaped => return false,
            '\\' => escaped = !escaped,
            _ => escaped = false,
        }
    }
    !escaped
}

/// Make stored text safe to write between quotes.
///
/// Unprotected quotes get a backslash and a dangling trailing backslash is doubled.
/// Text produced by the parser is always returned unchanged.
pub fn guard_raw(raw: &str) -> Cow<'_, str> {
    if is_quotable(raw) {
        return Cow::Borrowed(raw);
    }

    let mut result = String::with_capacity(raw.len() + 4);
    let mut escaped = false;
    for c in raw.chars() {
        match c {
            '"' if !escaped => result.push('\\'),
            '\\' => escaped = !escaped,
            _ => escaped = false,
        }
        result.push(c);
    }
    if escaped {
        result.push('\\');
    }
    Cow::Owned(result)
}

/// Escape plain text into stored form.
pub fn escape(s: &str) -> Cow<'_, str> {
    if !s.chars().any(|c| matches!(c, '"' | '\\' | '\n' | '\r' | '\t')) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            c => result.push(c),
        }
    }
    Cow::Owned(result)
}

/// Interpret the escapes in stored text.
///
/// Handles `\n`, `\r`, `\t`, `\\` and `\"`. Any other backslash sequence, and a
/// trailing lone backslash, is kept as written.
pub fn unescape(raw: &str) -> Cow<'_, str> {
    if !raw.contains('\\') {
        return Cow::Borrowed(raw);
    }

    let mut result = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => result.push('\n'),
            Some('r') => result.push('\r'),
            Some('t') => result.push('\t'),
            Some('\\') => result.push('\\'),
            Some('"') => result.push('"'),
            Some(other) => {
                result.push('\\');
                result.push(other);
            }
            None => result.push('\\'),
        }
    }
    Cow::Owned(result)
}
