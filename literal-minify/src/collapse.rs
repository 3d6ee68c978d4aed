//! Whitespace removal inside text spans

use std::borrow::Cow;

fn is_line_whitespace(c: char) -> bool {
    matches!(c, '\t' | '\r' | '\n')
}

/// Deletes tabs and line breaks from `text` and trims spaces from both ends.
///
/// Interior spaces are kept as they are, runs included. Only ever applied to
/// text spans; tag markup is never collapsed.
pub fn collapse(text: &str) -> Cow<'_, str> {
    if !text.contains(is_line_whitespace) {
        return Cow::Borrowed(text.trim_matches(' '));
    }
    let stripped: String = text.chars().filter(|c| !is_line_whitespace(*c)).collect();
    let trimmed = stripped.trim_matches(' ');
    if trimmed.len() == stripped.len() {
        Cow::Owned(stripped)
    } else {
        Cow::Owned(trimmed.to_owned())
    }
}
