//! Tag/text boundary tracking
//!
//! Splits a fragment into tag spans and text spans on `<` and `>` alone.
//! The scan state is carried between calls, so a tag that starts in one
//! fragment and ends in the next is still recognised as a tag.

use memchr::memchr;

/// Where the scan stopped at the end of the previous fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundaryState {
    /// Outside of any tag
    #[default]
    InText,
    /// After a `<` whose `>` has not been seen yet
    InTag,
}

/// A piece of a fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span<'a> {
    /// Text between tags, subject to collapsing
    Text(&'a str),
    /// Tag markup, from `<` to `>` inclusive, or the part of it that falls
    /// in this fragment
    Tag(&'a str),
}

impl<'a> Span<'a> {
    /// The span's text, tag or not
    pub fn as_str(&self) -> &'a str {
        match *self {
            Span::Text(text) | Span::Tag(text) => text,
        }
    }
}

/// Splits `fragment` into spans, continuing from `state` and leaving it at
/// the condition after the fragment's last character.
///
/// Spans are never empty and concatenate back to `fragment`.
pub fn classify<'a>(fragment: &'a str, state: &mut BoundaryState) -> Vec<Span<'a>> {
    let bytes = fragment.as_bytes();
    let mut spans = Vec::new();
    let mut start = 0;
    while start < bytes.len() {
        match *state {
            BoundaryState::InText => match memchr(b'<', &bytes[start..]) {
                Some(offset) => {
                    let end = start + offset;
                    if end > start {
                        spans.push(Span::Text(&fragment[start..end]));
                    }
                    start = end;
                    *state = BoundaryState::InTag;
                }
                None => {
                    spans.push(Span::Text(&fragment[start..]));
                    start = bytes.len();
                }
            },
            BoundaryState::InTag => match memchr(b'>', &bytes[start..]) {
                Some(offset) => {
                    let end = start + offset + 1;
                    spans.push(Span::Tag(&fragment[start..end]));
                    start = end;
                    *state = BoundaryState::InText;
                }
                None => {
                    spans.push(Span::Tag(&fragment[start..]));
                    start = bytes.len();
                }
            },
        }
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn spans(fragment: &str) -> Vec<Span<'_>> {
        classify(fragment, &mut BoundaryState::default())
    }

    #[test]
    fn text_and_tags() {
        assert_eq!(
            spans("Hello <b>World</b>!"),
            vec![
                Span::Text("Hello "),
                Span::Tag("<b>"),
                Span::Text("World"),
                Span::Tag("</b>"),
                Span::Text("!"),
            ]
        );
    }

    #[test]
    fn adjacent_tags() {
        assert_eq!(
            spans("<p><i>x</i></p>"),
            vec![
                Span::Tag("<p>"),
                Span::Tag("<i>"),
                Span::Text("x"),
                Span::Tag("</i>"),
                Span::Tag("</p>"),
            ]
        );
    }

    #[test]
    fn tag_whitespace_is_kept() {
        assert_eq!(spans("<img alt=\"a\tb\" >"), vec![Span::Tag("<img alt=\"a\tb\" >")]);
    }

    #[test]
    fn greater_than_in_text() {
        assert_eq!(spans("a > b"), vec![Span::Text("a > b")]);
    }

    #[test]
    fn tag_across_fragments() {
        let mut state = BoundaryState::default();
        assert_eq!(
            classify("x<a href=\"x", &mut state),
            vec![Span::Text("x"), Span::Tag("<a href=\"x")]
        );
        assert_eq!(state, BoundaryState::InTag);
        assert_eq!(classify("\">y", &mut state), vec![Span::Tag("\">"), Span::Text("y")]);
        assert_eq!(state, BoundaryState::InText);
    }

    #[test]
    fn lone_open_bracket() {
        let mut state = BoundaryState::default();
        assert_eq!(classify("text<", &mut state), vec![Span::Text("text"), Span::Tag("<")]);
        assert_eq!(state, BoundaryState::InTag);
    }

    #[test]
    fn empty_fragment() {
        let mut state = BoundaryState::InTag;
        assert!(classify("", &mut state).is_empty());
        assert_eq!(state, BoundaryState::InTag);
    }

    #[test]
    fn multibyte_text() {
        assert_eq!(
            spans("héllo<em>wörld</em>"),
            vec![
                Span::Text("héllo"),
                Span::Tag("<em>"),
                Span::Text("wörld"),
                Span::Tag("</em>"),
            ]
        );
    }

    proptest! {
        #[test]
        fn spans_reassemble(first in "[a-z <>/=\"\t\n]{0,24}", second in "[a-z <>/=\"\t\n]{0,24}") {
            let mut state = BoundaryState::default();
            let mut joined = String::new();
            let mut both = classify(&first, &mut state);
            both.extend(classify(&second, &mut state));
            for span in both {
                prop_assert!(!span.as_str().is_empty());
                joined.push_str(span.as_str());
            }
            prop_assert_eq!(joined, format!("{first}{second}"));
        }
    }
}
