//! Space repair around inline elements
//!
//! Collapsing text runs removes the line break that separated a word from an
//! indented inline element:
//!
//! ```text
//! Read the
//! <a href="/docs">docs</a>
//! first
//! ```
//!
//! would otherwise come out as `Read the<a href="/docs">docs</a>first`. The
//! repair pass puts one space back before an inline start tag that directly
//! follows non-whitespace, and after an inline end tag that is directly
//! followed by a letter or digit.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use crate::inline::INLINE_ELEMENTS;

/// `<name` of an inline start tag followed by whitespace, `/`, `>` or the end
/// of the output, or `</name>` of an inline end tag
static INLINE_TAG: LazyLock<Regex> = LazyLock::new(|| {
    let names = INLINE_ELEMENTS.join("|");
    Regex::new(&format!(r"<(?P<open>{names})(?:[\s/>]|$)|</(?P<close>{names})>"))
        .expect("inline element pattern is valid")
});

/// Inserts the spaces lost next to inline elements in minified `output`.
///
/// Already spaced gaps are left alone, so repairing twice changes nothing.
pub fn repair(output: &str) -> Cow<'_, str> {
    let mut repaired = String::new();
    let mut copied = 0;
    for captures in INLINE_TAG.captures_iter(output) {
        let Some(tag) = captures.get(0) else {
            continue;
        };
        let at = if captures.name("open").is_some() {
            let before = output[..tag.start()].chars().next_back();
            if !before.is_some_and(|c| !c.is_whitespace()) {
                continue;
            }
            tag.start()
        } else {
            let after = output[tag.end()..].chars().next();
            if !after.is_some_and(|c| c.is_ascii_alphanumeric()) {
                continue;
            }
            tag.end()
        };
        repaired.push_str(&output[copied..at]);
        repaired.push(' ');
        copied = at;
    }
    if copied == 0 {
        return Cow::Borrowed(output);
    }
    repaired.push_str(&output[copied..]);
    Cow::Owned(repaired)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_before_inline_start_tag() {
        assert_eq!(repair("Hello<b>World</b>"), "Hello <b>World</b>");
    }

    #[test]
    fn start_tag_with_attributes() {
        assert_eq!(
            repair("Read the<a href=\"/docs\">docs</a>"),
            "Read the <a href=\"/docs\">docs</a>"
        );
    }

    #[test]
    fn space_after_inline_end_tag() {
        assert_eq!(repair("</a>Next"), "</a> Next");
        assert_eq!(repair("<span>1</span>2"), "<span>1</span> 2");
    }

    #[test]
    fn punctuation_after_end_tag() {
        assert_eq!(repair("<b>World</b>."), "<b>World</b>.");
        assert_eq!(repair("</b>, then"), "</b>, then");
    }

    #[test]
    fn already_spaced() {
        assert_eq!(repair("</a> Next"), "</a> Next");
        assert_eq!(repair("Hello <b>World</b> again"), "Hello <b>World</b> again");
    }

    #[test]
    fn idempotent() {
        let once = repair("x<i>y</i>z<em>w</em>v").into_owned();
        assert_eq!(once, "x <i>y</i> z <em>w</em> v");
        assert_eq!(repair(&once), once);
    }

    #[test]
    fn both_rules_in_one_pass() {
        assert_eq!(repair("Go<a>here</a>now"), "Go <a>here</a> now");
    }

    #[test]
    fn after_another_tag() {
        assert_eq!(repair("<p><b>x</b></p>"), "<p> <b>x</b></p>");
    }

    #[test]
    fn at_start_of_output() {
        assert_eq!(repair("<b>x</b>"), "<b>x</b>");
    }

    #[test]
    fn block_elements_are_ignored() {
        assert_eq!(repair("x<div>y</div>z"), "x<div>y</div>z");
        assert_eq!(repair("x<body>"), "x<body>");
        assert_eq!(repair("x<blockquote>"), "x<blockquote>");
        assert_eq!(repair("x<article>"), "x<article>");
    }

    #[test]
    fn longer_inline_names() {
        assert_eq!(repair("x<abbr title=\"t\">y</abbr>z"), "x <abbr title=\"t\">y</abbr> z");
        assert_eq!(repair("x<br>"), "x <br>");
        assert_eq!(repair("x<br/>"), "x <br/>");
    }

    #[test]
    fn name_must_end_the_tag_name() {
        assert_eq!(repair("x<b-widget>y</b-widget>z"), "x<b-widget>y</b-widget>z");
        assert_eq!(repair("x<a:b>"), "x<a:b>");
        assert_eq!(repair("x<b\nclass=\"c\">"), "x <b\nclass=\"c\">");
        assert_eq!(repair("x<b><i>y</i></b>"), "x <b> <i>y</i></b>");
    }

    #[test]
    fn case_sensitive() {
        assert_eq!(repair("x<B>y</B>z"), "x<B>y</B>z");
    }

    #[test]
    fn start_tag_cut_at_fragment_end() {
        assert_eq!(repair("Hello<a"), "Hello <a");
    }

    #[test]
    fn borrows_when_unchanged() {
        assert!(matches!(repair("<p>text</p>"), Cow::Borrowed(_)));
    }
}
