//! The inline element catalog
//!
//! Elements rendered inline with the surrounding text. Whitespace trimmed
//! next to one of these changes how the page reads, so the adjacency repair
//! puts a single space back.

/// Tag names treated as inline, matched case-sensitively
pub static INLINE_ELEMENTS: &[&str] = &[
    "a", "b", "big", "i", "small", "tt", "abbr", "acronym", "cite", "code", "dfn", "em", "kbd",
    "strong", "samp", "time", "var", "bdo", "br", "img", "map", "object", "q", "span", "sub",
    "sup", "button", "input", "label", "select", "textarea",
];

/// Returns true if `tag_name` is in [`INLINE_ELEMENTS`]
pub fn is_inline(tag_name: &str) -> bool {
    INLINE_ELEMENTS.iter().any(|name| *name == tag_name)
}
