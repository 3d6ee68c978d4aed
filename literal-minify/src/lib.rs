//! Whitespace minifier for literal markup fragments
//!
//! Template compilers split a template into literal markup runs and dynamic
//! expressions. This crate rewrites the literal runs as they are emitted,
//! dropping indentation and line breaks while keeping the words around inline
//! elements visually apart.
//!
//! # Features
//!
//! - Fragment-at-a-time processing with tag boundaries tracked across fragments
//! - Deletion of tabs and line breaks, trimming of spaces around tags
//! - Space repair next to inline elements (`<a>`, `<b>`, `<span>`, ...)
//! - A hint for hosts that render anchors outside of literal fragments
//! - A pass-through mode for tooling passes that need the original text
//!
//! # Example
//!
//! ```rust
//! use literal_minify::{DocumentMinifier, FragmentMinifier, Options};
//!
//! let mut minifier = DocumentMinifier::new(Options::default());
//!
//! let html = minifier.process_fragment("<p>\n    Hello\n    <b>World</b>\n</p>");
//! assert_eq!(html, "<p>Hello <b>World</b></p>");
//! ```
//!
//! # Module Structure
//!
//! - `boundary.rs`: Tag/text boundary tracking
//! - `collapse.rs`: Whitespace removal inside text spans
//! - `adjacency.rs`: Space repair around inline elements
//! - `inline.rs`: The inline element catalog
//! - `document.rs`: Per-document processor and the host contract
//! - `options.rs`: Processing options

pub mod adjacency;
pub mod boundary;
pub mod collapse;
pub mod document;
pub mod inline;
pub mod options;

pub use adjacency::repair;
pub use boundary::{BoundaryState, Span, classify};
pub use collapse::collapse;
pub use document::{DocumentMinifier, FragmentMinifier, Stats, minify_document};
pub use inline::{INLINE_ELEMENTS, is_inline};
pub use options::{Mode, Options};
