//! Per-document minification
//!
//! A [`DocumentMinifier`] is created when compilation of a document starts
//! and is fed that document's literal fragments in order. It owns the tag
//! boundary state and the hyperlink hint, so two documents never see each
//! other's state.
//!
//! # Hyperlink hint
//!
//! Some hosts render anchors through a separate path instead of as literal
//! text, so the whitespace around them never reaches the minifier. The host
//! calls [`FragmentMinifier::notify_inline_special_element`] before rendering
//! such an element and emits the returned text. The next fragment then gets a
//! leading space if it starts with a letter or digit:
//!
//! ```rust
//! use literal_minify::{DocumentMinifier, FragmentMinifier, Options};
//!
//! let mut minifier = DocumentMinifier::new(Options::default());
//! let mut html = minifier.process_fragment("Click\n");
//! html.push_str(minifier.notify_inline_special_element("a"));
//! html.push_str("<a href=\"/\">this link</a>");
//! html.push_str(&minifier.process_fragment("\nnow"));
//! assert_eq!(html, "Click <a href=\"/\">this link</a> now");
//! ```

use std::borrow::Cow;

use tracing::{debug, instrument, trace};

use crate::adjacency::repair;
use crate::boundary::{BoundaryState, Span, classify};
use crate::collapse::collapse;
use crate::inline::is_inline;
use crate::options::Options;

/// The two calls a template compiler makes while emitting a document
pub trait FragmentMinifier {
    /// Minifies one literal fragment. Must be called in document order.
    fn process_fragment(&mut self, fragment: &str) -> String;

    /// Signals that `tag_name` is about to be rendered outside of literal
    /// text. Returns the text to emit before rendering it.
    fn notify_inline_special_element(&mut self, tag_name: &str) -> &'static str;
}

/// Byte counts for one document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    /// Non-empty fragments processed
    pub fragments: usize,
    /// Bytes received
    pub bytes_in: usize,
    /// Bytes returned
    pub bytes_out: usize,
}

impl Stats {
    /// Bytes removed, never negative even when repair added spaces
    pub fn saved(&self) -> usize {
        self.bytes_in.saturating_sub(self.bytes_out)
    }
}

/// Minification state for a single document
#[derive(Debug, Default)]
pub struct DocumentMinifier {
    options: Options,
    boundary: BoundaryState,
    pending_hyperlink_exit: bool,
    stats: Stats,
}

impl DocumentMinifier {
    /// Starts a document in text, with no hint pending
    pub fn new(options: Options) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// The options this document was created with
    pub fn options(&self) -> Options {
        self.options
    }

    /// Whether the fragments so far ended inside an open tag
    pub fn boundary_state(&self) -> BoundaryState {
        self.boundary
    }

    /// Whether the next fragment will be checked for a missing leading space
    pub fn hint_pending(&self) -> bool {
        self.pending_hyperlink_exit
    }

    /// Byte counts for the fragments processed so far
    pub fn stats(&self) -> Stats {
        self.stats
    }

    fn count(&mut self, fragment: &str, output: &str) {
        self.stats.fragments += 1;
        self.stats.bytes_in += fragment.len();
        self.stats.bytes_out += output.len();
    }

    fn minify(&mut self, fragment: &str) -> String {
        let mut output = String::with_capacity(fragment.len());
        for span in classify(fragment, &mut self.boundary) {
            match span {
                Span::Tag(tag) => output.push_str(tag),
                Span::Text(text) => output.push_str(&collapse(text)),
            }
        }
        if let Cow::Owned(repaired) = repair(&output) {
            return repaired;
        }
        output
    }
}

impl FragmentMinifier for DocumentMinifier {
    fn process_fragment(&mut self, fragment: &str) -> String {
        if self.options.is_pass_through() {
            if !fragment.is_empty() {
                self.count(fragment, fragment);
            }
            return fragment.to_owned();
        }
        // Nothing to emit, and the hint is left for the next real fragment.
        if fragment.is_empty() {
            return String::new();
        }
        let mut output = self.minify(fragment);
        if std::mem::take(&mut self.pending_hyperlink_exit) {
            let needs_space = output.starts_with(|c: char| c.is_ascii_alphanumeric());
            if needs_space {
                output.insert(0, ' ');
            }
            debug!(needs_space, "consumed hyperlink hint");
        }
        self.count(fragment, &output);
        trace!(
            input = fragment.len(),
            output = output.len(),
            state = ?self.boundary,
            "minified fragment"
        );
        output
    }

    fn notify_inline_special_element(&mut self, tag_name: &str) -> &'static str {
        if self.options.is_pass_through() {
            return "";
        }
        // Last notification wins: a block element clears a pending hint.
        self.pending_hyperlink_exit = is_inline(tag_name);
        debug!(tag_name, armed = self.pending_hyperlink_exit, "special element");
        if self.pending_hyperlink_exit { " " } else { "" }
    }
}

/// Minifies a complete document in one pass.
///
/// Used to minify a template's whole source before it is compiled.
#[instrument(level = "debug", skip_all, fields(len = text.len()))]
pub fn minify_document(text: &str) -> String {
    let mut minifier = DocumentMinifier::new(Options::default());
    let output = minifier.process_fragment(text);
    debug!(saved = minifier.stats().saved(), "minified document");
    output
}
