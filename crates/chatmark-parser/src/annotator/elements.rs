//! Intermediate representation for annotation candidates
//!
//! Annotation works in three stages over each line:
//! 1. **Collect**: run every registered pattern and record each match as a
//!    [`MatchCandidate`], overlaps included
//! 2. **Resolve**: order the candidates and keep a non-overlapping subset
//! 3. **Emit**: walk the line and the accepted candidates, producing spans
//!
//! Candidates only live for the duration of one line scan.

use std::ops::Range;

/// The closed set of span kinds the annotator can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SpanKind {
    /// Plain text between (or instead of) recognized markup
    Text,
    /// `**bold**`
    Bold,
    /// `_italic_`
    Italic,
    /// `~strike~`
    Strikethrough,
    /// `[label](href)`
    Link,
    /// Bare `http(s)://...` or `www....` address
    Url,
    /// `*Label:**` at line start or after whitespace
    ListBold,
    /// Leading `*`, `-` or `•` bullet followed by whitespace
    ListMarker,
}

impl SpanKind {
    pub const ALL: [SpanKind; 8] = [
        SpanKind::Text,
        SpanKind::Bold,
        SpanKind::Italic,
        SpanKind::Strikethrough,
        SpanKind::Link,
        SpanKind::Url,
        SpanKind::ListBold,
        SpanKind::ListMarker,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SpanKind::Text => "TEXT",
            SpanKind::Bold => "BOLD",
            SpanKind::Italic => "ITALIC",
            SpanKind::Strikethrough => "STRIKETHROUGH",
            SpanKind::Link => "LINK",
            SpanKind::Url => "URL",
            SpanKind::ListBold => "LIST_BOLD",
            SpanKind::ListMarker => "LIST_MARKER",
        }
    }
}

/// A single pattern match found in a line, before overlap resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchCandidate {
    /// Byte offset of the match within the line
    pub start: usize,
    /// Byte length of the whole match
    pub length: usize,
    pub kind: SpanKind,
    /// Capture groups; index 0 is the whole match. Groups that did not
    /// participate in the match are empty.
    pub groups: Vec<String>,
}

impl MatchCandidate {
    pub fn end(&self) -> usize {
        self.start + self.length
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }

    /// Capture group `index`, or `""` when absent.
    pub fn group(&self, index: usize) -> &str {
        self.groups.get(index).map(String::as_str).unwrap_or("")
    }

    /// The full matched text (group 0).
    pub fn text(&self) -> &str {
        self.group(0)
    }
}
