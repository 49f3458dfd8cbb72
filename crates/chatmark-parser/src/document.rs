//! Annotated output: spans, lines and documents
//!
//! A [`Document`] holds one [`LineResult`] per `\n`-delimited input line.
//! Each line is a contiguous partition into [`Span`]s: the first span starts
//! at byte 0, every span ends where the next begins, and the last ends at the
//! line's length. Empty lines have no spans.

use std::fmt;
use std::ops::Range;

use crate::annotator::SpanKind;

/// Kind-specific rendering payload of a span.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(tag = "kind", content = "payload")
)]
pub enum SpanContent {
    Text(String),
    Bold(String),
    Italic(String),
    Strikethrough(String),
    Link {
        label: String,
        href: String,
    },
    Url {
        label: String,
        href: String,
    },
    /// Rendered as `prefix` followed by `label` and a colon in bold.
    ListBold {
        prefix: String,
        label: String,
    },
    /// Rendered as `prefix`, `indent` and a normalized bullet. The source
    /// glyph is not kept.
    ListMarker {
        prefix: String,
        indent: String,
    },
}

impl SpanContent {
    pub fn kind(&self) -> SpanKind {
        match self {
            SpanContent::Text(_) => SpanKind::Text,
            SpanContent::Bold(_) => SpanKind::Bold,
            SpanContent::Italic(_) => SpanKind::Italic,
            SpanContent::Strikethrough(_) => SpanKind::Strikethrough,
            SpanContent::Link { .. } => SpanKind::Link,
            SpanContent::Url { .. } => SpanKind::Url,
            SpanContent::ListBold { .. } => SpanKind::ListBold,
            SpanContent::ListMarker { .. } => SpanKind::ListMarker,
        }
    }
}

impl fmt::Display for SpanContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpanContent::Text(s)
            | SpanContent::Bold(s)
            | SpanContent::Italic(s)
            | SpanContent::Strikethrough(s) => write!(f, "{:?}", s),
            SpanContent::Link { label, href } | SpanContent::Url { label, href } => {
                write!(f, "label={:?} href={:?}", label, href)
            }
            SpanContent::ListBold { prefix, label } => {
                write!(f, "prefix={:?} label={:?}", prefix, label)
            }
            SpanContent::ListMarker { prefix, indent } => {
                write!(f, "prefix={:?} indent={:?}", prefix, indent)
            }
        }
    }
}

/// A typed slice of one line.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Span {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub content: SpanContent,
    /// Byte offset of the first covered byte in the line
    pub start: usize,
    /// Byte offset one past the last covered byte
    pub end: usize,
}

impl Span {
    pub fn new(content: SpanContent, range: Range<usize>) -> Self {
        Self {
            content,
            start: range.start,
            end: range.end,
        }
    }

    pub fn kind(&self) -> SpanKind {
        self.content.kind()
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The source text this span covers in `line`.
    pub fn source<'a>(&self, line: &'a str) -> &'a str {
        &line[self.range()]
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}@{}..{} {}",
            self.kind().name(),
            self.start,
            self.end,
            self.content
        )
    }
}

/// The spans of a single line, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct LineResult {
    pub spans: Vec<Span>,
}

impl LineResult {
    pub fn iter(&self) -> std::slice::Iter<'_, Span> {
        self.spans.iter()
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    pub fn kinds(&self) -> Vec<SpanKind> {
        self.spans.iter().map(Span::kind).collect()
    }

    /// Number of source bytes covered by all spans.
    pub fn covered_len(&self) -> usize {
        self.spans.iter().map(Span::len).sum()
    }
}

impl<'a> IntoIterator for &'a LineResult {
    type Item = &'a Span;
    type IntoIter = std::slice::Iter<'a, Span>;

    fn into_iter(self) -> Self::IntoIter {
        self.spans.iter()
    }
}

/// A line, or the hard break separating two lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Line(&'a LineResult),
    HardBreak,
}

/// The annotation of a whole message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Document {
    pub lines: Vec<LineResult>,
}

impl Document {
    /// Lines interleaved with hard breaks. No break follows the last line.
    pub fn segments(&self) -> impl Iterator<Item = Segment<'_>> + '_ {
        self.lines.iter().enumerate().flat_map(|(idx, line)| {
            let brk = (idx > 0).then_some(Segment::HardBreak);
            brk.into_iter().chain(std::iter::once(Segment::Line(line)))
        })
    }

    pub fn hard_breaks(&self) -> usize {
        self.lines.len().saturating_sub(1)
    }

    pub fn spans(&self) -> impl Iterator<Item = &Span> + '_ {
        self.lines.iter().flat_map(|line| line.spans.iter())
    }
}

/// Debug tree, one span per line:
///
/// ```text
/// LINE 0
///   BOLD@0..8 "bold"
/// HARD_BREAK
/// LINE 1
/// ```
impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut line_no = 0;
        for segment in self.segments() {
            match segment {
                Segment::HardBreak => writeln!(f, "HARD_BREAK")?,
                Segment::Line(line) => {
                    writeln!(f, "LINE {}", line_no)?;
                    for span in line {
                        writeln!(f, "  {}", span)?;
                    }
                    line_no += 1;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str, start: usize) -> Span {
        Span::new(SpanContent::Text(s.to_string()), start..start + s.len())
    }

    #[test]
    fn test_segments_interleave_hard_breaks() {
        let doc = Document {
            lines: vec![LineResult::default(), LineResult::default(), LineResult::default()],
        };
        let segments: Vec<_> = doc.segments().collect();
        assert_eq!(segments.len(), 5);
        assert!(matches!(segments[0], Segment::Line(_)));
        assert_eq!(segments[1], Segment::HardBreak);
        assert!(matches!(segments[2], Segment::Line(_)));
        assert_eq!(segments[3], Segment::HardBreak);
        assert!(matches!(segments[4], Segment::Line(_)));
        assert_eq!(doc.hard_breaks(), 2);
    }

    #[test]
    fn test_single_line_has_no_break() {
        let doc = Document {
            lines: vec![LineResult::default()],
        };
        assert_eq!(doc.segments().count(), 1);
        assert_eq!(doc.hard_breaks(), 0);
    }

    #[test]
    fn test_span_source() {
        let line = "ab cd";
        let span = text("cd", 3);
        assert_eq!(span.source(line), "cd");
        assert_eq!(span.len(), 2);
        assert!(!span.is_empty());
    }

    #[test]
    fn test_display_tree() {
        let doc = Document {
            lines: vec![
                LineResult {
                    spans: vec![
                        Span::new(SpanContent::Bold("hi".to_string()), 0..6),
                        text(" x", 6),
                    ],
                },
                LineResult {
                    spans: vec![Span::new(
                        SpanContent::Url {
                            label: "www.a.b".to_string(),
                            href: "https://www.a.b".to_string(),
                        },
                        0..7,
                    )],
                },
            ],
        };
        let expected = "LINE 0\n  BOLD@0..6 \"hi\"\n  TEXT@6..8 \" x\"\nHARD_BREAK\nLINE 1\n  URL@0..7 label=\"www.a.b\" href=\"https://www.a.b\"\n";
        assert_eq!(doc.to_string(), expected);
    }
}
