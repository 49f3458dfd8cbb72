//! Pattern registry - the fixed table of recognizable markup
//!
//! Each descriptor pairs a [`SpanKind`] with a compiled matcher and a
//! priority. When two candidates start at the same byte, the higher priority
//! wins. Every matcher is confined to a single line.
//!
//! The table is built once and never mutated. `Regex` searches do not carry a
//! scan position, so sharing the table across threads and calls is safe.

use std::sync::LazyLock;

use regex::Regex;

use super::elements::SpanKind;

/// `*Label:**` - a bold list label. Group 1 is the prefix (line start or one
/// whitespace char), group 2 the raw label.
const LIST_BOLD: &str = r"(^|\s)\*([^*:]+):\*\*";

/// `* item`, `- item`, `• item`. Group 1 is the prefix, group 2 the
/// indentation, group 3 the glyph.
const LIST_MARKER: &str = r"(^|\n)(\s*)([*\-•])\s+";

/// `[label](href)`
const LINK: &str = r"\[([^\]]+)\]\(([^)]+)\)";

/// `**bold**`
const BOLD: &str = r"\*\*([^*]+?)\*\*";

/// `_italic_`
const ITALIC: &str = r"_([^_]+)_";

/// `~strike~`
const STRIKETHROUGH: &str = r"~([^~]+)~";

/// Bare URLs, with or without an explicit http(s) scheme.
const URL: &str = r"(https?://\S+)|(www\.\S+)";

/// One recognizable markup construct.
#[derive(Debug)]
pub struct PatternDescriptor {
    pub kind: SpanKind,
    pub matcher: Regex,
    pub priority: u8,
}

impl PatternDescriptor {
    pub(crate) fn new(kind: SpanKind, pattern: &str, priority: u8) -> Self {
        Self {
            kind,
            matcher: Regex::new(pattern).expect("registry patterns are valid"),
            priority,
        }
    }
}

/// The ordered pattern table.
#[derive(Debug)]
pub struct Registry {
    patterns: Vec<PatternDescriptor>,
}

impl Registry {
    fn new() -> Self {
        let patterns = vec![
            PatternDescriptor::new(SpanKind::ListBold, LIST_BOLD, 10),
            PatternDescriptor::new(SpanKind::ListMarker, LIST_MARKER, 9),
            PatternDescriptor::new(SpanKind::Link, LINK, 8),
            PatternDescriptor::new(SpanKind::Bold, BOLD, 7),
            PatternDescriptor::new(SpanKind::Italic, ITALIC, 6),
            PatternDescriptor::new(SpanKind::Strikethrough, STRIKETHROUGH, 5),
            PatternDescriptor::new(SpanKind::Url, URL, 4),
        ];
        log::debug!("Compiled {} annotation patterns", patterns.len());
        Self { patterns }
    }

    /// Descriptors in registry order.
    pub fn patterns(&self) -> &[PatternDescriptor] {
        &self.patterns
    }

    pub fn get(&self, kind: SpanKind) -> Option<&PatternDescriptor> {
        self.patterns.iter().find(|p| p.kind == kind)
    }

    /// Tie-break rank for `kind`. `Text` has no pattern and ranks lowest.
    pub fn priority(&self, kind: SpanKind) -> u8 {
        self.get(kind).map(|p| p.priority).unwrap_or(0)
    }
}

static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::new);

/// The shared, read-only pattern table.
pub fn registry() -> &'static Registry {
    &REGISTRY
}
