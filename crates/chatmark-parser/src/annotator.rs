//! Line-by-line annotation of chat messages.
//!
//! Each line goes through three stages:
//! 1. [`collect_candidates`] runs every pattern in the [`Registry`]
//! 2. [`resolve_overlaps`] keeps a non-overlapping subset, preferring earlier
//!    starts and then higher priorities
//! 3. [`emit_spans`] partitions the line into typed spans
//!
//! No state survives between lines or calls.

mod collector;
mod elements;
mod emitter;
mod patterns;
mod resolver;


pub use collector::collect_candidates;
pub use elements::{MatchCandidate, SpanKind};
pub use emitter::{emit_spans, has_scheme, normalize_href};
pub use patterns::{PatternDescriptor, Registry, registry};
pub use resolver::{resolve_overlaps, sort_candidates};

use crate::document::{Document, LineResult};
use crate::error::AnnotateError;

/// Scheme prepended to bare URLs that have none, like `www.example.com`.
pub const DEFAULT_SCHEME: &str = "https://";

/// Options that affect span payloads. They never change which spans are
/// produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotateOptions {
    pub default_scheme: String,
}

impl Default for AnnotateOptions {
    fn default() -> Self {
        Self {
            default_scheme: DEFAULT_SCHEME.to_string(),
        }
    }
}

/// Annotate `text` with default options.
pub fn annotate(text: &str) -> Document {
    annotate_with(text, &AnnotateOptions::default())
}

/// Annotate every `\n`-delimited line of `text`.
pub fn annotate_with(text: &str, options: &AnnotateOptions) -> Document {
    log::debug!("Annotating {} bytes", text.len());

    let lines: Vec<LineResult> = text
        .split('\n')
        .map(|line| annotate_line(line, options))
        .collect();

    log::debug!("Annotated {} line(s)", lines.len());
    Document { lines }
}

/// Annotate a single line. `line` should not contain `\n`.
pub fn annotate_line(line: &str, options: &AnnotateOptions) -> LineResult {
    let registry = registry();
    let candidates = collect_candidates(line, registry);
    let accepted = resolve_overlaps(candidates, registry);
    emit_spans(line, &accepted, options)
}

/// Annotate raw bytes, rejecting anything that is not UTF-8 up front.
pub fn annotate_bytes(bytes: &[u8]) -> Result<Document, AnnotateError> {
    annotate_bytes_with(bytes, &AnnotateOptions::default())
}

pub fn annotate_bytes_with(
    bytes: &[u8],
    options: &AnnotateOptions,
) -> Result<Document, AnnotateError> {
    let text = std::str::from_utf8(bytes)?;
    Ok(annotate_with(text, options))
}
