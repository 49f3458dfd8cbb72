//! Annotation engine for chat messages.
//!
//! [`annotate`] scans a raw message and returns, for every line, an ordered
//! list of typed spans: plain text, `**bold**`, `_italic_`, `~strike~`,
//! `[markdown](links)`, bare URLs, `*Label:**` list labels and leading list
//! markers. Spans never overlap and together cover the whole line, so a
//! renderer can walk them in order without looking at the source again.
//!
//! ```rust
//! use chatmark_parser::{SpanContent, annotate};
//!
//! let doc = annotate("**hi** see www.example.com");
//! let line = &doc.lines[0];
//! assert_eq!(line.spans[0].content, SpanContent::Bold("hi".into()));
//! ```
//!
//! Annotation is pure and keeps no state between calls; it is safe to call
//! from any number of threads.

pub mod annotator;
pub mod document;
pub mod error;

pub use annotator::{
    AnnotateOptions, DEFAULT_SCHEME, SpanKind, annotate, annotate_bytes, annotate_bytes_with,
    annotate_line, annotate_with,
};
pub use document::{Document, LineResult, Segment, Span, SpanContent};
pub use error::AnnotateError;
