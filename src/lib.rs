pub mod config;

pub use chatmark_parser::{
    AnnotateError, AnnotateOptions, Document, LineResult, Segment, Span, SpanContent, SpanKind,
};
pub use config::Config;
pub use config::ConfigBuilder;

/// Annotates a chat message into typed spans, one line at a time.
///
/// Line endings are not normalized: a `\r` before `\n` stays at the end of
/// its line as plain text.
///
/// # Examples
///
/// ```rust
/// use chatmark::annotate;
///
/// let doc = annotate("**Olá!** veja www.example.com", None);
/// println!("{}", doc);
/// ```
///
/// # Arguments
///
/// * `input` - The raw message text
/// * `config` - Optional configuration (defaults to default config)
pub fn annotate(input: &str, config: Option<Config>) -> Document {
    let config = config.unwrap_or_default();
    chatmark_parser::annotate_with(input, &config.annotate_options())
}

/// Annotates raw bytes, failing with [`AnnotateError::InvalidInput`] if they
/// are not UTF-8. Nothing is scanned in that case.
pub fn annotate_bytes(input: &[u8], config: Option<Config>) -> Result<Document, AnnotateError> {
    let config = config.unwrap_or_default();
    chatmark_parser::annotate_bytes_with(input, &config.annotate_options())
}

/// Serializes a document as JSON.
pub fn to_json(doc: &Document, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(doc)
    } else {
        serde_json::to_string(doc)
    }
}
