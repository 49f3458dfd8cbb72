//! Span emission stage - turn accepted candidates into a line partition

use super::AnnotateOptions;
use super::elements::{MatchCandidate, SpanKind};
use crate::document::{LineResult, Span, SpanContent};

/// Emit the spans of one line.
///
/// `accepted` must be sorted by start and free of overlaps, as returned by
/// [`resolve_overlaps`](super::resolve_overlaps). Gaps between candidates
/// become `Text` spans, so the output always covers the whole line.
pub fn emit_spans(
    line: &str,
    accepted: &[MatchCandidate],
    options: &AnnotateOptions,
) -> LineResult {
    log::trace!("Emitting {} matches over {} bytes", accepted.len(), line.len());

    let mut spans = Vec::with_capacity(accepted.len() * 2 + 1);
    let mut pos = 0;

    for candidate in accepted {
        if candidate.start < pos {
            log::debug!(
                "Skipping {:?} at {}: overlaps previous span ending at {}",
                candidate.kind,
                candidate.start,
                pos
            );
            continue;
        }

        if candidate.start > pos {
            spans.push(text_span(line, pos, candidate.start));
        }

        spans.push(Span::new(span_content(candidate, options), candidate.range()));
        pos = candidate.end();
    }

    if pos < line.len() {
        spans.push(text_span(line, pos, line.len()));
    }

    LineResult { spans }
}

fn text_span(line: &str, start: usize, end: usize) -> Span {
    Span::new(SpanContent::Text(line[start..end].to_string()), start..end)
}

fn span_content(candidate: &MatchCandidate, options: &AnnotateOptions) -> SpanContent {
    match candidate.kind {
        SpanKind::Text => SpanContent::Text(candidate.text().to_string()),
        SpanKind::Bold => SpanContent::Bold(candidate.group(1).to_string()),
        SpanKind::Italic => SpanContent::Italic(candidate.group(1).to_string()),
        SpanKind::Strikethrough => SpanContent::Strikethrough(candidate.group(1).to_string()),
        SpanKind::Link => SpanContent::Link {
            label: candidate.group(1).to_string(),
            href: candidate.group(2).to_string(),
        },
        SpanKind::Url => {
            let label = candidate.text();
            SpanContent::Url {
                label: label.to_string(),
                href: normalize_href(label, &options.default_scheme),
            }
        }
        SpanKind::ListBold => SpanContent::ListBold {
            prefix: candidate.group(1).to_string(),
            label: candidate.group(2).trim().to_string(),
        },
        // The glyph (group 3) is replaced by a bullet at render time
        SpanKind::ListMarker => SpanContent::ListMarker {
            prefix: candidate.group(1).to_string(),
            indent: candidate.group(2).to_string(),
        },
    }
}

/// Prefix `url` with `default_scheme` unless it already carries one.
pub fn normalize_href(url: &str, default_scheme: &str) -> String {
    if has_scheme(url) {
        url.to_string()
    } else {
        format!("{}{}", default_scheme, url)
    }
}

/// Whether `url` starts with an explicit `http://` or `https://` scheme,
/// the only schemes a bare URL match can carry. A `://` later in a `www.`
/// address does not count.
pub fn has_scheme(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}
