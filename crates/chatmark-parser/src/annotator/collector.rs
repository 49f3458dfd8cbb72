//! Collection stage - find every pattern match in a line

use super::elements::MatchCandidate;
use super::patterns::{PatternDescriptor, Registry};

/// Collect match candidates for every registered pattern.
///
/// Each pattern is scanned independently from the start of the line, so
/// candidates of different kinds may overlap. Within one pattern, matches
/// never overlap. The result is grouped by registry order, not sorted by
/// position; ordering happens in the resolve stage.
pub fn collect_candidates(line: &str, registry: &Registry) -> Vec<MatchCandidate> {
    collect_with(line, registry.patterns())
}

pub(crate) fn collect_with(line: &str, patterns: &[PatternDescriptor]) -> Vec<MatchCandidate> {
    log::trace!(
        "Collecting candidates: {:?} ({} bytes)",
        &line[..floor_char_boundary(line, 40)],
        line.len()
    );

    let mut candidates = Vec::new();

    for pattern in patterns {
        let before = candidates.len();
        let mut pos = 0;

        while pos <= line.len() {
            let Some(caps) = pattern.matcher.captures_at(line, pos) else {
                break;
            };
            let Some(whole) = caps.get(0) else {
                break;
            };

            let groups = caps
                .iter()
                .map(|g| g.map(|m| m.as_str().to_string()).unwrap_or_default())
                .collect();

            candidates.push(MatchCandidate {
                start: whole.start(),
                length: whole.len(),
                kind: pattern.kind,
                groups,
            });

            // An empty match would be found again at the same position
            pos = if whole.is_empty() {
                step_past(line, whole.end())
            } else {
                whole.end()
            };
        }

        if candidates.len() > before {
            log::trace!(
                "  {:?}: {} candidate(s)",
                pattern.kind,
                candidates.len() - before
            );
        }
    }

    candidates
}

/// Position of the next char boundary after `pos`, or past the end.
fn step_past(text: &str, pos: usize) -> usize {
    text[pos..]
        .chars()
        .next()
        .map_or(text.len() + 1, |c| pos + c.len_utf8())
}

fn floor_char_boundary(text: &str, max: usize) -> usize {
    if max >= text.len() {
        return text.len();
    }
    (0..=max).rev().find(|&i| text.is_char_boundary(i)).unwrap_or(0)
}
