//! Overlap resolution stage - pick a non-overlapping subset of candidates

use std::cmp::Ordering;

use super::elements::MatchCandidate;
use super::patterns::Registry;

/// Order candidates by position, then by descending priority.
///
/// The sort is stable, so candidates with equal start and priority keep
/// their collection order.
pub fn sort_candidates(candidates: &mut [MatchCandidate], registry: &Registry) {
    candidates.sort_by(|a, b| compare(a, b, registry));
}

fn compare(a: &MatchCandidate, b: &MatchCandidate, registry: &Registry) -> Ordering {
    a.start
        .cmp(&b.start)
        .then_with(|| registry.priority(b.kind).cmp(&registry.priority(a.kind)))
}

/// Resolve overlapping candidates.
///
/// After sorting, candidates are walked left to right and a candidate is
/// accepted only if it starts at or after the end of the most recently
/// accepted one. Everything else is dropped. The returned list is sorted by
/// start and contains no overlaps.
pub fn resolve_overlaps(
    mut candidates: Vec<MatchCandidate>,
    registry: &Registry,
) -> Vec<MatchCandidate> {
    log::trace!("Resolving {} candidates", candidates.len());

    sort_candidates(&mut candidates, registry);

    let mut accepted: Vec<MatchCandidate> = Vec::with_capacity(candidates.len());
    let mut last_end = 0;

    for candidate in candidates {
        if candidate.start >= last_end {
            last_end = candidate.end();
            accepted.push(candidate);
        } else {
            log::trace!(
                "  Dropping {:?} at {}..{} (overlaps accepted span ending at {})",
                candidate.kind,
                candidate.start,
                candidate.end(),
                last_end
            );
        }
    }

    log::trace!("Accepted {} candidates", accepted.len());
    accepted
}
