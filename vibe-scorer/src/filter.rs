//! Narrow a candidate pool with a free-text search.
#![forbid(unsafe_code)]

use vibe_core::VibeProfile;

/// Report whether `candidate`'s name or vibe contains `query`, ignoring case.
///
/// An empty query matches everyone.
///
/// # Examples
/// ```
/// use vibe_core::VibeProfile;
/// use vibe_scorer::matches_query;
///
/// let jamie = VibeProfile::new("Live Music Rock", "0.5mi").with_identity("2", "Jamie");
/// assert!(matches_query(&jamie, "ROCK"));
/// assert!(matches_query(&jamie, "jam"));
/// assert!(!matches_query(&jamie, "coffee"));
/// ```
#[must_use]
pub fn matches_query(candidate: &VibeProfile, query: &str) -> bool {
    contains_lowered(candidate, &query.to_lowercase())
}

/// Keep the candidates whose name or vibe contains `query`, ignoring case,
/// in their original order.
#[must_use]
pub fn filter_candidates(query: &str, candidates: &[VibeProfile]) -> Vec<VibeProfile> {
    let needle = query.to_lowercase();
    let kept: Vec<VibeProfile> = candidates
        .iter()
        .filter(|candidate| contains_lowered(candidate, &needle))
        .cloned()
        .collect();
    log::debug!(
        "search {query:?} kept {} of {} candidates",
        kept.len(),
        candidates.len()
    );
    kept
}

fn contains_lowered(candidate: &VibeProfile, needle: &str) -> bool {
    candidate.name.to_lowercase().contains(needle)
        || candidate.vibe.to_lowercase().contains(needle)
}
