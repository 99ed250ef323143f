//! A ranked deck of candidates the visitor swipes through.
//!
//! The deck shows one candidate at a time, best match first. Swiping "vibe"
//! on a candidate whose score clears the threshold produces a match and
//! leaves the cursor where it is; any other swipe moves to the next
//! candidate, wrapping back to the top after the last one.

#![forbid(unsafe_code)]

use vibe_core::{JitterSource, ScoredCandidate, Scorer, VibeProfile};

use crate::{KeywordProximityScorer, SeededJitter, VibeMatcher};

/// Direction of a swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// The visitor likes the candidate's vibe.
    Vibe,
    /// The visitor skips the candidate.
    Pass,
}

/// Result of a swipe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SwipeOutcome<'a> {
    /// The candidate under the cursor matched.
    Matched(&'a ScoredCandidate),
    /// The cursor moved on; `next` is now under it.
    Advanced {
        /// Candidate now shown.
        next: &'a ScoredCandidate,
    },
    /// There is nobody to swipe on.
    Empty,
}

/// Swipeable ranking of nearby candidates.
///
/// # Examples
/// ```
/// use vibe_core::{NoJitter, VibeProfile};
/// use vibe_scorer::{Swipe, SwipeDeck, SwipeOutcome, VibeMatcher};
///
/// let pool = vec![
///     VibeProfile::new("Nightlife Coffee late-night", "0.2mi"),
///     VibeProfile::new("Art Gallery Creative museums", "1.2mi"),
/// ];
/// let mut deck = SwipeDeck::new(VibeMatcher::default(), NoJitter, pool, "Nightlife Coffee");
/// assert!(matches!(deck.swipe(Swipe::Vibe), SwipeOutcome::Matched(_)));
/// ```
#[derive(Debug, Clone)]
pub struct SwipeDeck<S = KeywordProximityScorer, J = SeededJitter> {
    matcher: VibeMatcher<S>,
    jitter: J,
    pool: Vec<VibeProfile>,
    self_vibe: String,
    ranked: Vec<ScoredCandidate>,
    cursor: usize,
}

impl<S: Scorer, J: JitterSource> SwipeDeck<S, J> {
    /// Rank `pool` against `self_vibe` and place the cursor on the best match.
    pub fn new(
        matcher: VibeMatcher<S>,
        jitter: J,
        pool: Vec<VibeProfile>,
        self_vibe: impl Into<String>,
    ) -> Self {
        let mut deck = Self {
            matcher,
            jitter,
            pool,
            self_vibe: self_vibe.into(),
            ranked: Vec::new(),
            cursor: 0,
        };
        deck.rebuild();
        deck
    }

    /// Candidate under the cursor, if any.
    #[must_use]
    pub fn current(&self) -> Option<&ScoredCandidate> {
        self.ranked.get(self.cursor)
    }

    /// Zero-based cursor position within the ranking.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.cursor
    }

    /// Full ranking, best first.
    #[must_use]
    pub fn ranked(&self) -> &[ScoredCandidate] {
        &self.ranked
    }

    /// Number of candidates in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    /// Report whether the deck has no candidates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }

    /// Vibe text the current ranking was computed for.
    #[must_use]
    pub fn self_vibe(&self) -> &str {
        &self.self_vibe
    }

    /// Apply a swipe to the candidate under the cursor.
    pub fn swipe(&mut self, swipe: Swipe) -> SwipeOutcome<'_> {
        let Some(score) = self.current().map(|candidate| candidate.score) else {
            return SwipeOutcome::Empty;
        };
        if swipe == Swipe::Vibe && self.matcher.is_match(score) {
            log::debug!("matched candidate at position {}", self.cursor);
            return self
                .ranked
                .get(self.cursor)
                .map_or(SwipeOutcome::Empty, SwipeOutcome::Matched);
        }
        self.cursor = self
            .cursor
            .saturating_add(1)
            .checked_rem(self.ranked.len())
            .unwrap_or(0);
        self.ranked
            .get(self.cursor)
            .map_or(SwipeOutcome::Empty, |next| SwipeOutcome::Advanced { next })
    }

    /// Recompute every score for a new visitor vibe and return to the top.
    pub fn rescore(&mut self, self_vibe: impl Into<String>) {
        self.self_vibe = self_vibe.into();
        self.rebuild();
    }

    /// Replace the candidate pool, rescoring against the current vibe.
    pub fn replace_pool(&mut self, pool: Vec<VibeProfile>) {
        self.pool = pool;
        self.rebuild();
    }

    fn rebuild(&mut self) {
        self.ranked = self
            .matcher
            .rank(&self.self_vibe, &self.pool, &mut self.jitter);
        self.cursor = 0;
    }
}
