//! Keyword overlap plus proximity: the canonical vibe compatibility heuristic.
//!
//! A candidate earns a keyword score from how many of the visitor's vibe
//! keywords they also mention, and a proximity bonus that shrinks linearly
//! with distance. The sum is clamped into the score range by
//! [`Scorer::sanitise`].

#![forbid(unsafe_code)]

use vibe_core::{Distance, Scorer, Tokens, VibeProfile};

use crate::{VibeWeights, VibeWeightsError};

/// Scorer combining keyword overlap with a proximity bonus.
///
/// # Examples
/// ```
/// use vibe_core::{Scorer, Tokens, VibeProfile};
/// use vibe_scorer::KeywordProximityScorer;
///
/// let scorer = KeywordProximityScorer::default();
/// let me = Tokens::new("Nightlife Coffee");
/// let alex = VibeProfile::new("Nightlife Coffee late-night", "0.2mi");
/// assert_eq!(scorer.score(&me, &alex), 0.99);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct KeywordProximityScorer {
    weights: VibeWeights,
}

impl KeywordProximityScorer {
    /// Build a scorer from custom weights.
    ///
    /// # Errors
    /// Returns [`VibeWeightsError`] when the weights fail validation.
    pub fn new(weights: VibeWeights) -> Result<Self, VibeWeightsError> {
        Ok(Self {
            weights: weights.validate()?,
        })
    }

    /// Weights in use.
    #[must_use]
    pub const fn weights(&self) -> VibeWeights {
        self.weights
    }

    /// Keyword component of the score.
    ///
    /// Returns the neutral score when the visitor has no keywords.
    #[expect(
        clippy::float_arithmetic,
        reason = "keyword scoring scales the overlap ratio"
    )]
    #[must_use]
    pub fn keyword_score(&self, self_tokens: &Tokens, target_tokens: &Tokens) -> f64 {
        if self_tokens.is_empty() {
            return self.weights.neutral_keyword_score;
        }
        let overlap = self_tokens.overlap(target_tokens);
        let ratio = count_as_f64(overlap) / count_as_f64(self_tokens.len().max(1));
        let bonus = if overlap > 0 {
            self.weights.overlap_bonus
        } else {
            0.0
        };
        ratio * self.weights.overlap_weight + bonus
    }

    /// Proximity component of the score; zero at or beyond the radius.
    #[expect(
        clippy::float_arithmetic,
        reason = "the bonus decays linearly with distance"
    )]
    #[must_use]
    pub fn proximity_bonus(&self, distance: Distance) -> f64 {
        let remaining = 1.0 - distance.miles() / self.weights.proximity_radius_miles;
        (self.weights.proximity_bonus * remaining).max(0.0)
    }
}

impl Scorer for KeywordProximityScorer {
    #[expect(
        clippy::float_arithmetic,
        reason = "the score is the sum of its components"
    )]
    fn score(&self, self_tokens: &Tokens, candidate: &VibeProfile) -> f64 {
        let target_tokens = Tokens::new(&candidate.vibe);
        let keyword = self.keyword_score(self_tokens, &target_tokens);
        let proximity = self.proximity_bonus(candidate.distance);
        Self::sanitise(keyword + proximity)
    }
}

/// Convert a token count to `f64`, saturating at `u32::MAX`.
fn count_as_f64(count: usize) -> f64 {
    f64::from(u32::try_from(count).unwrap_or(u32::MAX))
}
