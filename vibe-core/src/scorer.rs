//! Score candidates against the visitor's own vibe.
//!
//! The `Scorer` trait assigns a compatibility score to a
//! [`VibeProfile`](crate::VibeProfile) given the visitor's tokenised vibe.

use crate::{Tokens, VibeProfile};

/// Lowest score a candidate can receive.
pub const SCORE_FLOOR: f64 = 0.10;

/// Highest score a candidate can receive.
pub const SCORE_CEILING: f64 = 0.99;

/// Calculate a compatibility score for a candidate.
///
/// Higher scores indicate a better match between the candidate and the
/// visitor. Implementations must be thread-safe (`Send` + `Sync`) and
/// deterministic: random perturbation is layered on by the ranking code so
/// that every scorer shares one jitter contract.
///
/// The method is infallible. Implementations must:
/// - Produce finite (`f64::is_finite`) scores.
/// - Stay within `SCORE_FLOOR..=SCORE_CEILING`.
///
/// Use [`Scorer::sanitise`] to apply these guards.
///
/// # Examples
///
/// ```rust
/// use vibe_core::{Scorer, Tokens, VibeProfile};
///
/// struct Flat;
///
/// impl Scorer for Flat {
///     fn score(&self, _self_tokens: &Tokens, _candidate: &VibeProfile) -> f64 {
///         Self::sanitise(2.0)
///     }
/// }
///
/// let candidate = VibeProfile::new("Live Music", "0.5mi");
/// assert_eq!(Flat.score(&Tokens::new("jazz"), &candidate), 0.99);
/// ```
pub trait Scorer: Send + Sync {
    /// Return a score for `candidate` according to `self_tokens`.
    fn score(&self, self_tokens: &Tokens, candidate: &VibeProfile) -> f64;

    /// Clamp and validate a raw score.
    ///
    /// Returns [`SCORE_FLOOR`] for non-finite values and clamps everything
    /// else to `SCORE_FLOOR..=SCORE_CEILING`.
    #[must_use]
    fn sanitise(score: f64) -> f64
    where
        Self: Sized,
    {
        if !score.is_finite() {
            return SCORE_FLOOR;
        }
        score.clamp(SCORE_FLOOR, SCORE_CEILING)
    }
}
