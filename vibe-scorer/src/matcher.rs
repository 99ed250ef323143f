//! Rank candidates best-first and decide which ones count as a match.
//!
//! Ranking runs a [`Scorer`] over every candidate, nudges each score by a
//! small amount of injected jitter, and sorts descending. A candidate is a
//! match when its score strictly exceeds the [`MatchThreshold`].

#![forbid(unsafe_code)]

use vibe_core::{JitterSource, ScoredCandidate, Scorer, Tokens, VibeProfile};

use crate::weights::check_weight;
use crate::{KeywordProximityScorer, MatchThresholdError, SeededJitter, VibeWeightsError};

/// Threshold used by the swipe flow.
pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.65;

/// Stricter threshold used by an earlier revision of the swipe flow.
pub const LEGACY_MATCH_THRESHOLD: f64 = 0.70;

/// Total width of the jitter band; scores move by at most half of it.
pub const DEFAULT_JITTER_AMPLITUDE: f64 = 0.05;

/// Score a candidate must strictly exceed to count as a match.
///
/// # Examples
/// ```
/// use vibe_scorer::MatchThreshold;
///
/// let threshold = MatchThreshold::default();
/// assert!(threshold.admits(0.66));
/// assert!(!threshold.admits(0.65));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct MatchThreshold(f64);

impl MatchThreshold {
    /// Validate and construct a threshold.
    ///
    /// # Errors
    /// Returns [`MatchThresholdError::OutOfRange`] unless `value` lies in
    /// `0.0..=1.0`.
    pub fn new(value: f64) -> Result<Self, MatchThresholdError> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(MatchThresholdError::OutOfRange { value })
        }
    }

    /// The threshold of the earlier swipe flow revision.
    #[must_use]
    pub const fn legacy() -> Self {
        Self(LEGACY_MATCH_THRESHOLD)
    }

    /// Raw threshold value.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Report whether `score` clears the threshold.
    #[must_use]
    pub fn admits(self, score: f64) -> bool {
        score > self.0
    }
}

impl Default for MatchThreshold {
    fn default() -> Self {
        Self(DEFAULT_MATCH_THRESHOLD)
    }
}

/// Report whether `score` strictly exceeds `threshold`.
///
/// # Examples
/// ```
/// use vibe_scorer::{MatchThreshold, is_match};
///
/// assert!(is_match(0.66, MatchThreshold::default()));
/// assert!(!is_match(0.65, MatchThreshold::default()));
/// ```
#[must_use]
pub fn is_match(score: f64, threshold: MatchThreshold) -> bool {
    threshold.admits(score)
}

/// Scores and ranks candidates with a configurable scorer, threshold and
/// jitter amplitude.
///
/// # Examples
/// ```
/// use vibe_core::{NoJitter, VibeProfile};
/// use vibe_scorer::VibeMatcher;
///
/// let candidates = vec![
///     VibeProfile::new("Art Gallery Creative museums", "1.2mi"),
///     VibeProfile::new("Nightlife Coffee late-night", "0.2mi"),
/// ];
/// let ranked = VibeMatcher::default().rank("Nightlife Coffee", &candidates, &mut NoJitter);
/// assert_eq!(ranked[0].candidate.vibe, "Nightlife Coffee late-night");
/// assert!(ranked[0].matched);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct VibeMatcher<S = KeywordProximityScorer> {
    scorer: S,
    threshold: MatchThreshold,
    jitter_amplitude: f64,
}

impl Default for VibeMatcher<KeywordProximityScorer> {
    fn default() -> Self {
        Self::with_scorer(KeywordProximityScorer::default())
    }
}

impl<S: Scorer> VibeMatcher<S> {
    /// Wrap `scorer` with the default threshold and jitter amplitude.
    #[must_use]
    pub const fn with_scorer(scorer: S) -> Self {
        Self {
            scorer,
            threshold: MatchThreshold(DEFAULT_MATCH_THRESHOLD),
            jitter_amplitude: DEFAULT_JITTER_AMPLITUDE,
        }
    }

    /// Replace the match threshold.
    #[must_use]
    pub const fn with_threshold(mut self, threshold: MatchThreshold) -> Self {
        self.threshold = threshold;
        self
    }

    /// Replace the jitter amplitude. Zero disables jitter entirely.
    ///
    /// # Errors
    /// Returns [`VibeWeightsError`] when `amplitude` is negative or not
    /// finite.
    pub fn with_jitter_amplitude(mut self, amplitude: f64) -> Result<Self, VibeWeightsError> {
        self.jitter_amplitude = check_weight("jitter_amplitude", amplitude)?;
        Ok(self)
    }

    /// Threshold in use.
    #[must_use]
    pub const fn threshold(&self) -> MatchThreshold {
        self.threshold
    }

    /// Scorer in use.
    #[must_use]
    pub const fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Report whether `score` clears this matcher's threshold.
    #[must_use]
    pub fn is_match(&self, score: f64) -> bool {
        self.threshold.admits(score)
    }

    /// Score every candidate against `self_vibe` and sort best-first.
    ///
    /// Each candidate draws one jitter sample, in input order. Exact ties keep
    /// their input order.
    pub fn rank(
        &self,
        self_vibe: &str,
        candidates: &[VibeProfile],
        jitter: &mut dyn JitterSource,
    ) -> Vec<ScoredCandidate> {
        let self_tokens = Tokens::new(self_vibe);
        let mut ranked: Vec<ScoredCandidate> = candidates
            .iter()
            .map(|candidate| {
                let raw = S::sanitise(self.scorer.score(&self_tokens, candidate));
                let score = self.perturb(raw, jitter.sample());
                ScoredCandidate {
                    candidate: candidate.clone(),
                    score,
                    matched: self.is_match(score),
                }
            })
            .collect();
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        log::debug!(
            "ranked {} candidates for {} keywords; best score {:?}",
            ranked.len(),
            self_tokens.len(),
            ranked.first().map(|best| best.score)
        );
        ranked
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "jitter shifts the score around the sample midpoint"
    )]
    fn perturb(&self, raw: f64, sample: f64) -> f64 {
        let centred = if sample.is_finite() {
            sample.clamp(0.0, 1.0) - 0.5
        } else {
            0.0
        };
        S::sanitise(raw + centred * self.jitter_amplitude)
    }
}

/// Options accepted by [`score_candidates`].
#[derive(Default)]
pub struct ScoreOptions<'a> {
    /// Threshold recorded in each candidate's `matched` flag.
    pub threshold: MatchThreshold,
    /// Jitter source; `None` seeds a fresh generator from system entropy.
    pub jitter: Option<&'a mut dyn JitterSource>,
}

/// Score `candidates` against `self_vibe` with the default heuristic and
/// return them best-first.
///
/// # Examples
/// ```
/// use vibe_core::{NoJitter, VibeProfile};
/// use vibe_scorer::{ScoreOptions, score_candidates};
///
/// let candidates = vec![VibeProfile::new("Live Music Rock concerts indie", "0.5mi")];
/// let mut jitter = NoJitter;
/// let ranked = score_candidates(
///     "indie concerts",
///     &candidates,
///     ScoreOptions { jitter: Some(&mut jitter), ..ScoreOptions::default() },
/// );
/// assert!(ranked[0].score > 0.9);
/// ```
pub fn score_candidates(
    self_vibe: &str,
    candidates: &[VibeProfile],
    options: ScoreOptions<'_>,
) -> Vec<ScoredCandidate> {
    let matcher = VibeMatcher::default().with_threshold(options.threshold);
    match options.jitter {
        Some(jitter) => matcher.rank(self_vibe, candidates, jitter),
        None => matcher.rank(self_vibe, candidates, &mut SeededJitter::from_entropy()),
    }
}
