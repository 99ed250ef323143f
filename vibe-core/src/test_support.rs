//! Deterministic scorers and jitter sources for unit and behaviour tests.

use std::collections::HashMap;

use crate::{JitterSource, SCORE_FLOOR, Scorer, Tokens, VibeProfile};

/// Test `Scorer` that returns a preset score per candidate vibe text.
///
/// Candidates without a preset receive [`SCORE_FLOOR`].
#[derive(Debug, Clone, Default)]
pub struct FixedScorer {
    scores: HashMap<String, f64>,
}

impl FixedScorer {
    /// Create a scorer with no presets.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Preset the score returned for candidates whose vibe equals `vibe`.
    #[must_use]
    pub fn with_score(mut self, vibe: impl Into<String>, score: f64) -> Self {
        self.scores.insert(vibe.into(), score);
        self
    }
}

impl Scorer for FixedScorer {
    fn score(&self, _self_tokens: &Tokens, candidate: &VibeProfile) -> f64 {
        let raw = self
            .scores
            .get(&candidate.vibe)
            .copied()
            .unwrap_or(SCORE_FLOOR);
        Self::sanitise(raw)
    }
}

/// Jitter source replaying a fixed list of samples, cycling when exhausted.
///
/// An empty list behaves like [`NoJitter`](crate::NoJitter).
#[derive(Debug, Clone, Default)]
pub struct SequenceJitter {
    samples: Vec<f64>,
    cursor: usize,
}

impl SequenceJitter {
    /// Replay `samples` in order.
    #[must_use]
    pub const fn new(samples: Vec<f64>) -> Self {
        Self { samples, cursor: 0 }
    }
}

impl JitterSource for SequenceJitter {
    fn sample(&mut self) -> f64 {
        let Some(value) = self.samples.get(self.cursor).copied() else {
            return 0.5;
        };
        self.cursor = self
            .cursor
            .saturating_add(1)
            .checked_rem(self.samples.len())
            .unwrap_or(0);
        value
    }
}
