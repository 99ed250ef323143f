//! Tunable constants for keyword and proximity scoring.
#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

use crate::VibeWeightsError;

/// Weights applied by [`KeywordProximityScorer`](crate::KeywordProximityScorer).
///
/// The defaults reproduce the production heuristic:
/// `keyword = overlap / self_tokens * 0.7 (+ 0.2 on any overlap)`, a neutral
/// `0.5` when the visitor declared no vibe, and a proximity bonus of up to
/// `0.15` that fades out linearly over two miles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VibeWeights {
    /// Multiplier applied to the share of the visitor's keywords the
    /// candidate also mentions.
    pub overlap_weight: f64,
    /// Flat bonus added when at least one keyword overlaps.
    pub overlap_bonus: f64,
    /// Keyword score used when the visitor has not declared a vibe.
    pub neutral_keyword_score: f64,
    /// Largest bonus a candidate standing right next to the visitor earns.
    pub proximity_bonus: f64,
    /// Distance in miles at which the proximity bonus reaches zero.
    pub proximity_radius_miles: f64,
}

impl VibeWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`VibeWeightsError`] when a weight is non-finite or negative,
    /// or when the proximity radius is zero.
    pub fn validate(self) -> Result<Self, VibeWeightsError> {
        for (field, value) in self.fields() {
            check_weight(field, value)?;
        }
        if self.proximity_radius_miles == 0.0 {
            return Err(VibeWeightsError::ZeroRadius);
        }
        Ok(self)
    }

    const fn fields(self) -> [(&'static str, f64); 5] {
        [
            ("overlap_weight", self.overlap_weight),
            ("overlap_bonus", self.overlap_bonus),
            ("neutral_keyword_score", self.neutral_keyword_score),
            ("proximity_bonus", self.proximity_bonus),
            ("proximity_radius_miles", self.proximity_radius_miles),
        ]
    }
}

/// Check a single weight is finite and non-negative.
///
/// # Errors
/// Returns [`VibeWeightsError::NonFinite`] or [`VibeWeightsError::Negative`].
pub(crate) fn check_weight(field: &'static str, value: f64) -> Result<f64, VibeWeightsError> {
    if !value.is_finite() {
        return Err(VibeWeightsError::NonFinite { field });
    }
    if value < 0.0 {
        return Err(VibeWeightsError::Negative { field, value });
    }
    Ok(value)
}

impl Default for VibeWeights {
    fn default() -> Self {
        Self {
            overlap_weight: 0.7,
            overlap_bonus: 0.2,
            neutral_keyword_score: 0.5,
            proximity_bonus: 0.15,
            proximity_radius_miles: 2.0,
        }
    }
}
