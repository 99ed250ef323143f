//! Coarse bands for presenting compatibility scores.
#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

/// Number of pips in the compatibility meter.
pub const METER_PIPS: u8 = 3;

/// Each pip covers a quarter of the score range, so a full meter needs 0.75.
const PIP_WIDTH: f64 = 0.25;

const STRONG_ABOVE: f64 = 0.8;
const MODERATE_ABOVE: f64 = 0.5;

/// How strong a compatibility score is.
///
/// # Examples
/// ```
/// use vibe_scorer::ScoreTier;
///
/// assert_eq!(ScoreTier::of(0.85), ScoreTier::Strong);
/// assert_eq!(ScoreTier::of(0.8), ScoreTier::Moderate);
/// assert_eq!(ScoreTier::of(0.5), ScoreTier::Weak);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreTier {
    /// Above 0.8.
    Strong,
    /// Above 0.5, up to 0.8.
    Moderate,
    /// 0.5 or below.
    Weak,
}

impl ScoreTier {
    /// Classify a score.
    #[must_use]
    pub fn of(score: f64) -> Self {
        if score > STRONG_ABOVE {
            Self::Strong
        } else if score > MODERATE_ABOVE {
            Self::Moderate
        } else {
            Self::Weak
        }
    }
}

/// Score as a whole percentage, rounded to nearest.
///
/// # Examples
/// ```
/// assert_eq!(vibe_scorer::percent(0.874), 87);
/// assert_eq!(vibe_scorer::percent(0.99), 99);
/// ```
#[expect(
    clippy::float_arithmetic,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the score is clamped to 0..=1 so the percentage fits in a u8"
)]
#[must_use]
pub fn percent(score: f64) -> u8 {
    if !score.is_finite() {
        return 0;
    }
    (score.clamp(0.0, 1.0) * 100.0).round() as u8
}

/// Number of lit meter pips out of [`METER_PIPS`].
///
/// A pip lights for every full quarter of the score, capped at
/// [`METER_PIPS`].
///
/// # Examples
/// ```
/// assert_eq!(vibe_scorer::meter_pips(0.99), 3);
/// assert_eq!(vibe_scorer::meter_pips(0.6), 2);
/// assert_eq!(vibe_scorer::meter_pips(0.1), 0);
/// ```
#[expect(
    clippy::float_arithmetic,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the score is clamped to 0..=1 so the pip count fits in a u8"
)]
#[must_use]
pub fn meter_pips(score: f64) -> u8 {
    if !score.is_finite() {
        return 0;
    }
    let lit = (score.clamp(0.0, 1.0) / PIP_WIDTH).floor() as u8;
    lit.min(METER_PIPS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.99, ScoreTier::Strong)]
    #[case(0.81, ScoreTier::Strong)]
    #[case(0.65, ScoreTier::Moderate)]
    #[case(0.51, ScoreTier::Moderate)]
    #[case(0.10, ScoreTier::Weak)]
    fn classifies_scores(#[case] score: f64, #[case] expected: ScoreTier) {
        assert_eq!(ScoreTier::of(score), expected);
    }

    #[rstest]
    #[case(0.0, 0)]
    #[case(0.5, 2)]
    #[case(0.49, 1)]
    #[case(0.74, 2)]
    #[case(0.75, 3)]
    #[case(0.99, 3)]
    #[case(1.0, 3)]
    #[case(-0.3, 0)]
    #[case(f64::NAN, 0)]
    fn counts_pips(#[case] score: f64, #[case] expected: u8) {
        assert_eq!(meter_pips(score), expected);
    }

    #[rstest]
    fn tiers_serialise_lowercase() {
        let json = serde_json::to_string(&ScoreTier::Moderate).expect("serialise tier");
        assert_eq!(json, r#""moderate""#);
    }
}
