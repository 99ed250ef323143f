//! Candidate profiles and their scored counterparts.
//!
//! Identity fields (`id`, `name`, `verified`) ride along for the benefit of
//! callers; scoring and ranking only look at the vibe text and distance.

use crate::Distance;

/// A person nearby, described by what they are up to.
///
/// # Examples
/// ```
/// use vibe_core::VibeProfile;
///
/// let alex = VibeProfile::new("Nightlife Coffee late-night", "0.2mi")
///     .with_identity("1", "Alex");
/// assert_eq!(alex.distance.miles(), 0.2);
/// assert_eq!(alex.name, "Alex");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct VibeProfile {
    /// Caller-assigned identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-form description of the current activity, mood or interest.
    pub vibe: String,
    /// How far away the person is.
    pub distance: Distance,
    /// Whether the profile has been verified.
    pub verified: bool,
}

impl VibeProfile {
    /// Build an anonymous profile from vibe text and a `"<number>mi"`
    /// distance string. Malformed distances fall back to one mile.
    #[must_use]
    pub fn new(vibe: impl Into<String>, distance: &str) -> Self {
        Self {
            vibe: vibe.into(),
            distance: Distance::parse_or_default(distance),
            ..Self::default()
        }
    }

    /// Attach an identifier and display name, returning `self` for chaining.
    #[must_use]
    pub fn with_identity(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.id = id.into();
        self.name = name.into();
        self
    }

    /// Mark the profile as verified.
    #[must_use]
    pub const fn verified(mut self) -> Self {
        self.verified = true;
        self
    }
}

/// A candidate paired with its compatibility score.
///
/// Scores always lie in [`SCORE_FLOOR`](crate::SCORE_FLOOR)`..=`
/// [`SCORE_CEILING`](crate::SCORE_CEILING). A scored candidate is a snapshot:
/// when the visitor's vibe changes the whole ranking is rebuilt rather than
/// updated in place.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredCandidate {
    /// The profile that was scored.
    pub candidate: VibeProfile,
    /// Compatibility score.
    pub score: f64,
    /// Whether the score cleared the match threshold used for the ranking.
    pub matched: bool,
}
