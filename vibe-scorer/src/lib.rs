//! Vibe compatibility scoring for nearby candidates.
//!
//! The crate turns a visitor's free-text vibe and a list of nearby
//! [`VibeProfile`](vibe_core::VibeProfile)s into a best-first ranking:
//! - **Scoring** ([`KeywordProximityScorer`]) rewards candidates that mention
//!   the visitor's keywords and who are close by, normalised into
//!   `0.10..=0.99`.
//! - **Ranking** ([`VibeMatcher`], [`score_candidates`]) perturbs each score
//!   with injected jitter so near-ties do not always break the same way, then
//!   sorts descending and flags candidates above the [`MatchThreshold`].
//! - **Searching** ([`filter_candidates`]) narrows a pool to candidates whose
//!   name or vibe contains a query.
//! - **Swiping** ([`SwipeDeck`]) walks the ranking one candidate at a time.
//! - **Roulette** ([`Roulette`]) picks a random activity from a wheel.
//!
//! All randomness is passed in, so seeded generators make every operation
//! reproducible.
//!
//! # Examples
//!
//! ```
//! use vibe_core::VibeProfile;
//! use vibe_scorer::{ScoreOptions, SeededJitter, score_candidates};
//!
//! let candidates = vec![
//!     VibeProfile::new("Park Hangout Chill nature walking", "0.1mi"),
//!     VibeProfile::new("Happy Hour Beer social pub-crawl", "0.9mi"),
//! ];
//! let mut jitter = SeededJitter::seeded(42);
//! let ranked = score_candidates(
//!     "chill walking",
//!     &candidates,
//!     ScoreOptions { jitter: Some(&mut jitter), ..ScoreOptions::default() },
//! );
//! assert_eq!(ranked[0].candidate.vibe, "Park Hangout Chill nature walking");
//! ```

#![forbid(unsafe_code)]

mod deck;
mod error;
mod filter;
mod jitter;
mod keyword;
mod matcher;
mod roulette;
mod tier;
mod weights;

pub use deck::{Swipe, SwipeDeck, SwipeOutcome};
pub use error::{MatchThresholdError, RouletteError, VibeWeightsError};
pub use filter::{filter_candidates, matches_query};
pub use jitter::{RngJitter, SeededJitter};
pub use keyword::KeywordProximityScorer;
pub use matcher::{
    DEFAULT_JITTER_AMPLITUDE, DEFAULT_MATCH_THRESHOLD, LEGACY_MATCH_THRESHOLD, MatchThreshold,
    ScoreOptions, VibeMatcher, is_match, score_candidates,
};
pub use roulette::{DEFAULT_ROULETTE_OPTIONS, Roulette};
pub use tier::{METER_PIPS, ScoreTier, meter_pips, percent};
pub use weights::VibeWeights;
