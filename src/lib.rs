//! Facade crate for the vicinity vibe matcher.
//!
//! This crate re-exports the core domain types together with the default
//! keyword and proximity scorer, the search filter, the ranking entry points,
//! and the swipe deck and roulette helpers built on top of them.

#![forbid(unsafe_code)]

pub use vibe_core::{
    DEFAULT_DISTANCE_MILES, Distance, DistanceParseError, JitterSource, NoJitter, SCORE_CEILING,
    SCORE_FLOOR, ScoredCandidate, Scorer, Tokens, VibeProfile, tokenize,
};

pub use vibe_scorer::{
    DEFAULT_MATCH_THRESHOLD, KeywordProximityScorer, MatchThreshold, MatchThresholdError,
    Roulette, RouletteError, ScoreOptions, ScoreTier, SeededJitter, Swipe, SwipeDeck,
    SwipeOutcome, VibeMatcher, VibeWeights, VibeWeightsError, filter_candidates, is_match,
    score_candidates,
};
