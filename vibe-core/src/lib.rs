//! Core domain types for the Vicinity Vibe engine.
//!
//! The crate models the people a visitor can match with ([`VibeProfile`]),
//! how far away they are ([`Distance`]), and the outcome of scoring them
//! ([`ScoredCandidate`]). It also defines the seams the scoring crates plug
//! into: the [`Scorer`] trait for compatibility heuristics and the
//! [`JitterSource`] trait for injected randomness.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod distance;
pub mod jitter;
pub mod profile;
pub mod scorer;
pub mod test_support;
pub mod tokenize;

pub use distance::{DEFAULT_DISTANCE_MILES, Distance, DistanceParseError};
pub use jitter::{JitterSource, NoJitter};
pub use profile::{ScoredCandidate, VibeProfile};
pub use scorer::{SCORE_CEILING, SCORE_FLOOR, Scorer};
pub use tokenize::{MIN_TOKEN_CHARS, Tokens, tokenize};
