//! Error types raised while configuring vibe scoring.
#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors raised when validating [`VibeWeights`](crate::VibeWeights) or a
/// matcher's jitter amplitude.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum VibeWeightsError {
    /// A weight was NaN or infinite.
    #[error("weight `{field}` must be finite")]
    NonFinite {
        /// Name of the offending weight.
        field: &'static str,
    },
    /// A weight was below zero.
    #[error("weight `{field}` must not be negative, got {value}")]
    Negative {
        /// Name of the offending weight.
        field: &'static str,
        /// Value supplied.
        value: f64,
    },
    /// The proximity radius was zero, so no distance could earn a bonus.
    #[error("proximity radius must be greater than zero")]
    ZeroRadius,
}

/// Errors raised when constructing a [`MatchThreshold`](crate::MatchThreshold).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MatchThresholdError {
    /// The threshold was NaN, infinite, or outside `0.0..=1.0`.
    #[error("match threshold must be between 0.0 and 1.0, got {value}")]
    OutOfRange {
        /// Value supplied.
        value: f64,
    },
}

/// Errors raised when building a [`Roulette`](crate::Roulette).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RouletteError {
    /// No options were supplied.
    #[error("roulette needs at least one option")]
    NoOptions,
    /// An option was empty or whitespace.
    #[error("roulette option {index} is blank")]
    BlankOption {
        /// Zero-based position of the blank option.
        index: usize,
    },
}
