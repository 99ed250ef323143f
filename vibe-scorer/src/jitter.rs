//! Random jitter sources backed by `rand`.
#![forbid(unsafe_code)]

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use vibe_core::JitterSource;

/// Jitter drawn from any [`Rng`].
#[derive(Debug, Clone)]
pub struct RngJitter<R> {
    rng: R,
}

/// Jitter drawn from a `ChaCha8` generator.
///
/// Seed it for reproducible rankings, or draw the seed from the operating
/// system when rankings should vary between calls.
///
/// # Examples
/// ```
/// use vibe_core::JitterSource;
/// use vibe_scorer::SeededJitter;
///
/// let mut first = SeededJitter::seeded(7);
/// let mut second = SeededJitter::seeded(7);
/// assert_eq!(first.sample(), second.sample());
/// ```
pub type SeededJitter = RngJitter<ChaCha8Rng>;

impl<R: Rng> RngJitter<R> {
    /// Wrap an existing generator.
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngJitter<ChaCha8Rng> {
    /// Generator seeded from `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Generator seeded from operating system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> JitterSource for RngJitter<R> {
    fn sample(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }
}
