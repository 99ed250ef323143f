//! Injectable randomness for score perturbation.
//!
//! Rankings nudge each score by a small random amount so that near-ties do
//! not always resolve the same way. The randomness is passed in rather than
//! drawn from a global so tests can pin it down.

/// A source of uniform samples in `0.0..1.0`.
///
/// A sample of `0.5` means "no perturbation"; lower and higher samples push
/// a score down or up respectively.
pub trait JitterSource {
    /// Draw the next sample.
    fn sample(&mut self) -> f64;
}

/// Jitter source that never perturbs scores.
///
/// # Examples
/// ```
/// use vibe_core::{JitterSource, NoJitter};
///
/// assert_eq!(NoJitter.sample(), 0.5);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NoJitter;

impl JitterSource for NoJitter {
    fn sample(&mut self) -> f64 {
        0.5
    }
}

impl<J: JitterSource + ?Sized> JitterSource for &mut J {
    fn sample(&mut self) -> f64 {
        (**self).sample()
    }
}

impl<J: JitterSource + ?Sized> JitterSource for Box<J> {
    fn sample(&mut self) -> f64 {
        (**self).sample()
    }
}
