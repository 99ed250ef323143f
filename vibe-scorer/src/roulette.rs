//! Let chance pick what to do next.
#![forbid(unsafe_code)]

use rand::Rng;
use rand::seq::SliceRandom;

use crate::RouletteError;

/// Options on the wheel when none are supplied.
pub const DEFAULT_ROULETTE_OPTIONS: [&str; 8] = [
    "Nightlife @BarVV",
    "Live Music nearby",
    "Trivia Night",
    "Food Trucks",
    "Park Hangout",
    "Arcade Games",
    "Yoga Flow",
    "Coffee & Chat",
];

/// A wheel of activities; every spin lands on one uniformly at random.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use vibe_scorer::Roulette;
///
/// let wheel = Roulette::new(["Trivia Night", "Food Trucks"]).unwrap();
/// let mut rng = ChaCha8Rng::seed_from_u64(3);
/// let pick = wheel.spin(&mut rng);
/// assert!(wheel.options().iter().any(|option| option == pick));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roulette {
    options: Vec<String>,
}

impl Roulette {
    /// Build a wheel from `options`.
    ///
    /// # Errors
    /// Returns [`RouletteError::NoOptions`] for an empty list and
    /// [`RouletteError::BlankOption`] when an option is empty or whitespace.
    pub fn new<I, S>(options: I) -> Result<Self, RouletteError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let collected: Vec<String> = options.into_iter().map(Into::into).collect();
        if collected.is_empty() {
            return Err(RouletteError::NoOptions);
        }
        if let Some(index) = collected.iter().position(|option| option.trim().is_empty()) {
            return Err(RouletteError::BlankOption { index });
        }
        Ok(Self { options: collected })
    }

    /// Options on the wheel.
    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Spin the wheel.
    pub fn spin<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        self.options.choose(rng).map_or("", String::as_str)
    }
}

impl Default for Roulette {
    fn default() -> Self {
        Self {
            options: DEFAULT_ROULETTE_OPTIONS.into_iter().map(str::to_owned).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use rstest::rstest;

    #[rstest]
    fn rejects_empty_wheel() {
        let err = Roulette::new(Vec::<String>::new()).expect_err("empty wheel");
        assert_eq!(err, RouletteError::NoOptions);
    }

    #[rstest]
    fn rejects_blank_option() {
        let err = Roulette::new(["Yoga Flow", "  "]).expect_err("blank option");
        assert_eq!(err, RouletteError::BlankOption { index: 1 });
    }

    #[rstest]
    fn same_seed_same_pick() {
        let wheel = Roulette::default();
        let first = wheel.spin(&mut ChaCha8Rng::seed_from_u64(11)).to_owned();
        let second = wheel.spin(&mut ChaCha8Rng::seed_from_u64(11)).to_owned();
        assert_eq!(first, second);
    }

    #[rstest]
    fn every_option_is_reachable() {
        let wheel = Roulette::default();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(wheel.spin(&mut rng).to_owned());
        }
        assert_eq!(seen.len(), DEFAULT_ROULETTE_OPTIONS.len());
    }

    #[rstest]
    fn single_option_always_wins() {
        let wheel = Roulette::new(["Arcade Games"]).expect("valid wheel");
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        assert_eq!(wheel.spin(&mut rng), "Arcade Games");
    }
}
