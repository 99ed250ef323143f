#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! Property-based tests for vibe ranking.
//!
//! # Invariants tested
//!
//! - **Score range:** every ranked score lies in `0.10..=0.99`.
//! - **Ordering:** rankings are sorted best-first.
//! - **Completeness:** every candidate appears exactly once.
//! - **Jitter band:** jitter moves a score by at most half the amplitude.
//! - **Reproducibility:** equal seeds give equal rankings.

use proptest::prelude::*;
use vibe_core::{NoJitter, SCORE_CEILING, SCORE_FLOOR, VibeProfile};
use vibe_scorer::{DEFAULT_JITTER_AMPLITUDE, SeededJitter, VibeMatcher};

const VOCABULARY: &[&str] = &[
    "nightlife", "coffee", "jazz", "park", "hangout", "chill", "indie", "museums", "art", "beer",
    "trivia", "yoga", "late-night", "a", "of", "&", "!!",
];

fn vibe_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec(proptest::sample::select(VOCABULARY), 0..6)
        .prop_map(|words| words.join(" "))
}

fn distance_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        (0.0_f64..5.0).prop_map(|miles| format!("{miles:.1}mi")),
        Just("unknown".to_owned()),
        Just("-3mi".to_owned()),
        Just(String::new()),
    ]
}

fn candidates_strategy() -> impl Strategy<Value = Vec<VibeProfile>> {
    proptest::collection::vec((vibe_strategy(), distance_strategy()), 0..12).prop_map(|pairs| {
        pairs
            .into_iter()
            .enumerate()
            .map(|(idx, (vibe, distance))| {
                VibeProfile::new(&vibe, &distance).with_identity(idx.to_string(), "someone")
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn scores_stay_in_range(
        self_vibe in vibe_strategy(),
        candidates in candidates_strategy(),
        seed in any::<u64>(),
    ) {
        let ranked = VibeMatcher::default().rank(&self_vibe, &candidates, &mut SeededJitter::seeded(seed));
        for scored in &ranked {
            prop_assert!(
                (SCORE_FLOOR..=SCORE_CEILING).contains(&scored.score),
                "score {} out of range",
                scored.score
            );
        }
    }

    #[test]
    fn rankings_are_sorted_and_complete(
        self_vibe in vibe_strategy(),
        candidates in candidates_strategy(),
        seed in any::<u64>(),
    ) {
        let ranked = VibeMatcher::default().rank(&self_vibe, &candidates, &mut SeededJitter::seeded(seed));

        prop_assert_eq!(ranked.len(), candidates.len());
        let sorted_descending = ranked.windows(2).all(|pair| match pair {
            [a, b] => a.score >= b.score,
            _ => true,
        });
        prop_assert!(sorted_descending);

        let mut ranked_ids: Vec<&str> = ranked.iter().map(|s| s.candidate.id.as_str()).collect();
        let mut input_ids: Vec<&str> = candidates.iter().map(|c| c.id.as_str()).collect();
        ranked_ids.sort_unstable();
        input_ids.sort_unstable();
        prop_assert_eq!(ranked_ids, input_ids);
    }

    #[test]
    #[expect(clippy::float_arithmetic, reason = "the band is measured as a score difference")]
    fn jitter_stays_within_half_the_amplitude(
        self_vibe in vibe_strategy(),
        vibe in vibe_strategy(),
        distance in distance_strategy(),
        seed in any::<u64>(),
    ) {
        let candidates = vec![VibeProfile::new(&vibe, &distance)];
        let matcher = VibeMatcher::default();

        let steady = matcher.rank(&self_vibe, &candidates, &mut NoJitter);
        let jittered = matcher.rank(&self_vibe, &candidates, &mut SeededJitter::seeded(seed));

        let steady_score = steady.first().expect("one candidate").score;
        let jittered_score = jittered.first().expect("one candidate").score;
        prop_assert!(
            (steady_score - jittered_score).abs() <= DEFAULT_JITTER_AMPLITUDE / 2.0 + 1e-12
        );
    }

    #[test]
    fn equal_seeds_reproduce_the_ranking(
        self_vibe in vibe_strategy(),
        candidates in candidates_strategy(),
        seed in any::<u64>(),
    ) {
        let matcher = VibeMatcher::default();
        let first = matcher.rank(&self_vibe, &candidates, &mut SeededJitter::seeded(seed));
        let second = matcher.rank(&self_vibe, &candidates, &mut SeededJitter::seeded(seed));
        prop_assert_eq!(first, second);
    }
}
