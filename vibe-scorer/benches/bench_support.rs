//! Deterministic candidate pools for ranking benchmarks.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use vibe_core::VibeProfile;

/// Seed for deterministic random number generation in benchmarks.
pub const BENCHMARK_SEED: u64 = 42;

/// Words candidate vibes are assembled from.
const VOCABULARY: [&str; 16] = [
    "nightlife", "coffee", "late-night", "live", "music", "rock", "concerts", "indie", "park",
    "hangout", "chill", "nature", "walking", "beer", "gallery", "museums",
];

/// Keywords per generated vibe.
const WORDS_PER_VIBE: usize = 4;

/// Candidates are scattered within this many miles.
const MAX_MILES: f64 = 3.0;

/// Generate `count` candidates with random vibes and distances.
#[must_use]
pub fn generate_candidates(count: usize, seed: u64) -> Vec<VibeProfile> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|idx| {
            let vibe = VOCABULARY
                .choose_multiple(&mut rng, WORDS_PER_VIBE)
                .copied()
                .collect::<Vec<_>>()
                .join(" ");
            let miles = rng.gen_range(0.0..MAX_MILES);
            VibeProfile::new(vibe, &format!("{miles:.1}mi"))
                .with_identity(idx.to_string(), format!("candidate-{idx}"))
        })
        .collect()
}
