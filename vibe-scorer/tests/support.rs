//! Shared candidate pools for vibe scorer integration tests.

use vibe_core::VibeProfile;

/// Five nearby people with distinct vibes, as shown on the discovery map.
pub fn nearby_candidates() -> Vec<VibeProfile> {
    vec![
        VibeProfile::new("Nightlife Coffee ☕ late-night", "0.2mi").with_identity("1", "Alex"),
        VibeProfile::new("Live Music Rock concerts indie", "0.5mi").with_identity("2", "Jamie"),
        VibeProfile::new("Park Hangout Chill nature walking", "0.1mi").with_identity("3", "Sam"),
        VibeProfile::new("Happy Hour Beer social pub-crawl", "0.9mi").with_identity("4", "Taylor"),
        VibeProfile::new("Art Gallery Creative museums", "1.2mi").with_identity("5", "Zoe"),
    ]
}
