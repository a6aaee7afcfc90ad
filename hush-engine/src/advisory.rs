//! Advisory message pools and selection.
//!
//! Selection runs on an injected seedable rng so tests can pin the sequence;
//! the production path seeds from entropy.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Wellbeing tips shown on the configured cadence.
pub const TIPS: [&str; 10] = [
    "Take a deep breath and remember to stay present in the moment.",
    "Remember that social media often shows curated highlights, not real life.",
    "Consider taking a short break to stretch or walk around.",
    "Focus on meaningful connections rather than likes and follows.",
    "Practice gratitude for the positive things in your life.",
    "Remember that your worth isn't determined by social media engagement.",
    "Take time to engage in activities that bring you joy offline.",
    "Stay hydrated and take care of your physical well-being.",
    "Connect with friends and family in person when possible.",
    "Remember that it's okay to take breaks from social media.",
];

/// Positive prompts shown on request.
pub const POSITIVE_PROMPTS: [&str; 5] = [
    "Take a moment to appreciate something beautiful around you.",
    "Write down three things you're grateful for today.",
    "Share a kind message with someone you care about.",
    "Take a short walk and notice the positive things around you.",
    "Practice a random act of kindness today.",
];

/// Shown once when the daily time budget is crossed.
pub const LIMIT_WARNING: &str =
    "You've reached your daily social media time limit. Consider taking a break!";

/// Shown on an explicit break request.
pub const BREAK_MESSAGE: &str = "Time for a break! Consider:\n\
    \u{2022} Taking a short walk\n\
    \u{2022} Doing some stretches\n\
    \u{2022} Having a healthy snack\n\
    \u{2022} Drinking some water\n\
    \u{2022} Taking deep breaths";

/// Picks advisory messages from the fixed pools.
pub struct AdvisoryScheduler {
    rng: SmallRng,
}

impl AdvisoryScheduler {
    /// Production path: non-deterministic seed.
    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Deterministic selection for tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// A wellbeing tip.
    pub fn tip(&mut self) -> &'static str {
        self.pick(&TIPS)
    }

    /// A positive prompt.
    pub fn positive(&mut self) -> &'static str {
        self.pick(&POSITIVE_PROMPTS)
    }

    fn pick(&mut self, pool: &'static [&'static str]) -> &'static str {
        pool[self.rng.gen_range(0..pool.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_selection_is_deterministic() {
        let mut first = AdvisoryScheduler::seeded(7);
        let mut second = AdvisoryScheduler::seeded(7);
        for _ in 0..20 {
            assert_eq!(first.tip(), second.tip());
            assert_eq!(first.positive(), second.positive());
        }
    }

    #[test]
    fn selection_stays_within_the_pool() {
        let mut scheduler = AdvisoryScheduler::seeded(42);
        for _ in 0..100 {
            let tip = scheduler.tip();
            assert!(TIPS.contains(&tip));
        }
    }
}
