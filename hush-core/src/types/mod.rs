//! Shared data-model types.

pub mod collections;

use serde::{Deserialize, Serialize};

/// A sensitivity category a fragment can be flagged for.
///
/// The first three are lexical (matched against fragment text through the
/// pattern catalog); `Ad` is structural and gated only by the ads filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Negative,
    Triggering,
    Comparison,
    Ad,
}

impl Category {
    /// The three lexical categories, in classification order.
    pub const LEXICAL: [Category; 3] =
        [Category::Negative, Category::Triggering, Category::Comparison];

    /// Stable identifier used in logs and events.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Negative => "negative",
            Category::Triggering => "triggering",
            Category::Comparison => "comparison",
            Category::Ad => "ad",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How strongly a matcher indicates its category.
///
/// Ordered `Extreme > Moderate > Mild` in specificity. Tiers only gate which
/// subset of a category's matchers is active at a given strictness level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeverityTier {
    Extreme,
    Moderate,
    Mild,
}

/// Tiers active at a strictness level. The three bands are shared by every
/// lexical category; this is the single place they are defined.
pub fn active_tiers(strictness: u8) -> &'static [SeverityTier] {
    if strictness >= 4 {
        &[SeverityTier::Extreme, SeverityTier::Moderate, SeverityTier::Mild]
    } else if strictness >= 2 {
        &[SeverityTier::Extreme, SeverityTier::Moderate]
    } else {
        &[SeverityTier::Extreme]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_edges() {
        assert_eq!(active_tiers(1).len(), 1);
        assert_eq!(active_tiers(2).len(), 2);
        assert_eq!(active_tiers(3).len(), 2);
        assert_eq!(active_tiers(4).len(), 3);
        assert_eq!(active_tiers(5).len(), 3);
    }

    #[test]
    fn category_serde_names_are_lowercase() {
        let json = serde_json::to_string(&Category::Triggering).unwrap();
        assert_eq!(json, "\"triggering\"");
    }
}
