//! Pattern catalog — per-category matcher tables compiled into tiered
//! `RegexSet`s for single-pass matching.
//!
//! The tri-band strictness gating is implemented once (`active_tiers` in
//! hush-core) and parameterized by category here, so the three lexical
//! categories always share the same strictness bands.

pub mod patterns;

use regex::{RegexSet, RegexSetBuilder};

use hush_core::types::{active_tiers, Category, SeverityTier};

use crate::error::EngineError;

/// A category's matchers, grouped by severity tier and compiled for
/// single-pass evaluation.
pub struct TieredMatcher {
    category: Category,
    extreme: RegexSet,
    moderate: RegexSet,
    mild: RegexSet,
}

impl TieredMatcher {
    /// Compile a matcher from per-tier pattern tables.
    pub fn new(
        category: Category,
        extreme: &[&str],
        moderate: &[&str],
        mild: &[&str],
    ) -> Result<Self, EngineError> {
        Ok(Self {
            category,
            extreme: compile(extreme)?,
            moderate: compile(moderate)?,
            mild: compile(mild)?,
        })
    }

    pub fn category(&self) -> Category {
        self.category
    }

    fn tier(&self, tier: SeverityTier) -> &RegexSet {
        match tier {
            SeverityTier::Extreme => &self.extreme,
            SeverityTier::Moderate => &self.moderate,
            SeverityTier::Mild => &self.mild,
        }
    }

    /// Whether any matcher active at `strictness` matches the text.
    pub fn matches_at(&self, text: &str, strictness: u8) -> bool {
        active_tiers(strictness)
            .iter()
            .any(|&tier| self.tier(tier).is_match(text))
    }

    /// The fixed, enumerable pattern list of one tier.
    pub fn tier_patterns(&self, tier: SeverityTier) -> &[String] {
        self.tier(tier).patterns()
    }
}

/// All pattern sets are case-insensitive by contract.
fn compile(table: &[&str]) -> Result<RegexSet, EngineError> {
    let set = RegexSetBuilder::new(table).case_insensitive(true).build()?;
    Ok(set)
}

/// The static catalog: one tiered matcher per lexical category.
pub struct PatternCatalog {
    negative: TieredMatcher,
    triggering: TieredMatcher,
    comparison: TieredMatcher,
}

impl PatternCatalog {
    /// Compile the built-in matcher tables.
    pub fn new() -> Result<Self, EngineError> {
        Ok(Self {
            negative: TieredMatcher::new(
                Category::Negative,
                patterns::NEGATIVE_EXTREME,
                patterns::NEGATIVE_MODERATE,
                patterns::NEGATIVE_MILD,
            )?,
            triggering: TieredMatcher::new(
                Category::Triggering,
                patterns::TRIGGERING_EXTREME,
                patterns::TRIGGERING_MODERATE,
                patterns::TRIGGERING_MILD,
            )?,
            comparison: TieredMatcher::new(
                Category::Comparison,
                patterns::COMPARISON_EXTREME,
                patterns::COMPARISON_MODERATE,
                patterns::COMPARISON_MILD,
            )?,
        })
    }

    /// The lexical matchers, in classification order.
    pub fn lexical(&self) -> [&TieredMatcher; 3] {
        [&self.negative, &self.triggering, &self.comparison]
    }

    /// The matcher for one lexical category. `Ad` has no lexical matcher.
    pub fn matcher(&self, category: Category) -> Option<&TieredMatcher> {
        match category {
            Category::Negative => Some(&self.negative),
            Category::Triggering => Some(&self.triggering),
            Category::Comparison => Some(&self.comparison),
            Category::Ad => None,
        }
    }
}
