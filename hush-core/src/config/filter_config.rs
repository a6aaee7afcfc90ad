//! Per-category filter toggles.

use serde::{Deserialize, Serialize};

use crate::types::Category;

/// Which sensitivity categories are enabled. All default to on.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FilterConfig {
    /// Filter negative-sentiment content. Default: true.
    pub negative: Option<bool>,
    /// Filter potentially triggering content. Default: true.
    pub triggering: Option<bool>,
    /// Filter social-comparison content. Default: true.
    pub comparison: Option<bool>,
    /// Filter advertising content. Default: true.
    pub ads: Option<bool>,
}

impl FilterConfig {
    /// Whether a category is enabled, with missing toggles defaulting to true.
    pub fn enabled(&self, category: Category) -> bool {
        match category {
            Category::Negative => self.negative.unwrap_or(true),
            Category::Triggering => self.triggering.unwrap_or(true),
            Category::Comparison => self.comparison.unwrap_or(true),
            Category::Ad => self.ads.unwrap_or(true),
        }
    }

    /// Convenience for the structural ad detector gate.
    pub fn effective_ads(&self) -> bool {
        self.ads.unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_toggles_default_to_enabled() {
        let filters = FilterConfig::default();
        for category in Category::LEXICAL {
            assert!(filters.enabled(category));
        }
        assert!(filters.effective_ads());
    }

    #[test]
    fn explicit_false_disables() {
        let filters = FilterConfig {
            comparison: Some(false),
            ..Default::default()
        };
        assert!(!filters.enabled(Category::Comparison));
        assert!(filters.enabled(Category::Negative));
    }
}
