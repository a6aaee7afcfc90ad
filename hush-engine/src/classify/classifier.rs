//! Category classifier — tier-gated evaluation of every enabled lexical
//! category against one fragment text.

use smallvec::SmallVec;

use hush_core::config::FilterConfig;
use hush_core::types::Category;

use crate::catalog::PatternCatalog;

/// Set of categories matched for one fragment. At most the three lexical
/// categories, so it stays inline.
pub type CategorySet = SmallVec<[Category; 3]>;

/// Evaluates enabled categories against fragment text at a resolved
/// strictness level.
pub struct Classifier<'a> {
    catalog: &'a PatternCatalog,
}

impl<'a> Classifier<'a> {
    pub fn new(catalog: &'a PatternCatalog) -> Self {
        Self { catalog }
    }

    /// Classify one fragment. Disabled categories are skipped entirely,
    /// regardless of strictness.
    pub fn classify(&self, text: &str, strictness: u8, filters: &FilterConfig) -> CategorySet {
        let lowered = text.to_lowercase();
        let mut matched = CategorySet::new();
        for matcher in self.catalog.lexical() {
            if !filters.enabled(matcher.category()) {
                continue;
            }
            if matcher.matches_at(&lowered, strictness) {
                matched.push(matcher.category());
            }
        }
        matched
    }
}
