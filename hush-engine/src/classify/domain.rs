//! Domain heuristic — news-like vs. social classification of a fragment's
//! ancestry.
//!
//! Editorial framing is usually signaled at a containing section, not the
//! leaf text node, so the walk traverses the full ancestor chain rather
//! than just the immediate parent.

use aho_corasick::{AhoCorasick, AhoCorasickBuilder};
use regex::{RegexSet, RegexSetBuilder};

use crate::error::EngineError;
use crate::tree::{ContentTree, NodeId};

/// Structural class/id hints associated with news layouts.
pub const NEWS_STRUCTURAL_HINTS: &[&str] = &["news", "article", "headline", "report", "update"];

/// Editorial phrase hints matched against ancestor text content.
pub const NEWS_PHRASE_HINTS: &[&str] = &[
    "breaking news",
    "latest update",
    "reported that",
    "according to",
    "official statement",
];

/// Decides whether a fragment's ancestry looks like news content.
pub struct DomainHeuristic {
    structural: AhoCorasick,
    phrases: RegexSet,
}

impl DomainHeuristic {
    /// Compile the hint sets. Class/id matching is ASCII case-insensitive,
    /// same as the text-content contract.
    pub fn new() -> Result<Self, EngineError> {
        let structural = AhoCorasickBuilder::new()
            .ascii_case_insensitive(true)
            .build(NEWS_STRUCTURAL_HINTS)?;
        let phrases = RegexSetBuilder::new(NEWS_PHRASE_HINTS)
            .case_insensitive(true)
            .build()?;
        Ok(Self { structural, phrases })
    }

    /// Walk from `container` up to (but excluding) the document root. First
    /// match at any level wins; reaching the root means social. Monotonic
    /// over depth: once an ancestor matches, deeper walks cannot unmatch.
    pub fn is_news_like(&self, tree: &ContentTree, container: NodeId) -> bool {
        let root = tree.root();
        let mut current = Some(container);
        while let Some(id) = current {
            if id == root {
                return false;
            }
            if self.structural_hit(tree, id) {
                return true;
            }
            if self.phrases.is_match(&tree.text_content(id)) {
                return true;
            }
            current = tree.parent(id);
        }
        false
    }

    fn structural_hit(&self, tree: &ContentTree, id: NodeId) -> bool {
        if let Some(dom_id) = tree.dom_id(id) {
            if self.structural.is_match(dom_id) {
                return true;
            }
        }
        tree.classes(id)
            .iter()
            .any(|class| self.structural.is_match(class))
    }
}
