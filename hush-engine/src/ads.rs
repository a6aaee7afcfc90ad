//! Ad detector — structural, not lexical.
//!
//! Flags descendants of a subtree whose class list or id carries an
//! advertising marker. Evaluated independently of category strictness and of
//! the lexical classifier; gated only by the single `filters.ads` flag.

use aho_corasick::{AhoCorasick, AhoCorasickBuilder};

use crate::error::EngineError;
use crate::tree::{ContentTree, NodeId};

/// Class/id substrings indicating advertising content.
pub const AD_MARKERS: &[&str] = &["ad", "sponsored", "promoted"];

/// Structural advertising detector.
pub struct AdDetector {
    markers: AhoCorasick,
}

impl AdDetector {
    /// Compile the marker set. Matching is ASCII case-insensitive substring,
    /// matching the `[class*="ad"]` looseness of the selector it models.
    pub fn new() -> Result<Self, EngineError> {
        let markers = AhoCorasickBuilder::new()
            .ascii_case_insensitive(true)
            .build(AD_MARKERS)?;
        Ok(Self { markers })
    }

    /// Descendant elements of `subtree` carrying an ad marker, in document
    /// order. The subtree root itself is not considered, mirroring selector
    /// semantics.
    pub fn find_ads(&self, tree: &ContentTree, subtree: NodeId) -> Vec<NodeId> {
        tree.descendants(subtree)
            .into_iter()
            .filter(|&id| id != subtree && self.is_ad(tree, id))
            .collect()
    }

    fn is_ad(&self, tree: &ContentTree, id: NodeId) -> bool {
        if !tree.is_element(id) {
            return false;
        }
        if let Some(dom_id) = tree.dom_id(id) {
            if self.markers.is_match(dom_id) {
                return true;
            }
        }
        tree.classes(id)
            .iter()
            .any(|class| self.markers.is_match(class))
    }
}
