//! Incremental scan driver.
//!
//! Consumes the tree's insertion journal and feeds each newly introduced
//! subtree through classification and suppression exactly once. Work per
//! pump is bounded by the size of the newly inserted subtrees, not the
//! whole document.

use hush_core::types::collections::FxHashMap;
use hush_core::types::Category;

use crate::classify::{resolve_strictness, Classifier};
use crate::session::{ScanParts, SessionContext};
use crate::tree::{ContentTree, NodeId, Subscription};

/// Counters for one scan pass, logged at debug.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanPassStats {
    pub batches: usize,
    pub fragments: usize,
    pub suppressed: usize,
}

/// Drives incremental classification over a mutating tree.
pub struct ScanDriver {
    subscription: Subscription,
}

impl ScanDriver {
    /// Subscribe to a tree. The subscription starts at the first batch (the
    /// initial document), so the first pump performs the full initial scan.
    pub fn new(tree: &ContentTree) -> Self {
        Self {
            subscription: tree.subscribe(),
        }
    }

    /// Process every pending batch. Fragments are handled in document
    /// pre-order within each batch; each inserted node is seen exactly once
    /// across the life of the driver.
    pub fn pump(&mut self, tree: &mut ContentTree, session: &mut SessionContext) -> ScanPassStats {
        let mut pass = ScanPassStats::default();
        // Domain classification is memoized per container within a pass;
        // sibling fragments share their ancestor chain.
        let mut news_memo: FxHashMap<NodeId, bool> = FxHashMap::default();
        let mut parts = session.scan_parts();

        loop {
            let batch: Vec<NodeId> = match self.subscription.next_batch(tree) {
                Some(batch) => batch.to_vec(),
                None => break,
            };
            pass.batches += 1;
            for node in batch {
                process_subtree(tree, &mut parts, node, &mut news_memo, &mut pass);
            }
        }

        if pass.batches > 0 {
            tracing::debug!(
                batches = pass.batches,
                fragments = pass.fragments,
                suppressed = pass.suppressed,
                "scan pass complete"
            );
        }
        pass
    }
}

fn process_subtree(
    tree: &mut ContentTree,
    parts: &mut ScanParts<'_>,
    subtree: NodeId,
    news_memo: &mut FxHashMap<NodeId, bool>,
    pass: &mut ScanPassStats,
) {
    let classifier = Classifier::new(parts.catalog);

    for fragment in tree.fragments_in(subtree) {
        pass.fragments += 1;
        let is_news = *news_memo
            .entry(fragment.container)
            .or_insert_with(|| parts.domain.is_news_like(tree, fragment.container));
        let strictness = resolve_strictness(&parts.config.sensitivity, is_news);
        let matched = classifier.classify(&fragment.text, strictness, &parts.config.filters);
        if let Some(&reason) = matched.first() {
            if parts.suppressor.suppress(tree, fragment.container, reason) {
                pass.suppressed += 1;
            }
        }
    }

    if parts.config.filters.effective_ads() {
        for ad in parts.ads.find_ads(tree, subtree) {
            if parts.suppressor.suppress(tree, ad, Category::Ad) {
                pass.suppressed += 1;
            }
        }
    }
}
