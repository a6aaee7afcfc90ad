//! Journal subscription — a lazy, restartable cursor over insertion batches.

use super::{ContentTree, NodeId};

/// Cursor over a tree's insertion journal.
///
/// Each call to `next_batch` yields the next unconsumed batch of newly
/// inserted top-level nodes, in insertion order. A new subscription restarts
/// from the first batch (which is the initial document), so a consumer sees
/// every node exactly once regardless of when it subscribed.
pub struct Subscription {
    cursor: usize,
}

impl Subscription {
    pub(crate) fn new() -> Self {
        Self { cursor: 0 }
    }

    /// The next batch of newly inserted nodes, if any remain.
    pub fn next_batch<'t>(&mut self, tree: &'t ContentTree) -> Option<&'t [NodeId]> {
        let batch = tree.batch(self.cursor)?;
        self.cursor += 1;
        Some(batch)
    }

    /// Number of batches not yet consumed.
    pub fn pending(&self, tree: &ContentTree) -> usize {
        let mut count = 0;
        while tree.batch(self.cursor + count).is_some() {
            count += 1;
        }
        count
    }
}
