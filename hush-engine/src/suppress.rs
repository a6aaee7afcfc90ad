//! Suppression engine — one-way, idempotent hiding of flagged containers.

use hush_core::events::{BadgeUpdateEvent, EventDispatcher, SuppressionEvent};
use hush_core::stores::UsageStore;
use hush_core::types::Category;
use hush_core::usage::UsageStats;

use crate::tree::{ContentTree, NodeId};

/// Applies suppression markers and accounts for them.
///
/// Borrows the session's counters, store handle, and dispatcher for the
/// duration of a scan pass. Suppression only touches the presentation marker,
/// never the underlying content.
pub struct SuppressionEngine<'a> {
    stats: &'a mut UsageStats,
    store: &'a dyn UsageStore,
    events: &'a EventDispatcher,
}

impl<'a> SuppressionEngine<'a> {
    pub fn new(
        stats: &'a mut UsageStats,
        store: &'a dyn UsageStore,
        events: &'a EventDispatcher,
    ) -> Self {
        Self {
            stats,
            store,
            events,
        }
    }

    /// Suppress a container for `reason`.
    ///
    /// Returns `true` only on the unmarked → marked transition; a second call
    /// on the same container is a no-op with no double counting. On the
    /// transition the filtered-content counter is incremented by exactly one
    /// and persistence of the updated record is requested. A failed write is
    /// logged and swallowed — the in-memory counter stays authoritative.
    pub fn suppress(&mut self, tree: &mut ContentTree, container: NodeId, reason: Category) -> bool {
        if !tree.mark_suppressed(container, reason) {
            return false;
        }

        self.stats.content_filtered += 1;
        tracing::debug!(
            category = %reason,
            count = self.stats.content_filtered,
            "container suppressed"
        );

        self.events.emit_suppression(&SuppressionEvent { category: reason });
        self.events.emit_badge_update(&BadgeUpdateEvent {
            count: self.stats.content_filtered,
        });

        if let Err(error) = self.store.save_usage(self.stats) {
            tracing::warn!(%error, "usage record write failed; keeping in-memory counters");
        }
        true
    }
}
