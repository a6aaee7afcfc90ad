//! Event handler trait with no-op defaults.

use super::types::*;

/// Receives engine events. Every method has a no-op default, so a surface
/// implements only what it renders.
pub trait HushEventHandler: Send + Sync {
    /// An advisory message should be displayed.
    fn on_notification(&self, _event: &NotificationEvent) {}

    /// The filtered-content count changed; badge surfaces show it.
    fn on_badge_update(&self, _event: &BadgeUpdateEvent) {}

    /// A container was suppressed.
    fn on_suppression(&self, _event: &SuppressionEvent) {}

    /// Usage counters were reset for a new day.
    fn on_stats_reset(&self, _event: &StatsResetEvent) {}

    /// The configuration was replaced at runtime.
    fn on_config_replaced(&self, _event: &ConfigReplacedEvent) {}
}
