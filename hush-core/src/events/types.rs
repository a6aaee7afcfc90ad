//! Event payload types.

use crate::types::Category;

/// Category tag of an advisory message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Tip,
    Warning,
    Positive,
    Break,
}

impl NotificationKind {
    /// Stable identifier used by rendering surfaces.
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Tip => "tip",
            NotificationKind::Warning => "warning",
            NotificationKind::Positive => "positive",
            NotificationKind::Break => "break",
        }
    }
}

/// Payload for `on_notification`: a short advisory message to display.
#[derive(Debug, Clone)]
pub struct NotificationEvent {
    pub message: String,
    pub kind: NotificationKind,
}

/// Payload for `on_badge_update`: the current filtered-content count.
#[derive(Debug, Clone)]
pub struct BadgeUpdateEvent {
    pub count: u64,
}

/// Payload for `on_suppression`: a container transitioned to suppressed.
#[derive(Debug, Clone)]
pub struct SuppressionEvent {
    pub category: Category,
}

/// Payload for `on_stats_reset`: the daily usage reset fired.
#[derive(Debug, Clone)]
pub struct StatsResetEvent {
    pub daily_limit_secs: u64,
}

/// Payload for `on_config_replaced`: the in-memory configuration was
/// hot-swapped wholesale.
#[derive(Debug, Clone)]
pub struct ConfigReplacedEvent {
    pub news_strictness: u8,
    pub social_strictness: u8,
}
