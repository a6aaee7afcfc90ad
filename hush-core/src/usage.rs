//! Usage counters tracked per session and persisted externally.

use serde::{Deserialize, Serialize};

/// Default daily limit in seconds (2 hours), used when no configuration has
/// stamped the record yet.
pub const DEFAULT_DAILY_LIMIT_SECS: u64 = 7_200;

/// Usage-counter record.
///
/// Serialized with camelCase keys to match the external key-value contract.
/// `content_filtered` is monotonic within a session; the engine persists the
/// full record after each change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct UsageStats {
    /// Seconds of tracked session time today.
    pub time_used: f64,
    /// Number of suppression events (monotonic within a session).
    pub content_filtered: u64,
    /// Daily time budget in seconds.
    pub daily_limit: u64,
    /// Timestamp of the last daily reset, milliseconds since the Unix epoch.
    pub last_reset: u64,
}

impl Default for UsageStats {
    fn default() -> Self {
        Self {
            time_used: 0.0,
            content_filtered: 0,
            daily_limit: DEFAULT_DAILY_LIMIT_SECS,
            last_reset: 0,
        }
    }
}

impl UsageStats {
    /// Whether the tracked time has reached the daily budget.
    pub fn limit_reached(&self) -> bool {
        self.time_used >= self.daily_limit as f64
    }
}
