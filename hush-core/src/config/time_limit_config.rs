//! Daily session time limit.

use serde::{Deserialize, Serialize};

/// Daily time budget, stored as hours + minutes. Default: 2h 0m.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TimeLimitConfig {
    /// Hours component of the daily limit. Default: 2.
    pub hours: Option<u32>,
    /// Minutes component of the daily limit. Default: 0.
    pub minutes: Option<u32>,
}

impl TimeLimitConfig {
    /// The configured daily limit in seconds, with defaults backfilled.
    pub fn daily_limit_secs(&self) -> u64 {
        let hours = u64::from(self.hours.unwrap_or(2));
        let minutes = u64::from(self.minutes.unwrap_or(0));
        hours * 3600 + minutes * 60
    }
}
