//! Advisory tip settings.

use serde::{Deserialize, Serialize};

/// How often a periodic wellbeing tip is surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipFrequency {
    Hourly,
    #[default]
    Daily,
    Weekly,
}

impl TipFrequency {
    /// The interval between tips, in seconds.
    pub fn interval_secs(&self) -> u64 {
        match self {
            TipFrequency::Hourly => 3_600,
            TipFrequency::Daily => 86_400,
            TipFrequency::Weekly => 604_800,
        }
    }
}

/// Wellbeing tip settings. Tips default to enabled, daily.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TipsConfig {
    /// Whether periodic tips are shown. Default: true.
    pub enabled: Option<bool>,
    /// How often tips are shown. Default: daily.
    pub frequency: Option<TipFrequency>,
}

impl TipsConfig {
    /// Whether tips are enabled, defaulting to true.
    pub fn effective_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }

    /// Effective tip frequency, defaulting to daily.
    pub fn effective_frequency(&self) -> TipFrequency {
        self.frequency.unwrap_or_default()
    }
}
