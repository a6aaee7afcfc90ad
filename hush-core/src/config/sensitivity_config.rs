//! Strictness settings per content domain.

use serde::{Deserialize, Serialize};

/// Default strictness for news-like content.
pub const DEFAULT_NEWS_SENSITIVITY: u8 = 3;
/// Default strictness for social content.
pub const DEFAULT_SOCIAL_SENSITIVITY: u8 = 4;

/// Strictness levels (1..=5) per content domain.
///
/// Partially absent fields are recovered per-field: classification must never
/// see an undefined strictness, so accessors backfill the documented defaults
/// (`news=3`, `social=4`).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SensitivityConfig {
    /// Strictness for news-like fragments, 1..=5. Default: 3.
    pub news: Option<u8>,
    /// Strictness for social fragments, 1..=5. Default: 4.
    pub social: Option<u8>,
}

impl SensitivityConfig {
    /// Effective news strictness, defaulting to 3.
    pub fn effective_news(&self) -> u8 {
        self.news.unwrap_or(DEFAULT_NEWS_SENSITIVITY)
    }

    /// Effective social strictness, defaulting to 4.
    pub fn effective_social(&self) -> u8 {
        self.social.unwrap_or(DEFAULT_SOCIAL_SENSITIVITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_yield_documented_defaults() {
        let sensitivity = SensitivityConfig::default();
        assert_eq!(sensitivity.effective_news(), 3);
        assert_eq!(sensitivity.effective_social(), 4);
    }

    #[test]
    fn partially_absent_recovers_per_field() {
        let sensitivity: SensitivityConfig =
            serde_json::from_str(r#"{ "news": 1 }"#).unwrap();
        assert_eq!(sensitivity.effective_news(), 1);
        assert_eq!(sensitivity.effective_social(), 4);
    }
}
