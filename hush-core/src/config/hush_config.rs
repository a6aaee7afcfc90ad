//! Top-level hush configuration.

use serde::{Deserialize, Serialize};

use super::{FilterConfig, SensitivityConfig, TimeLimitConfig, TipsConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Loaded once per session from the settings store and replaced wholesale on
/// a settings-changed notification. Missing sub-objects deserialize to their
/// defaults; individual missing fields are backfilled by the `effective_*`
/// accessors, so the engine never observes an undefined value.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct HushConfig {
    pub time_limit: TimeLimitConfig,
    pub filters: FilterConfig,
    pub sensitivity: SensitivityConfig,
    pub tips: TipsConfig,
}

impl HushConfig {
    /// Parse a configuration from its JSON record form.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: HushConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::ParseError {
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration to its JSON record form.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string(self).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })
    }

    /// Validate configured values. Strictness levels must lie in 1..=5.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(news) = self.sensitivity.news {
            if !(1..=5).contains(&news) {
                return Err(ConfigError::ValidationFailed {
                    field: "sensitivity.news".to_string(),
                    message: "must be between 1 and 5".to_string(),
                });
            }
        }
        if let Some(social) = self.sensitivity.social {
            if !(1..=5).contains(&social) {
                return Err(ConfigError::ValidationFailed {
                    field: "sensitivity.social".to_string(),
                    message: "must be between 1 and 5".to_string(),
                });
            }
        }
        Ok(())
    }
}
