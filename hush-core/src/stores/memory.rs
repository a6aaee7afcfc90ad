//! In-memory store, used by tests and as the default when no persistence is
//! wired up.

use std::sync::Mutex;

use super::{SettingsStore, UsageStore, SETTINGS_KEY, USAGE_KEY};
use crate::config::HushConfig;
use crate::errors::StoreError;
use crate::usage::UsageStats;

/// A store holding both records in memory.
#[derive(Default)]
pub struct MemoryStore {
    settings: Mutex<Option<HushConfig>>,
    usage: Mutex<Option<UsageStats>>,
}

fn poisoned(key: &str) -> StoreError {
    StoreError::ReadFailed {
        key: key.to_string(),
        message: "store lock poisoned".to_string(),
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed the settings record.
    pub fn with_settings(config: HushConfig) -> Self {
        Self {
            settings: Mutex::new(Some(config)),
            usage: Mutex::new(None),
        }
    }
}

impl SettingsStore for MemoryStore {
    fn load_settings(&self) -> Result<Option<HushConfig>, StoreError> {
        let guard = self.settings.lock().map_err(|_| poisoned(SETTINGS_KEY))?;
        Ok(guard.clone())
    }

    fn save_settings(&self, config: &HushConfig) -> Result<(), StoreError> {
        let mut guard = self.settings.lock().map_err(|_| poisoned(SETTINGS_KEY))?;
        *guard = Some(config.clone());
        Ok(())
    }
}

impl UsageStore for MemoryStore {
    fn load_usage(&self) -> Result<Option<UsageStats>, StoreError> {
        let guard = self.usage.lock().map_err(|_| poisoned(USAGE_KEY))?;
        Ok(guard.clone())
    }

    fn save_usage(&self, stats: &UsageStats) -> Result<(), StoreError> {
        let mut guard = self.usage.lock().map_err(|_| poisoned(USAGE_KEY))?;
        *guard = Some(stats.clone());
        Ok(())
    }
}
