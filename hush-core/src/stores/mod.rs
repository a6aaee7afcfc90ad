//! Key-value store contracts for settings and usage records.
//!
//! `Ok(None)` from a load means the record is absent — callers recover by
//! substituting documented defaults. Write failures are surfaced as
//! `StoreError` and are expected to be logged and swallowed: the in-memory
//! state remains authoritative for the rest of the session.

pub mod json_file;
pub mod memory;

use crate::config::HushConfig;
use crate::errors::StoreError;
use crate::usage::UsageStats;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

/// Record key for the configuration.
pub const SETTINGS_KEY: &str = "settings";
/// Record key for the usage counters.
pub const USAGE_KEY: &str = "usageStats";

/// Read/write access to the persisted configuration record.
pub trait SettingsStore {
    fn load_settings(&self) -> Result<Option<HushConfig>, StoreError>;
    fn save_settings(&self, config: &HushConfig) -> Result<(), StoreError>;
}

/// Read/write access to the persisted usage-counter record.
pub trait UsageStore {
    fn load_usage(&self) -> Result<Option<UsageStats>, StoreError>;
    fn save_usage(&self, stats: &UsageStats) -> Result<(), StoreError>;
}
