//! JSON-file-backed store: one file holding both records under their keys.

use std::path::{Path, PathBuf};

use serde_json::Value;

use super::{SettingsStore, UsageStore, SETTINGS_KEY, USAGE_KEY};
use crate::config::HushConfig;
use crate::errors::StoreError;
use crate::usage::UsageStats;

/// Stores records as a single JSON object file:
/// `{ "settings": {...}, "usageStats": {...} }`.
///
/// A missing file reads as absent records. Writes rewrite the whole file but
/// preserve the other record.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> Result<Value, StoreError> {
        if !self.path.exists() {
            return Ok(Value::Object(serde_json::Map::new()));
        }
        let content =
            std::fs::read_to_string(&self.path).map_err(|e| StoreError::ReadFailed {
                key: self.path.display().to_string(),
                message: e.to_string(),
            })?;
        serde_json::from_str(&content).map_err(|e| StoreError::MalformedRecord {
            key: self.path.display().to_string(),
            message: e.to_string(),
        })
    }

    fn load_record<T: serde::de::DeserializeOwned>(
        &self,
        key: &str,
    ) -> Result<Option<T>, StoreError> {
        let document = self.read_document()?;
        match document.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => serde_json::from_value(value.clone())
                .map(Some)
                .map_err(|e| StoreError::MalformedRecord {
                    key: key.to_string(),
                    message: e.to_string(),
                }),
        }
    }

    fn save_record<T: serde::Serialize>(&self, key: &str, record: &T) -> Result<(), StoreError> {
        let mut document = self.read_document()?;
        let value = serde_json::to_value(record).map_err(|e| StoreError::WriteFailed {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        document
            .as_object_mut()
            .ok_or_else(|| StoreError::MalformedRecord {
                key: self.path.display().to_string(),
                message: "store file root is not a JSON object".to_string(),
            })?
            .insert(key.to_string(), value);
        let serialized =
            serde_json::to_string_pretty(&document).map_err(|e| StoreError::WriteFailed {
                key: key.to_string(),
                message: e.to_string(),
            })?;
        std::fs::write(&self.path, serialized).map_err(|e| StoreError::WriteFailed {
            key: self.path.display().to_string(),
            message: e.to_string(),
        })
    }
}

impl SettingsStore for JsonFileStore {
    fn load_settings(&self) -> Result<Option<HushConfig>, StoreError> {
        self.load_record(SETTINGS_KEY)
    }

    fn save_settings(&self, config: &HushConfig) -> Result<(), StoreError> {
        self.save_record(SETTINGS_KEY, config)
    }
}

impl UsageStore for JsonFileStore {
    fn load_usage(&self) -> Result<Option<UsageStats>, StoreError> {
        self.load_record(USAGE_KEY)
    }

    fn save_usage(&self, stats: &UsageStats) -> Result<(), StoreError> {
        self.save_record(USAGE_KEY, stats)
    }
}
