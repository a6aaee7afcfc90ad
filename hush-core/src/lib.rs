//! Core types, configuration, errors, events, and store contracts for hush.
//!
//! This crate carries everything the filtering engine and its embedders share:
//! the configuration record and its defaulting rules, the usage-counter record,
//! the event dispatch surface, and the key-value store contracts. It has no
//! dependency on the engine itself.

pub mod config;
pub mod errors;
pub mod events;
pub mod logging;
pub mod stores;
pub mod types;
pub mod usage;

pub use config::HushConfig;
pub use errors::{ConfigError, StoreError};
pub use events::EventDispatcher;
pub use usage::UsageStats;
