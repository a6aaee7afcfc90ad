//! Configuration for hush.
//! Serde-backed, travels as a JSON key-value record; missing sub-objects are
//! backfilled with documented defaults before first use.

pub mod filter_config;
pub mod hush_config;
pub mod sensitivity_config;
pub mod time_limit_config;
pub mod tips_config;

pub use filter_config::FilterConfig;
pub use hush_config::HushConfig;
pub use sensitivity_config::SensitivityConfig;
pub use time_limit_config::TimeLimitConfig;
pub use tips_config::{TipFrequency, TipsConfig};
