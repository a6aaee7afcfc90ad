//! Session context — single owner of configuration, counters, and the
//! compiled matcher sets.
//!
//! Configuration hot-swap is an explicit method here rather than a bare
//! reassignment of module state: the engine reads the most recent wholesale
//! replacement, and nothing else ever mutates it.

use std::sync::Arc;
use std::time::Duration;

use hush_core::config::{HushConfig, SensitivityConfig};
use hush_core::events::{
    ConfigReplacedEvent, EventDispatcher, HushEventHandler, NotificationEvent,
    NotificationKind, StatsResetEvent,
};
use hush_core::stores::{SettingsStore, UsageStore};
use hush_core::usage::UsageStats;

use crate::ads::AdDetector;
use crate::advisory::{self, AdvisoryScheduler};
use crate::catalog::PatternCatalog;
use crate::classify::DomainHeuristic;
use crate::error::EngineError;
use crate::suppress::SuppressionEngine;

/// Split borrows of the session handed to the scan driver for one pass.
pub(crate) struct ScanParts<'a> {
    pub config: &'a HushConfig,
    pub catalog: &'a PatternCatalog,
    pub domain: &'a DomainHeuristic,
    pub ads: &'a AdDetector,
    pub suppressor: SuppressionEngine<'a>,
}

/// Owns all mutable engine state for one filtering session.
pub struct SessionContext {
    config: HushConfig,
    stats: UsageStats,
    catalog: PatternCatalog,
    domain: DomainHeuristic,
    ads: AdDetector,
    events: EventDispatcher,
    usage_store: Box<dyn UsageStore>,
    advisor: AdvisoryScheduler,
    limit_notified: bool,
    since_last_tip: Duration,
}

impl SessionContext {
    /// Build a session from the stores. Missing or unreadable records recover
    /// to documented defaults and are never surfaced as errors; only matcher
    /// compilation can fail.
    pub fn initialize(
        settings: &dyn SettingsStore,
        usage_store: Box<dyn UsageStore>,
    ) -> Result<Self, EngineError> {
        Self::build(settings, usage_store, AdvisoryScheduler::from_entropy())
    }

    /// Like `initialize`, but with a deterministic advisory rng for tests.
    pub fn initialize_seeded(
        settings: &dyn SettingsStore,
        usage_store: Box<dyn UsageStore>,
        seed: u64,
    ) -> Result<Self, EngineError> {
        Self::build(settings, usage_store, AdvisoryScheduler::seeded(seed))
    }

    fn build(
        settings: &dyn SettingsStore,
        usage_store: Box<dyn UsageStore>,
        advisor: AdvisoryScheduler,
    ) -> Result<Self, EngineError> {
        let config = match settings.load_settings() {
            Ok(Some(config)) => match config.validate() {
                Ok(()) => config,
                Err(error) => {
                    tracing::warn!(%error, "stored settings invalid; using defaults");
                    HushConfig::default()
                }
            },
            Ok(None) => {
                tracing::debug!("no stored settings; using defaults");
                HushConfig::default()
            }
            Err(error) => {
                tracing::warn!(%error, "settings store unreadable; using defaults");
                HushConfig::default()
            }
        };

        let stats = match usage_store.load_usage() {
            Ok(Some(stats)) => stats,
            Ok(None) => UsageStats {
                daily_limit: config.time_limit.daily_limit_secs(),
                ..Default::default()
            },
            Err(error) => {
                tracing::warn!(%error, "usage store unreadable; starting fresh counters");
                UsageStats {
                    daily_limit: config.time_limit.daily_limit_secs(),
                    ..Default::default()
                }
            }
        };

        Ok(Self {
            config,
            stats,
            catalog: PatternCatalog::new()?,
            domain: DomainHeuristic::new()?,
            ads: AdDetector::new()?,
            events: EventDispatcher::new(),
            usage_store,
            advisor,
            limit_notified: false,
            since_last_tip: Duration::ZERO,
        })
    }

    pub fn config(&self) -> &HushConfig {
        &self.config
    }

    pub fn stats(&self) -> &UsageStats {
        &self.stats
    }

    /// Register a notification/badge/stats surface.
    pub fn register_handler(&mut self, handler: Arc<dyn HushEventHandler>) {
        self.events.register(handler);
    }

    /// Replace the in-memory configuration wholesale.
    ///
    /// Invalid sensitivity values recover to the documented per-field
    /// defaults rather than propagating an undefined strictness. The daily
    /// limit is re-derived from the new time limit.
    pub fn replace_config(&mut self, mut new: HushConfig) {
        if let Err(error) = new.validate() {
            tracing::warn!(%error, "replacement config invalid; recovering sensitivity defaults");
            new.sensitivity = SensitivityConfig::default();
        }
        self.config = new;
        self.stats.daily_limit = self.config.time_limit.daily_limit_secs();
        if !self.stats.limit_reached() {
            self.limit_notified = false;
        }
        tracing::info!(
            news = self.config.sensitivity.effective_news(),
            social = self.config.sensitivity.effective_social(),
            "configuration replaced"
        );
        self.events.emit_config_replaced(&ConfigReplacedEvent {
            news_strictness: self.config.sensitivity.effective_news(),
            social_strictness: self.config.sensitivity.effective_social(),
        });
        self.persist_usage();
    }

    /// Periodic usage-accounting tick.
    ///
    /// Adds `elapsed` to the tracked time, fires the limit warning once per
    /// crossing, surfaces a tip on the configured cadence, and persists the
    /// record.
    pub fn tick(&mut self, elapsed: Duration) {
        self.stats.time_used += elapsed.as_secs_f64();

        if self.stats.limit_reached() && !self.limit_notified {
            self.limit_notified = true;
            self.events.emit_notification(&NotificationEvent {
                message: advisory::LIMIT_WARNING.to_string(),
                kind: NotificationKind::Warning,
            });
        }

        if self.config.tips.effective_enabled() {
            self.since_last_tip += elapsed;
            let interval =
                Duration::from_secs(self.config.tips.effective_frequency().interval_secs());
            if self.since_last_tip >= interval {
                self.since_last_tip = Duration::ZERO;
                self.show_tip();
            }
        }

        self.persist_usage();
    }

    /// Daily reset: zero the counters, re-derive the limit from config, stamp
    /// the reset time, and notify surfaces.
    pub fn reset_daily(&mut self, now_epoch_ms: u64) {
        self.stats.time_used = 0.0;
        self.stats.content_filtered = 0;
        self.stats.daily_limit = self.config.time_limit.daily_limit_secs();
        self.stats.last_reset = now_epoch_ms;
        self.limit_notified = false;
        self.events.emit_stats_reset(&StatsResetEvent {
            daily_limit_secs: self.stats.daily_limit,
        });
        self.persist_usage();
    }

    /// Surface a wellbeing tip now.
    pub fn show_tip(&mut self) {
        let message = self.advisor.tip();
        self.events.emit_notification(&NotificationEvent {
            message: message.to_string(),
            kind: NotificationKind::Tip,
        });
    }

    /// Surface a positive prompt on request.
    pub fn show_positive(&mut self) {
        let message = self.advisor.positive();
        self.events.emit_notification(&NotificationEvent {
            message: message.to_string(),
            kind: NotificationKind::Positive,
        });
    }

    /// Surface the break suggestion on request.
    pub fn show_break(&mut self) {
        self.events.emit_notification(&NotificationEvent {
            message: advisory::BREAK_MESSAGE.to_string(),
            kind: NotificationKind::Break,
        });
    }

    pub(crate) fn scan_parts(&mut self) -> ScanParts<'_> {
        ScanParts {
            config: &self.config,
            catalog: &self.catalog,
            domain: &self.domain,
            ads: &self.ads,
            suppressor: SuppressionEngine::new(
                &mut self.stats,
                self.usage_store.as_ref(),
                &self.events,
            ),
        }
    }

    fn persist_usage(&self) {
        if let Err(error) = self.usage_store.save_usage(&self.stats) {
            tracing::warn!(%error, "usage record write failed; keeping in-memory counters");
        }
    }
}
