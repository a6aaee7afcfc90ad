//! Session lifecycle tests: usage ticks, limit warnings, tip cadence,
//! daily reset and configuration hot-swap.

use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use hush_core::config::HushConfig;
use hush_core::events::{HushEventHandler, NotificationEvent, NotificationKind, StatsResetEvent};
use hush_core::stores::{MemoryStore, UsageStore};
use hush_engine::advisory::{BREAK_MESSAGE, LIMIT_WARNING, POSITIVE_PROMPTS, TIPS};
use hush_engine::SessionContext;

#[derive(Default)]
struct NotificationLog {
    notifications: Mutex<Vec<(NotificationKind, String)>>,
    resets: Mutex<Vec<u64>>,
}

impl HushEventHandler for NotificationLog {
    fn on_notification(&self, event: &NotificationEvent) {
        self.notifications
            .lock()
            .unwrap()
            .push((event.kind, event.message.clone()));
    }

    fn on_stats_reset(&self, event: &StatsResetEvent) {
        self.resets.lock().unwrap().push(event.daily_limit_secs);
    }
}

impl NotificationLog {
    fn of_kind(&self, kind: NotificationKind) -> Vec<String> {
        self.notifications
            .lock()
            .unwrap()
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, m)| m.clone())
            .collect()
    }
}

fn session_from(config_json: &str) -> (SessionContext, Arc<NotificationLog>, Arc<MemoryStore>) {
    let settings = MemoryStore::with_settings(HushConfig::from_json(config_json).unwrap());
    let usage = Arc::new(MemoryStore::new());
    let mut session =
        SessionContext::initialize_seeded(&settings, Box::new(SharedStore(usage.clone())), 7)
            .unwrap();
    let log = Arc::new(NotificationLog::default());
    session.register_handler(log.clone());
    (session, log, usage)
}

/// Forwards to a shared `MemoryStore` so the test can inspect what the
/// session persisted.
struct SharedStore(Arc<MemoryStore>);

impl UsageStore for SharedStore {
    fn load_usage(
        &self,
    ) -> Result<Option<hush_core::usage::UsageStats>, hush_core::errors::StoreError> {
        self.0.load_usage()
    }

    fn save_usage(
        &self,
        stats: &hush_core::usage::UsageStats,
    ) -> Result<(), hush_core::errors::StoreError> {
        self.0.save_usage(stats)
    }
}

/// Time accumulates across ticks and every tick persists the record.
#[test]
fn tick_accumulates_and_persists() {
    let (mut session, _log, usage) = session_from("{}");
    session.tick(Duration::from_secs(30));
    session.tick(Duration::from_millis(1500));

    assert!((session.stats().time_used - 31.5).abs() < 1e-9);
    let persisted = usage.load_usage().unwrap().unwrap();
    assert!((persisted.time_used - 31.5).abs() < 1e-9);
    assert_eq!(persisted.daily_limit, 7_200);
}

/// The limit warning fires exactly once per crossing, not on every tick past
/// the budget.
#[test]
fn limit_warning_is_edge_triggered() {
    let (mut session, log, _usage) =
        session_from(r#"{ "timeLimit": { "hours": 0, "minutes": 1 } }"#);

    session.tick(Duration::from_secs(59));
    assert!(log.of_kind(NotificationKind::Warning).is_empty());

    session.tick(Duration::from_secs(2));
    session.tick(Duration::from_secs(600));
    let warnings = log.of_kind(NotificationKind::Warning);
    assert_eq!(warnings, vec![LIMIT_WARNING.to_string()]);
}

/// Tips surface on the configured cadence and draw from the tip pool.
#[test]
fn tips_follow_the_configured_cadence() {
    let (mut session, log, _usage) =
        session_from(r#"{ "tips": { "enabled": true, "frequency": "hourly" } }"#);

    session.tick(Duration::from_secs(1800));
    assert!(log.of_kind(NotificationKind::Tip).is_empty());

    session.tick(Duration::from_secs(1800));
    let tips = log.of_kind(NotificationKind::Tip);
    assert_eq!(tips.len(), 1);
    assert!(TIPS.contains(&tips[0].as_str()));

    // The interval restarts after a tip.
    session.tick(Duration::from_secs(3599));
    assert_eq!(log.of_kind(NotificationKind::Tip).len(), 1);
    session.tick(Duration::from_secs(1));
    assert_eq!(log.of_kind(NotificationKind::Tip).len(), 2);
}

/// Disabled tips never surface, regardless of elapsed time.
#[test]
fn disabled_tips_never_fire() {
    let (mut session, log, _usage) = session_from(r#"{ "tips": { "enabled": false } }"#);
    session.tick(Duration::from_secs(1_000_000));
    assert!(log.of_kind(NotificationKind::Tip).is_empty());
}

/// The same seed yields the same advisory sequence.
#[test]
fn seeded_advisory_sequences_are_reproducible() {
    let mut sequences = Vec::new();
    for _ in 0..2 {
        let (mut session, log, _usage) = session_from("{}");
        for _ in 0..5 {
            session.show_tip();
        }
        sequences.push(log.of_kind(NotificationKind::Tip));
    }
    assert_eq!(sequences[0], sequences[1]);
}

/// Positive prompts and the break suggestion surface on request.
#[test]
fn on_request_advisories_surface() {
    let (mut session, log, _usage) = session_from("{}");
    session.show_positive();
    session.show_break();

    let positives = log.of_kind(NotificationKind::Positive);
    assert_eq!(positives.len(), 1);
    assert!(POSITIVE_PROMPTS.contains(&positives[0].as_str()));
    assert_eq!(
        log.of_kind(NotificationKind::Break),
        vec![BREAK_MESSAGE.to_string()]
    );
}

/// Daily reset zeroes the counters, stamps the reset time, re-derives the
/// limit and rearms the limit warning.
#[test]
fn reset_daily_rearms_the_session() {
    let (mut session, log, usage) =
        session_from(r#"{ "timeLimit": { "hours": 0, "minutes": 1 } }"#);
    session.tick(Duration::from_secs(90));
    assert_eq!(log.of_kind(NotificationKind::Warning).len(), 1);

    session.reset_daily(1_724_630_400_000);
    assert_eq!(session.stats().time_used, 0.0);
    assert_eq!(session.stats().content_filtered, 0);
    assert_eq!(session.stats().last_reset, 1_724_630_400_000);
    assert_eq!(*log.resets.lock().unwrap(), vec![60]);

    let persisted = usage.load_usage().unwrap().unwrap();
    assert_eq!(persisted.last_reset, 1_724_630_400_000);

    // Crossing the budget again warns again.
    session.tick(Duration::from_secs(61));
    assert_eq!(log.of_kind(NotificationKind::Warning).len(), 2);
}

/// An invalid replacement config recovers the documented sensitivity
/// defaults instead of propagating an undefined strictness.
#[test]
fn invalid_replacement_config_recovers_defaults() {
    let (mut session, _log, _usage) = session_from("{}");
    let bad = HushConfig {
        sensitivity: hush_core::config::SensitivityConfig {
            news: Some(9),
            social: None,
        },
        ..Default::default()
    };
    session.replace_config(bad);
    assert_eq!(session.config().sensitivity.effective_news(), 3);
    assert_eq!(session.config().sensitivity.effective_social(), 4);
}

/// A replacement config re-derives the daily limit immediately.
#[test]
fn replacement_config_rederives_daily_limit() {
    let (mut session, _log, usage) = session_from("{}");
    let new = HushConfig::from_json(r#"{ "timeLimit": { "hours": 3, "minutes": 30 } }"#).unwrap();
    session.replace_config(new);
    assert_eq!(session.stats().daily_limit, 12_600);
    assert_eq!(usage.load_usage().unwrap().unwrap().daily_limit, 12_600);
}

/// Unreadable settings fall back to defaults rather than failing the
/// session.
#[test]
fn unreadable_settings_recover_to_defaults() {
    struct BrokenSettings;
    impl hush_core::stores::SettingsStore for BrokenSettings {
        fn load_settings(&self) -> Result<Option<HushConfig>, hush_core::errors::StoreError> {
            Err(hush_core::errors::StoreError::ReadFailed {
                key: "settings".into(),
                message: "io error".into(),
            })
        }
        fn save_settings(&self, _config: &HushConfig) -> Result<(), hush_core::errors::StoreError> {
            Ok(())
        }
    }

    let session =
        SessionContext::initialize_seeded(&BrokenSettings, Box::new(MemoryStore::new()), 1)
            .unwrap();
    assert_eq!(session.config().sensitivity.effective_news(), 3);
    assert_eq!(session.stats().daily_limit, 7_200);
}
