//! Event surface connecting the engine to its collaborators.
//!
//! Notification rendering, badge display, and stats dashboards are opaque to
//! the engine; they subscribe as handlers and receive synchronous events.

pub mod dispatcher;
pub mod handler;
pub mod types;

pub use dispatcher::EventDispatcher;
pub use handler::HushEventHandler;
pub use types::{
    BadgeUpdateEvent, ConfigReplacedEvent, NotificationEvent, NotificationKind,
    StatsResetEvent, SuppressionEvent,
};
