//! EventDispatcher — synchronous event dispatch with zero overhead when empty.

use std::sync::Arc;

use super::handler::HushEventHandler;
use super::types::*;

/// Synchronous event dispatcher wrapping a list of handlers.
///
/// When no handlers are registered, `emit` iterates over an empty Vec —
/// effectively zero cost. A handler that panics is isolated: a failure to
/// notify one surface never blocks the other surfaces, and never blocks
/// fragment processing.
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn HushEventHandler>>,
}

impl EventDispatcher {
    /// Create a new empty dispatcher.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Register an event handler.
    pub fn register(&mut self, handler: Arc<dyn HushEventHandler>) {
        self.handlers.push(handler);
    }

    /// Returns the number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Emit an event to all registered handlers, isolating panics.
    fn emit<F: Fn(&dyn HushEventHandler)>(&self, f: F) {
        for handler in &self.handlers {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                tracing::warn!("event handler panicked; continuing with remaining handlers");
            }
        }
    }

    pub fn emit_notification(&self, event: &NotificationEvent) {
        self.emit(|h| h.on_notification(event));
    }

    pub fn emit_badge_update(&self, event: &BadgeUpdateEvent) {
        self.emit(|h| h.on_badge_update(event));
    }

    pub fn emit_suppression(&self, event: &SuppressionEvent) {
        self.emit(|h| h.on_suppression(event));
    }

    pub fn emit_stats_reset(&self, event: &StatsResetEvent) {
        self.emit(|h| h.on_stats_reset(event));
    }

    pub fn emit_config_replaced(&self, event: &ConfigReplacedEvent) {
        self.emit(|h| h.on_config_replaced(event));
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
