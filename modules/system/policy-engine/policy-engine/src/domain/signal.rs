//! Built-in [`UnknownActionSink`] implementations.

use policy_engine_sdk::{UnknownAction, UnknownActionSink};

use crate::config::UnknownActionLog;

/// Reports unknown actions as `tracing` events at a configured level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink {
    level: UnknownActionLog,
}

impl TracingSink {
    #[must_use]
    pub fn new(level: UnknownActionLog) -> Self {
        Self { level }
    }
}

impl UnknownActionSink for TracingSink {
    fn unknown_action(&self, event: &UnknownAction) {
        let UnknownAction {
            object_type,
            action,
        } = event;
        match self.level {
            UnknownActionLog::Warn => {
                tracing::warn!(%object_type, %action, "Authorization requested for unknown action");
            }
            UnknownActionLog::Info => {
                tracing::info!(%object_type, %action, "Authorization requested for unknown action");
            }
            UnknownActionLog::Debug => {
                tracing::debug!(%object_type, %action, "Authorization requested for unknown action");
            }
            UnknownActionLog::Off => {}
        }
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl UnknownActionSink for NoopSink {
    fn unknown_action(&self, _event: &UnknownAction) {}
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    fn event() -> UnknownAction {
        UnknownAction {
            object_type: "invoice".to_owned(),
            action: "void".to_owned(),
        }
    }

    #[test]
    #[traced_test]
    fn warn_level_logs_object_type_and_action() {
        TracingSink::default().unknown_action(&event());

        assert!(logs_contain("Authorization requested for unknown action"));
        assert!(logs_contain("object_type=invoice"));
        assert!(logs_contain("action=void"));
    }

    #[test]
    #[traced_test]
    fn off_level_stays_silent() {
        TracingSink::new(UnknownActionLog::Off).unknown_action(&event());

        assert!(!logs_contain("unknown action"));
    }
}
