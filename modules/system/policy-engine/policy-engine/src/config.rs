//! Configuration for the policy engine.

use policy_engine_sdk::Rule;
use serde::Deserialize;

/// Configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PolicyEngineConfig {
    /// Rules the policy is built from. Duplicate `(object_type, action)`
    /// pairs abort initialization.
    pub rules: Vec<Rule>,

    /// Level at which unknown-action lookups are logged.
    pub unknown_action_log: UnknownActionLog,
}

impl Default for PolicyEngineConfig {
    fn default() -> Self {
        Self {
            rules: Vec::new(),
            unknown_action_log: UnknownActionLog::Warn,
        }
    }
}

/// Log level for unknown-action lookups.
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UnknownActionLog {
    #[default]
    Warn,
    Info,
    Debug,
    /// Do not log; the decision is still `false`.
    Off,
}
