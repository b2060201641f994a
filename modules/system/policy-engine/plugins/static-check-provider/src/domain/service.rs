//! Function table for the static check provider.

use std::collections::HashMap;
use std::fmt;

use policy_engine_sdk::{CheckFn, HookFn, ParamCheckFn};
use serde_json::Value;

/// In-memory registry of named checks and hooks.
///
/// Four independent namespaces: 2-argument checks, 3-argument checks,
/// default hooks and target-qualified hooks. Registering a name twice in
/// the same namespace replaces the earlier function.
pub struct StaticCheckProvider<S, O> {
    pub(super) checks: HashMap<String, Box<CheckFn<S, O>>>,
    pub(super) param_checks: HashMap<String, Box<ParamCheckFn<S, O>>>,
    pub(super) hooks: HashMap<String, Box<HookFn<S, O>>>,
    // target -> name -> hook
    pub(super) qualified_hooks: HashMap<String, HashMap<String, Box<HookFn<S, O>>>>,
}

impl<S, O> StaticCheckProvider<S, O> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            checks: HashMap::new(),
            param_checks: HashMap::new(),
            hooks: HashMap::new(),
            qualified_hooks: HashMap::new(),
        }
    }

    /// Register a 2-argument check.
    #[must_use]
    pub fn with_check<F>(mut self, name: impl Into<String>, check: F) -> Self
    where
        F: Fn(&S, &O) -> bool + Send + Sync + 'static,
    {
        let name = name.into();
        if self.checks.insert(name.clone(), Box::new(check)).is_some() {
            tracing::warn!(check = %name, "Check registered twice, replacing");
        }
        self
    }

    /// Register a 3-argument check.
    #[must_use]
    pub fn with_param_check<F>(mut self, name: impl Into<String>, check: F) -> Self
    where
        F: Fn(&S, &O, &Value) -> bool + Send + Sync + 'static,
    {
        let name = name.into();
        if self.param_checks.insert(name.clone(), Box::new(check)).is_some() {
            tracing::warn!(check = %name, "Parameterised check registered twice, replacing");
        }
        self
    }

    /// Register a hook in the default hydration namespace.
    #[must_use]
    pub fn with_hook<F>(mut self, name: impl Into<String>, hook: F) -> Self
    where
        F: Fn(S, O, &[Value]) -> (S, O) + Send + Sync + 'static,
    {
        let name = name.into();
        if self.hooks.insert(name.clone(), Box::new(hook)).is_some() {
            tracing::warn!(hook = %name, "Hook registered twice, replacing");
        }
        self
    }

    /// Register a hook under an explicit target.
    #[must_use]
    pub fn with_qualified_hook<F>(
        mut self,
        target: impl Into<String>,
        name: impl Into<String>,
        hook: F,
    ) -> Self
    where
        F: Fn(S, O, &[Value]) -> (S, O) + Send + Sync + 'static,
    {
        let target = target.into();
        let name = name.into();
        let replaced = self
            .qualified_hooks
            .entry(target.clone())
            .or_default()
            .insert(name.clone(), Box::new(hook))
            .is_some();
        if replaced {
            tracing::warn!(%target, hook = %name, "Hook registered twice, replacing");
        }
        self
    }
}

impl<S, O> Default for StaticCheckProvider<S, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, O> fmt::Debug for StaticCheckProvider<S, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut checks: Vec<&str> = self.checks.keys().map(String::as_str).collect();
        checks.sort_unstable();
        let mut param_checks: Vec<&str> = self.param_checks.keys().map(String::as_str).collect();
        param_checks.sort_unstable();
        let mut hooks: Vec<&str> = self.hooks.keys().map(String::as_str).collect();
        hooks.sort_unstable();
        let mut targets: Vec<&str> = self.qualified_hooks.keys().map(String::as_str).collect();
        targets.sort_unstable();

        f.debug_struct("StaticCheckProvider")
            .field("checks", &checks)
            .field("param_checks", &param_checks)
            .field("hooks", &hooks)
            .field("hook_targets", &targets)
            .finish()
    }
}
