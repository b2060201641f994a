//! `CheckProvider` implementation for the static check provider.

use policy_engine_sdk::{CheckFn, CheckProvider, HookFn, ParamCheckFn};

use super::service::StaticCheckProvider;

impl<S, O> CheckProvider for StaticCheckProvider<S, O> {
    type Subject = S;
    type Object = O;

    fn resolve_check(&self, name: &str) -> Option<&CheckFn<S, O>> {
        self.checks.get(name).map(Box::as_ref)
    }

    fn resolve_param_check(&self, name: &str) -> Option<&ParamCheckFn<S, O>> {
        self.param_checks.get(name).map(Box::as_ref)
    }

    fn resolve_hook(&self, name: &str) -> Option<&HookFn<S, O>> {
        self.hooks.get(name).map(Box::as_ref)
    }

    fn resolve_qualified_hook(&self, target: &str, name: &str) -> Option<&HookFn<S, O>> {
        self.qualified_hooks
            .get(target)?
            .get(name)
            .map(Box::as_ref)
    }
}
