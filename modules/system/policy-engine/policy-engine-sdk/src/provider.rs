//! Check provider capability.
//!
//! The engine never calls checks or hooks directly. It resolves every name
//! through a [`CheckProvider`] and invokes what comes back, so the same
//! policy can run against a function table, a plugin registry, or test
//! doubles.

use serde_json::Value;

/// 2-argument check: `(subject, object) -> bool`.
pub type CheckFn<S, O> = dyn Fn(&S, &O) -> bool + Send + Sync;

/// 3-argument check: `(subject, object, param) -> bool`.
pub type ParamCheckFn<S, O> = dyn Fn(&S, &O, &Value) -> bool + Send + Sync;

/// Hydration step: `(subject, object, extra_args...) -> (subject', object')`.
///
/// Extra arguments are positional and empty for hooks resolved by bare name.
pub type HookFn<S, O> = dyn Fn(S, O, &[Value]) -> (S, O) + Send + Sync;

/// Resolves check and hook names to invocable functions.
///
/// Checks and hooks live in distinct namespaces, and 2-argument and
/// 3-argument checks with the same name are distinct functions.
/// Returning `None` makes the engine fail the decision with an
/// "unresolved" error instead of treating the reference as `false`.
///
/// ```ignore
/// impl CheckProvider for AppChecks {
///     type Subject = User;
///     type Object = Article;
///
///     fn resolve_check(&self, name: &str) -> Option<&CheckFn<User, Article>> {
///         match name {
///             "own_resource" => Some(&own_resource),
///             _ => None,
///         }
///     }
///     // ...
/// }
/// ```
pub trait CheckProvider: Send + Sync {
    type Subject;
    type Object;

    /// Resolve a 2-argument check.
    fn resolve_check(&self, name: &str) -> Option<&CheckFn<Self::Subject, Self::Object>>;

    /// Resolve a 3-argument check.
    fn resolve_param_check(
        &self,
        name: &str,
    ) -> Option<&ParamCheckFn<Self::Subject, Self::Object>>;

    /// Resolve a hook in the default hydration namespace.
    fn resolve_hook(&self, name: &str) -> Option<&HookFn<Self::Subject, Self::Object>>;

    /// Resolve a hook against an explicitly named target.
    fn resolve_qualified_hook(
        &self,
        target: &str,
        name: &str,
    ) -> Option<&HookFn<Self::Subject, Self::Object>>;
}
