//! Decision evaluation.
//!
//! ## Evaluation order
//!
//! 1. Look up the rule; a miss emits [`UnknownAction`] and returns `false`.
//! 2. Run pre-hooks in declaration order, threading `(subject, object)`.
//! 3. Evaluate the deny tree. `true` returns `false` without touching the
//!    allow tree.
//! 4. Evaluate the allow tree.
//!
//! Inside a tree there is no short-circuiting: every group and every member
//! of a conjunction is invoked, because checks may have side effects the
//! surrounding system relies on. Provider resolution failures abort the
//! decision with an error instead of counting as `false`.

use policy_engine_sdk::{
    CheckProvider, CheckRef, Condition, ConditionTree, Group, HookFn, HookRef, UnknownAction,
    UnknownActionSink,
};
use tracing::{debug, trace};

use super::error::DomainError;
use super::policy::Policy;

/// Decide whether `subject` may perform `action` on an `object_type` object.
///
/// # Errors
///
/// - `UnresolvedHook` if a pre-hook cannot be resolved
/// - `UnresolvedCheck` if a referenced check cannot be resolved
pub fn authorize<P>(
    policy: &Policy,
    provider: &P,
    sink: &dyn UnknownActionSink,
    object_type: &str,
    action: &str,
    subject: P::Subject,
    object: P::Object,
) -> Result<bool, DomainError>
where
    P: CheckProvider + ?Sized,
{
    let Some(rule) = policy.lookup(object_type, action) else {
        sink.unknown_action(&UnknownAction {
            object_type: object_type.to_owned(),
            action: action.to_owned(),
        });
        return Ok(false);
    };

    let (subject, object) = run_hooks(rule.pre_hooks(), provider, subject, object)?;

    if eval_condition_tree(rule.deny(), provider, &subject, &object)? {
        debug!(rule = %rule.name(), "Denied by deny conditions");
        return Ok(false);
    }

    let allowed = eval_condition_tree(rule.allow(), provider, &subject, &object)?;
    debug!(rule = %rule.name(), allowed, "Evaluated allow conditions");
    Ok(allowed)
}

/// Apply `hooks` in order; each hook receives the previous hook's output.
///
/// # Errors
///
/// - `UnresolvedHook` if a hook cannot be resolved; later hooks are not run
pub fn run_hooks<P>(
    hooks: &[HookRef],
    provider: &P,
    subject: P::Subject,
    object: P::Object,
) -> Result<(P::Subject, P::Object), DomainError>
where
    P: CheckProvider + ?Sized,
{
    hooks
        .iter()
        .try_fold((subject, object), |(subject, object), hook| {
            let hook_fn = resolve_hook(provider, hook)?;
            trace!(hook = %hook, "Running pre-hook");
            Ok(hook_fn(subject, object, hook.args()))
        })
}

fn resolve_hook<'p, P>(
    provider: &'p P,
    hook: &HookRef,
) -> Result<&'p HookFn<P::Subject, P::Object>, DomainError>
where
    P: CheckProvider + ?Sized,
{
    let resolved = match hook {
        HookRef::ByName(name) => provider.resolve_hook(name),
        HookRef::Qualified { target, name, .. } => provider.resolve_qualified_hook(target, name),
    };
    resolved.ok_or_else(|| DomainError::UnresolvedHook {
        hook: hook.to_string(),
    })
}

/// OR of every group in `tree`. An empty tree is `false`.
///
/// # Errors
///
/// - `UnresolvedCheck` if a referenced check cannot be resolved
pub fn eval_condition_tree<P>(
    tree: &ConditionTree,
    provider: &P,
    subject: &P::Subject,
    object: &P::Object,
) -> Result<bool, DomainError>
where
    P: CheckProvider + ?Sized,
{
    let mut result = false;
    for group in tree.groups() {
        // evaluated before the OR so a satisfied tree still invokes later groups
        let group_result = eval_group(group, provider, subject, object)?;
        result |= group_result;
    }
    Ok(result)
}

/// Evaluate one group. A conjunction invokes every member; an empty one is `false`.
///
/// # Errors
///
/// - `UnresolvedCheck` if a referenced check cannot be resolved
pub fn eval_group<P>(
    group: &Group,
    provider: &P,
    subject: &P::Subject,
    object: &P::Object,
) -> Result<bool, DomainError>
where
    P: CheckProvider + ?Sized,
{
    match group {
        Group::Single(condition) => eval_condition(condition, provider, subject, object),
        Group::All(conditions) => {
            if conditions.is_empty() {
                return Ok(false);
            }
            let mut result = true;
            for condition in conditions {
                let condition_result = eval_condition(condition, provider, subject, object)?;
                result &= condition_result;
            }
            Ok(result)
        }
    }
}

fn eval_condition<P>(
    condition: &Condition,
    provider: &P,
    subject: &P::Subject,
    object: &P::Object,
) -> Result<bool, DomainError>
where
    P: CheckProvider + ?Sized,
{
    match condition {
        Condition::Literal(value) => Ok(*value),
        Condition::Check(check) => invoke_check(check, provider, subject, object),
    }
}

fn invoke_check<P>(
    check: &CheckRef,
    provider: &P,
    subject: &P::Subject,
    object: &P::Object,
) -> Result<bool, DomainError>
where
    P: CheckProvider + ?Sized,
{
    let unresolved = || DomainError::UnresolvedCheck {
        name: check.name().to_owned(),
        arity: check.arity(),
    };

    let result = match check {
        CheckRef::Named(name) => {
            let check_fn = provider.resolve_check(name).ok_or_else(unresolved)?;
            check_fn(subject, object)
        }
        CheckRef::NamedWithParam { name, param } => {
            let check_fn = provider.resolve_param_check(name).ok_or_else(unresolved)?;
            check_fn(subject, object, param)
        }
    };
    trace!(check = check.name(), result, "Invoked check");
    Ok(result)
}
