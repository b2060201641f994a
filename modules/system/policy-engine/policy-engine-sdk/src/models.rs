//! Rule model for the policy engine.
//!
//! A [`Rule`] binds an `(object_type, action)` pair to an `allow` and a
//! `deny` [`ConditionTree`] plus an ordered list of [`HookRef`]s that hydrate
//! the subject/object before any check runs.
//!
//! ## Condition trees
//!
//! A tree is a disjunction of [`Group`]s; a group is either a single
//! [`Condition`] or a conjunction of conditions. `[[A, B], [C]]` reads as
//! `(A AND B) OR C`. An empty tree is `false`.
//!
//! ## Serialized form
//!
//! All model types are serde-compatible so a host can load rules from its
//! configuration:
//!
//! ```json
//! {
//!   "object_type": "article",
//!   "action": "update",
//!   "allow": [{"name": "role", "param": "admin"}, ["own_resource", "not_locked"]],
//!   "deny": ["banned"],
//!   "pre_hooks": ["preload_groups", {"target": "audit", "name": "tag", "args": [1]}]
//! }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Reference to a named boolean check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CheckRef {
    /// 2-argument check: `(subject, object)`.
    Named(String),
    /// 3-argument check: `(subject, object, param)`. The parameter is
    /// forwarded verbatim.
    NamedWithParam { name: String, param: Value },
}

impl CheckRef {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    #[must_use]
    pub fn with_param(name: impl Into<String>, param: impl Into<Value>) -> Self {
        Self::NamedWithParam {
            name: name.into(),
            param: param.into(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Named(name) | Self::NamedWithParam { name, .. } => name,
        }
    }

    #[must_use]
    pub fn param(&self) -> Option<&Value> {
        match self {
            Self::Named(_) => None,
            Self::NamedWithParam { param, .. } => Some(param),
        }
    }

    /// Number of arguments the resolved function is called with.
    #[must_use]
    pub fn arity(&self) -> u8 {
        match self {
            Self::Named(_) => 2,
            Self::NamedWithParam { .. } => 3,
        }
    }
}

/// A single element of a group: a boolean literal or a check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Condition {
    Literal(bool),
    Check(CheckRef),
}

impl From<bool> for Condition {
    fn from(value: bool) -> Self {
        Self::Literal(value)
    }
}

impl From<CheckRef> for Condition {
    fn from(check: CheckRef) -> Self {
        Self::Check(check)
    }
}

/// One disjunct of a [`ConditionTree`].
///
/// `All` is listed first so that a JSON array is always read as a
/// conjunction and never as a parameterised check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Group {
    /// Conjunction: every member must hold. An empty conjunction is `false`.
    All(Vec<Condition>),
    Single(Condition),
}

impl Group {
    #[must_use]
    pub fn check(check: CheckRef) -> Self {
        Self::Single(Condition::Check(check))
    }

    #[must_use]
    pub fn literal(value: bool) -> Self {
        Self::Single(Condition::Literal(value))
    }

    #[must_use]
    pub fn all<C: Into<Condition>>(conditions: impl IntoIterator<Item = C>) -> Self {
        Self::All(conditions.into_iter().map(Into::into).collect())
    }
}

impl From<Condition> for Group {
    fn from(condition: Condition) -> Self {
        Self::Single(condition)
    }
}

impl From<CheckRef> for Group {
    fn from(check: CheckRef) -> Self {
        Self::check(check)
    }
}

/// Disjunction of groups describing the `allow` or `deny` side of a rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConditionTree {
    groups: Vec<Group>,
}

impl ConditionTree {
    /// Tree with no groups; always evaluates to `false`.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// OR of the given groups.
    #[must_use]
    pub fn any<G: Into<Group>>(groups: impl IntoIterator<Item = G>) -> Self {
        Self {
            groups: groups.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn single(group: impl Into<Group>) -> Self {
        Self {
            groups: vec![group.into()],
        }
    }

    #[must_use]
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Reference to a hydration step run before the condition trees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HookRef {
    /// Resolved in the provider's default hydration namespace.
    ByName(String),
    /// Resolved against an explicit target; `args` are appended after
    /// `(subject, object)` in declaration order.
    Qualified {
        target: String,
        name: String,
        #[serde(default)]
        args: Vec<Value>,
    },
}

impl HookRef {
    #[must_use]
    pub fn by_name(name: impl Into<String>) -> Self {
        Self::ByName(name.into())
    }

    #[must_use]
    pub fn qualified(
        target: impl Into<String>,
        name: impl Into<String>,
        args: impl IntoIterator<Item = Value>,
    ) -> Self {
        Self::Qualified {
            target: target.into(),
            name: name.into(),
            args: args.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::ByName(name) | Self::Qualified { name, .. } => name,
        }
    }

    #[must_use]
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::ByName(_) => None,
            Self::Qualified { target, .. } => Some(target),
        }
    }

    #[must_use]
    pub fn args(&self) -> &[Value] {
        match self {
            Self::ByName(_) => &[],
            Self::Qualified { args, .. } => args,
        }
    }
}

impl fmt::Display for HookRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ByName(name) => f.write_str(name),
            Self::Qualified { target, name, args } => {
                write!(f, "{target}.{name}/{}", args.len().saturating_add(2))
            }
        }
    }
}

/// Identity of a rule: `(object_type, action)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RuleKey {
    pub object_type: String,
    pub action: String,
}

impl fmt::Display for RuleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.object_type, self.action)
    }
}

/// Allow/deny/hooks bundle for one `(object_type, action)` pair.
///
/// Immutable once built: the `with_*` methods consume and return the rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Rule {
    object_type: String,
    action: String,
    #[serde(default)]
    allow: ConditionTree,
    #[serde(default)]
    deny: ConditionTree,
    #[serde(default)]
    pre_hooks: Vec<HookRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl Rule {
    /// Create a rule that allows nothing and denies nothing.
    #[must_use]
    pub fn new(object_type: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            object_type: object_type.into(),
            action: action.into(),
            allow: ConditionTree::default(),
            deny: ConditionTree::default(),
            pre_hooks: Vec::new(),
            description: None,
        }
    }

    #[must_use]
    pub fn with_allow(mut self, allow: ConditionTree) -> Self {
        self.allow = allow;
        self
    }

    #[must_use]
    pub fn with_deny(mut self, deny: ConditionTree) -> Self {
        self.deny = deny;
        self
    }

    /// Append a pre-hook. Hooks run in the order they were added.
    #[must_use]
    pub fn with_pre_hook(mut self, hook: HookRef) -> Self {
        self.pre_hooks.push(hook);
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn object_type(&self) -> &str {
        &self.object_type
    }

    #[must_use]
    pub fn action(&self) -> &str {
        &self.action
    }

    #[must_use]
    pub fn allow(&self) -> &ConditionTree {
        &self.allow
    }

    #[must_use]
    pub fn deny(&self) -> &ConditionTree {
        &self.deny
    }

    #[must_use]
    pub fn pre_hooks(&self) -> &[HookRef] {
        &self.pre_hooks
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn key(&self) -> RuleKey {
        RuleKey {
            object_type: self.object_type.clone(),
            action: self.action.clone(),
        }
    }

    /// Canonical rule name, e.g. `article_create`.
    #[must_use]
    pub fn name(&self) -> String {
        format!("{}_{}", self.object_type, self.action)
    }
}
