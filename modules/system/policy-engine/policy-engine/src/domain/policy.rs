//! Immutable rule registry.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use policy_engine_sdk::Rule;
use tracing::debug;

use super::error::DomainError;

/// Mapping from `(object_type, action)` to [`Rule`].
///
/// Built once from the authored rule list and read-only afterwards, so it
/// can be shared behind an `Arc` by any number of concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct Policy {
    // object_type -> action -> rule; lets lookups borrow both key halves.
    rules: HashMap<String, HashMap<String, Rule>>,
    len: usize,
}

impl Policy {
    /// Build a policy from `rules`.
    ///
    /// # Errors
    ///
    /// - `InvalidRule` if a rule has an empty object type or action
    /// - `DuplicateRule` if two rules share the same `(object_type, action)`
    pub fn build(rules: impl IntoIterator<Item = Rule>) -> Result<Self, DomainError> {
        let mut by_type: HashMap<String, HashMap<String, Rule>> = HashMap::new();
        let mut len = 0;

        for rule in rules {
            validate(&rule)?;

            let actions = by_type.entry(rule.object_type().to_owned()).or_default();
            match actions.entry(rule.action().to_owned()) {
                Entry::Occupied(_) => {
                    return Err(DomainError::DuplicateRule {
                        object_type: rule.object_type().to_owned(),
                        action: rule.action().to_owned(),
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(rule);
                }
            }
            len += 1;
        }

        debug!(rule_count = len, object_types = by_type.len(), "Built policy");

        Ok(Self {
            rules: by_type,
            len,
        })
    }

    /// Rule registered for `(object_type, action)`, if any.
    #[must_use]
    pub fn lookup(&self, object_type: &str, action: &str) -> Option<&Rule> {
        self.rules.get(object_type)?.get(action)
    }

    #[must_use]
    pub fn contains(&self, object_type: &str, action: &str) -> bool {
        self.lookup(object_type, action).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

fn validate(rule: &Rule) -> Result<(), DomainError> {
    if rule.object_type().is_empty() {
        return Err(DomainError::InvalidRule {
            reason: format!("rule for action '{}' has an empty object type", rule.action()),
        });
    }
    if rule.action().is_empty() {
        return Err(DomainError::InvalidRule {
            reason: format!(
                "rule for object type '{}' has an empty action",
                rule.object_type()
            ),
        });
    }
    Ok(())
}
