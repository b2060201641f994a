//! Domain service for the policy engine.

use std::fmt;
use std::sync::Arc;

use policy_engine_sdk::{CheckProvider, UnknownActionSink};
use tracing::info;

use super::error::DomainError;
use super::evaluator;
use super::policy::Policy;
use super::signal::TracingSink;
use crate::config::PolicyEngineConfig;

/// Policy engine service.
///
/// Binds a built [`Policy`] to the [`CheckProvider`] that resolves its checks
/// and hooks. Holds no per-call state; concurrent decisions only share the
/// read-only policy and whatever the provider shares.
pub struct Service<P: CheckProvider> {
    policy: Arc<Policy>,
    provider: Arc<P>,
    sink: Arc<dyn UnknownActionSink>,
}

impl<P: CheckProvider> Service<P> {
    /// Create a service that reports unknown actions through [`TracingSink`].
    #[must_use]
    pub fn new(policy: Arc<Policy>, provider: Arc<P>) -> Self {
        Self {
            policy,
            provider,
            sink: Arc::new(TracingSink::default()),
        }
    }

    /// Build the policy from configuration.
    ///
    /// # Errors
    ///
    /// - `DuplicateRule` / `InvalidRule` if the configured rules do not form a valid policy
    #[tracing::instrument(skip_all, fields(rule_count = config.rules.len()))]
    pub fn from_config(config: PolicyEngineConfig, provider: Arc<P>) -> Result<Self, DomainError> {
        let policy = Policy::build(config.rules)?;
        info!(
            rule_count = policy.len(),
            unknown_action_log = ?config.unknown_action_log,
            "Policy engine initialized"
        );

        Ok(Self {
            policy: Arc::new(policy),
            provider,
            sink: Arc::new(TracingSink::new(config.unknown_action_log)),
        })
    }

    /// Replace the unknown-action collaborator.
    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn UnknownActionSink>) -> Self {
        self.sink = sink;
        self
    }

    #[must_use]
    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    /// Decide whether `subject` may perform `action` on `object`.
    ///
    /// # Errors
    ///
    /// - `UnresolvedHook` / `UnresolvedCheck` if the provider cannot resolve a reference
    #[tracing::instrument(skip_all, fields(object_type = %object_type, action = %action))]
    pub fn authorize(
        &self,
        object_type: &str,
        action: &str,
        subject: P::Subject,
        object: P::Object,
    ) -> Result<bool, DomainError> {
        evaluator::authorize(
            &self.policy,
            self.provider.as_ref(),
            self.sink.as_ref(),
            object_type,
            action,
            subject,
            object,
        )
    }

    /// Decide an action that needs no object; the object is `P::Object::default()`.
    ///
    /// # Errors
    ///
    /// - `UnresolvedHook` / `UnresolvedCheck` if the provider cannot resolve a reference
    pub fn authorize_subject(
        &self,
        object_type: &str,
        action: &str,
        subject: P::Subject,
    ) -> Result<bool, DomainError>
    where
        P::Object: Default,
    {
        self.authorize(object_type, action, subject, P::Object::default())
    }

    /// Like [`Service::authorize`], but a negative decision is an error.
    ///
    /// # Errors
    ///
    /// - `Unauthorized` if the action is not permitted
    /// - `UnresolvedHook` / `UnresolvedCheck` if the provider cannot resolve a reference
    pub fn enforce(
        &self,
        object_type: &str,
        action: &str,
        subject: P::Subject,
        object: P::Object,
    ) -> Result<(), DomainError> {
        if self.authorize(object_type, action, subject, object)? {
            Ok(())
        } else {
            Err(DomainError::Unauthorized {
                object_type: object_type.to_owned(),
                action: action.to_owned(),
            })
        }
    }
}

impl<P: CheckProvider> fmt::Debug for Service<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Service")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
