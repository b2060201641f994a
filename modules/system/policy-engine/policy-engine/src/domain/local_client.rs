//! Local (in-process) client for the policy engine.

use std::sync::Arc;

use policy_engine_sdk::{CheckProvider, PolicyEngineClient, PolicyEngineError};

use super::{DomainError, Service};

/// Local client wrapping the service.
pub struct PolicyEngineLocalClient<P: CheckProvider> {
    svc: Arc<Service<P>>,
}

impl<P: CheckProvider> PolicyEngineLocalClient<P> {
    #[must_use]
    pub fn new(svc: Arc<Service<P>>) -> Self {
        Self { svc }
    }
}

fn log_and_convert(op: &str, e: DomainError) -> PolicyEngineError {
    if let DomainError::Unauthorized { .. } = e {
        tracing::debug!(operation = op, error = %e, "policy_engine denied request");
    } else {
        tracing::error!(operation = op, error = ?e, "policy_engine call failed");
    }
    e.into()
}

impl<P: CheckProvider> PolicyEngineClient for PolicyEngineLocalClient<P> {
    type Subject = P::Subject;
    type Object = P::Object;

    fn authorize(
        &self,
        object_type: &str,
        action: &str,
        subject: Self::Subject,
        object: Self::Object,
    ) -> Result<bool, PolicyEngineError> {
        self.svc
            .authorize(object_type, action, subject, object)
            .map_err(|e| log_and_convert("authorize", e))
    }

    fn enforce(
        &self,
        object_type: &str,
        action: &str,
        subject: Self::Subject,
        object: Self::Object,
    ) -> Result<(), PolicyEngineError> {
        self.svc
            .enforce(object_type, action, subject, object)
            .map_err(|e| log_and_convert("enforce", e))
    }
}
