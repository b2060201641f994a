//! Domain errors for the policy engine.

use policy_engine_sdk::PolicyEngineError;

/// Internal domain errors.
#[derive(thiserror::Error, Debug)]
pub enum DomainError {
    #[error("duplicate rule for '{object_type}/{action}'")]
    DuplicateRule { object_type: String, action: String },

    #[error("invalid rule: {reason}")]
    InvalidRule { reason: String },

    #[error("unresolved check '{name}/{arity}'")]
    UnresolvedCheck { name: String, arity: u8 },

    #[error("unresolved hook '{hook}'")]
    UnresolvedHook { hook: String },

    #[error("unauthorized: '{object_type}/{action}'")]
    Unauthorized { object_type: String, action: String },
}

impl From<DomainError> for PolicyEngineError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::UnresolvedCheck { name, arity } => Self::UnresolvedCheck { name, arity },
            DomainError::UnresolvedHook { hook } => Self::UnresolvedHook { name: hook },
            DomainError::Unauthorized {
                object_type,
                action,
            } => Self::Denied {
                object_type,
                action,
            },
            e @ (DomainError::DuplicateRule { .. } | DomainError::InvalidRule { .. }) => {
                Self::Internal(e.to_string())
            }
        }
    }
}
