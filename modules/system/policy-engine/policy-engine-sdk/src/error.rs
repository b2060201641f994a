//! Error types for the policy engine module.

use thiserror::Error;

/// Errors that can occur when using the policy engine API.
///
/// A negative decision from [`crate::PolicyEngineClient::authorize`] is
/// `Ok(false)`, not an error. Only [`crate::PolicyEngineClient::enforce`]
/// turns it into [`PolicyEngineError::Denied`].
#[derive(Debug, Error)]
pub enum PolicyEngineError {
    /// A rule references a check the provider cannot resolve.
    #[error("unresolved check: {name}/{arity}")]
    UnresolvedCheck { name: String, arity: u8 },

    /// A rule references a hook the provider cannot resolve.
    #[error("unresolved hook: {name}")]
    UnresolvedHook { name: String },

    /// The action is not permitted.
    #[error("access denied: {object_type}/{action}")]
    Denied { object_type: String, action: String },

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}
