//! Public API trait for the policy engine.

use crate::error::PolicyEngineError;

/// Public API trait for authorization decisions.
///
/// Implemented in-process by the engine's local client and consumed by
/// services acting as enforcement points:
///
/// ```ignore
/// if client.authorize("article", "update", user, article)? {
///     // ...
/// }
///
/// client.enforce("user", "delete", admin, target)?;
/// ```
pub trait PolicyEngineClient: Send + Sync {
    type Subject;
    type Object;

    /// Decide whether `subject` may perform `action` on `object`.
    ///
    /// Returns `Ok(false)` for a denial, including when no rule exists for
    /// the `(object_type, action)` pair.
    ///
    /// # Errors
    ///
    /// - `UnresolvedCheck` / `UnresolvedHook` if the policy references a
    ///   function the provider does not know
    /// - `Internal` for unexpected errors
    fn authorize(
        &self,
        object_type: &str,
        action: &str,
        subject: Self::Subject,
        object: Self::Object,
    ) -> Result<bool, PolicyEngineError>;

    /// Like [`PolicyEngineClient::authorize`], but a negative decision is an error.
    ///
    /// # Errors
    ///
    /// - `Denied` if the action is not permitted
    /// - any error [`PolicyEngineClient::authorize`] can return
    fn enforce(
        &self,
        object_type: &str,
        action: &str,
        subject: Self::Subject,
        object: Self::Object,
    ) -> Result<(), PolicyEngineError>;
}
