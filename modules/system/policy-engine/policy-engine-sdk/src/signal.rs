//! Unknown-action signal.
//!
//! Raised when a decision is requested for an `(object_type, action)` pair
//! that has no rule. The decision itself is always `false`; the signal only
//! reaches an observability collaborator.

use serde::{Deserialize, Serialize};

/// Event emitted when a lookup misses.
///
/// Unknown object types and unknown actions on a known object type are
/// reported the same way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnknownAction {
    pub object_type: String,
    pub action: String,
}

/// Receives [`UnknownAction`] events.
pub trait UnknownActionSink: Send + Sync {
    fn unknown_action(&self, event: &UnknownAction);
}
