#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Policy Engine SDK
//!
//! This crate provides the public API for the `policy_engine` module:
//!
//! - [`Rule`], [`ConditionTree`], [`Group`], [`Condition`], [`CheckRef`], [`HookRef`] - Rule model
//! - [`CheckProvider`] - Capability trait that resolves named checks and hooks
//! - [`PolicyEngineClient`] - Public API trait for consumers
//! - [`UnknownAction`], [`UnknownActionSink`] - Signal raised when no rule matches
//! - [`PolicyEngineError`] - Error types
//!
//! ## Usage
//!
//! ```ignore
//! use policy_engine_sdk::{CheckRef, ConditionTree, Group, Rule};
//!
//! let rule = Rule::new("article", "create").with_allow(ConditionTree::any([
//!     Group::check(CheckRef::with_param("role", "admin")),
//!     Group::check(CheckRef::with_param("role", "writer")),
//! ]));
//!
//! let allowed = client.authorize("article", "create", subject, object)?;
//! ```

pub mod api;
pub mod error;
pub mod models;
pub mod provider;
pub mod signal;

// Re-export main types at crate root
pub use api::PolicyEngineClient;
pub use error::PolicyEngineError;
pub use models::{CheckRef, Condition, ConditionTree, Group, HookRef, Rule, RuleKey};
pub use provider::{CheckFn, CheckProvider, HookFn, ParamCheckFn};
pub use signal::{UnknownAction, UnknownActionSink};
