//! Static Check Provider
//!
//! A [`policy_engine_sdk::CheckProvider`] backed by an in-memory function
//! table. Checks and hooks are registered as closures at startup:
//!
//! ```ignore
//! let provider = StaticCheckProvider::<User, Article>::new()
//!     .with_check("own_resource", |user, article| article.owner_id == user.id)
//!     .with_param_check("role", |user, _, role| role.as_str() == Some(user.role.as_str()))
//!     .with_hook("preload_groups", |user, article, _| (user.with_groups(), article));
//! ```
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod domain;

pub use domain::StaticCheckProvider;
