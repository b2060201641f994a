//! Policy Engine Module
//!
//! This module holds the immutable rule registry ([`domain::Policy`]) and
//! evaluates authorization decisions against it, resolving checks and hooks
//! through a [`policy_engine_sdk::CheckProvider`].
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod domain;

pub use config::{PolicyEngineConfig, UnknownActionLog};
pub use domain::{DomainError, Policy, PolicyEngineLocalClient, Service};
