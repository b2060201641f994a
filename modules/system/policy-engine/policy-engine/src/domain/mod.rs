//! Domain layer for the policy engine.

pub mod error;
pub mod evaluator;
pub mod local_client;
pub mod policy;
pub mod service;
pub mod signal;

pub use error::DomainError;
pub use local_client::PolicyEngineLocalClient;
pub use policy::Policy;
pub use service::Service;
pub use signal::{NoopSink, TracingSink};
