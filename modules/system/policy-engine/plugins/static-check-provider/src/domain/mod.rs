//! Domain layer for the static check provider.

mod client;
pub mod service;

pub use service::StaticCheckProvider;
