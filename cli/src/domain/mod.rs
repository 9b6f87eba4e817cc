//! Domain layer: pure types, parsing, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod error;
pub mod health;
pub mod pool;
pub mod status;

pub use config::{AgentConfig, is_true};
pub use error::AgentError;
pub use health::HealthStatus;
pub use pool::{PoolResource, split_options};
pub use status::OcfStatus;
