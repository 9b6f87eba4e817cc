//! Application services: use-case orchestration.
//!
//! Services import only from `crate::domain` and
//! `crate::application::ports`, never from `crate::infra`,
//! `crate::commands`, or `crate::cli`.

pub mod lifecycle;


pub use lifecycle::LifecycleController;
