//! Infrastructure layer: concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: process execution,
//! environment access, and logging setup.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` or `crate::cli` are forbidden.

pub mod command_runner;
pub mod config;
pub mod fuser;
pub mod logging;
pub mod zfs;


pub use command_runner::TokioCommandRunner;
pub use fuser::FuserReaper;
pub use zfs::ZfsDriver;
