//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain`, never from `crate::infra`,
//! `crate::commands`, or `crate::cli`.

use std::path::PathBuf;
use std::process::Output;

use anyhow::Result;

use crate::domain::{AgentError, HealthStatus, PoolResource};

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program to completion and capture its output.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or waited on. A
    /// non-zero exit status is not an error; callers inspect `Output::status`.
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output>;

    /// Resolve `program` on `PATH`, returning `None` if it is not installed.
    fn locate(&self, program: &str) -> Option<PathBuf>;
}

// ── Storage Port ──────────────────────────────────────────────────────────────

/// Attach/detach and inspection operations on the storage subsystem.
///
/// Every method performs a fresh query; implementations must not cache.
#[allow(async_fn_in_trait)]
pub trait StorageDriver {
    /// Whether the storage tooling is installed on this host.
    fn is_available(&self) -> bool;

    /// Whether the pool is imported on this node. A failed query is `false`.
    async fn is_imported(&self, pool: &PoolResource) -> bool;

    /// Import the pool without persisting it in the host's cache file.
    /// Succeeds without acting if the pool is already imported.
    async fn import(&self, pool: &PoolResource) -> Result<(), AgentError>;

    /// Export the pool, unmounting its datasets.
    /// Succeeds without acting if the pool is not imported.
    async fn export(&self, pool: &PoolResource) -> Result<(), AgentError>;

    /// Mountpoints of every dataset in the pool, sentinels removed.
    async fn mountpoints(&self, pool: &PoolResource) -> Vec<String>;

    /// Current health of the pool. A failed query is `Unknown`.
    async fn health(&self, pool: &PoolResource) -> HealthStatus;

    /// Dry run: whether an import would find the pool.
    async fn can_import(&self, pool: &PoolResource) -> bool;
}

// ── Process Reaper Port ───────────────────────────────────────────────────────

/// Terminates processes that keep a mountpoint busy.
#[allow(async_fn_in_trait)]
pub trait ProcessReaper {
    /// Kill every process holding files open at or below `mountpoint` and
    /// return how many were signalled. Returns 0 if none were found.
    async fn release_handles(&self, mountpoint: &str) -> usize;
}
