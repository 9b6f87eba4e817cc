//! Infrastructure implementation of the `StorageDriver` port for ZFS.
//!
//! `ZfsDriver<R>` routes every `zpool` / `zfs` call through a
//! `CommandRunner`, so tests can inject a scripted runner without touching
//! real pools.

use std::process::Output;

use anyhow::Result;

use crate::application::ports::{CommandRunner, StorageDriver};
use crate::domain::{AgentError, HealthStatus, PoolResource};
use crate::infra::command_runner::TokioCommandRunner;

pub const ZPOOL: &str = "zpool";
pub const ZFS: &str = "zfs";

/// `mountpoint` values that are not paths.
const MOUNTPOINT_SENTINELS: &[&str] = &["none", "legacy", "-"];

/// ZFS adapter over a `CommandRunner`.
pub struct ZfsDriver<R: CommandRunner> {
    runner: R,
}

impl<R: CommandRunner> ZfsDriver<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    async fn zpool(&self, args: &[&str]) -> Result<Output> {
        self.runner.run(ZPOOL, args).await
    }
}

impl ZfsDriver<TokioCommandRunner> {
    /// Convenience constructor for production use.
    #[must_use]
    pub fn default_runner() -> Self {
        Self::new(TokioCommandRunner)
    }
}

impl<R: CommandRunner> StorageDriver for ZfsDriver<R> {
    fn is_available(&self) -> bool {
        self.runner.locate(ZPOOL).is_some()
    }

    async fn is_imported(&self, pool: &PoolResource) -> bool {
        matches!(
            self.zpool(&["list", "-H", pool.name()]).await,
            Ok(o) if o.status.success()
        )
    }

    async fn import(&self, pool: &PoolResource) -> Result<(), AgentError> {
        if self.is_imported(pool).await {
            return Ok(());
        }
        // cachefile=none keeps the pool out of the boot-time cache: only the
        // cluster manager decides where it gets imported.
        let mut args = vec!["import"];
        args.extend(pool.import_options().iter().map(String::as_str));
        args.extend(["-o", "cachefile=none", pool.name()]);

        let failed = |detail| AgentError::ImportFailed {
            pool: pool.name().to_string(),
            detail,
        };
        match self.zpool(&args).await {
            Ok(o) if o.status.success() => Ok(()),
            Ok(o) => Err(failed(failure_detail(&o))),
            Err(e) => Err(failed(format!("{e:#}"))),
        }
    }

    async fn export(&self, pool: &PoolResource) -> Result<(), AgentError> {
        if !self.is_imported(pool).await {
            return Ok(());
        }
        let mut args = vec!["export"];
        args.extend(pool.export_options().iter().map(String::as_str));
        args.push(pool.name());

        let failed = |detail| AgentError::ExportFailed {
            pool: pool.name().to_string(),
            detail,
        };
        match self.zpool(&args).await {
            Ok(o) if o.status.success() => Ok(()),
            Ok(o) => Err(failed(failure_detail(&o))),
            Err(e) => Err(failed(format!("{e:#}"))),
        }
    }

    async fn mountpoints(&self, pool: &PoolResource) -> Vec<String> {
        match self
            .runner
            .run(ZFS, &["list", "-H", "-o", "mounted,mountpoint", "-r", pool.name()])
            .await
        {
            Ok(o) if o.status.success() => parse_mountpoints(&String::from_utf8_lossy(&o.stdout)),
            Ok(o) => {
                tracing::debug!(detail = %failure_detail(&o), "cannot list mountpoints");
                Vec::new()
            }
            Err(e) => {
                tracing::debug!(error = %e, "cannot list mountpoints");
                Vec::new()
            }
        }
    }

    async fn health(&self, pool: &PoolResource) -> HealthStatus {
        match self.zpool(&["list", "-H", "-o", "health", pool.name()]).await {
            Ok(o) if o.status.success() => HealthStatus::parse(&String::from_utf8_lossy(&o.stdout)),
            _ => HealthStatus::Unknown(String::new()),
        }
    }

    async fn can_import(&self, pool: &PoolResource) -> bool {
        if self.is_imported(pool).await {
            return true;
        }
        // Without a pool argument `zpool import` only lists what it can see,
        // unless `-a` asks it to import everything.
        let mut args = vec!["import"];
        args.extend(discovery_options(pool.import_options()));
        match self.zpool(&args).await {
            Ok(o) => discovered_pools(&String::from_utf8_lossy(&o.stdout)).any(|p| p == pool.name()),
            Err(_) => false,
        }
    }
}

/// Paths of mounted datasets from `zfs list -H -o mounted,mountpoint`
/// output.
///
/// Unmounted datasets still report a mountpoint, but that path lives on
/// whatever filesystem contains it, so it must never reach the reaper.
#[must_use]
pub fn parse_mountpoints(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .filter_map(|l| l.split_once('\t'))
        .filter(|(mounted, _)| mounted.trim() == "yes")
        .map(|(_, mountpoint)| mountpoint.trim())
        .filter(|mp| !mp.is_empty() && !MOUNTPOINT_SENTINELS.contains(mp))
        .map(str::to_string)
        .collect()
}

/// Import options that are safe for a listing-only `zpool import`.
fn discovery_options(options: &[String]) -> impl Iterator<Item = &str> {
    options.iter().map(String::as_str).filter(|o| *o != "-a")
}

/// Pool names from the `pool:` lines of `zpool import` discovery output.
pub fn discovered_pools(stdout: &str) -> impl Iterator<Item = &str> {
    stdout
        .lines()
        .filter_map(|l| l.trim_start().strip_prefix("pool:"))
        .map(str::trim)
}

fn failure_detail(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stderr = stderr.trim();
    if stderr.is_empty() {
        format!("zpool exited with {}", output.status)
    } else {
        stderr.to_string()
    }
}
