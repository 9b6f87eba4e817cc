//! Pool lifecycle: start, stop, monitor, validate.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//!
//! Nothing is stored between invocations. Whether the pool is imported is
//! asked of the [`StorageDriver`] right before every decision, because
//! another node may have changed it since the last run.

use crate::application::ports::{ProcessReaper, StorageDriver};
use crate::domain::{AgentError, HealthStatus, OcfStatus, PoolResource};

/// Drives one pool through its OCF actions.
pub struct LifecycleController<'a, D, P> {
    pool: &'a PoolResource,
    driver: &'a D,
    reaper: &'a P,
}

impl<'a, D: StorageDriver, P: ProcessReaper> LifecycleController<'a, D, P> {
    pub fn new(pool: &'a PoolResource, driver: &'a D, reaper: &'a P) -> Self {
        Self {
            pool,
            driver,
            reaper,
        }
    }

    /// Import the pool unless it is already imported.
    pub async fn start(&self) -> OcfStatus {
        conclude("start", self.try_start().await)
    }

    /// Kill processes holding the pool's mountpoints, then export it.
    pub async fn stop(&self) -> OcfStatus {
        conclude("stop", self.try_stop().await)
    }

    /// Report whether the pool is imported and usable. Never mutates state.
    pub async fn monitor(&self) -> OcfStatus {
        conclude("monitor", self.try_monitor().await)
    }

    /// Check that the tooling exists and the pool could be brought up here.
    pub async fn validate(&self) -> OcfStatus {
        conclude("validate-all", self.try_validate().await)
    }

    async fn try_start(&self) -> Result<OcfStatus, AgentError> {
        if self.driver.is_imported(self.pool).await {
            tracing::debug!("pool already imported");
            return Ok(OcfStatus::Success);
        }
        tracing::debug!(options = ?self.pool.import_options(), "starting import");
        self.driver.import(self.pool).await?;
        tracing::debug!("import successful");
        Ok(OcfStatus::Success)
    }

    async fn try_stop(&self) -> Result<OcfStatus, AgentError> {
        if !self.driver.is_imported(self.pool).await {
            tracing::debug!("pool not imported, nothing to export");
            return Ok(OcfStatus::Success);
        }

        // There is no forced export, so busy mountpoints are cleared before
        // the first export attempt rather than after a failure.
        for mountpoint in self.driver.mountpoints(self.pool).await {
            let killed = self.reaper.release_handles(&mountpoint).await;
            if killed > 0 {
                tracing::warn!(%mountpoint, killed, "killed processes holding mountpoint open");
            }
        }

        tracing::debug!(options = ?self.pool.export_options(), "starting export");
        self.driver.export(self.pool).await?;
        tracing::debug!("export successful");
        Ok(OcfStatus::Success)
    }

    async fn try_monitor(&self) -> Result<OcfStatus, AgentError> {
        if !self.driver.is_imported(self.pool).await {
            return Ok(OcfStatus::NotRunning);
        }
        let health = self.driver.health(self.pool).await;
        if health.is_usable() {
            if health == HealthStatus::Degraded {
                tracing::warn!("pool is degraded");
            }
            return Ok(OcfStatus::Success);
        }
        match health {
            HealthStatus::Faulted => {
                tracing::warn!("pool is faulted");
                Ok(OcfStatus::NotRunning)
            }
            HealthStatus::Unknown(health) => Err(AgentError::UnrecognizedHealth {
                pool: self.pool.name().to_string(),
                health,
            }),
            usable => Err(AgentError::UnrecognizedHealth {
                pool: self.pool.name().to_string(),
                health: usable.to_string(),
            }),
        }
    }

    async fn try_validate(&self) -> Result<OcfStatus, AgentError> {
        if !self.driver.is_available() {
            return Err(AgentError::ToolMissing("zpool"));
        }
        if self.driver.is_imported(self.pool).await {
            return Ok(OcfStatus::Success);
        }
        if self.driver.can_import(self.pool).await {
            Ok(OcfStatus::Success)
        } else {
            Err(AgentError::NotImportable(self.pool.name().to_string()))
        }
    }
}

fn conclude(action: &str, result: Result<OcfStatus, AgentError>) -> OcfStatus {
    match result {
        Ok(status) => {
            tracing::debug!(action, ?status, "action finished");
            status
        }
        Err(e) => {
            tracing::error!(action, error = %e, "action failed");
            e.status()
        }
    }
}
