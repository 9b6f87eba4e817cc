//! Application context: everything one invocation needs, built once.
//!
//! `AppContext` owns the resource parameters and the adapters the
//! lifecycle controller talks to. Command handlers take `&AppContext` and
//! never read the environment themselves.

use crate::application::ports::{ProcessReaper, StorageDriver};
use crate::domain::{AgentConfig, AgentError, PoolResource};
use crate::infra::{FuserReaper, TokioCommandRunner, ZfsDriver};

/// Unified context passed to every pool command handler.
pub struct AppContext<D = ZfsDriver<TokioCommandRunner>, P = FuserReaper<TokioCommandRunner>> {
    /// Resource parameters from the cluster manager.
    pub config: AgentConfig,
    /// Storage backend.
    pub driver: D,
    /// Handle reaper used before export.
    pub reaper: P,
}

impl AppContext {
    /// Production context: parameters from `OCF_RESKEY_*`, real `zpool`,
    /// real `fuser`.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters cannot be decoded.
    pub fn from_env() -> Result<Self, AgentError> {
        Ok(Self::new(
            crate::infra::config::from_env()?,
            ZfsDriver::default_runner(),
            FuserReaper::default_runner(),
        ))
    }
}

impl<D: StorageDriver, P: ProcessReaper> AppContext<D, P> {
    pub fn new(config: AgentConfig, driver: D, reaper: P) -> Self {
        Self {
            config,
            driver,
            reaper,
        }
    }

    /// The managed pool, validated.
    ///
    /// # Errors
    ///
    /// Returns an error if `pool` is missing or invalid.
    pub fn resource(&self) -> Result<PoolResource, AgentError> {
        self.config.resource()
    }
}
