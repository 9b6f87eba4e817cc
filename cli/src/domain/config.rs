//! Agent parameters as supplied by the cluster manager.
//!
//! Pure types only. Loading from the environment lives in
//! `crate::infra::config`.

use serde::Deserialize;

use crate::domain::error::AgentError;
use crate::domain::pool::{PoolResource, split_options};

/// Resource parameters, one field per `OCF_RESKEY_<name>` variable.
///
/// Values stay raw strings here; [`AgentConfig::resource`] turns them into a
/// validated [`PoolResource`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AgentConfig {
    /// Name of the pool to manage. Required for every pool action.
    pub pool: Option<String>,
    /// Extra arguments for `zpool import`, e.g. `-d /dev/disk/by-id`.
    pub importargs: Option<String>,
    /// Extra arguments for `zpool export`.
    pub exportargs: Option<String>,
    /// Import with `-f` even if the pool looks in use by another host.
    pub importforce: Option<String>,
    /// Enable debug logging.
    pub debug: Option<String>,
}

impl AgentConfig {
    /// Build the managed resource from these parameters.
    ///
    /// # Errors
    ///
    /// Returns [`AgentError::MissingParameter`] if `pool` is unset or blank,
    /// or [`AgentError::InvalidConfig`] if it is not a valid pool name.
    pub fn resource(&self) -> Result<PoolResource, AgentError> {
        let name = self
            .pool
            .as_deref()
            .ok_or(AgentError::MissingParameter("pool"))?;
        let mut import_options = split_options(self.importargs.as_deref());
        if self.import_force() {
            import_options.push("-f".to_string());
        }
        PoolResource::new(
            name,
            import_options,
            split_options(self.exportargs.as_deref()),
        )
    }

    /// Whether `importforce` is enabled.
    #[must_use]
    pub fn import_force(&self) -> bool {
        self.importforce.as_deref().is_some_and(is_true)
    }

    /// Whether debug logging is enabled.
    #[must_use]
    pub fn debug_enabled(&self) -> bool {
        self.debug.as_deref().is_some_and(is_true)
    }
}

/// OCF boolean truthiness: `1`, `yes`, `true`, `on`, case-insensitive.
#[must_use]
pub fn is_true(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "yes" | "true" | "on"
    )
}
