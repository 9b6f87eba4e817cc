//! Loads `AgentConfig` from the OCF environment.
//!
//! Each field maps to `OCF_RESKEY_<field>`:
//!   - `OCF_RESKEY_pool`        (required for pool actions)
//!   - `OCF_RESKEY_importargs`  (optional)
//!   - `OCF_RESKEY_exportargs`  (optional)
//!   - `OCF_RESKEY_importforce` (optional, OCF boolean, default false)
//!   - `OCF_RESKEY_debug`       (optional, OCF boolean, default false)

use crate::domain::{AgentConfig, AgentError};

/// Environment prefix the cluster manager uses for resource parameters.
pub const PARAM_PREFIX: &str = "OCF_RESKEY_";

/// Read the resource parameters from the process environment.
///
/// # Errors
///
/// Returns [`AgentError::InvalidConfig`] if a parameter cannot be decoded.
/// Variables that are not valid UTF-8 are skipped.
pub fn from_env() -> Result<AgentConfig, AgentError> {
    from_iter(
        std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?))),
    )
}

/// Read the resource parameters from an explicit list of variables.
///
/// # Errors
///
/// Returns [`AgentError::InvalidConfig`] if a variable cannot be decoded.
pub fn from_iter<I>(vars: I) -> Result<AgentConfig, AgentError>
where
    I: IntoIterator<Item = (String, String)>,
{
    envy::prefixed(PARAM_PREFIX)
        .from_iter(vars)
        .map_err(|e| AgentError::InvalidConfig(e.to_string()))
}
