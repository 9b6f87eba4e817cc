//! The managed pool and its operation parameters.

use crate::domain::error::AgentError;

/// A ZFS pool managed by this agent, plus the extra options for import/export.
///
/// Built once per invocation from [`AgentConfig`](crate::domain::AgentConfig)
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolResource {
    name: String,
    import_options: Vec<String>,
    export_options: Vec<String>,
}

impl PoolResource {
    /// Create a resource, validating the pool name.
    ///
    /// # Errors
    ///
    /// Returns [`AgentError::MissingParameter`] when the name is blank and
    /// [`AgentError::InvalidConfig`] when it cannot be a pool name.
    pub fn new(
        name: &str,
        import_options: Vec<String>,
        export_options: Vec<String>,
    ) -> Result<Self, AgentError> {
        let name = name.trim();
        validate_pool_name(name)?;
        Ok(Self {
            name: name.to_string(),
            import_options,
            export_options,
        })
    }

    /// Pool name as passed to `zpool`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Extra tokens for `zpool import`, in order.
    #[must_use]
    pub fn import_options(&self) -> &[String] {
        &self.import_options
    }

    /// Extra tokens for `zpool export`, in order.
    #[must_use]
    pub fn export_options(&self) -> &[String] {
        &self.export_options
    }
}

/// Split a free-form option string on ASCII whitespace.
///
/// `None` and blank strings produce no tokens.
#[must_use]
pub fn split_options(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| s.split_ascii_whitespace().map(str::to_string).collect())
        .unwrap_or_default()
}

/// A pool name must be non-empty, must not look like an option, and must not
/// name a dataset inside a pool.
fn validate_pool_name(name: &str) -> Result<(), AgentError> {
    if name.is_empty() {
        return Err(AgentError::MissingParameter("pool"));
    }
    if name.starts_with('-') {
        return Err(AgentError::InvalidConfig(format!(
            "pool name '{name}' must not start with '-'"
        )));
    }
    if name.contains('/') || name.contains('@') {
        return Err(AgentError::InvalidConfig(format!(
            "'{name}' names a dataset or snapshot, not a pool"
        )));
    }
    Ok(())
}
