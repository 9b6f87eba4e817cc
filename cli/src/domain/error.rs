//! Typed agent errors.
//!
//! Every failure an invocation can end with is one of these variants. There
//! is no variant for a failed presence query: that is reported as "pool not
//! imported" instead of as an error.

use thiserror::Error;

use crate::domain::status::OcfStatus;

/// Errors that terminate the current invocation.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("{0} is not installed or not on PATH")]
    ToolMissing(&'static str),

    #[error("failed to import pool '{pool}': {detail}")]
    ImportFailed { pool: String, detail: String },

    #[error("failed to export pool '{pool}': {detail}")]
    ExportFailed { pool: String, detail: String },

    #[error("pool '{pool}' reports unrecognised health '{health}'")]
    UnrecognizedHealth { pool: String, health: String },

    #[error("pool '{0}' is neither imported nor visible to 'zpool import'")]
    NotImportable(String),

    #[error("required parameter '{0}' is missing")]
    MissingParameter(&'static str),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("expected exactly one action argument, got {0}")]
    BadInvocation(usize),

    #[error("unsupported action '{0}'")]
    UnknownVerb(String),
}

impl AgentError {
    /// Exit status reported to the cluster manager for this error.
    #[must_use]
    pub fn status(&self) -> OcfStatus {
        match self {
            Self::ToolMissing(_) => OcfStatus::NotInstalled,
            Self::ImportFailed { .. }
            | Self::ExportFailed { .. }
            | Self::UnrecognizedHealth { .. } => OcfStatus::GenericError,
            Self::NotImportable(_) | Self::MissingParameter(_) | Self::InvalidConfig(_) => {
                OcfStatus::ConfiguredError
            }
            Self::BadInvocation(_) => OcfStatus::BadArguments,
            Self::UnknownVerb(_) => OcfStatus::Unimplemented,
        }
    }
}
