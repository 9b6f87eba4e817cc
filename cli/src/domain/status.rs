//! OCF exit codes.

use std::process::ExitCode;

/// Result of one agent invocation, as understood by the cluster manager.
///
/// Discriminants are the OCF return codes and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum OcfStatus {
    Success = 0,
    GenericError = 1,
    BadArguments = 2,
    Unimplemented = 3,
    NotInstalled = 5,
    ConfiguredError = 6,
    NotRunning = 7,
}

impl OcfStatus {
    /// Numeric process exit code.
    #[must_use]
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl From<OcfStatus> for ExitCode {
    fn from(status: OcfStatus) -> Self {
        ExitCode::from(status.code())
    }
}
