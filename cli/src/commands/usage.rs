//! `usage` — print the supported actions.

use crate::domain::OcfStatus;

/// One-line synopsis, also printed on invocation errors.
pub const USAGE: &str =
    "usage: zpool-agent {start|stop|status|monitor|validate-all|meta-data|usage}";

/// Run `usage`.
pub fn run() -> OcfStatus {
    println!("{USAGE}");
    OcfStatus::Success
}
