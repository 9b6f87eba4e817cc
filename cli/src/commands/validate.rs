//! `validate-all` — check tooling and that the pool can be imported here.

use crate::app::AppContext;
use crate::application::ports::{ProcessReaper, StorageDriver};
use crate::application::services::LifecycleController;
use crate::domain::{AgentError, OcfStatus};

/// Run `validate-all`.
///
/// A missing `zpool` binary wins over bad parameters: the cluster manager
/// uses `NotInstalled` to ban the resource from this node.
pub async fn run<D: StorageDriver, P: ProcessReaper>(app: &AppContext<D, P>) -> OcfStatus {
    if !app.driver.is_available() {
        let e = AgentError::ToolMissing("zpool");
        tracing::error!(error = %e, "validation failed");
        return e.status();
    }
    let pool = match super::resolve(app) {
        Ok(pool) => pool,
        Err(status) => return status,
    };
    LifecycleController::new(&pool, &app.driver, &app.reaper)
        .validate()
        .await
}
