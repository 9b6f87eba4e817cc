//! `stop` — release busy mountpoints and export the pool.

use crate::app::AppContext;
use crate::application::ports::{ProcessReaper, StorageDriver};
use crate::application::services::LifecycleController;
use crate::domain::OcfStatus;

/// Run `stop`.
pub async fn run<D: StorageDriver, P: ProcessReaper>(app: &AppContext<D, P>) -> OcfStatus {
    let pool = match super::resolve(app) {
        Ok(pool) => pool,
        Err(status) => return status,
    };
    LifecycleController::new(&pool, &app.driver, &app.reaper)
        .stop()
        .await
}
