//! Command implementations, one module per OCF action.

pub mod meta_data;
pub mod monitor;
pub mod start;
pub mod stop;
pub mod usage;
pub mod validate;

use crate::app::AppContext;
use crate::application::ports::{ProcessReaper, StorageDriver};
use crate::domain::{OcfStatus, PoolResource};

/// Resolve the pool for a pool action, or the status to exit with.
fn resolve<D: StorageDriver, P: ProcessReaper>(
    app: &AppContext<D, P>,
) -> Result<PoolResource, OcfStatus> {
    app.resource().map_err(|e| {
        tracing::error!(error = %e, "invalid resource parameters");
        e.status()
    })
}
