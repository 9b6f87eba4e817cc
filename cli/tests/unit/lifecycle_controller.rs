//! Unit tests for the pool lifecycle state machine.

#![allow(clippy::expect_used)]

use zpool_agent::application::ports::StorageDriver;
use zpool_agent::application::services::LifecycleController;
use zpool_agent::domain::{HealthStatus, OcfStatus};

use crate::mocks::{SimulatedPool, SpyReaper, event_log, pool};

// ── start ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn start_twice_imports_once_and_succeeds_both_times() {
    let log = event_log();
    let tank = pool("tank");
    let driver = SimulatedPool::exported(&log);
    let reaper = SpyReaper::new(&log, 0);
    let ctl = LifecycleController::new(&tank, &driver, &reaper);

    assert_eq!(ctl.start().await, OcfStatus::Success);
    assert_eq!(ctl.start().await, OcfStatus::Success);
    assert!(driver.imported.get());
    assert_eq!(driver.count("import"), 1);
}

#[tokio::test]
async fn start_failure_is_generic_error_without_retry() {
    let log = event_log();
    let tank = pool("tank");
    let driver = SimulatedPool {
        fail_import: true,
        ..SimulatedPool::exported(&log)
    };
    let reaper = SpyReaper::new(&log, 0);

    let status = LifecycleController::new(&tank, &driver, &reaper).start().await;
    assert_eq!(status, OcfStatus::GenericError);
    assert_eq!(driver.count("import"), 1);
    assert!(!driver.imported.get());
}

// ── stop ──────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn stop_twice_exports_once_and_succeeds_both_times() {
    let log = event_log();
    let tank = pool("tank");
    let driver = SimulatedPool::imported(&log);
    let reaper = SpyReaper::new(&log, 0);
    let ctl = LifecycleController::new(&tank, &driver, &reaper);

    assert_eq!(ctl.stop().await, OcfStatus::Success);
    assert_eq!(ctl.stop().await, OcfStatus::Success);
    assert!(!driver.imported.get());
    assert_eq!(driver.count("export"), 1);
}

#[tokio::test]
async fn stop_releases_every_mountpoint_before_single_export() {
    let log = event_log();
    let tank = pool("tank");
    let driver = SimulatedPool {
        mountpoints: vec!["/tank".into(), "/tank/home".into()],
        ..SimulatedPool::imported(&log)
    };
    let reaper = SpyReaper::new(&log, 3);

    let status = LifecycleController::new(&tank, &driver, &reaper).stop().await;
    assert_eq!(status, OcfStatus::Success);

    let events = log.borrow().clone();
    let export_at = events
        .iter()
        .position(|e| e == "export")
        .expect("export attempted");
    for mp in ["release /tank", "release /tank/home"] {
        let at = events.iter().position(|e| e == mp).expect("mountpoint released");
        assert!(at < export_at, "{mp} must happen before export: {events:?}");
    }
    assert_eq!(driver.count("export"), 1);
}

#[tokio::test]
async fn stop_releases_handles_even_when_nothing_is_busy() {
    let log = event_log();
    let tank = pool("tank");
    let driver = SimulatedPool::imported(&log);
    let reaper = SpyReaper::new(&log, 0);

    LifecycleController::new(&tank, &driver, &reaper).stop().await;
    assert!(log.borrow().iter().any(|e| e == "release /tank"));
}

#[tokio::test]
async fn stop_without_mountpoints_still_exports() {
    let log = event_log();
    let tank = pool("tank");
    let driver = SimulatedPool {
        mountpoints: Vec::new(),
        ..SimulatedPool::imported(&log)
    };
    let reaper = SpyReaper::new(&log, 0);

    let status = LifecycleController::new(&tank, &driver, &reaper).stop().await;
    assert_eq!(status, OcfStatus::Success);
    assert_eq!(driver.count("export"), 1);
}

#[tokio::test]
async fn stop_export_failure_is_generic_error_without_retry() {
    let log = event_log();
    let tank = pool("tank");
    let driver = SimulatedPool {
        fail_export: true,
        ..SimulatedPool::imported(&log)
    };
    let reaper = SpyReaper::new(&log, 1);

    let status = LifecycleController::new(&tank, &driver, &reaper).stop().await;
    assert_eq!(status, OcfStatus::GenericError);
    assert_eq!(driver.count("export"), 1);
    assert!(driver.imported.get());
}

#[tokio::test]
async fn stop_not_imported_never_reaps() {
    let log = event_log();
    let tank = pool("tank");
    let driver = SimulatedPool::exported(&log);
    let reaper = SpyReaper::new(&log, 0);

    LifecycleController::new(&tank, &driver, &reaper).stop().await;
    assert!(!log.borrow().iter().any(|e| e.starts_with("release")));
    assert_eq!(driver.count("export"), 0);
}

// ── round trip ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn start_then_stop_leaves_pool_exported() {
    let log = event_log();
    let tank = pool("tank");
    let driver = SimulatedPool::exported(&log);
    let reaper = SpyReaper::new(&log, 0);
    let ctl = LifecycleController::new(&tank, &driver, &reaper);

    assert_eq!(ctl.start().await, OcfStatus::Success);
    assert_eq!(ctl.stop().await, OcfStatus::Success);
    assert!(!driver.is_imported(&tank).await);
    assert_eq!(ctl.monitor().await, OcfStatus::NotRunning);
}

// ── monitor ───────────────────────────────────────────────────────────────────

async fn monitor_with(health: HealthStatus) -> OcfStatus {
    let log = event_log();
    let tank = pool("tank");
    let driver = SimulatedPool {
        health,
        ..SimulatedPool::imported(&log)
    };
    let reaper = SpyReaper::new(&log, 0);
    LifecycleController::new(&tank, &driver, &reaper).monitor().await
}

#[tokio::test]
async fn monitor_online_is_success() {
    assert_eq!(monitor_with(HealthStatus::parse("ONLINE")).await, OcfStatus::Success);
}

#[tokio::test]
async fn monitor_degraded_is_success() {
    assert_eq!(monitor_with(HealthStatus::parse("DEGRADED")).await, OcfStatus::Success);
}

#[tokio::test]
async fn monitor_faulted_is_not_running() {
    assert_eq!(monitor_with(HealthStatus::parse("FAULTED")).await, OcfStatus::NotRunning);
}

#[tokio::test]
async fn monitor_unrecognised_health_is_generic_error() {
    assert_eq!(monitor_with(HealthStatus::parse("UNAVAIL")).await, OcfStatus::GenericError);
}

#[tokio::test]
async fn monitor_never_mutates() {
    let log = event_log();
    let tank = pool("tank");
    let driver = SimulatedPool::imported(&log);
    let reaper = SpyReaper::new(&log, 0);

    LifecycleController::new(&tank, &driver, &reaper).monitor().await;
    let events = log.borrow().clone();
    assert_eq!(events, ["is_imported", "health"]);
}

// ── validate ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn validate_tool_absent_is_not_installed_in_any_state() {
    for imported in [false, true] {
        let log = event_log();
        let tank = pool("tank");
        let driver = SimulatedPool {
            available: false,
            ..SimulatedPool::exported(&log)
        };
        driver.imported.set(imported);
        let reaper = SpyReaper::new(&log, 0);

        let status = LifecycleController::new(&tank, &driver, &reaper).validate().await;
        assert_eq!(status, OcfStatus::NotInstalled, "imported = {imported}");
    }
}

#[tokio::test]
async fn validate_discoverable_tank_is_success() {
    let log = event_log();
    let tank = pool("tank");
    let driver = SimulatedPool::exported(&log);
    let reaper = SpyReaper::new(&log, 0);

    let status = LifecycleController::new(&tank, &driver, &reaper).validate().await;
    assert_eq!(status, OcfStatus::Success);
    assert!(!driver.imported.get(), "validate must not import");
}

#[tokio::test]
async fn validate_imported_skips_discovery() {
    let log = event_log();
    let tank = pool("tank");
    let driver = SimulatedPool::imported(&log);
    let reaper = SpyReaper::new(&log, 0);

    let status = LifecycleController::new(&tank, &driver, &reaper).validate().await;
    assert_eq!(status, OcfStatus::Success);
    assert_eq!(driver.count("can_import"), 0);
}

#[tokio::test]
async fn validate_undiscoverable_is_configured_error() {
    let log = event_log();
    let tank = pool("tank");
    let driver = SimulatedPool {
        discoverable: false,
        ..SimulatedPool::exported(&log)
    };
    let reaper = SpyReaper::new(&log, 0);

    let status = LifecycleController::new(&tank, &driver, &reaper).validate().await;
    assert_eq!(status, OcfStatus::ConfiguredError);
}
