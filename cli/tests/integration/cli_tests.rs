//! Integration tests for argument handling and static output.

#![allow(clippy::expect_used)]

use predicates::prelude::*;

use crate::fake_tools::FakeTools;

#[test]
fn test_meta_data_prints_resource_agent_xml() {
    let tools = FakeTools::new();
    tools
        .agent()
        .arg("meta-data")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(r#"<?xml version="1.0"?>"#))
        .stdout(predicate::str::contains(r#"<parameter name="pool" unique="1" required="1">"#))
        .stdout(predicate::str::contains(r#"<action name="monitor" depth="0" timeout="30s" interval="5s" />"#));
    assert!(tools.calls().is_empty(), "meta-data must not call any tool");
}

#[test]
fn test_usage_prints_actions_and_succeeds() {
    FakeTools::empty()
        .agent()
        .arg("usage")
        .assert()
        .success()
        .stdout(predicate::str::contains("validate-all"));
}

#[test]
fn test_no_action_is_bad_arguments() {
    let tools = FakeTools::new();
    tools
        .agent()
        .env("OCF_RESKEY_pool", "tank")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("usage:"));
    assert!(tools.calls().is_empty());
}

#[test]
fn test_two_actions_is_bad_arguments() {
    let tools = FakeTools::new();
    tools
        .agent()
        .env("OCF_RESKEY_pool", "tank")
        .args(["start", "stop"])
        .assert()
        .code(2);
    assert!(tools.calls().is_empty());
}

#[test]
fn test_unknown_action_is_unimplemented() {
    let tools = FakeTools::new();
    tools
        .agent()
        .env("OCF_RESKEY_pool", "tank")
        .arg("frobnicate")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("usage:"));
    assert!(tools.calls().is_empty());
}

#[test]
fn test_missing_pool_is_configured_error() {
    let tools = FakeTools::new();
    tools.agent().arg("start").assert().code(6);
    assert!(tools.calls().is_empty());
}
