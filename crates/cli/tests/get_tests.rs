//! Integration tests for the `get` command.

mod common;

use common::Workspace;
use predicates::prelude::*;

#[test]
fn test_get_reports_base_layer() {
    let ws = Workspace::new();

    ws.cmd()
        .args(["get", "advanced_options", "log_lvl"])
        .assert()
        .success()
        .stdout("advanced_options.log_lvl = info (base)\n");
}

#[test]
fn test_get_reports_override_layer() {
    let ws = Workspace::new();
    ws.user_override("[advanced_options]\nlog_lvl = \"DEBUG\"\n");

    ws.cmd()
        .args(["get", "advanced_options", "log_lvl"])
        .assert()
        .success()
        .stdout("advanced_options.log_lvl = DEBUG (override)\n");
}

#[test]
fn test_get_unknown_key_exits_3() {
    let ws = Workspace::new();

    ws.cmd()
        .args(["get", "char", "nonexistent"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains(
            "Key 'nonexistent' not found in section 'char'",
        ));
}

#[test]
fn test_get_does_not_validate_other_fields() {
    let ws = Workspace::new();
    ws.user_override("[general]\nhidden_transparency = \"opaque\"\n");

    ws.cmd()
        .args(["get", "general", "hidden_transparency"])
        .assert()
        .success()
        .stdout(predicate::str::contains("opaque (override)"));
}
