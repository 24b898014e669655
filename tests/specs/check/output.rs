//! `throttle check` output format specs

use crate::prelude::*;
use serde_json::json;

#[test]
fn json_allowed() {
    let temp = Project::empty();
    temp.file("settings.toml", FLEET_SETTINGS);
    temp.state(json!({}));

    let out = temp.check("build").args(&["-o", "json"]).passes().json();
    assert_eq!(out, json!({ "job": "build", "decision": "allow" }));
}

#[test]
fn json_blocked_includes_reason_and_count() {
    let temp = Project::empty();
    temp.file("settings.toml", FLEET_SETTINGS);
    temp.state(json!({ "nodes": [node("a", &["build", "build"])] }));

    let out = temp
        .check("build")
        .args(&["--node", "a", "--output", "json"])
        .exits_with(BLOCKED)
        .stderr_empty()
        .json();
    assert_eq!(
        out,
        json!({
            "job": "build",
            "node": "a",
            "decision": "blocked",
            "reason": "max_capacity_on_node",
            "count": 2,
        })
    );
}

#[test]
fn json_pending_has_no_count() {
    let temp = Project::empty();
    temp.file("settings.toml", FLEET_SETTINGS);
    temp.state(json!({ "pending": ["build"] }));

    let out = temp
        .check("build")
        .args(&["-o", "json"])
        .exits_with(BLOCKED)
        .json();
    assert_eq!(
        out,
        json!({ "job": "build", "decision": "blocked", "reason": "build_pending" })
    );
}

#[test]
fn debug_logging_goes_to_stderr() {
    let temp = Project::empty();
    temp.file("settings.toml", FLEET_SETTINGS);
    temp.state(json!({ "nodes": [node("a", &["build"])] }));

    temp.check("build")
        .args(&["--node", "a"])
        .env("RUST_LOG", "debug")
        .passes()
        .stdout_eq("build on a: allowed\n")
        .stderr_has("checking for builds on node");
}
