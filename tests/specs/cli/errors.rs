//! CLI error handling specs
//!
//! Verify error messages and exit codes for bad input.

use crate::prelude::*;

#[test]
fn unknown_subcommand_fails() {
    cli().args(&["frobnicate"]).fails().stderr_has("frobnicate");
}

#[test]
fn missing_settings_file_reports_path() {
    let temp = Project::empty();
    temp.state(serde_json::json!({}));

    temp.check("build")
        .exits_with(1)
        .stderr_has("Error: failed to load settings from settings.toml");
}

#[test]
fn invalid_state_reports_path() {
    let temp = Project::empty();
    temp.file("settings.toml", FLEET_SETTINGS);
    temp.file("state.json", "{ not json");

    temp.check("build")
        .exits_with(1)
        .stderr_has("invalid cluster state state.json");
}

#[test]
fn unknown_node_is_an_error() {
    let temp = Project::empty();
    temp.file("settings.toml", FLEET_SETTINGS);
    temp.state(serde_json::json!({ "nodes": [node("a", &[])] }));

    temp.check("build")
        .args(&["--node", "zzz"])
        .exits_with(1)
        .stderr_has("unknown node: zzz");
}

#[test]
fn invalid_settings_block_checks() {
    let temp = Project::empty();
    temp.file(
        "settings.toml",
        "[category.c]\nnode_label_overrides = [{ label = \"\", max_per_node = 1 }]\n",
    );
    temp.state(serde_json::json!({}));

    temp.check("build")
        .exits_with(1)
        .stderr_has("category.c.node_label_overrides[0]")
        .stderr_has("label must not be empty");
}
