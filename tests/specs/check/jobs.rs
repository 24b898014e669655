//! `throttle check` specs for per-job limits

use crate::prelude::*;
use serde_json::json;

fn fleet(state: serde_json::Value) -> Project {
    let temp = Project::empty();
    temp.file("settings.toml", FLEET_SETTINGS);
    temp.state(state);
    temp
}

#[test]
fn full_node_blocks_with_count() {
    let temp = fleet(json!({ "nodes": [node("a", &["build", "build"]), node("b", &[])] }));

    temp.check("build")
        .args(&["--node", "a"])
        .exits_with(BLOCKED)
        .stdout_eq("build on a: blocked: max capacity on node reached (2 running)\n");
}

#[test]
fn node_with_room_allows() {
    let temp = fleet(json!({ "nodes": [node("a", &["build"]), node("b", &["build"])] }));

    temp.check("build")
        .args(&["--node", "b"])
        .passes()
        .stdout_eq("build on b: allowed\n");
}

#[test]
fn without_node_only_total_limit_applies() {
    let temp = fleet(json!({ "nodes": [node("a", &["build", "build"])] }));
    temp.check("build").passes().stdout_eq("build: allowed\n");
}

#[test]
fn total_counts_local_node() {
    let temp = fleet(json!({
        "local": node("built-in", &["build"]),
        "nodes": [node("a", &["build", "build"])],
    }));

    temp.check("build")
        .exits_with(BLOCKED)
        .stdout_eq("build: blocked: max total capacity reached (3 running)\n");

    // The local node can be targeted too
    temp.check("build")
        .args(&["--node", "built-in"])
        .exits_with(BLOCKED);
}

#[test]
fn pending_job_blocks() {
    let temp = fleet(json!({ "pending": ["build"] }));

    temp.check("build")
        .exits_with(BLOCKED)
        .stdout_eq("build: blocked: a build is already pending\n");
}

#[test]
fn unconfigured_job_is_allowed() {
    let temp = fleet(json!({ "pending": ["lint"], "nodes": [node("a", &["lint"; 9])] }));
    temp.check("lint").args(&["--node", "a"]).passes();
}

#[test]
fn expanded_instance_follows_parent_when_opted_in() {
    let temp = Project::empty();
    temp.file(
        "settings.toml",
        r#"
[job.matrix]
kind = "template"
max_per_node = 1
throttle_expanded_instances = true
"#,
    );
    temp.state(json!({ "nodes": [node("a", &["matrix/os=linux"])] }));

    temp.check("matrix/os=linux")
        .args(&["--expanded-from", "matrix", "--node", "a"])
        .exits_with(BLOCKED);

    // Not an expanded instance: no config under its own name
    temp.check("matrix/os=linux").args(&["--node", "a"]).passes();
}

#[test]
fn template_instance_can_be_exempt() {
    let temp = Project::empty();
    temp.file(
        "settings.toml",
        r#"
[job.matrix]
kind = "template"
max_per_node = 1
throttle_template_instances = false
"#,
    );
    temp.state(json!({ "nodes": [node("a", &["matrix"])] }));

    temp.check("matrix")
        .args(&["--template", "--node", "a"])
        .passes();
    temp.check("matrix").args(&["--node", "a"]).exits_with(BLOCKED);
}
