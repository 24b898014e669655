//! `throttle check` specs for category limits

use crate::prelude::*;
use serde_json::json;

fn fleet(state: serde_json::Value) -> Project {
    let temp = Project::empty();
    temp.file("settings.toml", FLEET_SETTINGS);
    temp.state(state);
    temp
}

#[test]
fn members_share_per_node_limit() {
    let temp = fleet(json!({ "nodes": [node("a", &["deploy-web"])] }));

    temp.check("deploy-web")
        .args(&["--node", "a"])
        .exits_with(BLOCKED)
        .stdout_has("max capacity on node reached (1 running)");
}

#[test]
fn label_override_raises_node_limit() {
    let temp = fleet(json!({
        "nodes": [
            { "id": "big-1", "labels": ["big"], "executors": [
                { "state": "running", "job": "deploy-web" },
                { "state": "idle" },
            ]},
        ],
    }));

    temp.check("deploy-web")
        .args(&["--node", "big-1"])
        .passes()
        .stdout_eq("deploy-web on big-1: allowed\n");
}

#[test]
fn members_share_total_limit() {
    let temp = fleet(json!({
        "nodes": [node("a", &["deploy-web"]), node("b", &["deploy-web"])],
    }));

    temp.check("deploy-web")
        .exits_with(BLOCKED)
        .stdout_eq("deploy-web: blocked: max total capacity reached (2 running)\n");
}

#[test]
fn pending_member_blocks_whole_category() {
    let temp = fleet(json!({ "pending": ["deploy-api"] }));

    temp.check("deploy-web")
        .exits_with(BLOCKED)
        .stdout_eq("deploy-web: blocked: a build is already pending\n");
}

#[test]
fn match_params_separate_variants() {
    let temp = fleet(json!({
        "nodes": [{ "id": "a", "executors": [
            { "state": "running", "job": "deploy-api", "params": { "ENV": "staging" } },
        ]}],
    }));

    temp.check("deploy-api")
        .args(&["--param", "ENV=prod", "--node", "a"])
        .passes();
    temp.check("deploy-api")
        .args(&["--param", "ENV=staging", "--node", "a"])
        .exits_with(BLOCKED);
}

#[test]
fn settings_directory_with_broken_file_refuses_to_decide() {
    let temp = Project::empty();
    temp.file("throttle/categories.toml", "[category.deploy]\nmax_total = [\n");
    temp.file(
        "throttle/jobs.toml",
        "[job.deploy-web]\nscope = \"category\"\ncategories = [\"deploy\"]\n",
    );
    temp.state(json!({ "nodes": [node("a", &["deploy-web", "deploy-web"])] }));

    temp.throttle()
        .args(&[
            "check",
            "--settings",
            "throttle",
            "--state",
            "state.json",
            "--job",
            "deploy-web",
        ])
        .exits_with(1)
        .stdout_eq("")
        .stderr_has("categories.toml");
}

#[test]
fn expanded_instances_fill_their_template_category() {
    let temp = Project::empty();
    temp.file(
        "settings.toml",
        r#"
[category.matrix]
max_per_node = 1

[job.matrix]
kind = "template"
scope = "category"
categories = ["matrix"]
throttle_expanded_instances = true
"#,
    );
    temp.state(json!({
        "nodes": [{ "id": "a", "executors": [
            { "state": "running", "job": "matrix/os=mac", "parent": "matrix" },
            { "state": "idle" },
        ]}],
    }));

    temp.check("matrix/os=linux")
        .args(&["--expanded-from", "matrix", "--node", "a"])
        .exits_with(BLOCKED)
        .stdout_has("max capacity on node reached (1 running)");
}
