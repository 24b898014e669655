//! `throttle validate` specs

use crate::prelude::*;

#[test]
fn validate_summarizes_toml() {
    let temp = Project::empty();
    temp.file("settings.toml", FLEET_SETTINGS);

    temp.throttle()
        .args(&["validate", "settings.toml"])
        .passes()
        .stdout_eq("settings.toml: 1 category, 3 jobs\n");
}

#[test]
fn validate_reads_hcl() {
    let temp = Project::empty();
    temp.file(
        "settings.hcl",
        r#"
category "nightly" {
  max_total = 4
}

job "build" {
  scope      = "category"
  categories = ["nightly"]
}
"#,
    );

    temp.throttle()
        .args(&["validate", "settings.hcl"])
        .passes()
        .stdout_eq("settings.hcl: 1 category, 1 job\n");
}

#[test]
fn validate_merges_directory() {
    let temp = Project::empty();
    temp.file("throttle/categories.toml", "[category.deploy]\nmax_total = 1\n");
    temp.file(
        "throttle/jobs/deploy.json",
        r#"{ "job": { "deploy": { "scope": "category", "categories": ["deploy"] } } }"#,
    );

    let json = temp
        .throttle()
        .args(&["validate", "throttle", "-o", "json"])
        .passes()
        .json();
    assert_eq!(json["categories"], serde_json::json!(["deploy"]));
    assert_eq!(json["jobs"], serde_json::json!(["deploy"]));
}

#[test]
fn validate_rejects_duplicates_across_files() {
    let temp = Project::empty();
    temp.file("throttle/a.toml", "[job.build]\nmax_total = 1\n");
    temp.file("throttle/b.toml", "[job.build]\nmax_total = 2\n");

    temp.throttle()
        .args(&["validate", "throttle"])
        .fails()
        .stderr_has("'job.build' defined in multiple settings files");
}

#[test]
fn validate_rejects_blank_match_param() {
    let temp = Project::empty();
    temp.file("settings.toml", "[job.build]\nmatch_params = [\"ENV\", \" \"]\n");

    temp.throttle()
        .args(&["validate", "settings.toml"])
        .fails()
        .stderr_has("job.build.match_params[1]");
}

#[test]
fn validate_rejects_unknown_extension() {
    let temp = Project::empty();
    temp.file("settings.yaml", "job: {}\n");

    temp.throttle()
        .args(&["validate", "settings.yaml"])
        .fails()
        .stderr_has("unsupported settings file");
}

#[test]
fn validate_warns_on_unknown_category() {
    let temp = Project::empty();
    temp.file(
        "settings.toml",
        "[job.build]\nscope = \"category\"\ncategories = [\"ghost\"]\n",
    );

    temp.throttle()
        .args(&["validate", "settings.toml"])
        .passes()
        .stdout_eq("settings.toml: 0 categories, 1 job\n")
        .stderr_has("ghost");
}

#[test]
fn validate_directory_fails_on_any_invalid_file() {
    let temp = Project::empty();
    temp.file(
        "throttle/bad.toml",
        "[category.c]\nnode_label_overrides = [{ label = \"\", max_per_node = 1 }]\n",
    );
    temp.file("throttle/ok.toml", "[job.build]\nmax_total = 1\n");

    temp.throttle()
        .args(&["validate", "throttle"])
        .exits_with(1)
        .stdout_eq("")
        .stderr_has("failed to load settings from throttle")
        .stderr_has("bad.toml")
        .stderr_has("category.c.node_label_overrides[0]: label must not be empty");
}

#[test]
fn validate_error_chain_names_each_cause_once() {
    let temp = Project::empty();
    temp.file("settings.toml", "[job.build]\nmatch_params = [\"\"]\n");

    let result = temp
        .throttle()
        .args(&["validate", "settings.toml"])
        .exits_with(1);
    let stderr = result.stderr();
    assert_eq!(
        stderr.matches("parameter name must not be empty").count(),
        1,
        "stderr: {stderr}"
    );
    assert_eq!(stderr.matches("invalid settings in").count(), 1, "stderr: {stderr}");
}
