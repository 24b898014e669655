// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job throttle entries.

use crate::ConfiguredKind;
use throttle_core::{ThrottleConfig, ThrottleScope};

#[test]
fn job_defaults() {
    let settings = super::parse_toml("[job.build]\n");
    let job = settings.get_job("build").unwrap();
    assert_eq!(job.kind, ConfiguredKind::Ordinary);
    assert_eq!(job.throttle, ThrottleConfig::default());
}

#[test]
fn per_job_limits() {
    let toml = r#"
[job.deploy]
max_per_node = 2
max_total = 5
match_params = ["ENV", "REGION"]
"#;
    let settings = super::parse_toml(toml);
    let job = &settings.jobs["deploy"];
    assert_eq!(job.throttle.scope, ThrottleScope::PerJob);
    assert_eq!(job.throttle.max_per_node, 2);
    assert_eq!(job.throttle.max_total, 5);
    assert_eq!(job.throttle.match_params, vec!["ENV", "REGION"]);
}

#[test]
fn template_job_with_instance_filters() {
    let hcl = r#"
job "matrix" {
  kind                        = "template"
  max_total                   = 3
  throttle_expanded_instances = true
  throttle_template_instances = false
}
"#;
    let settings = super::parse_hcl(hcl);
    let job = &settings.jobs["matrix"];
    assert_eq!(job.kind, ConfiguredKind::Template);
    assert!(job.throttle.throttle_expanded_instances);
    assert!(!job.throttle.throttle_template_instances);
    assert!(job.job_ref().kind.is_template());
}

#[test]
fn disabled_job() {
    let settings = super::parse_toml("[job.build]\nenabled = false\nmax_total = 1\n");
    assert!(!settings.jobs["build"].throttle.enabled);
}

#[test]
fn jobs_keep_declaration_order() {
    let toml = r#"
[job.zeta]
[job.alpha]
[job.mid]
"#;
    let settings = super::parse_toml(toml);
    let names: Vec<&str> = settings.jobs.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["zeta", "alpha", "mid"]);
}

#[test]
fn unknown_category_reference_is_not_an_error() {
    let toml = r#"
[job.build]
scope = "category"
categories = ["missing"]
"#;
    let settings = super::parse_toml(toml);
    assert_eq!(settings.jobs["build"].throttle.categories, vec!["missing"]);
}

#[test]
fn error_blank_match_param() {
    super::assert_toml_err(
        "[job.build]\nmatch_params = [\"ENV\", \"\"]\n",
        &["job.build.match_params[1]", "parameter name must not be empty"],
    );
}

#[test]
fn error_unknown_scope() {
    super::assert_toml_err("[job.build]\nscope = \"project\"\n", &["TOML parse error"]);
}

#[test]
fn error_unknown_kind() {
    super::assert_toml_err("[job.build]\nkind = \"expanded\"\n", &["TOML parse error"]);
}
