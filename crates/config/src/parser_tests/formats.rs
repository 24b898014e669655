// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The same settings expressed in each supported format.

use throttle_core::{NodeLabelOverride, ThrottleScope};

fn assert_nightly(settings: &crate::ThrottleSettings) {
    let category = settings.get_category("nightly").unwrap();
    assert_eq!(category.name, "nightly");
    assert_eq!(category.max_per_node, 1);
    assert_eq!(category.max_total, 4);
    assert_eq!(
        category.node_label_overrides,
        vec![NodeLabelOverride::new("gpu", 3)]
    );

    let job = settings.get_job("build").unwrap();
    assert_eq!(job.name, "build");
    assert_eq!(job.throttle.scope, ThrottleScope::PerCategory);
    assert_eq!(job.throttle.categories, vec!["nightly"]);
    assert_eq!(job.throttle.match_params, vec!["ENV"]);
    assert!(job.throttle.enabled);
}

#[test]
fn toml_settings() {
    let toml = r#"
[category.nightly]
max_per_node = 1
max_total = 4
node_label_overrides = [{ label = "gpu", max_per_node = 3 }]

[job.build]
scope = "category"
categories = ["nightly"]
match_params = ["ENV"]
"#;
    assert_nightly(&super::parse_toml(toml));
}

#[test]
fn hcl_settings() {
    let hcl = r#"
category "nightly" {
  max_per_node = 1
  max_total    = 4
  node_label_overrides = [
    { label = "gpu", max_per_node = 3 },
  ]
}

job "build" {
  scope        = "category"
  categories   = ["nightly"]
  match_params = ["ENV"]
}
"#;
    assert_nightly(&super::parse_hcl(hcl));
}

#[test]
fn json_settings() {
    let json = r#"{
  "categories": {
    "nightly": {
      "max_per_node": 1,
      "max_total": 4,
      "node_label_overrides": [{ "label": "gpu", "max_per_node": 3 }]
    }
  },
  "jobs": {
    "build": {
      "scope": "category",
      "categories": ["nightly"],
      "match_params": ["ENV"]
    }
  }
}"#;
    assert_nightly(&super::parse_json(json));
}

#[test]
fn empty_settings_are_valid() {
    let settings = super::parse_toml("");
    assert!(settings.categories.is_empty());
    assert!(settings.jobs.is_empty());
}

#[test]
fn malformed_toml_reports_toml_error() {
    super::assert_toml_err("[job.build\n", &["TOML parse error"]);
}

#[test]
fn malformed_hcl_reports_hcl_error() {
    super::assert_hcl_err("job \"build\" {\n", &["HCL parse error"]);
}

#[test]
fn malformed_json_reports_json_error() {
    let err = crate::parse_settings_with_format("{ not json", crate::Format::Json).unwrap_err();
    assert!(matches!(err, crate::ParseError::Json(_)));
}
