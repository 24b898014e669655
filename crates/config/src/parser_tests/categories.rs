// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Category definitions and label override validation.

use super::assert_toml_err;

#[test]
fn category_limits_default_to_unlimited() {
    let settings = super::parse_toml("[category.open]\n");
    let category = settings.get_category("open").unwrap();
    assert_eq!(category.max_per_node, 0);
    assert_eq!(category.max_total, 0);
    assert!(category.node_label_overrides.is_empty());
}

#[test]
fn label_overrides_keep_declaration_order() {
    let toml = r#"
[category.mixed]
max_per_node = 1
node_label_overrides = [
  { label = "large", max_per_node = 2 },
  { label = "gpu", max_per_node = 3 },
  { label = "huge", max_per_node = 8 },
]
"#;
    let settings = super::parse_toml(toml);
    let labels: Vec<&str> = settings.categories["mixed"]
        .node_label_overrides
        .iter()
        .map(|o| o.label.as_str())
        .collect();
    assert_eq!(labels, vec!["large", "gpu", "huge"]);
}

#[yare::parameterized(
    empty  = { "" },
    blank  = { "   " },
)]
fn error_blank_override_label(label: &str) {
    let toml = format!(
        "[category.nightly]\nnode_label_overrides = [{{ label = \"{label}\", max_per_node = 2 }}]\n"
    );
    super::assert_toml_err(
        &toml,
        &[
            "category.nightly.node_label_overrides[0]",
            "label must not be empty",
        ],
    );
}

#[test]
fn error_duplicate_override_label() {
    let hcl = r#"
category "nightly" {
  node_label_overrides = [
    { label = "gpu", max_per_node = 2 },
    { label = "gpu", max_per_node = 4 },
  ]
}
"#;
    super::assert_hcl_err(
        hcl,
        &[
            "category.nightly.node_label_overrides[1]",
            "duplicate label 'gpu'",
        ],
    );
}

#[test]
fn error_negative_limit_rejected_by_serde() {
    super::assert_toml_err("[category.bad]\nmax_per_node = -1\n", &["TOML parse error"]);
}
