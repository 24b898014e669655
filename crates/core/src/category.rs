// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Throttle categories: named quotas shared by several jobs.

use serde::{Deserialize, Serialize};

/// Per-node limit that replaces the category default on labeled nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeLabelOverride {
    pub label: String,
    pub max_per_node: u32,
}

impl NodeLabelOverride {
    pub fn new(label: impl Into<String>, max_per_node: u32) -> Self {
        Self {
            label: label.into(),
            max_per_node,
        }
    }
}

/// A named quota group.
///
/// Limits of `0` mean unlimited. Overrides are consulted in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category name (injected from map key)
    #[serde(skip)]
    pub name: String,
    #[serde(default)]
    pub max_per_node: u32,
    #[serde(default)]
    pub max_total: u32,
    #[serde(default)]
    pub node_label_overrides: Vec<NodeLabelOverride>,
}

impl Category {
    pub fn new(name: impl Into<String>, max_per_node: u32, max_total: u32) -> Self {
        Self {
            name: name.into(),
            max_per_node,
            max_total,
            node_label_overrides: Vec::new(),
        }
    }

    pub fn with_label_override(mut self, label: impl Into<String>, max_per_node: u32) -> Self {
        self.node_label_overrides
            .push(NodeLabelOverride::new(label, max_per_node));
        self
    }
}

#[cfg(test)]
#[path = "category_tests.rs"]
mod tests;
